//! CLI module: Clap argument parser, output helpers, and command
//! implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;
use crate::enroll::OperatorPrompt;
use crate::errors::{Result, StoreError};
use crate::store::CredentialStore;

/// keystash CLI: encrypted local storage for API credentials.
#[derive(Parser)]
#[command(
    name = "keystash",
    about = "Encrypted local API credential store",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Store directory (default: .keystash, or store_dir from .keystash.toml)
    #[arg(long, global = true)]
    pub store_dir: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Interactively enroll an API key (hidden input, confirmation)
    Enroll {
        /// Provider to store the key under (e.g. google)
        provider: String,
    },

    /// Store a credential non-interactively (inline, piped, or prompted)
    Set {
        /// Provider to store the key under
        provider: String,
        /// Credential value (omit for hidden prompt or piped stdin)
        value: Option<String>,
    },

    /// Decrypt and print a stored credential
    Get {
        /// Provider the credential is stored under
        provider: String,
    },

    /// List stored credentials (metadata only, nothing is decrypted)
    List,

    /// Delete a stored credential
    Delete {
        /// Provider the credential is stored under
        provider: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show store location, credential count, and connectivity
    Status,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

/// Resolve the credential store and settings for this invocation.
///
/// Precedence for the store directory: `--store-dir` flag, then
/// `store_dir` from `.keystash.toml`, then the built-in default.
pub fn resolve_store(cli: &Cli) -> Result<(CredentialStore, Settings)> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;

    let dir: PathBuf = match &cli.store_dir {
        // join() keeps absolute flag values as-is.
        Some(dir) => cwd.join(dir),
        None => settings.store_path(&cwd),
    };

    Ok((CredentialStore::open(dir), settings))
}

/// Dialoguer-backed prompt used by the interactive enrollment flow.
///
/// Secret input is suppressed from display; empty input is passed
/// through so the enrollment flow can reject it with its own message.
pub struct TerminalPrompt;

impl OperatorPrompt for TerminalPrompt {
    fn secret(&mut self, prompt: &str) -> Result<String> {
        dialoguer::Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map_err(|e| StoreError::CommandFailed(format!("input prompt: {e}")))
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool> {
        dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| StoreError::CommandFailed(format!("confirm prompt: {e}")))
    }

    fn notice(&mut self, message: &str) {
        output::warning(message);
    }
}
