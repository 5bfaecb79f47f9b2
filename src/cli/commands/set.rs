//! `keystash set`: store a credential without the enrollment dialog.
//!
//! Meant for scripts and pipelines; `enroll` is the interactive path.

use std::io::{self, IsTerminal, Read};

use crate::cli::{output, resolve_store, Cli};
use crate::errors::{Result, StoreError};

/// Execute the `set` command.
pub fn execute(cli: &Cli, provider: &str, value: Option<&str>) -> Result<()> {
    let (store, _settings) = resolve_store(cli)?;

    // Determine the credential value from one of three sources.
    let secret_value = if let Some(v) = value {
        // Source 1: Inline value on the command line.
        output::warning("Value provided on command line; it may appear in shell history.");
        v.to_string()
    } else if !io::stdin().is_terminal() {
        // Source 2: Piped input (stdin is not a terminal).
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf.trim_end().to_string()
    } else {
        // Source 3: Interactive hidden prompt (default).
        dialoguer::Password::new()
            .with_prompt(format!("Enter value for {provider}"))
            .interact()
            .map_err(|e| StoreError::CommandFailed(format!("input prompt: {e}")))?
    };

    let existed = store.has(provider);
    let warnings = store.save(provider, &secret_value)?;
    for warning in &warnings {
        output::warning(&warning.to_string());
    }

    if existed {
        output::success(&format!("Credential for '{provider}' updated"));
    } else {
        output::success(&format!("Credential for '{provider}' added"));
    }

    Ok(())
}
