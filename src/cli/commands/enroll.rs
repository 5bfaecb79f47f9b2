//! `keystash enroll`: interactive API key enrollment.

use crate::cli::{output, resolve_store, Cli, TerminalPrompt};
use crate::enroll::{enroll, EnrollOptions, EnrollOutcome};
use crate::errors::Result;

/// Execute the `enroll` command.
pub fn execute(cli: &Cli, provider: &str) -> Result<()> {
    let (store, settings) = resolve_store(cli)?;

    output::info(&format!(
        "The key will be encrypted and stored in {}.",
        store.dir().display()
    ));
    output::info("It never leaves this machine.");

    let options = EnrollOptions {
        min_secret_len: settings.min_secret_len,
    };
    let mut prompt = TerminalPrompt;

    match enroll(&store, provider, options, &mut prompt)? {
        EnrollOutcome::Saved { warnings } => {
            for warning in &warnings {
                output::warning(&warning.to_string());
            }
            output::success(&format!("API key for '{provider}' stored securely"));
            output::tip("Run `keystash get <provider>` to retrieve it.");
        }
        EnrollOutcome::KeptExisting => {
            output::info(&format!(
                "Kept the existing credential for '{provider}'."
            ));
        }
    }

    Ok(())
}
