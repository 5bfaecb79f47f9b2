//! `keystash delete`: remove a stored credential.

use dialoguer::Confirm;

use crate::cli::{output, resolve_store, Cli};
use crate::errors::{Result, StoreError};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, provider: &str, force: bool) -> Result<()> {
    let (store, _settings) = resolve_store(cli)?;

    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete the credential for '{provider}'?"))
            .default(false)
            .interact()
            .map_err(|e| StoreError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let existed = store.has(provider);
    store.delete(provider)?;

    if existed {
        output::success(&format!("Deleted credential for '{provider}'"));
    } else {
        output::info(&format!("No credential stored for '{provider}'."));
    }

    Ok(())
}
