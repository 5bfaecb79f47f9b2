//! `keystash list`: show metadata for all stored credentials.

use crate::cli::{output, resolve_store, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (store, _settings) = resolve_store(cli)?;

    let credentials = store.list()?;
    output::print_credentials_table(&credentials);

    Ok(())
}
