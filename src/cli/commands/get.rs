//! `keystash get`: decrypt and print a stored credential.

use crate::cli::{resolve_store, Cli};
use crate::errors::Result;

/// Execute the `get` command.
pub fn execute(cli: &Cli, provider: &str) -> Result<()> {
    let (store, _settings) = resolve_store(cli)?;

    // Decrypt and print the credential value to stdout.
    let value = store.get(provider)?;
    println!("{value}");

    Ok(())
}
