//! `keystash status`: show store location, contents, and connectivity.

use console::style;

use crate::cli::{resolve_store, Cli};
use crate::errors::Result;
use crate::net;
use crate::store::KeyVault;

/// Execute the `status` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (store, _settings) = resolve_store(cli)?;

    let credentials = store.list()?;
    let master_key_present = KeyVault::new(store.dir()).key_path().exists();

    println!("Store directory: {}", store.dir().display());
    println!(
        "Master key:      {}",
        if master_key_present {
            style("present").green().to_string()
        } else {
            style("not yet created").dim().to_string()
        }
    );
    println!("Credentials:     {}", credentials.len());

    // The probe is a collaborator for online features; the store itself
    // never touches the network.
    let connectivity = if net::is_online() {
        style("ONLINE").green().bold().to_string()
    } else {
        style("OFFLINE").red().bold().to_string()
    };
    println!("Connectivity:    {connectivity}");

    Ok(())
}
