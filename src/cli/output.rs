//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.  Nothing in this module
//! ever receives secret material.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::store::CredentialMetadata;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// Print a table of credential metadata (Provider, Created, Key bytes).
pub fn print_credentials_table(credentials: &[CredentialMetadata]) {
    if credentials.is_empty() {
        info("No credentials stored yet.");
        tip("Run `keystash enroll <provider>` to store your first API key.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Provider", "Created", "Key bytes"]);

    for meta in credentials {
        table.add_row(vec![
            meta.provider.clone(),
            meta.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            meta.key_length.to_string(),
        ]);
    }

    println!("{table}");
}
