//! Interactive credential enrollment.
//!
//! Collects a secret from an operator with input hidden, applies
//! minimal shape validation, asks for explicit confirmation, and hands
//! the value to the credential store.  The operator gets unlimited
//! retries: a rejected or unconfirmed value restarts collection rather
//! than aborting, and only an error from the terminal itself (EOF,
//! closed tty) ends the flow early.
//!
//! Terminal interaction sits behind [`OperatorPrompt`] so the flow can
//! be driven by dialoguer in the CLI and by a scripted prompt in tests.

use crate::errors::Result;
use crate::store::{CredentialStore, PermissionWarning};

/// Default minimum accepted credential length, in bytes.
pub const DEFAULT_MIN_SECRET_LEN: usize = 10;

/// How a completed enrollment ended.
#[derive(Debug)]
pub enum EnrollOutcome {
    /// A credential was collected, confirmed, and stored.
    Saved { warnings: Vec<PermissionWarning> },
    /// A credential already existed and the operator chose to keep it.
    KeptExisting,
}

/// Terminal interaction needed by the enrollment flow.
///
/// Implementations must never echo the secret back to the operator.
pub trait OperatorPrompt {
    /// Read a secret with input suppressed from display.
    fn secret(&mut self, prompt: &str) -> Result<String>;

    /// Ask a yes/no question.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<bool>;

    /// Tell the operator why the last input was rejected.
    fn notice(&mut self, message: &str);
}

/// Options controlling the enrollment flow.
#[derive(Debug, Clone, Copy)]
pub struct EnrollOptions {
    /// Inputs shorter than this many bytes are rejected and re-prompted.
    pub min_secret_len: usize,
}

impl Default for EnrollOptions {
    fn default() -> Self {
        Self {
            min_secret_len: DEFAULT_MIN_SECRET_LEN,
        }
    }
}

/// Run the enrollment flow for `provider` against `store`.
///
/// If a credential already exists, the operator is asked whether to
/// replace it; declining leaves the stored credential untouched and
/// returns [`EnrollOutcome::KeptExisting`].
pub fn enroll(
    store: &CredentialStore,
    provider: &str,
    options: EnrollOptions,
    prompt: &mut dyn OperatorPrompt,
) -> Result<EnrollOutcome> {
    if store.has(provider) {
        let replace = prompt.confirm(
            &format!("A credential for '{provider}' already exists. Replace it?"),
            false,
        )?;
        if !replace {
            return Ok(EnrollOutcome::KeptExisting);
        }
    }

    loop {
        let secret = prompt.secret(&format!("Enter the API key for {provider}"))?;

        if secret.is_empty() {
            prompt.notice("The API key cannot be empty.");
            continue;
        }
        if secret.len() < options.min_secret_len {
            prompt.notice(&format!(
                "That key looks too short (minimum {} characters).",
                options.min_secret_len
            ));
            continue;
        }

        let confirmed = prompt.confirm("Store this key?", true)?;
        if !confirmed {
            // Discard the value entirely and collect a new one.
            prompt.notice("Discarded. Enter the key again.");
            continue;
        }

        let warnings = store.save(provider, &secret)?;
        return Ok(EnrollOutcome::Saved { warnings });
    }
}
