//! Verification message construction.

use onboard_types::{PublicId, RawToken};
use std::fmt;

/// Build the link a customer follows to verify their e-mail address.
///
/// `{base_url}/{path}?token={raw}`. Slashes at the seams are collapsed so
/// `"https://bank.example/"` and `"/verify"` still join cleanly.
pub fn verification_link(base_url: &str, path: &str, token: &RawToken) -> String {
    format!(
        "{}/{}?token={}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/'),
        token.expose()
    )
}

/// One verification e-mail, ready for a channel to send.
#[derive(Clone)]
pub struct VerificationMessage {
    /// The onboarding request this message belongs to.
    pub request_id: PublicId,
    pub sender: String,
    pub recipient_name: String,
    pub recipient_address: String,
    pub subject: String,
    /// Carries the raw token.
    pub verification_link: String,
}

impl fmt::Debug for VerificationMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerificationMessage")
            .field("request_id", &self.request_id)
            .field("sender", &self.sender)
            .field("recipient_name", &self.recipient_name)
            .field("recipient_address", &self.recipient_address)
            .field("subject", &self.subject)
            .field("verification_link", &"<redacted>")
            .finish()
    }
}
