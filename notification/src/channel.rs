//! Pluggable delivery channel.

use crate::{NotifyError, VerificationMessage};

/// Delivers verification messages.
///
/// Called off the request path on a blocking worker thread. A returned error
/// ends that delivery attempt; callers do not retry.
pub trait Notifier: Send + Sync {
    /// Human-readable name of this channel, for logs.
    fn name(&self) -> &str;

    fn deliver(&self, message: &VerificationMessage) -> Result<(), NotifyError>;
}
