//! Onboarding request storage trait.

use crate::StoreError;
use onboard_types::{OnboardingRequest, TokenFingerprint};

/// Durable storage for onboarding requests.
///
/// Backends enforce uniqueness of `email`, `document_number` and
/// `token_fingerprint`, and provide at least read-your-writes consistency per
/// record. Lookups report absence as `Ok(None)`, never as an error.
pub trait OnboardingStore: Send + Sync {
    /// Find any request whose document number or e-mail matches.
    fn find_by_document_or_email(
        &self,
        document_number: &str,
        email: &str,
    ) -> Result<Option<OnboardingRequest>, StoreError>;

    /// Insert a new request. A uniqueness violation is [`StoreError::Duplicate`].
    fn create(&self, request: &OnboardingRequest) -> Result<(), StoreError>;

    fn find_by_token_fingerprint(
        &self,
        fingerprint: &TokenFingerprint,
    ) -> Result<Option<OnboardingRequest>, StoreError>;

    /// Overwrite the stored request with the same public id.
    ///
    /// Last writer wins; no compare-and-swap on status.
    fn update(&self, request: &OnboardingRequest) -> Result<(), StoreError>;
}
