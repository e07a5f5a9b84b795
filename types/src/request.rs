//! The onboarding request record.

use crate::{OnboardingStatus, PublicId, Timestamp, TokenFingerprint};
use serde::{Deserialize, Serialize};

/// One in-flight signup.
///
/// `email`, `document_number` and `token_fingerprint` are each unique across
/// all requests. The raw verification token is never part of this record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingRequest {
    pub public_id: PublicId,
    pub full_name: String,
    pub email: String,
    /// National ID, digits only.
    pub document_number: String,
    pub token_fingerprint: TokenFingerprint,
    pub token_expires_at: Timestamp,
    pub status: OnboardingStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl OnboardingRequest {
    /// A fresh `Pending` request whose token expires `ttl_secs` after `now`.
    pub fn pending(
        full_name: impl Into<String>,
        email: impl Into<String>,
        document_number: impl Into<String>,
        token_fingerprint: TokenFingerprint,
        now: Timestamp,
        ttl_secs: u64,
    ) -> Self {
        Self {
            public_id: PublicId::generate(),
            full_name: full_name.into(),
            email: email.into(),
            document_number: document_number.into(),
            token_fingerprint,
            token_expires_at: now.plus_secs(ttl_secs),
            status: OnboardingStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the verification token has expired as of `now`.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.token_expires_at.is_passed(now)
    }

    /// Copy of this record moved to `next`, or `None` if the move would go
    /// backwards or skip a step.
    pub fn transitioned(&self, next: OnboardingStatus, now: Timestamp) -> Option<Self> {
        if !self.status.can_transition_to(next) {
            return None;
        }
        Some(Self {
            status: next,
            updated_at: now,
            ..self.clone()
        })
    }
}
