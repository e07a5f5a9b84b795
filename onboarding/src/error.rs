use thiserror::Error;

/// Every way an onboarding call can fail.
///
/// All variants are terminal for the call that produced them. Storage and
/// transport failures collapse into [`OnboardingError::Internal`]; their detail
/// is logged where they occur and never carried outward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OnboardingError {
    #[error("invalid national identification number")]
    InvalidIdentity,

    #[error("document or e-mail is already registered")]
    AlreadyExists,

    #[error("invalid or expired token")]
    InvalidToken,

    #[error("token expired")]
    ExpiredToken,

    #[error("onboarding already completed")]
    AlreadyVerified,

    #[error("onboarding request has not been verified")]
    NotYetVerified,

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("password does not meet the security criteria")]
    WeakPassword,

    #[error("an unexpected error occurred")]
    Internal,
}

impl OnboardingError {
    /// Suggested HTTP status for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidIdentity
            | Self::InvalidToken
            | Self::NotYetVerified
            | Self::PasswordMismatch
            | Self::WeakPassword => 400,
            Self::AlreadyExists | Self::AlreadyVerified => 409,
            Self::ExpiredToken => 410,
            Self::Internal => 500,
        }
    }

    /// Whether this is a business-rule rejection rather than a system failure.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Self::Internal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_http_mapping() {
        assert_eq!(OnboardingError::InvalidIdentity.status_code(), 400);
        assert_eq!(OnboardingError::PasswordMismatch.status_code(), 400);
        assert_eq!(OnboardingError::WeakPassword.status_code(), 400);
        assert_eq!(OnboardingError::NotYetVerified.status_code(), 400);
        assert_eq!(OnboardingError::InvalidToken.status_code(), 400);
        assert_eq!(OnboardingError::AlreadyExists.status_code(), 409);
        assert_eq!(OnboardingError::AlreadyVerified.status_code(), 409);
        assert_eq!(OnboardingError::ExpiredToken.status_code(), 410);
        assert_eq!(OnboardingError::Internal.status_code(), 500);
    }

    #[test]
    fn internal_message_leaks_nothing() {
        assert_eq!(
            OnboardingError::Internal.to_string(),
            "an unexpected error occurred"
        );
        assert!(!OnboardingError::Internal.is_rejection());
        assert!(OnboardingError::WeakPassword.is_rejection());
    }
}
