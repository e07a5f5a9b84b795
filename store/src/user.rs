//! User provisioning trait.

use crate::StoreError;
use onboard_types::{NewUser, User};

/// Durably creates the final user records once onboarding completes.
///
/// Implementations make their own creation step atomic (user plus any
/// dependent rows). Onboarding never mutates a user afterwards.
pub trait AccountProvisioner: Send + Sync {
    fn provision(&self, new_user: NewUser) -> Result<User, StoreError>;
}
