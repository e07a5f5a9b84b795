//! Provisioned user records.
//!
//! The user table is owned by the account provisioner. Onboarding only ever
//! sends a [`NewUser`] and reads back the resulting [`User`].

use crate::{PasswordHash, PublicId, Timestamp, UserStatus};

/// A request to provision a user once onboarding completes.
#[derive(Clone, Debug)]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub document_number: String,
    pub password_hash: PasswordHash,
}

/// A provisioned user.
#[derive(Clone, Debug)]
pub struct User {
    pub public_id: PublicId,
    pub full_name: String,
    pub email: String,
    pub document_number: String,
    pub password_hash: PasswordHash,
    pub status: UserStatus,
    pub created_at: Timestamp,
}

impl User {
    /// Materialize a new, active user from a provisioning request.
    pub fn activate(new_user: NewUser, now: Timestamp) -> Self {
        Self {
            public_id: PublicId::generate(),
            full_name: new_user.full_name,
            email: new_user.email,
            document_number: new_user.document_number,
            password_hash: new_user.password_hash,
            status: UserStatus::Active,
            created_at: now,
        }
    }
}
