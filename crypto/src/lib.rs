//! Cryptographic primitives for customer onboarding.
//!
//! - **SHA-256** fingerprints of verification tokens (stored and indexed in place of the token)
//! - **OS randomness** for 256-bit verification tokens and password salts
//! - **Argon2id** password hashing, encoded as self-describing PHC strings

pub mod error;
pub mod password;
pub mod token;

pub use error::CryptoError;
pub use password::{verify_password, HashingParams, PasswordHasher};
pub use token::{fingerprint, issue_token, verify_token, TOKEN_BYTES};
