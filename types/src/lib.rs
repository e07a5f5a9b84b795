//! Fundamental types for customer onboarding.
//!
//! This crate defines the types shared across every other crate in the workspace:
//! onboarding records and their lifecycle status, provisioned users, timestamps
//! and the clock abstraction, public identifiers, and the secret newtypes that
//! keep raw tokens and plaintext passwords out of logs.

pub mod fingerprint;
pub mod id;
pub mod request;
pub mod secret;
pub mod status;
pub mod time;
pub mod user;

pub use fingerprint::TokenFingerprint;
pub use id::PublicId;
pub use request::OnboardingRequest;
pub use secret::{PasswordHash, PlaintextPassword, RawToken};
pub use status::{OnboardingStatus, UserStatus};
pub use time::{Clock, SystemClock, Timestamp};
pub use user::{NewUser, User};
