//! Outbound notification contract.
//!
//! Onboarding only knows that a verification message must reach an address.
//! Templating and provider calls live behind [`Notifier`].

pub mod channel;
pub mod error;
pub mod message;

pub use channel::Notifier;
pub use error::NotifyError;
pub use message::{verification_link, VerificationMessage};
