//! Abstract storage contracts for onboarding.
//!
//! Every storage backend (a relational database, an in-memory store for
//! testing) implements these traits. The orchestrator depends only on the
//! traits, held as `Arc<dyn ...>` and injected at construction.

pub mod error;
pub mod onboarding;
pub mod user;

pub use error::StoreError;
pub use onboarding::OnboardingStore;
pub use user::AccountProvisioner;
