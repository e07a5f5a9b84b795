//! Nullable infrastructure for deterministic testing.
//!
//! Every collaborator of the onboarding orchestrator (clock, record store,
//! account provisioner, notification channel) is abstracted behind a trait.
//! This crate provides in-memory implementations that:
//! - Return deterministic values
//! - Can be steered programmatically (time travel, injected failures)
//! - Count calls so tests can assert on side effects
//! - Never touch the filesystem or network

pub mod clock;
pub mod notifier;
pub mod onboarding_store;
pub mod provisioner;

pub use clock::NullClock;
pub use notifier::NullNotifier;
pub use onboarding_store::NullOnboardingStore;
pub use provisioner::NullAccountProvisioner;
