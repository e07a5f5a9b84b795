//! Customer onboarding state machine.
//!
//! Three steps turn a prospect into a user:
//! 1. **Start**: validate the national ID, reject duplicates, persist a
//!    `PENDING` request and e-mail a verification link in the background.
//! 2. **Verify**: the e-mailed token moves the request to `VERIFIED`.
//! 3. **Complete**: a compliant password provisions the user and moves the
//!    request to `COMPLETED`.
//!
//! The orchestrator holds no state between calls. Everything lives in the
//! injected [`onboard_store::OnboardingStore`], so any number of instances can
//! serve the same store.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod orchestrator;
pub mod spans;
pub mod stats;

pub use config::{ConfigError, OnboardingConfig};
pub use dispatch::DeliveryDispatcher;
pub use error::OnboardingError;
pub use orchestrator::{Collaborators, OnboardingOrchestrator};
pub use stats::{OnboardingStats, StatsSnapshot};
