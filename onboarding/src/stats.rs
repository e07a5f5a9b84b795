//! Operational counters for the onboarding flow.

use onboard_utils::StatsCounter;
use serde::Serialize;

const STARTED: &str = "started";
const VERIFIED: &str = "verified";
const COMPLETED: &str = "completed";
const REJECTED: &str = "rejected";
const INTERNAL_ERRORS: &str = "internal_errors";
const DELIVERIES_SUCCEEDED: &str = "deliveries_succeeded";
const DELIVERIES_FAILED: &str = "deliveries_failed";

const ALL: &[&str] = &[
    STARTED,
    VERIFIED,
    COMPLETED,
    REJECTED,
    INTERNAL_ERRORS,
    DELIVERIES_SUCCEEDED,
    DELIVERIES_FAILED,
];

/// Counters shared between the orchestrator and its delivery tasks.
#[derive(Debug)]
pub struct OnboardingStats {
    counters: StatsCounter,
}

/// Point-in-time copy of [`OnboardingStats`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub started: u64,
    pub verified: u64,
    pub completed: u64,
    /// Business-rule rejections across all three operations.
    pub rejected: u64,
    pub internal_errors: u64,
    pub deliveries_succeeded: u64,
    pub deliveries_failed: u64,
}

impl OnboardingStats {
    pub fn new() -> Self {
        Self {
            counters: StatsCounter::new(ALL),
        }
    }

    pub(crate) fn started(&self) {
        self.counters.increment(STARTED);
    }

    pub(crate) fn verified(&self) {
        self.counters.increment(VERIFIED);
    }

    pub(crate) fn completed(&self) {
        self.counters.increment(COMPLETED);
    }

    pub(crate) fn rejected(&self) {
        self.counters.increment(REJECTED);
    }

    pub(crate) fn internal_error(&self) {
        self.counters.increment(INTERNAL_ERRORS);
    }

    pub(crate) fn delivery_succeeded(&self) {
        self.counters.increment(DELIVERIES_SUCCEEDED);
    }

    pub(crate) fn delivery_failed(&self) {
        self.counters.increment(DELIVERIES_FAILED);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            started: self.counters.get(STARTED),
            verified: self.counters.get(VERIFIED),
            completed: self.counters.get(COMPLETED),
            rejected: self.counters.get(REJECTED),
            internal_errors: self.counters.get(INTERNAL_ERRORS),
            deliveries_succeeded: self.counters.get(DELIVERIES_SUCCEEDED),
            deliveries_failed: self.counters.get(DELIVERIES_FAILED),
        }
    }
}

impl Default for OnboardingStats {
    fn default() -> Self {
        Self::new()
    }
}
