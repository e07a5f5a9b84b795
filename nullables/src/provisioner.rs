//! Nullable account provisioner: records provisioned users in memory.

use crate::NullClock;
use onboard_store::{AccountProvisioner, StoreError};
use onboard_types::{Clock, NewUser, User};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// An in-memory provisioner with unique e-mail and document constraints.
///
/// `created_at` on provisioned users comes from the injected clock.
pub struct NullAccountProvisioner {
    users: Mutex<Vec<User>>,
    clock: Arc<dyn Clock>,
    fail: AtomicBool,
    calls: AtomicUsize,
}

impl NullAccountProvisioner {
    /// A provisioner stamping users at epoch zero.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(NullClock::new(0)))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            clock,
            fail: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    /// Make every provisioning attempt fail with a backend error.
    pub fn fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    pub fn users(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for NullAccountProvisioner {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountProvisioner for NullAccountProvisioner {
    fn provision(&self, new_user: NewUser) -> Result<User, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("injected provisioning failure".into()));
        }

        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == new_user.email) {
            return Err(StoreError::Duplicate("email".into()));
        }
        if users
            .iter()
            .any(|u| u.document_number == new_user.document_number)
        {
            return Err(StoreError::Duplicate("document_number".into()));
        }

        let user = User::activate(new_user, self.clock.now());
        users.push(user.clone());
        Ok(user)
    }
}
