//! Nullable notifier: record messages without sending them.

use onboard_notification::{Notifier, NotifyError, VerificationMessage};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex};
use tokio::sync::watch;

/// A test channel that records verification messages instead of sending them.
///
/// Deliveries run on background threads, so tests synchronise through
/// [`NullNotifier::wait_for_attempts`] rather than sleeping. [`hold`] parks
/// every delivery until [`release`] is called, which lets a test observe the
/// caller returning before delivery happens.
///
/// [`hold`]: NullNotifier::hold
/// [`release`]: NullNotifier::release
pub struct NullNotifier {
    delivered: Mutex<Vec<VerificationMessage>>,
    fail: AtomicBool,
    held: Mutex<bool>,
    gate: Condvar,
    attempts: watch::Sender<usize>,
}

impl NullNotifier {
    pub fn new() -> Self {
        let (attempts, _) = watch::channel(0);
        Self {
            delivered: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
            held: Mutex::new(false),
            gate: Condvar::new(),
            attempts,
        }
    }

    /// Make every delivery fail with a transport error.
    pub fn fail(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Park deliveries until [`NullNotifier::release`].
    pub fn hold(&self) {
        *self.held.lock().unwrap() = true;
    }

    pub fn release(&self) {
        *self.held.lock().unwrap() = false;
        self.gate.notify_all();
    }

    /// Successfully delivered messages.
    pub fn delivered(&self) -> Vec<VerificationMessage> {
        self.delivered.lock().unwrap().clone()
    }

    /// Finished delivery attempts, successful or not.
    pub fn attempts(&self) -> usize {
        *self.attempts.borrow()
    }

    /// Wait until at least `count` delivery attempts have finished.
    pub async fn wait_for_attempts(&self, count: usize) {
        let mut rx = self.attempts.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait.
        let _ = rx.wait_for(|&n| n >= count).await;
    }
}

impl Default for NullNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NullNotifier {
    fn name(&self) -> &str {
        "null-notifier"
    }

    fn deliver(&self, message: &VerificationMessage) -> Result<(), NotifyError> {
        let mut held = self.held.lock().unwrap();
        while *held {
            held = self.gate.wait(held).unwrap();
        }
        drop(held);

        let result = if self.fail.load(Ordering::SeqCst) {
            Err(NotifyError::Transport("injected delivery failure".into()))
        } else {
            self.delivered.lock().unwrap().push(message.clone());
            Ok(())
        };

        self.attempts.send_modify(|n| *n += 1);
        result
    }
}
