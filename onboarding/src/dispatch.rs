//! Fire-and-forget delivery of verification messages.

use crate::spans;
use crate::stats::OnboardingStats;
use onboard_notification::{Notifier, VerificationMessage};
use std::sync::Arc;

/// Hands verification messages to a [`Notifier`] on the blocking pool.
///
/// [`DeliveryDispatcher::dispatch`] returns immediately. The spawned task is
/// detached: nothing awaits it, nothing retries it, and a failure is only
/// visible in the logs and in [`OnboardingStats`].
#[derive(Clone)]
pub struct DeliveryDispatcher {
    notifier: Arc<dyn Notifier>,
    stats: Arc<OnboardingStats>,
}

impl DeliveryDispatcher {
    pub fn new(notifier: Arc<dyn Notifier>, stats: Arc<OnboardingStats>) -> Self {
        Self { notifier, stats }
    }

    /// Start delivering `message` in the background.
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&self, message: VerificationMessage) {
        let notifier = Arc::clone(&self.notifier);
        let stats = Arc::clone(&self.stats);
        let span = spans::delivery_span(&message.request_id);

        // Dropping the JoinHandle detaches the task.
        drop(tokio::task::spawn_blocking(move || {
            let _entered = span.enter();
            match notifier.deliver(&message) {
                Ok(()) => {
                    stats.delivery_succeeded();
                    tracing::info!(channel = notifier.name(), "verification message delivered");
                }
                Err(e) => {
                    stats.delivery_failed();
                    tracing::error!(
                        channel = notifier.name(),
                        request_id = %message.request_id,
                        error = %e,
                        "CRITICAL: verification message not delivered; manual follow-up required"
                    );
                }
            }
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onboard_nullables::NullNotifier;
    use onboard_types::PublicId;
    use std::time::Duration;

    fn message() -> VerificationMessage {
        VerificationMessage {
            request_id: PublicId::new("req-1"),
            sender: "no-reply@bank.example".into(),
            recipient_name: "Jane Doe".into(),
            recipient_address: "jane@example.com".into(),
            subject: "Confirm".into(),
            verification_link: "https://bank.example/verify?token=t".into(),
        }
    }

    async fn settle(stats: &OnboardingStats) {
        tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                let snap = stats.snapshot();
                if snap.deliveries_succeeded + snap.deliveries_failed > 0 {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(1)).await;
            }
        })
        .await
        .expect("delivery never finished");
    }

    #[tokio::test]
    async fn dispatch_returns_before_delivery() {
        let notifier = Arc::new(NullNotifier::new());
        let stats = Arc::new(OnboardingStats::new());
        let dispatcher = DeliveryDispatcher::new(notifier.clone(), stats.clone());

        notifier.hold();
        dispatcher.dispatch(message());
        assert_eq!(notifier.attempts(), 0);

        notifier.release();
        notifier.wait_for_attempts(1).await;
        settle(&stats).await;
        assert_eq!(notifier.delivered().len(), 1);
        assert_eq!(stats.snapshot().deliveries_succeeded, 1);
    }

    #[tokio::test]
    async fn failed_delivery_is_counted_not_raised() {
        let notifier = Arc::new(NullNotifier::new());
        let stats = Arc::new(OnboardingStats::new());
        let dispatcher = DeliveryDispatcher::new(notifier.clone(), stats.clone());

        notifier.fail(true);
        dispatcher.dispatch(message());
        settle(&stats).await;

        assert!(notifier.delivered().is_empty());
        assert_eq!(stats.snapshot().deliveries_failed, 1);
    }
}
