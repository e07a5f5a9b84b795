//! The onboarding orchestrator.
//!
//! Request status only ever moves forward:
//!
//! ```text
//! PENDING ──verify──▶ VERIFIED ──complete──▶ COMPLETED
//! ```
//!
//! `FAILED` exists in [`OnboardingStatus`] but no operation produces it.
//! Status checks are read-then-write against the store with no locking, so
//! concurrent calls on the same token race and the last writer wins.

use crate::config::{ConfigError, OnboardingConfig};
use crate::dispatch::DeliveryDispatcher;
use crate::error::OnboardingError;
use crate::spans;
use crate::stats::{OnboardingStats, StatsSnapshot};
use onboard_crypto::{fingerprint, issue_token, PasswordHasher};
use onboard_notification::{verification_link, Notifier, VerificationMessage};
use onboard_store::{AccountProvisioner, OnboardingStore};
use onboard_types::{
    Clock, NewUser, OnboardingRequest, OnboardingStatus, PlaintextPassword, PublicId, User,
};
use onboard_validation::{is_acceptable_password, is_valid_document, normalize_document};
use std::fmt;
use std::sync::Arc;
use tracing::Instrument;

/// Everything the orchestrator talks to, constructed once by the caller.
#[derive(Clone)]
pub struct Collaborators {
    pub store: Arc<dyn OnboardingStore>,
    pub provisioner: Arc<dyn AccountProvisioner>,
    pub notifier: Arc<dyn Notifier>,
    pub clock: Arc<dyn Clock>,
}

/// Drives a request through start, verify and complete.
///
/// Holds no per-request state; every call reads fresh from the store.
pub struct OnboardingOrchestrator {
    config: OnboardingConfig,
    hasher: PasswordHasher,
    store: Arc<dyn OnboardingStore>,
    provisioner: Arc<dyn AccountProvisioner>,
    clock: Arc<dyn Clock>,
    dispatcher: DeliveryDispatcher,
    stats: Arc<OnboardingStats>,
}

/// Log a system failure and collapse it to [`OnboardingError::Internal`].
fn internal(context: &str, err: impl fmt::Display) -> OnboardingError {
    tracing::error!(error = %err, "{context}");
    OnboardingError::Internal
}

impl OnboardingOrchestrator {
    pub fn new(
        config: OnboardingConfig,
        collaborators: Collaborators,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let hasher = PasswordHasher::new(config.password_hashing)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        let stats = Arc::new(OnboardingStats::new());
        let dispatcher = DeliveryDispatcher::new(collaborators.notifier, Arc::clone(&stats));

        Ok(Self {
            config,
            hasher,
            store: collaborators.store,
            provisioner: collaborators.provisioner,
            clock: collaborators.clock,
            dispatcher,
            stats,
        })
    }

    pub fn config(&self) -> &OnboardingConfig {
        &self.config
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Open a new onboarding request and send the verification e-mail.
    ///
    /// Returns as soon as the `PENDING` record exists. Delivery runs in the
    /// background and its outcome never reaches the caller.
    pub async fn start(
        &self,
        document: &str,
        full_name: &str,
        email: &str,
    ) -> Result<PublicId, OnboardingError> {
        let result = self
            .run_start(document, full_name, email)
            .instrument(spans::start_span())
            .await;
        self.tally(&result);
        result
    }

    /// Confirm the e-mail address behind `raw_token`.
    ///
    /// Verifying an already `VERIFIED` request succeeds without writing.
    pub async fn verify(&self, raw_token: &str) -> Result<(), OnboardingError> {
        let result = self
            .run_verify(raw_token)
            .instrument(spans::verify_span())
            .await;
        self.tally(&result);
        result
    }

    /// Set the password and provision the user for a verified request.
    ///
    /// If provisioning fails the request stays `VERIFIED` and may be completed
    /// again. If provisioning succeeds but the final status write fails, the
    /// user exists while the request stays `VERIFIED`; that gap is logged and
    /// not reconciled here.
    pub async fn complete(
        &self,
        raw_token: &str,
        password: PlaintextPassword,
        confirmation: PlaintextPassword,
    ) -> Result<User, OnboardingError> {
        let result = self
            .run_complete(raw_token, password, confirmation)
            .instrument(spans::complete_span())
            .await;
        self.tally(&result);
        result
    }

    fn tally<T>(&self, result: &Result<T, OnboardingError>) {
        match result {
            Ok(_) => {}
            Err(e) if e.is_rejection() => self.stats.rejected(),
            Err(_) => self.stats.internal_error(),
        }
    }

    async fn run_start(
        &self,
        document: &str,
        full_name: &str,
        email: &str,
    ) -> Result<PublicId, OnboardingError> {
        if !is_valid_document(document) {
            tracing::debug!("rejected: invalid document");
            return Err(OnboardingError::InvalidIdentity);
        }
        let document = normalize_document(document);

        let existing = self
            .store
            .find_by_document_or_email(&document, email)
            .map_err(|e| internal("conflict lookup failed", e))?;
        if existing.is_some() {
            tracing::debug!("rejected: document or e-mail already registered");
            return Err(OnboardingError::AlreadyExists);
        }

        let (raw_token, token_fingerprint) =
            issue_token().map_err(|e| internal("token issuance failed", e))?;
        let request = OnboardingRequest::pending(
            full_name,
            email,
            document,
            token_fingerprint,
            self.clock.now(),
            self.config.token_ttl_secs,
        );
        spans::record_public_id(&request.public_id);

        match self.store.create(&request) {
            Ok(()) => {}
            Err(e) if e.is_duplicate() => {
                tracing::warn!(error = %e, "concurrent registration lost the insert race");
                return Err(OnboardingError::AlreadyExists);
            }
            Err(e) => return Err(internal("failed to persist onboarding request", e)),
        }
        self.stats.started();
        tracing::info!(expires_at = %request.token_expires_at, "onboarding request created");

        self.dispatcher.dispatch(VerificationMessage {
            request_id: request.public_id.clone(),
            sender: self.config.sender_address.clone(),
            recipient_name: request.full_name.clone(),
            recipient_address: request.email.clone(),
            subject: self.config.email_subject.clone(),
            verification_link: verification_link(
                &self.config.verification_base_url,
                &self.config.verification_path,
                &raw_token,
            ),
        });

        Ok(request.public_id)
    }

    async fn run_verify(&self, raw_token: &str) -> Result<(), OnboardingError> {
        let request = self.lookup(raw_token)?;
        let now = self.clock.now();

        // Expired and unknown tokens are reported identically here.
        if request.is_expired(now) {
            tracing::debug!("rejected: token expired");
            return Err(OnboardingError::InvalidToken);
        }

        match request.status {
            OnboardingStatus::Completed => Err(OnboardingError::AlreadyVerified),
            OnboardingStatus::Verified => {
                tracing::debug!("already verified; nothing to do");
                Ok(())
            }
            OnboardingStatus::Failed => Err(OnboardingError::InvalidToken),
            OnboardingStatus::Pending => {
                let verified = request
                    .transitioned(OnboardingStatus::Verified, now)
                    .ok_or_else(|| internal("illegal status transition", request.status))?;
                self.store
                    .update(&verified)
                    .map_err(|e| internal("failed to persist verification", e))?;
                self.stats.verified();
                tracing::info!("e-mail verified");
                Ok(())
            }
        }
    }

    async fn run_complete(
        &self,
        raw_token: &str,
        password: PlaintextPassword,
        confirmation: PlaintextPassword,
    ) -> Result<User, OnboardingError> {
        if password.expose() != confirmation.expose() {
            return Err(OnboardingError::PasswordMismatch);
        }
        drop(confirmation);
        if !is_acceptable_password(password.expose()) {
            return Err(OnboardingError::WeakPassword);
        }

        let request = self.lookup(raw_token)?;
        if request.is_expired(self.clock.now()) {
            tracing::debug!("rejected: token expired");
            return Err(OnboardingError::ExpiredToken);
        }
        match request.status {
            OnboardingStatus::Verified => {}
            OnboardingStatus::Completed => return Err(OnboardingError::AlreadyVerified),
            OnboardingStatus::Pending | OnboardingStatus::Failed => {
                return Err(OnboardingError::NotYetVerified)
            }
        }

        let hasher = self.hasher.clone();
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| internal("password hashing task failed", e))?
            .map_err(|e| internal("password hashing failed", e))?;

        let user = self
            .provisioner
            .provision(NewUser {
                full_name: request.full_name.clone(),
                email: request.email.clone(),
                document_number: request.document_number.clone(),
                password_hash,
            })
            .map_err(|e| internal("account provisioning failed; request left verified", e))?;

        let completed = request
            .transitioned(OnboardingStatus::Completed, self.clock.now())
            .ok_or_else(|| internal("illegal status transition", request.status))?;
        if let Err(e) = self.store.update(&completed) {
            tracing::error!(
                user_id = %user.public_id,
                error = %e,
                "CRITICAL: user provisioned but onboarding request not marked completed"
            );
            return Err(OnboardingError::Internal);
        }

        self.stats.completed();
        tracing::info!(user_id = %user.public_id, "onboarding completed");
        Ok(user)
    }

    /// Find the request for a presented token; unknown tokens are `InvalidToken`.
    fn lookup(&self, raw_token: &str) -> Result<OnboardingRequest, OnboardingError> {
        let request = self
            .store
            .find_by_token_fingerprint(&fingerprint(raw_token))
            .map_err(|e| internal("token lookup failed", e))?
            .ok_or_else(|| {
                tracing::debug!("rejected: unknown token");
                OnboardingError::InvalidToken
            })?;
        spans::record_public_id(&request.public_id);
        Ok(request)
    }
}
