//! Nullable onboarding store: thread-safe in-memory storage for testing.

use onboard_store::{OnboardingStore, StoreError};
use onboard_types::{OnboardingRequest, PublicId, TokenFingerprint};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// An in-memory onboarding store that enforces the same uniqueness
/// constraints as the relational table (e-mail, document, fingerprint).
///
/// Failures can be injected per operation, and every trait call is counted.
pub struct NullOnboardingStore {
    records: Mutex<HashMap<String, OnboardingRequest>>,
    fail_lookups: AtomicBool,
    fail_creates: AtomicBool,
    fail_updates: AtomicBool,
    blind_conflict_lookups: AtomicBool,
    lookup_calls: AtomicUsize,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
}

impl NullOnboardingStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            fail_lookups: AtomicBool::new(false),
            fail_creates: AtomicBool::new(false),
            fail_updates: AtomicBool::new(false),
            blind_conflict_lookups: AtomicBool::new(false),
            lookup_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
        }
    }

    /// Seed a record directly, bypassing constraints and call counters.
    pub fn insert(&self, request: OnboardingRequest) {
        self.records
            .lock()
            .unwrap()
            .insert(request.public_id.to_string(), request);
    }

    /// Read a record by public id.
    pub fn get(&self, public_id: &PublicId) -> Option<OnboardingRequest> {
        self.records.lock().unwrap().get(public_id.as_str()).cloned()
    }

    pub fn records(&self) -> Vec<OnboardingRequest> {
        self.records.lock().unwrap().values().cloned().collect()
    }

    /// Make every lookup fail with a backend error.
    pub fn fail_lookups(&self, fail: bool) {
        self.fail_lookups.store(fail, Ordering::SeqCst);
    }

    pub fn fail_creates(&self, fail: bool) {
        self.fail_creates.store(fail, Ordering::SeqCst);
    }

    pub fn fail_updates(&self, fail: bool) {
        self.fail_updates.store(fail, Ordering::SeqCst);
    }

    /// Make `find_by_document_or_email` report nothing even when a match
    /// exists, as if a concurrent insert landed between check and create.
    pub fn blind_conflict_lookups(&self, blind: bool) {
        self.blind_conflict_lookups.store(blind, Ordering::SeqCst);
    }

    /// Lookups of either kind.
    pub fn lookup_calls(&self) -> usize {
        self.lookup_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    fn check_lookup(&self) -> Result<(), StoreError> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("injected lookup failure".into()));
        }
        Ok(())
    }
}

impl Default for NullOnboardingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingStore for NullOnboardingStore {
    fn find_by_document_or_email(
        &self,
        document_number: &str,
        email: &str,
    ) -> Result<Option<OnboardingRequest>, StoreError> {
        self.check_lookup()?;
        if self.blind_conflict_lookups.load(Ordering::SeqCst) {
            return Ok(None);
        }
        Ok(self
            .records
            .lock()
            .unwrap()
            .values()
            .find(|r| r.document_number == document_number || r.email == email)
            .cloned())
    }

    fn create(&self, request: &OnboardingRequest) -> Result<(), StoreError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_creates.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("injected create failure".into()));
        }

        let mut records = self.records.lock().unwrap();
        for existing in records.values() {
            if existing.email == request.email {
                return Err(StoreError::Duplicate("email".into()));
            }
            if existing.document_number == request.document_number {
                return Err(StoreError::Duplicate("document_number".into()));
            }
            if existing.token_fingerprint == request.token_fingerprint {
                return Err(StoreError::Duplicate("token_fingerprint".into()));
            }
        }
        if records.contains_key(request.public_id.as_str()) {
            return Err(StoreError::Duplicate("public_id".into()));
        }
        records.insert(request.public_id.to_string(), request.clone());
        Ok(())
    }

    fn find_by_token_fingerprint(
        &self,
        fingerprint: &TokenFingerprint,
    ) -> Result<Option<OnboardingRequest>, StoreError> {
        self.check_lookup()?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .values()
            .find(|r| &r.token_fingerprint == fingerprint)
            .cloned())
    }

    fn update(&self, request: &OnboardingRequest) -> Result<(), StoreError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("injected update failure".into()));
        }

        let mut records = self.records.lock().unwrap();
        match records.get_mut(request.public_id.as_str()) {
            Some(slot) => {
                *slot = request.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(request.public_id.to_string())),
        }
    }
}
