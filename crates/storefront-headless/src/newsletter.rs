//! Newsletter subscription logic.
//!
//! A small state machine around one email field:
//!
//! ```text
//! Idle --submit--> Submitting --ok--> Success
//!                      |
//!                      +--err--> Error(reason) --submit--> Submitting
//! ```
//!
//! `Success` is terminal. Submitting again while a call is pending does
//! nothing, so the subscription service sees at most one call per submit.

use std::sync::{Arc, Mutex, MutexGuard};

use futures::future::BoxFuture;
use serde::Serialize;

use crate::collaborators::{CollaboratorError, SubscribeRequest, SubscriptionService};
use crate::email::Email;
use crate::error::HeadlessError;
use crate::lifecycle::{lock, ChangeObserver, Mount};

/// Pending subscribe call, to be driven by the host executor.
pub type SubscribeTask = BoxFuture<'static, SubscribeOutcome>;

/// Where the newsletter form stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Idle,
    Submitting,
    Success,
    /// The service rejected the subscription; the reason is shown verbatim.
    Error(String),
}

/// How a subscribe call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscribeOutcome {
    Subscribed,
    Failed(String),
    /// The section was unmounted before the call returned.
    Discarded,
}

#[derive(Debug)]
struct NewsletterState {
    email: String,
    status: SubscriptionStatus,
    validation_error: Option<String>,
    revision: u64,
}

impl NewsletterState {
    fn bump(&mut self) -> u64 {
        self.revision += 1;
        self.revision
    }
}

/// Logic handle for the newsletter section.
#[derive(Clone)]
pub struct NewsletterLogic {
    state: Arc<Mutex<NewsletterState>>,
    service: Arc<dyn SubscriptionService>,
    observer: Option<Arc<dyn ChangeObserver>>,
    mount: Mount,
}

impl NewsletterLogic {
    pub fn new(service: Arc<dyn SubscriptionService>) -> Self {
        Self {
            state: Arc::new(Mutex::new(NewsletterState {
                email: String::new(),
                status: SubscriptionStatus::Idle,
                validation_error: None,
                revision: 0,
            })),
            service,
            observer: None,
            mount: Mount::new(),
        }
    }

    /// Register the change observer.
    pub fn with_observer(mut self, observer: Arc<dyn ChangeObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn email(&self) -> String {
        self.state().email.clone()
    }

    pub fn status(&self) -> SubscriptionStatus {
        self.state().status.clone()
    }

    pub fn revision(&self) -> u64 {
        self.state().revision
    }

    pub fn is_mounted(&self) -> bool {
        self.mount.is_mounted()
    }

    /// Update the email field.
    ///
    /// Only editable while idle or after a failure; returns false otherwise.
    /// Clears any inline validation message.
    pub fn set_email(&self, value: impl Into<String>) -> bool {
        if !self.mount.is_mounted() {
            return false;
        }

        let revision = {
            let mut state = self.state();
            if !matches!(state.status, SubscriptionStatus::Idle | SubscriptionStatus::Error(_)) {
                tracing::debug!(status = ?state.status, "email edit ignored");
                return false;
            }

            state.email = value.into();
            state.validation_error = None;
            state.bump()
        };

        self.notify(revision);
        true
    }

    /// Submit the current email.
    ///
    /// Returns `Ok(None)` while a call is pending or after success. An email
    /// that fails local validation is reported inline and as `InvalidEmail`
    /// without contacting the service. Otherwise the form moves to
    /// `Submitting` and the returned task performs the single service call.
    pub fn handle_subscribe(&self) -> Result<Option<SubscribeTask>, HeadlessError> {
        if !self.mount.is_mounted() {
            return Err(HeadlessError::Unmounted);
        }

        let mut state = self.state();
        if matches!(state.status, SubscriptionStatus::Submitting | SubscriptionStatus::Success) {
            tracing::debug!(status = ?state.status, "duplicate subscribe ignored");
            return Ok(None);
        }

        let email = match Email::parse(&state.email) {
            Ok(email) => email,
            Err(err) => {
                state.validation_error = Some(err.to_string());
                let revision = state.bump();
                drop(state);
                self.notify(revision);
                return Err(err.into());
            }
        };

        state.validation_error = None;
        state.status = SubscriptionStatus::Submitting;
        let revision = state.bump();
        drop(state);
        self.notify(revision);

        tracing::info!(domain = email.domain(), "newsletter subscription submitted");

        let logic = self.clone();
        Ok(Some(Box::pin(async move {
            let result = logic.service.subscribe(SubscribeRequest { email }).await;
            logic.finish_subscribe(result)
        })))
    }

    fn finish_subscribe(&self, result: Result<(), CollaboratorError>) -> SubscribeOutcome {
        if !self.mount.is_mounted() {
            tracing::debug!("newsletter unmounted, subscribe result discarded");
            return SubscribeOutcome::Discarded;
        }

        let (outcome, revision) = {
            let mut state = self.state();
            let outcome = match result {
                Ok(()) => {
                    state.status = SubscriptionStatus::Success;
                    SubscribeOutcome::Subscribed
                }
                Err(err) => {
                    tracing::warn!(error = %err, "newsletter subscription failed");
                    let reason = err.to_string();
                    state.status = SubscriptionStatus::Error(reason.clone());
                    SubscribeOutcome::Failed(reason)
                }
            };
            (outcome, state.bump())
        };

        self.notify(revision);
        outcome
    }

    /// Destroy the section. Pending tasks finish as `Discarded`.
    pub fn unmount(&self) {
        if self.mount.unmount() {
            tracing::debug!("newsletter unmounted");
        }
    }

    pub fn view(&self) -> NewsletterView {
        let state = self.state();
        let error = match &state.status {
            SubscriptionStatus::Error(reason) => Some(reason.clone()),
            _ => None,
        };

        NewsletterView {
            email: state.email.clone(),
            is_submitting: state.status == SubscriptionStatus::Submitting,
            success: state.status == SubscriptionStatus::Success,
            error: state.validation_error.clone().or(error),
            status: state.status.clone(),
            revision: state.revision,
        }
    }

    fn state(&self) -> MutexGuard<'_, NewsletterState> {
        lock(&self.state)
    }

    fn notify(&self, revision: u64) {
        if let Some(observer) = &self.observer {
            observer.on_change(revision);
        }
    }
}

impl std::fmt::Debug for NewsletterLogic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsletterLogic")
            .field("state", &*self.state())
            .field("mounted", &self.mount.is_mounted())
            .finish_non_exhaustive()
    }
}

/// Immutable snapshot of the newsletter section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsletterView {
    pub email: String,
    pub status: SubscriptionStatus,
    pub is_submitting: bool,
    pub success: bool,
    /// Inline validation message, else the service's failure reason.
    pub error: Option<String>,
    pub revision: u64,
}
