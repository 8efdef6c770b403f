//! Create-form flow: one mutation in flight at a time, success side effects
//! only for live requests, validation errors kept for inline rendering.

use crate::shared::graphql::{ApiError, FieldError};

/// Address bar collaborator
pub trait Navigator {
    fn navigate(&self, url: &str);
}

/// Transient notification collaborator; fire-and-forget
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Handle binding a submitted request to its completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket(u64);

/// Single in-flight request per form, invalidated when the view goes away
#[derive(Debug, Default)]
pub struct SubmitGuard {
    generation: u64,
    in_flight: Option<u64>,
    torn_down: bool,
    called: bool,
}

impl SubmitGuard {
    /// `None` while a request is pending or after teardown
    pub fn begin(&mut self) -> Option<SubmitTicket> {
        if self.torn_down || self.in_flight.is_some() {
            return None;
        }
        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.called = true;
        Some(SubmitTicket(self.generation))
    }

    /// Whether the completion of `ticket` may still apply its effects
    pub fn finish(&mut self, ticket: SubmitTicket) -> bool {
        if self.torn_down || self.in_flight != Some(ticket.0) {
            return false;
        }
        self.in_flight = None;
        true
    }

    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.in_flight = None;
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn was_called(&self) -> bool {
        self.called
    }
}

/// Save bar button state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveButtonState {
    Default,
    Loading,
    Success,
    Error,
}

impl SaveButtonState {
    pub fn from_mutation(called: bool, loading: bool, errors: &[FieldError]) -> Self {
        if loading {
            SaveButtonState::Loading
        } else if !called {
            SaveButtonState::Default
        } else if errors.is_empty() {
            SaveButtonState::Success
        } else {
            SaveButtonState::Error
        }
    }
}

/// Payload of a create mutation
pub trait CreatePayload {
    fn errors(&self) -> &[FieldError];

    fn created_id(&self) -> Option<&str>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Notified and navigated to the new entity
    Created { id: String },
    /// Validation failed; nothing was navigated or notified
    Invalid(Vec<FieldError>),
    /// Transport failure; the form can be submitted again
    Failed(ApiError),
    /// Completion of a request the view no longer waits for
    Stale,
}

/// Where the flow goes on success and on "back"
pub struct CreateRoutes {
    pub detail_url: fn(&str) -> String,
    pub back_url: String,
}

pub struct CreateFlow<N, T> {
    navigator: N,
    notifier: T,
    routes: CreateRoutes,
    success_message: String,
    guard: SubmitGuard,
    errors: Vec<FieldError>,
    failed: bool,
}

impl<N: Navigator, T: Notifier> CreateFlow<N, T> {
    pub fn new(
        navigator: N,
        notifier: T,
        routes: CreateRoutes,
        success_message: impl Into<String>,
    ) -> Self {
        Self {
            navigator,
            notifier,
            routes,
            success_message: success_message.into(),
            guard: SubmitGuard::default(),
            errors: Vec::new(),
            failed: false,
        }
    }

    /// Start a submission; `None` when one is already pending
    pub fn begin(&mut self) -> Option<SubmitTicket> {
        self.guard.begin()
    }

    pub fn complete<P: CreatePayload>(
        &mut self,
        ticket: SubmitTicket,
        result: Result<P, ApiError>,
    ) -> CreateOutcome {
        if !self.guard.finish(ticket) {
            log::debug!("Dropping stale create response");
            return CreateOutcome::Stale;
        }

        let payload = match result {
            Ok(payload) => payload,
            Err(err) => {
                log::warn!("Create request failed: {}", err);
                self.failed = true;
                return CreateOutcome::Failed(err);
            }
        };

        self.failed = false;
        self.errors = payload.errors().to_vec();
        if !self.errors.is_empty() {
            return CreateOutcome::Invalid(self.errors.clone());
        }

        let Some(id) = payload.created_id() else {
            self.failed = true;
            return CreateOutcome::Failed(ApiError::EmptyData);
        };
        let id = id.to_string();
        log::info!("Created entity {}", id);
        self.notifier.notify(&self.success_message);
        self.navigator.navigate(&(self.routes.detail_url)(&id));
        CreateOutcome::Created { id }
    }

    pub fn back(&self) {
        self.navigator.navigate(&self.routes.back_url);
    }

    /// Called when the view is torn down; later completions become stale
    pub fn teardown(&mut self) {
        self.guard.teardown();
    }

    pub fn is_pending(&self) -> bool {
        self.guard.is_pending()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn save_state(&self) -> SaveButtonState {
        if self.failed && !self.guard.is_pending() {
            return SaveButtonState::Error;
        }
        SaveButtonState::from_mutation(self.guard.was_called(), self.guard.is_pending(), &self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_rejects_second_submit_while_pending() {
        let mut guard = SubmitGuard::default();
        let first = guard.begin().expect("first submit");
        assert!(guard.begin().is_none());
        assert!(guard.finish(first));
        assert!(guard.begin().is_some());
    }

    #[test]
    fn test_guard_rejects_old_ticket() {
        let mut guard = SubmitGuard::default();
        let first = guard.begin().expect("first submit");
        assert!(guard.finish(first));
        let _second = guard.begin().expect("second submit");
        assert!(!guard.finish(first));
    }

    #[test]
    fn test_guard_teardown_invalidates_pending() {
        let mut guard = SubmitGuard::default();
        let ticket = guard.begin().expect("submit");
        guard.teardown();
        assert!(!guard.finish(ticket));
        assert!(guard.begin().is_none());
    }

    #[test]
    fn test_save_button_state() {
        let errors = vec![FieldError::new("name", "required")];
        assert_eq!(SaveButtonState::from_mutation(false, false, &[]), SaveButtonState::Default);
        assert_eq!(SaveButtonState::from_mutation(true, true, &[]), SaveButtonState::Loading);
        assert_eq!(SaveButtonState::from_mutation(true, false, &[]), SaveButtonState::Success);
        assert_eq!(SaveButtonState::from_mutation(true, false, &errors), SaveButtonState::Error);
    }
}
