use crate::layout::{use_notifications, NotificationService};
use contracts::shared::graphql::{ApiError, FieldError};
use contracts::shared::mutation::{SubmitGuard, SubmitTicket};
use leptos::prelude::*;
use std::future::Future;

/// Message shown for a mutation rejected by the API
pub fn rejection_message(errors: &[FieldError]) -> Option<String> {
    errors.first().map(|e| match &e.field {
        Some(field) => format!("{}: {}", field, e.message),
        None => e.message.clone(),
    })
}

#[derive(Debug, Clone, PartialEq)]
enum Completion {
    Succeeded,
    Rejected(String),
    Failed(String),
    /// The page that started the request is gone
    Stale,
}

fn complete(
    guard: &mut SubmitGuard,
    ticket: SubmitTicket,
    result: Result<Vec<FieldError>, ApiError>,
) -> Completion {
    if !guard.finish(ticket) {
        return Completion::Stale;
    }
    match result {
        Ok(errors) => match rejection_message(&errors) {
            None => Completion::Succeeded,
            Some(message) => Completion::Rejected(message),
        },
        Err(err) => Completion::Failed(err.to_string()),
    }
}

/// Delete/publish runner of one page.
///
/// One request is in flight at a time. The guard is torn down when the page
/// unmounts; a later completion then changes no signal, shows no
/// notification and does not navigate.
#[derive(Clone, Copy)]
pub struct MutationRunner {
    pub busy: RwSignal<bool>,
    guard: StoredValue<SubmitGuard>,
    notifications: NotificationService,
}

impl MutationRunner {
    pub fn new() -> Self {
        let guard = StoredValue::new(SubmitGuard::default());
        on_cleanup(move || {
            guard.try_update_value(SubmitGuard::teardown);
        });
        Self {
            busy: RwSignal::new(false),
            guard,
            notifications: use_notifications(),
        }
    }

    /// Notifies with `success_message` and runs `on_success` when the API
    /// accepted the request; rejections and transport errors are notified.
    pub fn run<F, S>(&self, success_message: &'static str, request: F, on_success: S)
    where
        F: Future<Output = Result<Vec<FieldError>, ApiError>> + 'static,
        S: FnOnce() + 'static,
    {
        let Some(ticket) = self.guard.try_update_value(SubmitGuard::begin).flatten() else {
            return;
        };
        let Self {
            busy,
            guard,
            notifications,
        } = *self;
        busy.set(true);

        wasm_bindgen_futures::spawn_local(async move {
            let result = request.await;
            let completion = guard
                .try_update_value(|g| complete(g, ticket, result))
                .unwrap_or(Completion::Stale);
            match completion {
                Completion::Stale => {
                    log::info!("Ignoring completion of '{}' after teardown", success_message);
                    return;
                }
                Completion::Succeeded => {
                    busy.set(false);
                    notifications.show(success_message);
                    on_success();
                }
                Completion::Rejected(message) => {
                    busy.set(false);
                    log::warn!("Mutation rejected: {}", message);
                    notifications.show(message);
                }
                Completion::Failed(message) => {
                    busy.set(false);
                    log::error!("Mutation failed: {}", message);
                    notifications.show(message);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message() {
        assert_eq!(rejection_message(&[]), None);
        assert_eq!(
            rejection_message(&[FieldError::new("ids", "Cannot delete")]),
            Some("ids: Cannot delete".to_string())
        );
    }

    #[test]
    fn test_completion_of_live_request() {
        let mut guard = SubmitGuard::default();
        let ticket = guard.begin().expect("idle guard");
        assert_eq!(complete(&mut guard, ticket, Ok(vec![])), Completion::Succeeded);

        let ticket = guard.begin().expect("finished guard");
        assert_eq!(
            complete(&mut guard, ticket, Ok(vec![FieldError::new("ids", "In use")])),
            Completion::Rejected("ids: In use".to_string())
        );
    }

    #[test]
    fn test_completion_after_teardown_has_no_effects() {
        let mut guard = SubmitGuard::default();
        let ticket = guard.begin().expect("idle guard");
        guard.teardown();
        assert_eq!(complete(&mut guard, ticket, Ok(vec![])), Completion::Stale);

        let mut guard = SubmitGuard::default();
        let ticket = guard.begin().expect("idle guard");
        guard.teardown();
        assert_eq!(
            complete(&mut guard, ticket, Err(ApiError::EmptyData)),
            Completion::Stale
        );
        assert!(guard.begin().is_none());
    }

    #[test]
    fn test_second_request_waits_for_the_first() {
        let mut guard = SubmitGuard::default();
        assert!(guard.begin().is_some());
        assert!(guard.begin().is_none());
    }
}
