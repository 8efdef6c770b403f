use std::cell::RefCell;
use std::rc::Rc;

use contracts::domain::a001_category::dto::{CategoryCreateData, CategoryCreatePayload};
use contracts::domain::a001_category::urls::{category_list_url, category_url};
use contracts::shared::graphql::{ApiError, FieldError};
use contracts::shared::mutation::{
    CreateFlow, CreateOutcome, CreateRoutes, Navigator, Notifier, SaveButtonState,
};
use serde_json::json;

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<String>>>);

impl Recorder {
    fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl Navigator for Recorder {
    fn navigate(&self, url: &str) {
        self.0.borrow_mut().push(url.to_string());
    }
}

impl Notifier for Recorder {
    fn notify(&self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}

fn flow(back_url: String) -> (CreateFlow<Recorder, Recorder>, Recorder, Recorder) {
    let navigations = Recorder::default();
    let notifications = Recorder::default();
    let flow = CreateFlow::new(
        navigations.clone(),
        notifications.clone(),
        CreateRoutes {
            detail_url: |id| category_url(id, None),
            back_url,
        },
        "Category created",
    );
    (flow, navigations, notifications)
}

fn payload(value: serde_json::Value) -> CategoryCreatePayload {
    let data: CategoryCreateData = serde_json::from_value(json!({ "categoryCreate": value }))
        .expect("valid payload");
    data.category_create
}

#[test]
fn success_navigates_once_and_notifies_once() {
    let (mut flow, navigations, notifications) = flow(category_list_url(None));
    let ticket = flow.begin().expect("submit");
    assert_eq!(flow.save_state(), SaveButtonState::Loading);

    let outcome = flow.complete(
        ticket,
        Ok(payload(json!({ "errors": [], "category": { "id": "42", "name": "Juices" } }))),
    );

    assert_eq!(outcome, CreateOutcome::Created { id: "42".into() });
    assert_eq!(navigations.entries(), vec!["/categories/42".to_string()]);
    assert_eq!(notifications.entries(), vec!["Category created".to_string()]);
    assert_eq!(flow.save_state(), SaveButtonState::Success);
}

#[test]
fn validation_errors_stay_on_form() {
    let (mut flow, navigations, notifications) = flow(category_list_url(None));
    let ticket = flow.begin().expect("submit");

    let outcome = flow.complete(
        ticket,
        Ok(payload(json!({
            "errors": [{ "field": "name", "message": "required" }],
            "category": null
        }))),
    );

    let expected = vec![FieldError::new("name", "required")];
    assert_eq!(outcome, CreateOutcome::Invalid(expected.clone()));
    assert_eq!(flow.errors(), expected.as_slice());
    assert!(navigations.entries().is_empty());
    assert!(notifications.entries().is_empty());
    assert_eq!(flow.save_state(), SaveButtonState::Error);
}

#[test]
fn completion_after_teardown_has_no_effects() {
    let (mut flow, navigations, notifications) = flow(category_list_url(None));
    let ticket = flow.begin().expect("submit");
    flow.teardown();

    let outcome = flow.complete(
        ticket,
        Ok(payload(json!({ "errors": [], "category": { "id": "42", "name": "Juices" } }))),
    );

    assert_eq!(outcome, CreateOutcome::Stale);
    assert!(navigations.entries().is_empty());
    assert!(notifications.entries().is_empty());
}

#[test]
fn second_submit_is_ignored_while_pending() {
    let (mut flow, _, _) = flow(category_list_url(None));
    let _ticket = flow.begin().expect("submit");
    assert!(flow.begin().is_none());
    assert!(flow.is_pending());
}

#[test]
fn transport_error_allows_retry() {
    let (mut flow, navigations, notifications) = flow(category_list_url(None));
    let ticket = flow.begin().expect("submit");

    let outcome = flow.complete::<CategoryCreatePayload>(ticket, Err(ApiError::Http(502)));
    assert_eq!(outcome, CreateOutcome::Failed(ApiError::Http(502)));
    assert_eq!(flow.save_state(), SaveButtonState::Error);
    assert!(navigations.entries().is_empty());
    assert!(notifications.entries().is_empty());

    assert!(flow.begin().is_some());
}

#[test]
fn back_goes_to_parent_or_list() {
    let (root_flow, navigations, _) = flow(category_list_url(None));
    root_flow.back();
    assert_eq!(navigations.entries(), vec!["/categories/".to_string()]);

    let (child_flow, navigations, _) = flow(category_url("Q2F0ZWdvcnk6MQ==", None));
    child_flow.back();
    assert_eq!(
        navigations.entries(),
        vec![category_url("Q2F0ZWdvcnk6MQ==", None)]
    );
}
