use crate::domain::a001_category::api;
use crate::layout::{use_notifications, NotificationService};
use crate::shared::url_state::RouterNavigator;
use contracts::domain::a001_category::dto::CategoryCreateFormData;
use contracts::domain::a001_category::urls::{category_list_url, category_url};
use contracts::shared::graphql::{field_error, FieldError};
use contracts::shared::mutation::{CreateFlow, CreateOutcome, CreateRoutes, SaveButtonState};
use leptos::prelude::*;

pub const CATEGORY_CREATED_MESSAGE: &str = "Category created";

type CategoryCreateFlow = CreateFlow<RouterNavigator, NotificationService>;

/// ViewModel for the category create form
#[derive(Clone, Copy)]
pub struct CategoryCreateViewModel {
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub seo_title: RwSignal<String>,
    pub seo_description: RwSignal<String>,
    /// Transport failure of the last submit
    pub transport_error: RwSignal<Option<String>>,
    /// Bumped on every flow transition; readers of the flow track it
    revision: RwSignal<u64>,
    flow: StoredValue<CategoryCreateFlow, LocalStorage>,
    parent_id: StoredValue<Option<String>>,
}

impl CategoryCreateViewModel {
    pub fn new(parent_id: Option<String>) -> Self {
        let back_url = match parent_id.as_deref() {
            Some(parent_id) => category_url(parent_id, None),
            None => category_list_url(None),
        };
        let flow = CreateFlow::new(
            RouterNavigator::new(),
            use_notifications(),
            CreateRoutes {
                detail_url: |id| category_url(id, None),
                back_url,
            },
            CATEGORY_CREATED_MESSAGE,
        );

        Self {
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            seo_title: RwSignal::new(String::new()),
            seo_description: RwSignal::new(String::new()),
            transport_error: RwSignal::new(None),
            revision: RwSignal::new(0),
            flow: StoredValue::new_local(flow),
            parent_id: StoredValue::new(parent_id),
        }
    }

    fn form(&self) -> CategoryCreateFormData {
        CategoryCreateFormData {
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
            seo_title: self.seo_title.get_untracked(),
            seo_description: self.seo_description.get_untracked(),
        }
    }

    fn bump(&self) {
        self.revision.try_update(|r| *r += 1);
    }

    pub fn is_pending(&self) -> bool {
        self.revision.track();
        self.flow.with_value(|flow| flow.is_pending())
    }

    pub fn save_state(&self) -> SaveButtonState {
        self.revision.track();
        self.flow.with_value(|flow| flow.save_state())
    }

    pub fn errors(&self) -> Vec<FieldError> {
        self.revision.track();
        self.flow.with_value(|flow| flow.errors().to_vec())
    }

    /// Message of the first error reported for `field`
    pub fn field_error(&self, field: &str) -> Option<String> {
        field_error(&self.errors(), field).map(|e| e.message.clone())
    }

    /// Errors not tied to a form field
    pub fn form_errors(&self) -> Vec<String> {
        self.errors()
            .into_iter()
            .filter(|e| e.field.is_none())
            .map(|e| e.message)
            .collect()
    }

    pub fn can_submit(&self) -> bool {
        !self.name.get().trim().is_empty() && !self.is_pending()
    }

    /// Send the mutation; ignored while a previous submit is in flight
    pub fn submit(&self) {
        let Some(ticket) = self.flow.try_update_value(|flow| flow.begin()).flatten() else {
            log::debug!("Submit ignored, request already in flight");
            return;
        };
        self.transport_error.set(None);
        self.bump();

        let variables = self
            .parent_id
            .with_value(|parent_id| self.form().to_variables(parent_id.as_deref()));
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::create_category(variables).await;
            // `None` once the page is gone
            let Some(outcome) = this.flow.try_update_value(|flow| flow.complete(ticket, result))
            else {
                return;
            };
            match outcome {
                CreateOutcome::Failed(err) => {
                    this.transport_error.try_set(Some(err.to_string()));
                }
                CreateOutcome::Invalid(errors) => {
                    log::info!("Category create rejected with {} error(s)", errors.len());
                }
                CreateOutcome::Created { .. } | CreateOutcome::Stale => {}
            }
            this.bump();
        });
    }

    pub fn back(&self) {
        self.flow.with_value(|flow| flow.back());
    }

    /// Called when the page unmounts
    pub fn teardown(&self) {
        self.flow.try_update_value(|flow| flow.teardown());
    }
}
