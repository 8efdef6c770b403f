use contracts::shared::graphql::ApiError;
use leptos::prelude::*;
use std::future::Future;

/// Query state of a screen. Only the response of the newest request is
/// applied; older responses are dropped.
pub struct Loader<T: Send + Sync + 'static> {
    pub data: RwSignal<Option<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    generation: StoredValue<u64>,
}

impl<T: Send + Sync + 'static> Clone for Loader<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Loader<T> {}

impl<T: Send + Sync + 'static> Loader<T> {
    pub fn new() -> Self {
        Self {
            data: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
            generation: StoredValue::new(0),
        }
    }

    pub fn load<F>(&self, request: F)
    where
        F: Future<Output = Result<T, ApiError>> + 'static,
    {
        let generation = self.generation.get_value() + 1;
        self.generation.set_value(generation);
        self.loading.set(true);

        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            let result = request.await;
            if this.generation.try_get_value() != Some(generation) {
                log::debug!("Dropping superseded response");
                return;
            }
            this.loading.try_set(false);
            match result {
                Ok(value) => {
                    this.data.try_set(Some(value));
                    this.error.try_set(None);
                }
                Err(err) => {
                    log::warn!("Request failed: {}", err);
                    this.error.try_set(Some(err.to_string()));
                }
            }
        });
    }
}

impl<T: Send + Sync + 'static> Default for Loader<T> {
    fn default() -> Self {
        Self::new()
    }
}
