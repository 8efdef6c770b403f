use crate::shared::local_storage;
use contracts::shared::list_view::SavedSearches;
use leptos::prelude::*;

/// Filter presets stored under `key`, written back on every change
pub fn create_saved_searches(key: &'static str) -> RwSignal<SavedSearches> {
    let searches = RwSignal::new(local_storage::get_json::<SavedSearches>(key).unwrap_or_default());
    Effect::new(move |_| searches.with(|s| local_storage::set_json(key, s)));
    searches
}
