//! Named filter presets of a list screen.
//!
//! A preset is addressed by its 1-based position, so `activeTab=1` selects the
//! first stored preset. An `activeTab` that names no stored preset is the
//! custom view and leaves the address-bar filters untouched.

use super::state::ListViewState;
use super::token::{TabAction, TabDialog, UrlToken};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSearch {
    pub name: String,
    /// Filter values keyed by their wire code
    pub filters: BTreeMap<String, String>,
}

impl SavedSearch {
    /// Typed filters of the preset; codes the screen no longer knows are dropped
    pub fn typed_filters<F: UrlToken + Ord>(&self) -> BTreeMap<F, String> {
        self.filters
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .filter_map(|(code, value)| F::from_code(code).map(|key| (key, value.clone())))
            .collect()
    }
}

/// Stored presets in tab order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedSearches(Vec<SavedSearch>);

impl SavedSearches {
    pub fn new(searches: Vec<SavedSearch>) -> Self {
        Self(searches)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `activeTab` value of the preset at `index`
    pub fn tab_id(index: usize) -> String {
        (index + 1).to_string()
    }

    pub fn get(&self, tab: &str) -> Option<&SavedSearch> {
        let position = tab.parse::<usize>().ok()?;
        self.0.get(position.checked_sub(1)?)
    }

    /// `(activeTab, name)` pairs in tab order
    pub fn tabs(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .enumerate()
            .map(|(index, search)| (Self::tab_id(index), search.name.clone()))
            .collect()
    }

    /// Append a preset and return its tab. Blank names are rejected.
    pub fn save(&mut self, name: &str, filters: BTreeMap<String, String>) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        self.0.push(SavedSearch {
            name: name.to_string(),
            filters,
        });
        Some(Self::tab_id(self.0.len() - 1))
    }

    /// Drop the preset behind `tab`; later presets move one tab left
    pub fn remove(&mut self, tab: &str) -> Option<SavedSearch> {
        let position = tab.parse::<usize>().ok()?.checked_sub(1)?;
        (position < self.0.len()).then(|| self.0.remove(position))
    }
}

impl<F, D, S> ListViewState<F, D, S>
where
    F: UrlToken + Ord,
    D: UrlToken,
    S: UrlToken,
{
    /// Filters keyed by wire code, the form presets are stored in
    pub fn filter_codes(&self) -> BTreeMap<String, String> {
        self.filters
            .iter()
            .map(|(key, value)| (key.code().to_string(), value.clone()))
            .collect()
    }

    /// State in effect: when `active_tab` names a stored preset, its filters
    /// replace the address-bar filters.
    pub fn with_saved_search_applied(mut self, searches: &SavedSearches) -> Self {
        if let Some(search) = self.active_tab.as_deref().and_then(|tab| searches.get(tab)) {
            self.filters = search.typed_filters();
        }
        self
    }

    /// Tab click. `None` is the unfiltered view.
    pub fn with_saved_search(mut self, searches: &SavedSearches, tab: Option<&str>) -> Self {
        self.filters = tab
            .and_then(|tab| searches.get(tab))
            .map(SavedSearch::typed_filters)
            .unwrap_or_default();
        self.active_tab = tab.filter(|tab| searches.get(tab).is_some()).map(str::to_string);
        self.pagination.reset_cursors();
        self.without_dialog()
    }

    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }
}

impl<F, D, S> ListViewState<F, D, S>
where
    F: UrlToken + Ord,
    D: TabDialog,
    S: UrlToken,
{
    /// Saved-search dialog named by `action`
    pub fn tab_dialog(&self) -> Option<TabAction> {
        self.dialog.as_ref().and_then(|dialog| dialog.kind.tab_action())
    }

    /// Open a saved-search dialog, or close any dialog with `None`
    pub fn with_tab_dialog(self, action: Option<TabAction>) -> Self {
        match action {
            Some(action) => self.with_dialog(D::tab(action), None),
            None => self.without_dialog(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::url_token! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
        enum Filter {
            Query => "query",
            Status => "status",
        }
    }

    crate::url_token! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        enum Kind {
            Remove => "remove",
        }
    }

    crate::url_token! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        enum Field {
            #[default]
            Name => "name",
        }
    }

    type Params = ListViewState<Filter, Kind, Field>;

    fn presets() -> SavedSearches {
        let mut searches = SavedSearches::default();
        searches.save(
            "Hidden",
            BTreeMap::from([("status".to_string(), "hidden".to_string())]),
        );
        searches.save(
            "Shirts",
            BTreeMap::from([
                ("query".to_string(), "shirt".to_string()),
                ("gone".to_string(), "x".to_string()),
            ]),
        );
        searches
    }

    #[test]
    fn test_tabs_are_one_based() {
        let searches = presets();
        assert_eq!(
            searches.tabs(),
            vec![
                ("1".to_string(), "Hidden".to_string()),
                ("2".to_string(), "Shirts".to_string())
            ]
        );
        assert!(searches.get("0").is_none());
        assert!(searches.get("3").is_none());
        assert!(searches.get("x").is_none());
    }

    #[test]
    fn test_active_preset_replaces_filters() {
        let params = Params::default()
            .with_filter(Filter::Status, "published")
            .with_active_tab(Some("2".to_string()))
            .with_saved_search_applied(&presets());

        assert_eq!(params.filter(Filter::Query), Some("shirt"));
        assert_eq!(params.filter(Filter::Status), None);
    }

    #[test]
    fn test_unknown_tab_keeps_address_bar_filters() {
        let params = Params::default()
            .with_filter(Filter::Query, "mug")
            .with_active_tab(Some("9".to_string()))
            .with_saved_search_applied(&presets());
        assert_eq!(params.filter(Filter::Query), Some("mug"));
    }

    #[test]
    fn test_select_tab_and_back_to_all() {
        let searches = presets();
        let params = Params::default()
            .with_filter(Filter::Query, "mug")
            .with_dialog(Kind::Remove, None)
            .with_saved_search(&searches, Some("1"));
        assert_eq!(params.active_tab.as_deref(), Some("1"));
        assert_eq!(params.filter(Filter::Status), Some("hidden"));
        assert!(params.dialog.is_none());

        let all = params.with_saved_search(&searches, None);
        assert_eq!(all.active_tab, None);
        assert!(!all.has_filters());
    }

    #[test]
    fn test_save_rejects_blank_name_and_remove_shifts() {
        let mut searches = presets();
        assert_eq!(searches.save("  ", BTreeMap::new()), None);
        assert_eq!(searches.save(" Mugs ", BTreeMap::new()), Some("3".to_string()));

        let removed = searches.remove("1").map(|s| s.name);
        assert_eq!(removed.as_deref(), Some("Hidden"));
        assert_eq!(searches.get("1").map(|s| s.name.as_str()), Some("Shirts"));
        assert_eq!(searches.get("2").map(|s| s.name.as_str()), Some("Mugs"));
        assert!(searches.remove("7").is_none());
    }

    #[test]
    fn test_stored_form_is_a_plain_array() {
        let json = serde_json::to_value(presets()).expect("serializable");
        assert_eq!(json[0]["name"], "Hidden");
        assert_eq!(json[0]["filters"]["status"], "hidden");
        let back: SavedSearches = serde_json::from_value(json).expect("deserializable");
        assert_eq!(back, presets());
    }
}
