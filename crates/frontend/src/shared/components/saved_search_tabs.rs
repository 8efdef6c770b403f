//! Saved-search tabs of a list screen with its save and delete dialogs.
//!
//! The selected preset and the open dialog live in the address bar: the page
//! turns `on_select` and `on_dialog` into navigations.

use super::{ConfirmDialog, TabBar};
use contracts::shared::list_view::{SavedSearches, TabAction};
use leptos::prelude::*;
use std::collections::BTreeMap;
use thaw::*;

const ALL_TAB: &str = "";
const CUSTOM_TAB: &str = "custom";

/// Tabs in display order: the unfiltered view, the presets, and a custom tab
/// while unsaved filters are applied
fn tab_entries(searches: &SavedSearches, all_label: &str, custom: bool) -> Vec<(String, String)> {
    let mut tabs = vec![(ALL_TAB.to_string(), all_label.to_string())];
    tabs.extend(searches.tabs());
    if custom {
        tabs.push((CUSTOM_TAB.to_string(), "Custom filter".to_string()));
    }
    tabs
}

fn active_entry(preset: Option<String>, custom: bool) -> String {
    match preset {
        Some(tab) => tab,
        None if custom => CUSTOM_TAB.to_string(),
        None => ALL_TAB.to_string(),
    }
}

#[component]
pub fn SavedSearchTabs(
    searches: RwSignal<SavedSearches>,
    all_label: &'static str,
    #[prop(into)] active_tab: Signal<Option<String>>,
    /// Filters of the current view keyed by wire code
    #[prop(into)]
    filters: Signal<BTreeMap<String, String>>,
    /// Tab dialog named by the `action` parameter
    #[prop(into)]
    dialog: Signal<Option<TabAction>>,
    /// `None` selects the unfiltered view
    on_select: Callback<Option<String>>,
    /// `None` closes the open dialog
    on_dialog: Callback<Option<TabAction>>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());

    let preset = Signal::derive(move || {
        active_tab
            .get()
            .filter(|tab| searches.with(|s| s.get(tab).is_some()))
    });
    let custom = Signal::derive(move || {
        preset.with(Option::is_none) && filters.with(|f| !f.is_empty())
    });
    let preset_name = Signal::derive(move || {
        preset
            .get()
            .and_then(|tab| searches.with(|s| s.get(&tab).map(|search| search.name.clone())))
            .unwrap_or_default()
    });

    let save = move || {
        let current = filters.get_untracked();
        let tab = name
            .with_untracked(|n| searches.try_update(|s| s.save(n, current)))
            .flatten();
        if let Some(tab) = tab {
            log::info!("Saved search '{}' as tab {}", name.get_untracked().trim(), tab);
            name.set(String::new());
            on_select.run(Some(tab));
        }
    };
    let delete = move || {
        if let Some(tab) = preset.get_untracked() {
            searches.update(|s| {
                s.remove(&tab);
            });
        }
        on_select.run(None);
    };

    view! {
        <div class="saved-search-tabs">
            <TabBar
                tabs=Signal::derive(move || {
                    searches.with(|s| tab_entries(s, all_label, custom.get()))
                })
                active=Signal::derive(move || active_entry(preset.get(), custom.get()))
                on_select=Callback::new(move |code: String| {
                    if code == ALL_TAB {
                        on_select.run(None);
                    } else if code != CUSTOM_TAB {
                        on_select.run(Some(code));
                    }
                })
            />
            <Show when=move || custom.get()>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| on_dialog.run(Some(TabAction::SaveSearch))
                >
                    "Save search"
                </Button>
            </Show>
            <Show when=move || preset.with(Option::is_some)>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| on_dialog.run(Some(TabAction::DeleteSearch))
                >
                    "Delete search"
                </Button>
            </Show>
        </div>

        <Show when=move || dialog.get() == Some(TabAction::SaveSearch)>
            <div class="modal-overlay" on:click=move |_| on_dialog.run(None)>
                <div class="modal-content" on:click=|e| e.stop_propagation()>
                    <h2 class="modal-content__title">"Save custom search"</h2>
                    <input
                        type="text"
                        class="modal-content__input"
                        placeholder="Search name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <div class="modal-content__actions">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| on_dialog.run(None)
                        >
                            "Back"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || name.with(|n| n.trim().is_empty()))
                            on_click=move |_| save()
                        >
                            "Save"
                        </Button>
                    </div>
                </div>
            </div>
        </Show>

        <ConfirmDialog
            open=Signal::derive(move || dialog.get() == Some(TabAction::DeleteSearch))
            title="Delete search"
            message=Signal::derive(move || {
                format!("Are you sure you want to delete the {} search?", preset_name.get())
            })
            confirm_label="Delete"
            busy=Signal::derive(|| false)
            on_confirm=Callback::new(move |_| delete())
            on_close=Callback::new(move |_| on_dialog.run(None))
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn searches() -> SavedSearches {
        let mut searches = SavedSearches::default();
        searches.save("Hidden", BTreeMap::from([("status".into(), "hidden".into())]));
        searches
    }

    #[test]
    fn test_tab_entries_append_custom_tab_for_unsaved_filters() {
        let codes = |custom| {
            tab_entries(&searches(), "All products", custom)
                .into_iter()
                .map(|(code, _)| code)
                .collect::<Vec<_>>()
        };
        assert_eq!(codes(false), vec!["", "1"]);
        assert_eq!(codes(true), vec!["", "1", CUSTOM_TAB]);
    }

    #[test]
    fn test_active_entry() {
        assert_eq!(active_entry(Some("1".into()), false), "1");
        assert_eq!(active_entry(None, true), CUSTOM_TAB);
        assert_eq!(active_entry(None, false), ALL_TAB);
    }
}
