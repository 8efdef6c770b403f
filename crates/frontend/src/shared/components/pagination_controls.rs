use crate::shared::icons::icon;
use contracts::shared::list_view::{PageControls, PAGE_SIZE_OPTIONS};
use leptos::prelude::*;

/// Cursor pagination: previous/next buttons and a page-size select
#[component]
pub fn PaginationControls(
    /// Which directions are enabled
    #[prop(into)]
    controls: Signal<PageControls>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<u32>,

    on_previous: Callback<()>,

    on_next: Callback<()>,

    /// Callback when page size changes
    on_page_size_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<u32>() {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {PAGE_SIZE_OPTIONS.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
            <button
                class="pagination-btn"
                on:click=move |_| on_previous.run(())
                disabled=move || !controls.get().has_previous
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=move || !controls.get().has_next
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}
