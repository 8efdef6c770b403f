//! Sortable table header cell
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Name"
//!     arrow=Signal::derive(move || params.get().sort.arrow_for(SortField::Name))
//!     on_sort=Callback::new(move |_| toggle_sort(SortField::Name))
//! />
//! ```

use contracts::shared::list_view::SortArrow;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Arrow of the active sort; `None` when sorting by another column
    #[prop(into)]
    arrow: Signal<Option<SortArrow>>,

    on_sort: Callback<()>,

    /// Right aligned for numeric columns
    #[prop(optional)]
    align_right: bool,
) -> impl IntoView {
    let header_class = if align_right {
        "table__sortable-header table__sortable-header--right"
    } else {
        "table__sortable-header"
    };

    view! {
        <TableHeaderCell>
            <div class=header_class on:click=move |_| on_sort.run(())>
                {label}
                <span class=move || {
                    if arrow.get().is_some() { "sort-icon sort-icon--active" } else { "sort-icon" }
                }>
                    {move || arrow.get().map(|a| a.indicator()).unwrap_or("")}
                </span>
            </div>
        </TableHeaderCell>
    }
}
