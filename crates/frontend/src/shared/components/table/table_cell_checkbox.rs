use leptos::prelude::*;
use thaw::*;

/// Row selection checkbox; the click does not reach the row
#[component]
pub fn TableCellCheckbox(
    #[prop(into)]
    checked: Signal<bool>,

    /// Skeleton rows cannot be selected
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,

    on_change: Callback<bool>,
) -> impl IntoView {
    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || checked.get()
                prop:disabled=move || disabled.get().unwrap_or(false)
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableCell>
    }
}
