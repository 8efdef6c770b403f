//! Select-all checkbox of a table header
//!
//! Shows three states: unchecked, checked and indeterminate.

use contracts::shared::grid::HeaderCheckState;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
pub fn TableHeaderCheckbox(
    #[prop(into)]
    state: Signal<HeaderCheckState>,

    /// Disabled while rows are loading
    #[prop(into)]
    disabled: Signal<bool>,

    /// Called on click; the caller decides between select-all and clear
    on_toggle: Callback<()>,
) -> impl IntoView {
    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // `indeterminate` has no HTML attribute, set it on the element
    Effect::new(move |_| {
        let indeterminate = state.get() == HeaderCheckState::Indeterminate;
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || state.get() == HeaderCheckState::Checked
                prop:disabled=move || disabled.get()
                on:change=move |_| on_toggle.run(())
            />
        </TableHeaderCell>
    }
}
