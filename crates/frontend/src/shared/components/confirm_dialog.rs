use leptos::prelude::*;
use thaw::*;

/// Confirmation modal whose visibility is owned by the caller (usually the
/// `action` query parameter)
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    #[prop(into)] confirm_label: String,
    /// Disables the buttons while the action runs
    #[prop(into)]
    busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let confirm_label = StoredValue::new(confirm_label);
    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay" on:click=move |_| on_close.run(())>
                <div class="modal-content" on:click=|e| e.stop_propagation()>
                    <h2 class="modal-content__title">{title.clone()}</h2>
                    <p class="modal-content__text">{move || message.get()}</p>
                    <div class="modal-content__actions">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| on_close.run(())
                            disabled=busy
                        >
                            "Back"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_confirm.run(())
                            disabled=busy
                            loading=busy
                        >
                            {confirm_label.get_value()}
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
