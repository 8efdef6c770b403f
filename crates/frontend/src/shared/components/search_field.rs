use leptos::prelude::*;

/// Text filter committed on change (Enter or blur)
#[component]
pub fn SearchField(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] placeholder: String,
    on_commit: Callback<String>,
) -> impl IntoView {
    view! {
        <input
            type="search"
            class="search-field"
            placeholder=placeholder
            prop:value=move || value.get()
            on:change=move |ev| on_commit.run(event_target_value(&ev).trim().to_string())
        />
    }
}
