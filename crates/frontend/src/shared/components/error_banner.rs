use leptos::prelude::*;

/// Inline error banner; renders nothing while `error` is `None`
#[component]
pub fn ErrorBanner(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|e| {
            view! {
                <div class="alert alert--error" role="alert">
                    <span class="alert__icon">"⚠"</span>
                    <span class="alert__text">{e}</span>
                </div>
            }
        })
    }
}
