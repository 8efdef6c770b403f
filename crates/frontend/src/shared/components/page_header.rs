use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// PageHeader component - reusable header for list and detail pages
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: Signal<String>,

    /// Link rendered as a back arrow before the title
    #[prop(optional, into)]
    back_href: MaybeProp<String>,

    /// Action buttons
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {move || back_href.get().map(|href| view! {
                    <A href=href>
                        <span class="page-header__back">{icon("arrow-left")}</span>
                    </A>
                })}
                <h1 class="page-header__title">{move || title.get()}</h1>
            </div>
            <div class="page-header__actions">
                {children.map(|children| children())}
            </div>
        </div>
    }
}
