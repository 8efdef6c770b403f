use crate::layout::NotificationService;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Transient messages raised by mutations, rendered by the shell
    provide_context(NotificationService::new());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
