pub mod notification_service;
pub mod sidebar;

pub use notification_service::{use_notifications, NotificationService};

use leptos::prelude::*;
use notification_service::NotificationHost;
use sidebar::Sidebar;

/// Main application shell.
///
/// ```text
/// +----------------------------------+
/// |            top bar               |
/// +----------------------------------+
/// |  Sidebar  |        Content       |
/// +----------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header class="top-header">
                <span class="top-header__title">"Dashboard"</span>
            </header>

            <div class="app-body">
                <Sidebar />
                <main class="app-main">
                    {children()}
                </main>
            </div>

            <NotificationHost />
        </div>
    }
}
