use contracts::shared::mutation::Notifier;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// How long a notification stays on screen
const NOTIFICATION_TIMEOUT_MS: u32 = 3_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
}

/// Fire-and-forget notifications shown in the corner of the shell
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Show `message`; it is dismissed automatically
    pub fn show(&self, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.items.update(|items| {
            items.push(Notification {
                id,
                message: message.into(),
            })
        });

        let service = *self;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(NOTIFICATION_TIMEOUT_MS).await;
            service.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.items.try_update(|items| items.retain(|n| n.id != id));
    }

    pub fn items(&self) -> Vec<Notification> {
        self.items.get()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotificationService {
    fn notify(&self, message: &str) {
        self.show(message);
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the live notifications; mounted once by the shell
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notifications">
            <For
                each=move || service.items()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class="notification" on:click=move |_| service.dismiss(id)>
                            {n.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
