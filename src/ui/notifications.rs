//! Toast notifications
//!
//! App-level messages that outlive the component raising them, such as the
//! confirmation shown after the credential modal closes.

use std::collections::VecDeque;

use leptos::prelude::*;

/// Maximum number of notifications to show at once
const MAX_NOTIFICATIONS: usize = 3;

/// Time a toast stays on screen
#[cfg(not(feature = "ssr"))]
const AUTO_DISMISS_MS: u32 = 4000;

/// Notification item with unique ID for tracking
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotificationItem {
    pub id: u64,
    pub message: String,
}

/// Handle to the app's notification queue
#[derive(Clone, Copy)]
pub struct Notifications {
    items: RwSignal<VecDeque<NotificationItem>>,
    next_id: RwSignal<u64>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Queue a message, dropping the oldest past the limit
    pub fn push(&self, message: impl Into<String>) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.items.update(|items| {
            items.push_back(NotificationItem {
                id,
                message: message.into(),
            });
            while items.len() > MAX_NOTIFICATIONS {
                items.pop_front();
            }
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|item| item.id != id));
    }

    /// Messages currently queued, oldest first
    pub fn messages(&self) -> Vec<String> {
        self.items
            .with_untracked(|items| items.iter().map(|item| item.message.clone()).collect())
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_notifications() -> Notifications {
    let notifications = Notifications::new();
    provide_context(notifications);
    notifications
}

pub fn use_notifications() -> Notifications {
    expect_context::<Notifications>()
}

/// Notifications container component
#[component]
pub fn NotificationsContainer() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toasts" role="status" aria-live="polite">
            <For
                each=move || notifications.items.get()
                key=|item| item.id
                children=move |item| view! { <Toast item=item notifications=notifications/> }
            />
        </div>
    }
}

#[component]
fn Toast(item: NotificationItem, notifications: Notifications) -> impl IntoView {
    let id = item.id;

    #[cfg(not(feature = "ssr"))]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
        notifications.dismiss(id);
    });

    view! {
        <div class="toast">
            <p>{item.message}</p>
            <button
                type="button"
                class="toast-close"
                aria-label="Dismiss"
                on:click=move |_| notifications.dismiss(id)
            >
                "×"
            </button>
        </div>
    }
}
