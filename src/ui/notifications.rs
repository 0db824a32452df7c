//! Toast notifications
//!
//! Non-blocking replacement for `alert()`: login failures are pushed as error
//! toasts that dismiss themselves after a few seconds.

use leptos::prelude::*;
use std::collections::VecDeque;

use crate::core::Notifier;

/// Maximum number of notifications to show at once
const MAX_NOTIFICATIONS: usize = 5;

/// Error toasts stay up long enough to read a server message
const ERROR_DISMISS_MS: u32 = 6000;

/// A single error toast
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub auto_dismiss_ms: Option<u32>,
}

impl Notice {
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(ERROR_DISMISS_MS),
        }
    }
}

/// Notification item with unique ID for tracking
#[derive(Clone, Debug)]
pub struct NotificationItem {
    pub id: u64,
    pub notice: Notice,
}

/// Notifications container component
#[component]
pub fn NotificationsContainer(
    /// Signal containing the list of notifications
    notifications: RwSignal<VecDeque<NotificationItem>>,
) -> impl IntoView {
    view! {
        <div class="toasts" role="status" aria-live="polite">
            {move || {
                notifications.get().into_iter().map(|item| {
                    view! {
                        <NoticeToast
                            notice=item.notice.clone()
                            id=item.id
                            notifications=notifications
                        />
                    }
                }).collect_view()
            }}
        </div>
    }
}

/// Single toast
#[component]
fn NoticeToast(
    notice: Notice,
    id: u64,
    notifications: RwSignal<VecDeque<NotificationItem>>,
) -> impl IntoView {
    let (is_exiting, _set_is_exiting) = signal(false);

    if let Some(_ms) = notice.auto_dismiss_ms {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(_ms).await;
                _set_is_exiting.set(true);
                // Wait for exit animation
                TimeoutFuture::new(300).await;
                notifications.update(|n| {
                    n.retain(|i| i.id != id);
                });
            });
        }
    }

    view! {
        <div class="toast toast-error" class:toast-exiting=move || is_exiting.get()>
            <div class="toast-body">
                <strong class="toast-title">{notice.title.clone()}</strong>
                <p class="toast-message">{notice.message.clone()}</p>
            </div>
            <button
                type="button"
                class="toast-close"
                aria-label="Dismiss"
                on:click=move |_| {
                    notifications.update(|n| {
                        n.retain(|i| i.id != id);
                    });
                }
            >
                "×"
            </button>
        </div>
    }
}

/// Handle for pushing notifications
#[derive(Clone, Copy)]
pub struct NotificationManager {
    notifications: RwSignal<VecDeque<NotificationItem>>,
    next_id: RwSignal<u64>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Get the notifications signal for the container
    pub fn notifications(&self) -> RwSignal<VecDeque<NotificationItem>> {
        self.notifications
    }

    pub fn notify(&self, notice: Notice) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.notifications.update(|n| {
            n.push_back(NotificationItem { id, notice });

            // Remove oldest if we exceed max
            while n.len() > MAX_NOTIFICATIONS {
                n.pop_front();
            }
        });
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Notice::error(title, message));
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Reports session errors as toasts
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    manager: NotificationManager,
}

impl ToastNotifier {
    pub fn new(manager: NotificationManager) -> Self {
        Self { manager }
    }
}

impl Notifier for ToastNotifier {
    fn notify_error(&self, message: &str) {
        self.manager.error("Sign-in failed", message);
    }
}
