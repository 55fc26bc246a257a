//! Transient notifications ("toasts").
//!
//! Components grab a [`Notifier`] with [`use_notifier`] and call
//! [`Notifier::notify`]; the [`Toaster`] mounted once at the root renders
//! the queue and dismisses entries after [`NOTIFICATION_LIFETIME_MS`].

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::config::{MAX_NOTIFICATIONS, NOTIFICATION_LIFETIME_MS};
use crate::types::Notification;

/// A notification with the id used to dismiss it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Bounded queue of visible toasts, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, notification: Notification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast { id, notification });
        if self.toasts.len() > MAX_NOTIFICATIONS {
            self.toasts.remove(0);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

/// Handle for raising notifications, provided via context.
#[derive(Clone, Copy)]
pub struct Notifier {
    queue: RwSignal<ToastQueue>,
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            queue: create_rw_signal(ToastQueue::default()),
        }
    }

    pub fn notify(&self, notification: Notification) {
        log::debug!("🔔 {}: {}", notification.title, notification.description);
        let Some(id) = self.queue.try_update(|q| q.push(notification)) else {
            return;
        };

        // The toaster lives as long as the page, so the timer is left to run.
        let queue = self.queue;
        Timeout::new(NOTIFICATION_LIFETIME_MS, move || {
            queue.try_update(|q| q.dismiss(id));
        })
        .forget();
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }
}

/// The notifier provided at the application root.
pub fn use_notifier() -> Notifier {
    expect_context::<Notifier>()
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn Toaster(notifier: Notifier) -> impl IntoView {
    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || notifier.queue.with(|q| q.toasts().to_vec())
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.notification.variant.css_class()
                            on:click=move |_| notifier.dismiss(id)
                        >
                            <div class="toast-title">{toast.notification.title}</div>
                            <div class="toast-description">{toast.notification.description}</div>
                        </div>
                    }
                }
            />
        </div>
    }
}
