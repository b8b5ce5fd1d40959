//! Transient notifications (toasts) shown in the top-right corner.

use crate::shared::icons::icon;
use leptos::prelude::*;

#[cfg(target_arch = "wasm32")]
const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Success => "toast toast--success",
            NotificationKind::Error => "toast toast--error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Visible notifications in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQueue {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

/// Notification center, provided through context
#[derive(Clone, Copy)]
pub struct Notifications {
    queue: RwSignal<NotificationQueue>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NotificationQueue::default()),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(NotificationKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(NotificationKind::Error, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    /// Visible notifications, oldest first
    pub fn current(&self) -> Vec<Notification> {
        self.queue.with(|q| q.items().to_vec())
    }

    fn show(&self, kind: NotificationKind, message: String) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, message));
        self.schedule_dismiss(id);
    }

    /// Browser timers only exist on wasm; elsewhere a toast stays until dismissed.
    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, id: u64) {
        use gloo_timers::future::TimeoutFuture;

        let this = *self;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            this.dismiss(id);
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _id: u64) {}
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> Notifications {
    use_context::<Notifications>().expect("Notifications not provided in context")
}

/// Renders the notification stack
#[component]
pub fn Toaster() -> impl IntoView {
    let notifications = use_notifications();

    view! {
        <div class="toaster">
            <For
                each=move || notifications.current()
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.css_class() role="status">
                            <span class="toast__message">{n.message}</span>
                            <button
                                class="button button--icon toast__close"
                                on:click=move |_| notifications.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::testing::{reactive_runtime, settle};

    #[test]
    fn test_ids_increase_and_dismiss_removes_one() {
        let mut queue = NotificationQueue::default();
        let a = queue.push(NotificationKind::Success, "Producto creado exitosamente");
        let b = queue.push(NotificationKind::Error, "Network Error");
        assert!(b > a);

        queue.dismiss(a);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].message, "Network Error");

        queue.dismiss(999);
        assert_eq!(queue.items().len(), 1);
    }

    #[test]
    fn test_context_shows_and_dismisses_outside_browser() {
        let _owner = reactive_runtime();
        let notifications = Notifications::new();
        notifications.success("Categoría creada exitosamente");
        notifications.error("Network Error");

        let shown = notifications.current();
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].kind, NotificationKind::Success);
        assert_eq!(shown[1].kind, NotificationKind::Error);

        notifications.dismiss(shown[0].id);
        settle();
        let left: Vec<String> = notifications.current().into_iter().map(|n| n.message).collect();
        assert_eq!(left, vec!["Network Error".to_string()]);
    }
}
