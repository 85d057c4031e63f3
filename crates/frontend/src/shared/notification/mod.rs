use contracts::shared::notification::{Notification, NotificationKind, Notify};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

use crate::shared::icons::icon;

/// Slide-out time before a dismissed notification is removed.
const LEAVE_MS: u32 = 300;

/// Shows at most one toast at a time; a new one replaces the current one.
#[derive(Clone, Copy)]
pub struct NotificationService {
    current: RwSignal<Option<Notification>>,
    entered: RwSignal<bool>,
    duration_ms: StoredValue<u32>,
}

impl NotificationService {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            current: RwSignal::new(None),
            entered: RwSignal::new(false),
            duration_ms: StoredValue::new(duration_ms),
        }
    }

    pub fn set_duration(&self, duration_ms: u32) {
        self.duration_ms.set_value(duration_ms);
    }

    pub fn show(&self, kind: NotificationKind, message: impl Into<String>) {
        let notification = Notification::new(kind, message);
        let id = notification.id;
        self.entered.set(false);
        self.current.set(Some(notification));

        let svc = *self;
        request_animation_frame(move || {
            if svc.is_current(id) {
                svc.entered.set(true);
            }
        });

        let duration = self.duration_ms.get_value();
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            svc.dismiss(id);
        });
    }

    /// Slides the notification out, then removes it. Ignored if `id` is no
    /// longer the one on screen.
    pub fn dismiss(&self, id: Uuid) {
        if !self.is_current(id) {
            return;
        }
        self.entered.set(false);
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(LEAVE_MS).await;
            if svc.is_current(id) {
                svc.current.set(None);
            }
        });
    }

    fn is_current(&self, id: Uuid) -> bool {
        self.current
            .with_untracked(|c| c.as_ref().is_some_and(|n| n.id == id))
    }
}

impl Notify for NotificationService {
    fn notify(&self, kind: NotificationKind, message: &str) {
        self.show(kind, message);
    }
}

/// Renders the active notification. Mount once at the application root.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_context::<NotificationService>()
        .expect("NotificationService not provided in context (provide it in app root)");

    view! {
        {move || {
            svc.current.get().map(|n| {
                let id = n.id;
                let transform = move || {
                    if svc.entered.get() { "translateX(0)" } else { "translateX(100%)" }
                };
                view! {
                    <div
                        class=format!("notification {}", n.kind.class())
                        role="status"
                        style:background=n.kind.background()
                        style:transform=transform
                    >
                        <div class="notification-content">
                            <i class=n.kind.icon()></i>
                            <span>{n.message.clone()}</span>
                        </div>
                        <button
                            class="notification-close"
                            aria-label="Dismiss notification"
                            on:click=move |_| svc.dismiss(id)
                        >
                            {icon("x")}
                        </button>
                    </div>
                }
            })
        }}
    }
}
