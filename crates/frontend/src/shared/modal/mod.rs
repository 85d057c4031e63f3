use contracts::domain::detail::DetailKind;
use contracts::shared::modal::ModalGroup;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::dom;
use crate::shared::icons::icon;
use crate::shared::notification::NotificationService;

/// Delay before focus moves into a freshly opened modal.
const FOCUS_DELAY_MS: u32 = 100;

/// Page-wide controller for the detail modals.
///
/// - `open` replaces whatever is open; unknown ids only raise a notification
/// - every dismissal path goes through `close` / `close_active`
/// - the Escape listener is installed at most once
#[derive(Clone, Copy)]
pub struct ModalController {
    group: RwSignal<ModalGroup>,
    notifications: NotificationService,
    escape_installed: StoredValue<bool>,
}

impl ModalController {
    pub fn new(notifications: NotificationService) -> Self {
        Self {
            group: RwSignal::new(ModalGroup::new()),
            notifications,
            escape_installed: StoredValue::new(false),
        }
    }

    pub fn open(&self, kind: DetailKind, id: &str) {
        let notifications = self.notifications;
        let opened = self
            .group
            .try_update(|g| g.open(kind, id, &notifications).is_some())
            .unwrap_or(false);
        if !opened {
            log::warn!("{} modal not opened for id {}", kind.as_str(), id);
        }
    }

    pub fn close(&self, kind: DetailKind) {
        if self.group.with_untracked(|g| g.is_open(kind)) {
            self.group.update(|g| {
                g.close(kind);
            });
        }
    }

    pub fn close_active(&self) {
        if self.group.with_untracked(|g| g.any_open()) {
            self.group.update(|g| {
                g.close_active();
            });
        }
    }

    pub fn is_open(&self, kind: DetailKind) -> bool {
        self.group.with(|g| g.is_open(kind))
    }

    pub fn scroll_locked(&self) -> bool {
        self.group.with(|g| g.scroll_locked())
    }

    /// `(title, body markup)` of the entry shown by the `kind` modal.
    pub fn content(&self, kind: DetailKind) -> Option<(&'static str, &'static str)> {
        self.group
            .with(|g| g.entry(kind).map(|e| (e.title, e.body_markup.as_str())))
    }

    /// True exactly once per controller: the first caller owns the Escape
    /// listener.
    fn claim_escape_listener(&self) -> bool {
        self.escape_installed
            .try_update_value(|installed| !std::mem::replace(installed, true))
            .unwrap_or(false)
    }

    /// Registers the global Escape handler. Safe to call repeatedly.
    pub fn install_escape_listener(&self) {
        if !self.claim_escape_listener() {
            return;
        }

        let ctrl = *self;
        // lives as long as the page, so the handle is never removed
        let _ = window_event_listener(ev::keydown, move |ev: ev::KeyboardEvent| {
            if ev.key() == "Escape" {
                ctrl.close_active();
            }
        });
        log::debug!("modal Escape listener installed");
    }
}

pub fn use_modals() -> ModalController {
    use_context::<ModalController>()
        .expect("ModalController not provided in context (provide it in app root)")
}

/// Mounts both detail modals and keeps the scroll lock in sync.
///
/// Must be mounted exactly once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let ctrl = use_modals();
    ctrl.install_escape_listener();

    Effect::new(move |prev: Option<bool>| {
        let locked = ctrl.scroll_locked();
        if prev != Some(locked) {
            dom::set_scroll_lock(locked);
        }
        locked
    });

    view! {
        <DetailModal kind=DetailKind::Project />
        <DetailModal kind=DetailKind::Service />
    }
}

fn slot_ids(kind: DetailKind) -> (&'static str, &'static str) {
    match kind {
        DetailKind::Project => ("modalTitle", "modalContent"),
        DetailKind::Service => ("serviceModalTitle", "serviceModalContent"),
    }
}

/// One modal surface. It stays in the DOM and is only shown or hidden.
#[component]
fn DetailModal(kind: DetailKind) -> impl IntoView {
    let ctrl = use_modals();
    let modal_ref = NodeRef::<Div>::new();
    let (title_id, body_id) = slot_ids(kind);

    let is_open = move || ctrl.is_open(kind);
    let title = move || ctrl.content(kind).map(|(t, _)| t).unwrap_or_default();
    let body = move || {
        ctrl.content(kind)
            .map(|(_, b)| b.to_string())
            .unwrap_or_default()
    };

    Effect::new(move |_| {
        if !is_open() {
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(FOCUS_DELAY_MS).await;
            if let Some(el) = modal_ref.get_untracked() {
                if !dom::focus_first_focusable(&el) {
                    log::debug!("no focusable control in {}", kind.modal_id());
                }
            }
        });
    });

    // Only a click whose target is the scrim itself closes the modal.
    let handle_scrim_click = move |ev: ev::MouseEvent| {
        let on_scrim = match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        };
        if on_scrim {
            ctrl.close(kind);
        }
    };

    let handle_close = move |ev: ev::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        ctrl.close(kind);
    };

    view! {
        <div
            id=kind.modal_id()
            class="modal"
            class:active=is_open
            style:display=move || if is_open() { "flex" } else { "none" }
            role="dialog"
            aria-modal="true"
            aria-labelledby=title_id
            aria-hidden=move || if is_open() { "false" } else { "true" }
            node_ref=modal_ref
            on:click=handle_scrim_click
        >
            <div class="modal-content">
                <div class="modal-header">
                    <h2 id=title_id class="modal-title">{title}</h2>
                    <button class="modal-close" aria-label="Close" on:click=handle_close>
                        {icon("x")}
                    </button>
                </div>
                <div id=body_id class="modal-body" inner_html=body></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_listener_claimed_once() {
        let owner = Owner::new();
        owner.with(|| {
            let ctrl = ModalController::new(NotificationService::new(5000));
            assert!(ctrl.claim_escape_listener());
            assert!(!ctrl.claim_escape_listener());

            // copies share the flag
            let copy = ctrl;
            assert!(!copy.claim_escape_listener());

            let other = ModalController::new(NotificationService::new(5000));
            assert!(other.claim_escape_listener());
        });
    }
}
