use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl NotificationKind {
    /// CSS modifier, e.g. `notification-error`.
    pub fn class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification-success",
            NotificationKind::Error => "notification-error",
            NotificationKind::Warning => "notification-warning",
            NotificationKind::Info => "notification-info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Success => "fas fa-check-circle",
            NotificationKind::Error => "fas fa-exclamation-circle",
            NotificationKind::Warning => "fas fa-exclamation-triangle",
            NotificationKind::Info => "fas fa-info-circle",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NotificationKind::Success => "linear-gradient(135deg, #10b981, #059669)",
            NotificationKind::Error => "linear-gradient(135deg, #ef4444, #dc2626)",
            NotificationKind::Warning => "linear-gradient(135deg, #f59e0b, #d97706)",
            NotificationKind::Info => "linear-gradient(135deg, #06ffa5, #8b5cf6)",
        }
    }
}

/// A transient, dismissible message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        }
    }
}

/// Sink for user-facing notifications.
pub trait Notify {
    fn notify(&self, kind: NotificationKind, message: &str);

    fn error(&self, message: &str) {
        self.notify(NotificationKind::Error, message);
    }

    fn success(&self, message: &str) {
        self.notify(NotificationKind::Success, message);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Records every notification instead of showing it.
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub sent: RefCell<Vec<(NotificationKind, String)>>,
    }

    impl Notify for RecordingNotifier {
        fn notify(&self, kind: NotificationKind, message: &str) {
            self.sent.borrow_mut().push((kind, message.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notifications_have_distinct_ids() {
        let a = Notification::new(NotificationKind::Info, "a");
        let b = Notification::new(NotificationKind::Info, "a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_kind_defaults() {
        assert_eq!(NotificationKind::default(), NotificationKind::Info);
        assert_eq!(NotificationKind::Error.class(), "notification-error");
    }
}
