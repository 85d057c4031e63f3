//! Exclusive open/closed state for the page's detail modals.
//!
//! There is one modal per [`DetailKind`]. At most one of them is open at a
//! time, and the background scroll lock is held exactly while one is open.

use crate::domain::detail::{self, DetailEntry, DetailKind};
use crate::shared::notification::Notify;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveModal {
    pub kind: DetailKind,
    pub entry: &'static DetailEntry,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalGroup {
    active: Option<ActiveModal>,
    scroll_locked: bool,
}

impl ModalGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the modal for `kind` populated with entry `id`.
    ///
    /// Unknown ids are logged and reported through `notifier`; the group is
    /// left untouched. Otherwise any open modal is replaced.
    pub fn open(
        &mut self,
        kind: DetailKind,
        id: &str,
        notifier: &impl Notify,
    ) -> Option<&'static DetailEntry> {
        match detail::lookup(kind, id) {
            Ok(entry) => {
                if let Some(previous) = self.active.take() {
                    log::debug!("replacing open {} modal", previous.kind);
                }
                self.active = Some(ActiveModal { kind, entry });
                self.scroll_locked = true;
                log::debug!("opened {} modal: {}", kind, id);
                Some(entry)
            }
            Err(err) => {
                log::error!("{} not found: {}", kind.as_str(), id);
                notifier.error(&err.to_string());
                None
            }
        }
    }

    /// Closes the modal for `kind`. Returns false when it was not open.
    pub fn close(&mut self, kind: DetailKind) -> bool {
        if self.is_open(kind) {
            self.close_active().is_some()
        } else {
            false
        }
    }

    /// Closes whichever modal is open, if any.
    pub fn close_active(&mut self) -> Option<DetailKind> {
        let closed = self.active.take().map(|a| a.kind);
        if let Some(kind) = closed {
            log::debug!("closed {} modal", kind);
        }
        self.scroll_locked = false;
        closed
    }

    pub fn is_open(&self, kind: DetailKind) -> bool {
        self.active.as_ref().is_some_and(|a| a.kind == kind)
    }

    pub fn any_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&ActiveModal> {
        self.active.as_ref()
    }

    /// Entry shown by the modal of `kind`, if that modal is open.
    pub fn entry(&self, kind: DetailKind) -> Option<&'static DetailEntry> {
        self.active
            .as_ref()
            .filter(|a| a.kind == kind)
            .map(|a| a.entry)
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notification::testing::RecordingNotifier;
    use crate::shared::notification::NotificationKind;

    const KINDS: [DetailKind; 2] = [DetailKind::Project, DetailKind::Service];

    fn open_count(group: &ModalGroup) -> usize {
        KINDS.iter().filter(|k| group.is_open(**k)).count()
    }

    #[test]
    fn test_open_known_project() {
        let notifier = RecordingNotifier::default();
        let mut group = ModalGroup::new();

        let entry = group.open(DetailKind::Project, "pixelprompt", &notifier);

        assert_eq!(entry.map(|e| e.title), Some("PixelPrompt - AI Wireframe Generator"));
        assert!(group.is_open(DetailKind::Project));
        assert!(group.scroll_locked());
        assert!(notifier.sent.borrow().is_empty());
    }

    #[test]
    fn test_open_unknown_id_notifies_once() {
        let notifier = RecordingNotifier::default();
        let mut group = ModalGroup::new();

        assert!(group.open(DetailKind::Project, "nonexistent", &notifier).is_none());

        assert!(!group.is_open(DetailKind::Project));
        assert!(!group.scroll_locked());
        let sent = notifier.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, NotificationKind::Error);
        assert_eq!(sent[0].1, "Project details not found");
    }

    #[test]
    fn test_unknown_id_keeps_open_modal() {
        let notifier = RecordingNotifier::default();
        let mut group = ModalGroup::new();
        group.open(DetailKind::Service, "cloud", &notifier);

        group.open(DetailKind::Project, "nope", &notifier);

        assert_eq!(group.entry(DetailKind::Service).map(|e| e.id), Some("cloud"));
        assert!(group.scroll_locked());
    }

    #[test]
    fn test_at_most_one_open() {
        let notifier = RecordingNotifier::default();
        let mut group = ModalGroup::new();

        group.open(DetailKind::Project, "pixelprompt", &notifier);
        group.open(DetailKind::Project, "ecommerce", &notifier);
        assert_eq!(open_count(&group), 1);
        assert_eq!(group.entry(DetailKind::Project).map(|e| e.id), Some("ecommerce"));

        group.open(DetailKind::Service, "web", &notifier);
        assert_eq!(open_count(&group), 1);
        assert!(group.is_open(DetailKind::Service));
        assert!(group.entry(DetailKind::Project).is_none());
    }

    #[test]
    fn test_close_is_idempotent() {
        let notifier = RecordingNotifier::default();
        let mut group = ModalGroup::new();
        group.open(DetailKind::Project, "bus-tracker", &notifier);

        assert!(group.close(DetailKind::Project));
        let after_first = group.clone();
        assert!(!group.close(DetailKind::Project));
        assert_eq!(group, after_first);
        assert!(!group.scroll_locked());
    }

    #[test]
    fn test_close_other_kind_is_noop() {
        let notifier = RecordingNotifier::default();
        let mut group = ModalGroup::new();
        group.open(DetailKind::Project, "ai-chatbot", &notifier);

        assert!(!group.close(DetailKind::Service));
        assert!(group.is_open(DetailKind::Project));
        assert!(group.scroll_locked());
    }

    #[test]
    fn test_close_active() {
        let notifier = RecordingNotifier::default();
        let mut group = ModalGroup::new();
        assert_eq!(group.close_active(), None);

        group.open(DetailKind::Service, "ai", &notifier);
        assert_eq!(group.close_active(), Some(DetailKind::Service));
        assert!(!group.any_open());
        assert!(!group.scroll_locked());
    }
}
