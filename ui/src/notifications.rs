//! The ephemeral notification queue.
//!
//! This is the pure half of the subsystem: an ordered collection with
//! unique, never-reused ids. Expiry scheduling lives in
//! [`crate::hooks::use_notifier`], which pairs each push with a delayed
//! `remove`. Because ids are never reused, a timer that fires after the
//! user already dismissed its notification degrades to the documented
//! no-op instead of clobbering newer state.

use std::fmt;
use std::time::Duration;

use web_time::Instant;

/// How long a notification stays up before auto-dismissal. Same for every
/// kind; not tunable at call time.
pub const AUTO_DISMISS_AFTER: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumIs)]
#[strum(serialize_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

/// Opaque handle for a queued notification. Unique within a queue instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A transient, queued, user-facing message.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: Instant,
}

/// Ordered collection of live notifications; insertion order = display
/// order, oldest first. Unbounded.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    entries: Vec<Notification>,
    next_id: u64,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification at the tail and returns its id.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;
        self.entries.push(Notification {
            id,
            kind,
            message: message.into(),
            created_at: Instant::now(),
        });
        id
    }

    /// Removes the notification with `id` if present. Removing an absent id
    /// is a no-op, returning false; this absorbs the race between user
    /// dismissal and the auto-expiry timer.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id != id);
        self.entries.len() != before
    }

    /// Read-only snapshot for rendering, oldest first.
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn push_returns_id_visible_in_entries() {
        let mut queue = NotificationQueue::new();
        let id = queue.push(NotificationKind::Success, "Sent");

        assert_eq!(queue.len(), 1);
        let entry = &queue.entries()[0];
        assert_eq!(entry.id, id);
        assert_eq!(entry.kind, NotificationKind::Success);
        assert_eq!(entry.message, "Sent");

        // expiry (or dismissal) empties the queue again
        assert!(queue.remove(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn entries_keep_arrival_order_with_unique_ids() {
        let mut queue = NotificationQueue::new();
        let n = 10;
        let ids: Vec<_> = (0..n)
            .map(|i| queue.push(NotificationKind::Info, format!("message {i}")))
            .collect();

        let unique: HashSet<_> = ids.iter().copied().collect();
        assert_eq!(unique.len(), n);

        let listed: Vec<_> = queue.entries().iter().map(|e| e.id).collect();
        assert_eq!(listed, ids);
    }

    #[test]
    fn removal_preserves_relative_order_of_survivors() {
        let mut queue = NotificationQueue::new();
        let ids: Vec<_> = (0..5)
            .map(|i| queue.push(NotificationKind::Warning, format!("w{i}")))
            .collect();

        assert!(queue.remove(ids[2]));

        let expected: Vec<_> = ids.iter().copied().filter(|id| *id != ids[2]).collect();
        let listed: Vec<_> = queue.entries().iter().map(|e| e.id).collect();
        assert_eq!(listed, expected);
    }

    #[test]
    fn double_remove_is_a_no_op() {
        let mut queue = NotificationQueue::new();
        let id = queue.push(NotificationKind::Error, "boom");
        assert!(queue.remove(id));
        assert!(!queue.remove(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn ids_are_never_reused() {
        let mut queue = NotificationQueue::new();
        let first = queue.push(NotificationKind::Info, "a");
        queue.remove(first);
        let second = queue.push(NotificationKind::Info, "b");
        assert_ne!(first, second);
        // a stale expiry timer for the old id cannot touch the new entry
        assert!(!queue.remove(first));
        assert_eq!(queue.len(), 1);
    }
}
