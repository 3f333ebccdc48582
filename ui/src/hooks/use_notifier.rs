//! Producer-side handle for the notification queue.
//!
//! Each push schedules its own auto-dismiss task. Cancellation on early
//! user dismissal needs no bookkeeping: ids are unique and never reused,
//! so a timer firing after the entry is gone hits the queue's documented
//! no-op path.

use dioxus::prelude::*;

use crate::app_state_mut::AppStateMut;
use crate::compat;
use crate::notifications::NotificationId;
use crate::notifications::NotificationKind;
use crate::notifications::NotificationQueue;
use crate::notifications::AUTO_DISMISS_AFTER;

#[derive(Clone, Copy)]
pub struct Notifier {
    queue: Signal<NotificationQueue>,
}

impl Notifier {
    pub fn success(&mut self, message: impl Into<String>) -> NotificationId {
        self.push(NotificationKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> NotificationId {
        self.push(NotificationKind::Error, message)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> NotificationId {
        self.push(NotificationKind::Warning, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> NotificationId {
        self.push(NotificationKind::Info, message)
    }

    /// Appends the notification and schedules its expiry.
    fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> NotificationId {
        let id = self.queue.write().push(kind, message);
        let mut queue = self.queue;
        spawn(async move {
            compat::sleep(AUTO_DISMISS_AFTER).await;
            queue.write().remove(id);
        });
        id
    }

    /// Explicit user dismissal. Removing an already-expired id is a no-op.
    pub fn dismiss(&mut self, id: NotificationId) {
        self.queue.write().remove(id);
    }

    /// The underlying queue signal, for render-side subscription.
    pub fn queue(&self) -> Signal<NotificationQueue> {
        self.queue
    }
}

pub fn use_notifier() -> Notifier {
    let queue = use_context::<AppStateMut>().notifications;
    Notifier { queue }
}
