//! Notification service for user-facing toasts.
//!
//! Views receive a [`Notifier`] instead of pushing onto a global queue, so
//! filter logic can be driven and inspected in isolation.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde::Serialize;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single toast message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// Sink for user-facing notifications.
pub trait Notifier {
    /// Show a notification.
    fn notify(&self, notification: Notification);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

impl<N: Notifier + ?Sized> Notifier for Rc<N> {
    fn notify(&self, notification: Notification) {
        (**self).notify(notification)
    }
}

/// In-memory FIFO of pending notifications.
///
/// The toast layer drains it after each render.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: RefCell<VecDeque<Notification>>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take every pending notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.pending.borrow_mut().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}

impl Notifier for NotificationQueue {
    fn notify(&self, notification: Notification) {
        tracing::debug!(level = ?notification.level, message = %notification.message, "queued notification");
        self.pending.borrow_mut().push_back(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_fifo() {
        let queue = NotificationQueue::new();
        queue.notify(Notification::info("first"));
        queue.notify(Notification::error("second"));
        assert_eq!(queue.len(), 2);

        let drained = queue.drain();
        assert_eq!(drained[0].message, "first");
        assert_eq!(drained[1].level, NotificationLevel::Error);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_shared_queue_through_rc() {
        let queue = Rc::new(NotificationQueue::new());
        let notifier: Rc<NotificationQueue> = Rc::clone(&queue);
        notifier.notify(Notification::success("saved"));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_serializes_level_lowercase() {
        let json = serde_json::to_string(&Notification::warning("careful")).unwrap();
        assert_eq!(json, r#"{"level":"warning","message":"careful"}"#);
    }
}
