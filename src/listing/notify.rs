//! User-visible notifications raised by list and dashboard operations.

use std::cell::RefCell;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AlertLevel {
    Success,
    Error,
}

impl AlertLevel {
    /// CSS alert class used by the templates.
    pub fn as_str(self) -> &'static str {
        match self {
            AlertLevel::Success => "success",
            AlertLevel::Error => "danger",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub level: AlertLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Error,
            message: message.into(),
        }
    }
}

/// Sink for notifications; the presentation layer decides how to show them.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Collects notifications raised while serving a single request.
#[derive(Debug, Default)]
pub struct Notifications {
    entries: RefCell<Vec<Notification>>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Count of notifications at the given level.
    pub fn count(&self, level: AlertLevel) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|n| n.level == level)
            .count()
    }

    /// Drains everything collected so far.
    pub fn take(&self) -> Vec<Notification> {
        self.entries.take()
    }
}

impl Notifier for Notifications {
    fn notify(&self, notification: Notification) {
        self.entries.borrow_mut().push(notification);
    }
}
