//! Decode diagnostics.
//!
//! Non-fatal issues found while reading an NC1 file are collected as
//! `Notification` items rather than being silently dropped or turned into
//! hard errors. After a read the caller can inspect
//! [`SteelPart::notifications`](crate::SteelPart::notifications).

use std::fmt;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// The input uses something this converter does not handle (e.g. a profile code).
    NotSupported,
    /// Non-fatal warning.
    Warning,
    /// Error that was recovered from (a skipped hole in failsafe mode).
    Error,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotSupported => write!(f, "NotSupported"),
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// A single notification produced while decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub notification_type: NotificationType,
    /// 0-based source line, when the issue belongs to one line.
    pub line: Option<usize>,
    pub message: String,
}

impl Notification {
    pub fn new(notification_type: NotificationType, message: impl Into<String>) -> Self {
        Self {
            notification_type,
            line: None,
            message: message.into(),
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "[{}] line {}: {}", self.notification_type, line, self.message),
            None => write!(f, "[{}] {}", self.notification_type, self.message),
        }
    }
}

/// Notifications gathered while decoding one part.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationCollection {
    items: Vec<Notification>,
}

impl NotificationCollection {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Record a notification.
    pub fn notify(&mut self, notification_type: NotificationType, message: impl Into<String>) {
        self.items.push(Notification::new(notification_type, message));
    }

    /// Record a notification tied to a source line.
    pub fn notify_at(
        &mut self,
        notification_type: NotificationType,
        line: usize,
        message: impl Into<String>,
    ) {
        self.items
            .push(Notification::new(notification_type, message).at_line(line));
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Notification> {
        self.items.iter()
    }

    /// Check whether any notification of the given type exists.
    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.items.iter().any(|n| n.notification_type == nt)
    }

    /// Get all notifications of a specific type.
    pub fn of_type(&self, nt: NotificationType) -> Vec<&Notification> {
        self.items.iter().filter(|n| n.notification_type == nt).collect()
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_basics() {
        let mut c = NotificationCollection::new();
        assert!(c.is_empty());

        c.notify(NotificationType::NotSupported, "profile code X");
        c.notify_at(NotificationType::Error, 21, "hole skipped");
        c.notify_at(NotificationType::Error, 23, "hole skipped");

        assert_eq!(c.len(), 3);
        assert_eq!(c.of_type(NotificationType::Error).len(), 2);
        assert!(c.has_type(NotificationType::NotSupported));
        assert!(!c.has_type(NotificationType::Warning));
    }

    #[test]
    fn test_display() {
        let n = Notification::new(NotificationType::NotSupported, "profile code \"L\"");
        assert_eq!(format!("{}", n), "[NotSupported] profile code \"L\"");

        let n = Notification::new(NotificationType::Error, "bad diameter").at_line(17);
        assert_eq!(format!("{}", n), "[Error] line 17: bad diameter");
    }
}
