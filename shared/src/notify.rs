use serde::{Deserialize, Serialize};

/// Shown when submit is pressed without choosing any stars
pub const RATING_REQUIRED_MESSAGE: &str = "Please select a rating";
/// Shown when submit is pressed with an empty or whitespace-only message
pub const MESSAGE_REQUIRED_MESSAGE: &str = "Please write a message";
pub const FEEDBACK_THANKS_MESSAGE: &str = "Thank you for your feedback!";
pub const FEEDBACK_FAILED_MESSAGE: &str = "Failed to submit feedback";

/// Kind of transient notification, used by the toast host for styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A short user-facing message raised by a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Sink for transient notifications (toasts in the browser, a recorder in tests)
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

impl<F> Notifier for F
where
    F: Fn(Notification),
{
    fn notify(&self, notification: Notification) {
        self(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_closure_acts_as_notifier() {
        let seen = RefCell::new(Vec::new());
        let notifier = |n: Notification| seen.borrow_mut().push(n);

        notifier.notify(Notification::success(FEEDBACK_THANKS_MESSAGE));
        notifier.notify(Notification::error(FEEDBACK_FAILED_MESSAGE));

        let seen = seen.into_inner();
        assert_eq!(seen.len(), 2);
        assert!(!seen[0].is_error());
        assert!(seen[1].is_error());
        assert_eq!(seen[1].message, "Failed to submit feedback");
    }
}
