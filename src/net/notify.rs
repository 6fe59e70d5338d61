//! User-facing notifications for submission outcomes.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::{RwSignal, Set};

pub const ACCOUNT_CREATED: &str = "Account created successfully!";
pub const ACCOUNT_FAILED: &str = "Error creating account. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// A message shown to the user once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, message: message.into() }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Failure, message: message.into() }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.kind == NotificationKind::Success
    }
}

/// Delivers notifications to the user.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// In-page modal: the signal holds the notification until dismissed.
impl Notifier for RwSignal<Option<Notification>> {
    fn notify(&self, notification: Notification) {
        let _ = self.try_set(Some(notification));
    }
}
