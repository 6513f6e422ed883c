//! Toast notifications.
//!
//! Every error and confirmation in the app surfaces as a transient toast;
//! the queue lives in view state and frontends render and expire it.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Most toasts kept before the oldest is dropped.
pub const MAX_TOASTS: usize = 8;

/// Toast severity level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToastLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    #[must_use]
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Success => "✓",
            Self::Warning => "⚠",
            Self::Error => "✗",
        }
    }
}

/// A toast message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toast {
    pub id: String,
    pub message: String,
    pub level: ToastLevel,
}

impl Toast {
    #[must_use]
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            id: Uuid::new_v4().simple().to_string(),
            message: message.into(),
            level,
        }
    }

    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Info)
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Success)
    }

    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Warning)
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Error)
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.level == ToastLevel::Error
    }
}

/// The toast queue, newest last.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Notifications {
    toasts: Vec<Toast>,
}

impl Notifications {
    /// Append a toast, dropping the oldest beyond [`MAX_TOASTS`].
    pub fn push(&mut self, toast: Toast) {
        self.toasts.push(toast);
        if self.toasts.len() > MAX_TOASTS {
            let excess = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..excess);
        }
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, toast_id: &str) {
        self.toasts.retain(|t| t.id != toast_id);
    }

    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Whether any queued toast is error-level.
    #[must_use]
    pub fn has_error(&self) -> bool {
        self.toasts.iter().any(Toast::is_error)
    }

    /// Whether some queued toast carries this message.
    #[must_use]
    pub fn contains_message(&self, message: &str) -> bool {
        self.toasts.iter().any(|t| t.message == message)
    }
}
