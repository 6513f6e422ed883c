//! Categorized application errors.
//!
//! Workflows return these; every failure also lands in the toast queue, so
//! the category mostly feeds labels and logs. All failures surface at the
//! same severity, from a validation slip to an unreachable backend.

use crate::identity::IdentityError;
use crate::views::notifications::ToastLevel;
use std::fmt;
use thiserror::Error;
use wallet_client::ClientError;
use wallet_types::PostId;

/// High-level error categories for frontend handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// User input validation (correctable by the user).
    Input,
    /// The backend could not be reached or answered garbage.
    Network,
    /// The backend answered and said no.
    Rejected,
    /// The local session record could not be read or written.
    Storage,
    /// A referenced entity is not in local state.
    NotFound,
}

impl ErrorCategory {
    /// Whether a retry without changes could plausibly succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Network)
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Network => "Network",
            Self::Rejected => "Rejected",
            Self::Storage => "Storage",
            Self::NotFound => "Not Found",
        }
    }

    /// Toast severity for this category.
    #[must_use]
    pub fn toast_level(&self) -> ToastLevel {
        // Every failure shows the same way regardless of cause.
        ToastLevel::Error
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Failure of a workflow.
#[derive(Debug, Error)]
pub enum AppError {
    /// Local validation rejected the input before any request was issued.
    #[error("{0}")]
    Input(String),

    /// The action needs a signed-in user.
    #[error("not signed in")]
    NoSession,

    /// The post is not in the cached feed.
    #[error("unknown post {0}")]
    UnknownPost(PostId),

    /// The gift id is not in the catalog.
    #[error("unknown gift {0}")]
    UnknownGift(String),

    /// Not enough coins for the selected gift.
    #[error("not enough coins")]
    InsufficientBalance,

    /// A backend operation failed.
    #[error(transparent)]
    Api(#[from] ClientError),

    /// The identity store failed.
    #[error(transparent)]
    Identity(#[from] IdentityError),
}

impl AppError {
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Input(_) | Self::NoSession | Self::InsufficientBalance => ErrorCategory::Input,
            Self::UnknownPost(_) | Self::UnknownGift(_) => ErrorCategory::NotFound,
            Self::Api(err) if err.is_rejected() => ErrorCategory::Rejected,
            Self::Api(_) => ErrorCategory::Network,
            Self::Identity(_) => ErrorCategory::Storage,
        }
    }
}
