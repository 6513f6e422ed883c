//! Identity store errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    /// The storage backend failed to read or write.
    #[error("session storage: {0}")]
    Storage(String),

    /// A persisted record exists but does not parse as a user record.
    #[error("corrupt session record: {0}")]
    Corrupt(String),
}
