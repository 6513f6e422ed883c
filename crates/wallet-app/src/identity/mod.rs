//! Persisted identity.
//!
//! The current user is the sole durable record on the client. It is stored
//! wholesale under one key, overwritten on each save, and restored at
//! startup; there is no versioning and no merge.

mod error;
mod storage;
mod store;

pub use error::IdentityError;
pub use storage::{FsSessionStorage, MemorySessionStorage, SessionStorage};
pub use store::{IdentityStore, SESSION_KEY};
