//! The identity store.

use super::error::IdentityError;
use super::storage::SessionStorage;
use wallet_types::User;

/// Storage key of the persisted user record. Matches the web client's
/// `localStorage` key so a session survives switching clients.
pub const SESSION_KEY: &str = "socialWalletUser";

/// Persists and restores the current user record.
pub struct IdentityStore {
    storage: Box<dyn SessionStorage>,
}

impl IdentityStore {
    #[must_use]
    pub fn new(storage: Box<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Restore a persisted identity, or `None` when no session exists.
    ///
    /// A record that exists but does not parse is reported as
    /// [`IdentityError::Corrupt`] rather than panicking; the caller decides
    /// whether to clear it.
    pub fn load(&self) -> Result<Option<User>, IdentityError> {
        let Some(raw) = self.storage.read(SESSION_KEY)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| IdentityError::Corrupt(e.to_string()))
    }

    /// Persist the user record, replacing any previous one wholesale.
    pub fn save(&self, user: &User) -> Result<(), IdentityError> {
        let raw = serde_json::to_string(user).map_err(|e| IdentityError::Corrupt(e.to_string()))?;
        self.storage.write(SESSION_KEY, &raw)
    }

    /// Remove the persisted record.
    pub fn clear(&self) -> Result<(), IdentityError> {
        self.storage.remove(SESSION_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::storage::{FsSessionStorage, MemorySessionStorage};
    use chrono::Utc;

    #[test]
    fn save_load_clear_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = IdentityStore::new(Box::new(FsSessionStorage::new(dir.path())));

        assert!(store.load().unwrap().is_none());

        let user = User::guest(Utc::now());
        store.save(&user).unwrap();
        assert_eq!(store.load().unwrap(), Some(user));

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_overwrites_wholesale() {
        let store = IdentityStore::new(Box::new(MemorySessionStorage::new()));
        let first = User::guest(Utc::now());
        let second = User::from_email("ada@example.com", Utc::now());
        store.save(&first).unwrap();
        store.save(&second).unwrap();
        assert_eq!(store.load().unwrap(), Some(second));
    }

    #[test]
    fn corrupt_record_is_a_typed_error() {
        let storage = MemorySessionStorage::new();
        storage.insert_raw(SESSION_KEY, "not json{");
        let store = IdentityStore::new(Box::new(storage));
        assert!(matches!(store.load(), Err(IdentityError::Corrupt(_))));
    }

    #[test]
    fn clearing_a_missing_record_is_fine() {
        let store = IdentityStore::new(Box::new(MemorySessionStorage::new()));
        store.clear().unwrap();
    }
}
