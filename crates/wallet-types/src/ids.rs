//! Typed identifiers for backend entities.
//!
//! The backend hands out opaque string ids (`"usr_x1y2"`, `"guest_..."`,
//! post ids of similar shape). Newtypes keep user and post ids from being
//! swapped at call sites; serde is transparent so the wire shape stays a
//! plain JSON string.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an id received from the backend.
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            /// The raw string form.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self(raw)
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                Self(raw.to_string())
            }
        }
    };
}

string_id! {
    /// Identifier of a user or guest session.
    UserId
}

string_id! {
    /// Identifier of a post.
    PostId
}

impl UserId {
    /// Locally generated id for a fresh guest session.
    #[must_use]
    pub fn guest() -> Self {
        Self(format!("guest_{}", Uuid::new_v4().simple()))
    }

    /// Locally generated id for a simulated login session.
    #[must_use]
    pub fn local_user() -> Self {
        Self(format!("user_{}", Uuid::new_v4().simple()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = PostId::new("post_42");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"post_42\"");
        let back: PostId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn guest_ids_are_prefixed_and_unique() {
        let a = UserId::guest();
        let b = UserId::guest();
        assert!(a.as_str().starts_with("guest_"));
        assert_ne!(a, b);
    }
}
