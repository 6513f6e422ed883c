//! User and profile records.

use crate::ids::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The current user record.
///
/// This is the sole durable record on the client: the identity store
/// persists it wholesale under a single key and overwrites it on each save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub display_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub website: String,
    /// Avatar reference, if the backend supplies one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub verified: bool,
    pub join_date: DateTime<Utc>,
}

impl User {
    /// Fresh guest identity, local only.
    #[must_use]
    pub fn guest(now: DateTime<Utc>) -> Self {
        Self {
            id: UserId::guest(),
            username: "guest".to_string(),
            display_name: "Guest User".to_string(),
            email: "guest@example.com".to_string(),
            bio: "Exploring Social Wallet".to_string(),
            location: String::new(),
            website: String::new(),
            profile_image: None,
            verified: false,
            join_date: now,
        }
    }

    /// Simulated login identity derived from an email address.
    ///
    /// There is no real authentication; the handle is the mailbox part of
    /// the address, or the whole address if it carries no `@`.
    #[must_use]
    pub fn from_email(email: &str, now: DateTime<Utc>) -> Self {
        let handle = email.split('@').next().unwrap_or(email).to_string();
        Self {
            id: UserId::local_user(),
            username: handle.clone(),
            display_name: handle,
            email: email.to_string(),
            bio: "New user".to_string(),
            location: String::new(),
            website: String::new(),
            profile_image: None,
            verified: false,
            join_date: now,
        }
    }
}

/// Profile data returned by `GET /api/profile`.
///
/// A superset of the session user's display fields plus the counters shown
/// on the profile screen. Counters default to zero when the backend omits
/// them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub posts_count: u64,
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub following_count: u64,
}

/// Body of `POST /api/users`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub display_name: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub website: String,
}

/// Body of `PUT /api/profile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub user_id: UserId,
    pub display_name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub website: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_round_trips_with_camel_case_fields() {
        let user = User::from_email("ada@example.com", Utc::now());
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["displayName"], "ada");
        assert_eq!(json["username"], "ada");
        assert!(json.get("joinDate").is_some());
        let back: User = serde_json::from_value(json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn profile_counters_default_to_zero() {
        let profile: Profile =
            serde_json::from_str(r#"{"displayName":"Ada","username":"ada"}"#).unwrap();
        assert_eq!(profile.posts_count, 0);
        assert_eq!(profile.followers_count, 0);
    }
}
