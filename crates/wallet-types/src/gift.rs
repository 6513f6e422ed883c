//! Virtual gift catalog and history records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A gift that can be sent from the gift center.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gift {
    pub id: String,
    pub name: String,
    /// Icon reference for the frontend (font-awesome class in the web app).
    pub icon: String,
    /// Price in coins.
    pub price: u64,
}

impl Gift {
    /// The built-in catalog. Gifts are not served by the backend; the
    /// catalog ships with the client.
    #[must_use]
    pub fn catalog() -> Vec<Gift> {
        fn gift(id: &str, name: &str, icon: &str, price: u64) -> Gift {
            Gift {
                id: id.to_string(),
                name: name.to_string(),
                icon: icon.to_string(),
                price,
            }
        }
        vec![
            gift("heart", "Heart", "fas fa-heart", 10),
            gift("rose", "Rose", "fas fa-rose", 50),
            gift("star", "Star", "fas fa-star", 100),
            gift("rocket", "Rocket", "fas fa-rocket", 200),
            gift("diamond", "Diamond", "far fa-gem", 500),
            gift("crown", "Crown", "fas fa-crown", 1000),
        ]
    }
}

/// Whether a recorded gift was sent or received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GiftDirection {
    Sent,
    Received,
}

/// One entry in the gift history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftRecord {
    pub direction: GiftDirection,
    pub gift_name: String,
    /// Handle of the counterparty (`@jane_doe` style).
    pub counterparty: String,
    pub value: u64,
    pub at: DateTime<Utc>,
}
