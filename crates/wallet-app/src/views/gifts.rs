//! Gift center projection.

use crate::views::state::ViewState;
use crate::views::timefmt;
use chrono::{DateTime, Utc};
use serde::Serialize;
use wallet_types::{Gift, GiftDirection};

/// One gift history line.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftLine {
    /// "Received Diamond" / "Sent Rose".
    pub headline: String,
    /// "From @jane_doe" / "To @mike_smith".
    pub detail: String,
    pub value: u64,
    pub time_ago: String,
}

/// The gift center screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GiftsView {
    pub balance: u64,
    pub balance_label: String,
    pub catalog: Vec<Gift>,
    pub history: Vec<GiftLine>,
}

/// Project the gift center: balance, catalog, and history, newest first.
#[must_use]
pub fn gifts_view(state: &ViewState, now: DateTime<Utc>) -> GiftsView {
    let history = state
        .gifts
        .history
        .iter()
        .map(|record| {
            let (verb, preposition) = match record.direction {
                GiftDirection::Sent => ("Sent", "To"),
                GiftDirection::Received => ("Received", "From"),
            };
            GiftLine {
                headline: format!("{verb} {}", record.gift_name),
                detail: format!("{preposition} {}", record.counterparty),
                value: record.value,
                time_ago: timefmt::relative(now, record.at),
            }
        })
        .collect();

    GiftsView {
        balance: state.gifts.balance,
        balance_label: format!("{} coins", group_thousands(state.gifts.balance)),
        catalog: state.gifts.catalog.clone(),
        history,
    }
}

/// `1250` → `1,250`, as the balance widget displays it.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
