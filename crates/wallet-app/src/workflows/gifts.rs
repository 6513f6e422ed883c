//! Virtual gift sending. Entirely client-side: the catalog, balance, and
//! history never touch the backend.

use crate::core::{AppCore, AppError};
use crate::views::notifications::Toast;
use crate::views::ActivityKind;
use chrono::Utc;
use wallet_types::{Gift, GiftDirection, GiftRecord};

/// Deduct a gift from the wallet and record it in the send history.
///
/// Balance and history are only touched once both checks pass, so a failed
/// send changes nothing.
pub fn send_gift(app: &AppCore, gift_id: &str, recipient: &str) -> Result<(), AppError> {
    let Some(gift) = Gift::catalog().into_iter().find(|g| g.id == gift_id) else {
        let err = AppError::UnknownGift(gift_id.to_string());
        return app.fail(format!("Failed to send gift: {err}"), err);
    };

    let balance = app.read(|state| state.gifts.balance);
    if balance < gift.price {
        return app.fail(
            "Insufficient balance! Earn more coins by being active.".to_string(),
            AppError::InsufficientBalance,
        );
    }

    let recipient = recipient.trim().to_string();
    let now = Utc::now();
    app.mutate(|state| {
        state.gifts.balance -= gift.price;
        state.gifts.history.insert(
            0,
            GiftRecord {
                direction: GiftDirection::Sent,
                gift_name: gift.name.clone(),
                counterparty: recipient.clone(),
                value: gift.price,
                at: now,
            },
        );
        state.activity.record(
            ActivityKind::Gift,
            format!("Sent {}", gift.name),
            format!("To {recipient}"),
            now,
        );
    });
    app.push_toast(Toast::success(format!("{} sent successfully!", gift.name)));
    Ok(())
}
