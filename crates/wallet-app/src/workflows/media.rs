//! Media library uploads. The library is session-local; nothing is sent to
//! the backend.

use crate::core::{AppCore, AppError};
use crate::views::notifications::Toast;
use crate::views::ActivityKind;
use chrono::Utc;
use wallet_types::MediaItem;

/// Add an item to the media library and the activity log.
pub fn add_media(
    app: &AppCore,
    url: &str,
    caption: &str,
    tags: Vec<String>,
) -> Result<(), AppError> {
    let url = url.trim();
    if url.is_empty() {
        return app.fail(
            "Please select a file to upload".to_string(),
            AppError::Input("media url is required".to_string()),
        );
    }

    let now = Utc::now();
    let item = MediaItem::new(url, caption.trim(), tags, now);
    app.mutate(|state| {
        state.activity.record(
            ActivityKind::Upload,
            "Uploaded new media",
            item.caption.clone(),
            now,
        );
        state.media.items.insert(0, item);
    });
    app.push_toast(Toast::success("Media uploaded successfully!"));
    Ok(())
}
