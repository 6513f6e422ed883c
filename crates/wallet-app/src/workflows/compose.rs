//! Composer state operations. All local; nothing here talks to the
//! backend.

use crate::core::AppCore;

pub fn open_composer(app: &AppCore) {
    app.mutate(|state| state.compose.is_open = true);
}

/// Close the composer, discarding the draft and any attachment.
pub fn close_composer(app: &AppCore) {
    app.mutate(|state| state.compose.reset());
}

pub fn set_draft(app: &AppCore, content: String) {
    app.mutate(|state| state.compose.draft = content);
}

pub fn attach_media(app: &AppCore, url: String) {
    app.mutate(|state| state.compose.media = Some(url));
}

pub fn clear_media(app: &AppCore) {
    app.mutate(|state| state.compose.media = None);
}
