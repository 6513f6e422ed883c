//! Composer view-model and the post length rule.

use crate::views::state::ViewState;
use serde::Serialize;

/// Maximum post length in characters.
pub const MAX_POST_CHARS: usize = 280;

/// Character count at which the counter turns into a warning.
pub const WARN_POST_CHARS: usize = 250;

/// Projection of the post composer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComposeView {
    pub is_open: bool,
    pub content: String,
    pub char_count: usize,
    /// Characters left before the ceiling; zero once over it.
    pub remaining: usize,
    pub near_limit: bool,
    pub over_limit: bool,
    pub has_media: bool,
}

/// Project the composer state, including the character counter.
#[must_use]
pub fn compose_view(state: &ViewState) -> ComposeView {
    let char_count = state.compose.draft.chars().count();
    ComposeView {
        is_open: state.compose.is_open,
        content: state.compose.draft.clone(),
        char_count,
        remaining: MAX_POST_CHARS.saturating_sub(char_count),
        near_limit: char_count > WARN_POST_CHARS,
        over_limit: char_count > MAX_POST_CHARS,
        has_media: state.compose.media.is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_tracks_characters_not_bytes() {
        let mut state = ViewState::default();
        state.compose.draft = "héllo".to_string();
        let view = compose_view(&state);
        assert_eq!(view.char_count, 5);
        assert_eq!(view.remaining, 275);
        assert!(!view.near_limit);
    }

    #[test]
    fn limit_flags_flip_at_the_thresholds() {
        let mut state = ViewState::default();
        state.compose.draft = "x".repeat(260);
        let view = compose_view(&state);
        assert!(view.near_limit);
        assert!(!view.over_limit);

        state.compose.draft = "x".repeat(281);
        let view = compose_view(&state);
        assert!(view.over_limit);
        assert_eq!(view.remaining, 0);
    }
}
