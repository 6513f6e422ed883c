//! Feed workflows: refetch, posting, comments, likes.

use crate::core::{AppCore, AppError};
use crate::views::notifications::Toast;
use crate::views::MAX_POST_CHARS;
use wallet_types::{extract_hashtags, NewComment, NewPost, PostId};

/// Fetch the feed and replace the cache. No toast; callers decide how loud
/// to be.
pub(crate) async fn fetch_posts(app: &AppCore) -> Result<(), AppError> {
    let posts = app.api().list_posts().await?;
    app.mutate(|state| state.feed.set_posts(posts));
    Ok(())
}

/// Refetch the feed, announcing the result.
pub async fn refresh_feed(app: &AppCore) -> Result<(), AppError> {
    match fetch_posts(app).await {
        Ok(()) => {
            app.push_toast(Toast::success("Feed refreshed"));
            Ok(())
        }
        Err(err) => app.fail("Failed to refresh feed".to_string(), err),
    }
}

/// Publish the composer draft.
///
/// Validation is local and issues no request when it fails: the post needs
/// content or media, and content stays within [`MAX_POST_CHARS`]. On
/// success the composer closes and the feed is refetched once; the created
/// post is never spliced in locally.
pub async fn submit_post(app: &AppCore) -> Result<(), AppError> {
    let (draft, media, user_id) = app.read(|state| {
        (
            state.compose.draft.trim().to_string(),
            state.compose.media.clone(),
            state.actor_id(),
        )
    });

    if draft.is_empty() && media.is_none() {
        return app.fail(
            "Please add some content or media".to_string(),
            AppError::Input("empty post".to_string()),
        );
    }
    if draft.chars().count() > MAX_POST_CHARS {
        return app.fail(
            format!("Post is too long ({MAX_POST_CHARS} character limit)"),
            AppError::Input("post over the character limit".to_string()),
        );
    }

    let new_post = NewPost {
        hashtags: extract_hashtags(&draft),
        content: draft,
        user_id,
        media,
    };
    if let Err(err) = app.api().create_post(&new_post).await {
        let err = AppError::from(err);
        return app.fail(format!("Failed to publish post: {err}"), err);
    }

    app.mutate(|state| state.compose.reset());
    app.push_toast(Toast::success("Post published successfully!"));
    // Refetch-for-consistency; a failure here doesn't undo the publish.
    let _ = refresh_feed(app).await;
    Ok(())
}

/// Comment on a post, then refetch.
pub async fn submit_comment(
    app: &AppCore,
    post_id: &PostId,
    content: &str,
) -> Result<(), AppError> {
    let content = content.trim();
    if content.is_empty() {
        return app.fail(
            "Please enter a comment".to_string(),
            AppError::Input("empty comment".to_string()),
        );
    }

    let comment = NewComment {
        content: content.to_string(),
        user_id: app.read(|state| state.actor_id()),
    };
    match app.api().add_comment(post_id, &comment).await {
        Ok(()) => {
            app.push_toast(Toast::success("Comment added!"));
            let _ = refresh_feed(app).await;
            Ok(())
        }
        Err(err) => {
            let err = AppError::from(err);
            app.fail(format!("Failed to add comment: {err}"), err)
        }
    }
}

/// Toggle a like with the two-phase optimistic protocol.
///
/// The liked flag and count are flipped tentatively before the request so
/// the UI never waits on the round trip. On success the full refetch
/// reconciles with the backend; on failure the tentative flip is rolled
/// back before the error toast, so no inconsistency outlives the call.
pub async fn toggle_like(app: &AppCore, post_id: &PostId) -> Result<(), AppError> {
    let user_id = app.read(|state| state.actor_id());

    let Some(prior) = app.mutate(|state| state.feed.apply_like_flip(post_id)) else {
        return app.fail(
            "Failed to update like: post not found".to_string(),
            AppError::UnknownPost(post_id.clone()),
        );
    };

    match app.api().toggle_like(post_id, &user_id).await {
        Ok(liked) => {
            tracing::debug!(post = %post_id, liked, "like toggled");
            let _ = fetch_posts(app).await;
            Ok(())
        }
        Err(err) => {
            app.mutate(|state| state.feed.revert_like_flip(post_id, prior));
            let err = AppError::from(err);
            app.fail(format!("Failed to update like: {err}"), err)
        }
    }
}

/// Produce a permalink for a post and acknowledge with a toast.
pub fn share_post(app: &AppCore, post_id: &PostId) -> String {
    let link = format!("{}/#post-{post_id}", app.config().api_base_url);
    app.push_toast(Toast::success("Post link copied to clipboard!"));
    link
}

/// Acknowledge a report. The backend has no moderation surface; the action
/// is local only.
pub fn report_post(app: &AppCore, post_id: &PostId) {
    tracing::info!(post = %post_id, "post reported");
    app.push_toast(Toast::success(
        "Post reported. Thank you for helping keep our community safe.",
    ));
}
