//! Profile load and edit workflows.

use crate::core::{AppCore, AppError};
use crate::views::notifications::Toast;
use crate::views::{ActivityKind, ViewState};
use wallet_types::ProfileUpdate;

/// Fetch the signed-in user's profile into the state cache. A missing
/// session is not an error; the profile screen simply renders nothing.
pub async fn load_profile(app: &AppCore) -> Result<(), AppError> {
    let Some(user_id) = app.read(|state| state.session.as_ref().map(|u| u.id.clone())) else {
        return Ok(());
    };

    match app.api().get_profile(&user_id).await {
        Ok(profile) => {
            app.mutate(|state| state.profile = Some(profile));
            Ok(())
        }
        Err(err) => {
            let err = AppError::from(err);
            app.fail("Failed to load profile".to_string(), err)
        }
    }
}

/// Push edited profile fields to the backend, then mirror them into the
/// session user so every screen shows the new values immediately.
pub async fn save_profile(
    app: &AppCore,
    display_name: String,
    bio: String,
    location: String,
    website: String,
) -> Result<(), AppError> {
    let Some(user_id) = app.read(|state| state.session.as_ref().map(|u| u.id.clone())) else {
        return app.fail(
            "Failed to update profile: not signed in".to_string(),
            AppError::NoSession,
        );
    };

    let update = ProfileUpdate {
        user_id,
        display_name: display_name.clone(),
        bio: bio.clone(),
        location: location.clone(),
        website: website.clone(),
    };
    if let Err(err) = app.api().update_profile(&update).await {
        let err = AppError::from(err);
        return app.fail(format!("Failed to update profile: {err}"), err);
    }

    let updated = app.mutate(|state: &mut ViewState| {
        if let Some(user) = state.session.as_mut() {
            user.display_name = display_name.clone();
            user.bio = bio.clone();
            user.location = location.clone();
            user.website = website.clone();
        }
        state.activity.record(
            ActivityKind::Profile,
            "Updated profile",
            display_name.clone(),
            chrono::Utc::now(),
        );
        state.session.clone()
    });
    if let Some(user) = updated {
        // The session copy is the one restored at next start; keep it
        // current even though the backend already has the edit.
        if let Err(err) = app.identity().save(&user) {
            tracing::warn!(error = %err, "failed to persist updated session");
        }
    }

    app.push_toast(Toast::success("Profile updated successfully!"));
    let _ = load_profile(app).await;
    Ok(())
}
