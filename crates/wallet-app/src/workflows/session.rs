//! Session workflows: startup, login, signup, guest entry, logout.

use crate::core::{AppCore, AppError, Screen};
use crate::views::notifications::Toast;
use crate::workflows::feed;
use chrono::Utc;
use wallet_types::{NewUser, User};

/// Probe the backend and restore any persisted session.
///
/// A failed or degraded health probe routes to the auth screen with a
/// toast and never into the main app. A corrupt persisted record is
/// cleared and likewise lands on the auth screen.
pub async fn initialize(app: &AppCore) -> Result<(), AppError> {
    tracing::info!("initializing social wallet client");

    let healthy = match app.api().health().await {
        Ok(status) => status.is_ok(),
        Err(err) => {
            tracing::warn!(error = %err, "health probe failed");
            false
        }
    };
    if !healthy {
        app.push_toast(Toast::error("Failed to connect to Social Wallet API"));
        app.mutate(|state| state.screen = Screen::Auth);
        return Ok(());
    }
    tracing::info!("api connection successful");

    match app.identity().load() {
        Ok(Some(user)) => {
            tracing::info!(user = %user.id, "restored persisted session");
            enter_main_app(app, user).await;
        }
        Ok(None) => {
            app.mutate(|state| state.screen = Screen::Auth);
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to restore session");
            // Drop the unreadable record so the next start is clean.
            if let Err(clear_err) = app.identity().clear() {
                tracing::warn!(error = %clear_err, "failed to clear corrupt session");
            }
            app.push_toast(Toast::error("Stored session could not be read"));
            app.mutate(|state| state.screen = Screen::Auth);
        }
    }
    Ok(())
}

/// Simulated login: the backend has no credential check, so the user
/// record is derived locally from the email.
pub async fn login(app: &AppCore, email: &str, _password: &str) -> Result<(), AppError> {
    let email = email.trim();
    if email.is_empty() {
        return app.fail(
            "Login failed: email is required".to_string(),
            AppError::Input("email is required".to_string()),
        );
    }
    let user = User::from_email(email, Utc::now());
    start_session(app, user, "Welcome back!", "Login failed").await
}

/// Create an account via the backend and start a session with the record
/// it returns.
pub async fn signup(app: &AppCore, form: NewUser) -> Result<(), AppError> {
    match app.api().create_user(&form).await {
        Ok(user) => {
            start_session(app, user, "Account created successfully!", "Signup failed").await
        }
        Err(err) => {
            let err = AppError::from(err);
            app.fail(format!("Signup failed: {err}"), err)
        }
    }
}

/// Enter as a local guest user.
pub async fn login_as_guest(app: &AppCore) -> Result<(), AppError> {
    let user = User::guest(Utc::now());
    start_session(app, user, "Welcome, Guest!", "Guest login failed").await
}

/// Clear the persisted identity and return to the auth screen. All
/// session-local state (feed cache, composer, gifts, media, activity) is
/// discarded; queued toasts survive.
pub fn logout(app: &AppCore) -> Result<(), AppError> {
    if let Err(err) = app.identity().clear() {
        let err = AppError::from(err);
        return app.fail(format!("Logout failed: {err}"), err);
    }
    app.mutate(|state| {
        let notifications = std::mem::take(&mut state.notifications);
        *state = crate::views::ViewState {
            notifications,
            ..Default::default()
        };
    });
    app.push_toast(Toast::success("Logged out successfully"));
    Ok(())
}

async fn start_session(
    app: &AppCore,
    user: User,
    greeting: &str,
    failure_context: &str,
) -> Result<(), AppError> {
    if let Err(err) = app.identity().save(&user) {
        let err = AppError::from(err);
        return app.fail(format!("{failure_context}: {err}"), err);
    }
    app.push_toast(Toast::success(greeting));
    enter_main_app(app, user).await;
    Ok(())
}

/// Switch to the feed and load initial data. Load failures are surfaced as
/// toasts but do not abort entry; the user lands on an empty feed.
async fn enter_main_app(app: &AppCore, user: User) {
    app.mutate(|state| {
        state.session = Some(user);
        state.screen = Screen::Feed;
    });

    if let Err(err) = feed::fetch_posts(app).await {
        tracing::error!(error = %err, "failed to load initial data");
        app.push_toast(Toast::error("Failed to load content"));
    }

    // Best-effort enrichment of the session user from the profile endpoint.
    let user_id = app.read(|state| state.session.as_ref().map(|u| u.id.clone()));
    if let Some(user_id) = user_id {
        match app.api().get_profile(&user_id).await {
            Ok(profile) => {
                let enriched = app.mutate(|state| {
                    if let Some(user) = state.session.as_mut() {
                        if !profile.display_name.is_empty() {
                            user.display_name = profile.display_name.clone();
                        }
                        if !profile.username.is_empty() {
                            user.username = profile.username.clone();
                        }
                        if !profile.bio.is_empty() {
                            user.bio = profile.bio.clone();
                        }
                    }
                    state.profile = Some(profile);
                    state.session.clone()
                });
                if let Some(user) = enriched {
                    if let Err(err) = app.identity().save(&user) {
                        tracing::warn!(error = %err, "failed to persist enriched session");
                    }
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "could not load full profile");
            }
        }
    }
}
