//! The application core.

use crate::config::AppConfig;
use crate::core::error::AppError;
use crate::core::intent::Intent;
use crate::identity::{FsSessionStorage, IdentityStore, SessionStorage};
use crate::observer::StateObserver;
use crate::views::notifications::Toast;
use crate::views::ViewState;
use crate::workflows;
use parking_lot::Mutex;
use std::sync::Arc;
use wallet_client::{RestClient, SocialWalletApi};

/// Owns the application state and the handles the workflows need.
///
/// State lives behind a sync lock that is never held across an await:
/// workflows read what they need, issue their request, then apply the
/// response. Independent actions may have requests in flight at once, and
/// the last response to resolve wins.
pub struct AppCore {
    config: AppConfig,
    api: Arc<dyn SocialWalletApi>,
    identity: IdentityStore,
    state: Mutex<ViewState>,
    observers: Mutex<Vec<Arc<dyn StateObserver>>>,
}

impl AppCore {
    /// Production core: REST client against the configured backend, session
    /// record on disk.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let api = Arc::new(RestClient::new(config.api_base_url.clone()));
        let storage = Box::new(FsSessionStorage::new(config.storage_dir.clone()));
        Self::with_parts(config, api, storage)
    }

    /// Core with injected backend and storage, for tests and embedders.
    #[must_use]
    pub fn with_parts(
        config: AppConfig,
        api: Arc<dyn SocialWalletApi>,
        storage: Box<dyn SessionStorage>,
    ) -> Self {
        Self {
            config,
            api,
            identity: IdentityStore::new(storage),
            state: Mutex::new(ViewState::default()),
            observers: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub(crate) fn api(&self) -> &dyn SocialWalletApi {
        self.api.as_ref()
    }

    pub(crate) fn identity(&self) -> &IdentityStore {
        &self.identity
    }

    /// Snapshot of the current state.
    #[must_use]
    pub fn snapshot(&self) -> ViewState {
        self.state.lock().clone()
    }

    /// Register an observer; it is called after every mutation.
    pub fn register_observer(&self, observer: Arc<dyn StateObserver>) {
        self.observers.lock().push(observer);
    }

    /// Read from the state without mutating it.
    pub(crate) fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        f(&self.state.lock())
    }

    /// Apply a mutation, bump the revision, and notify observers with the
    /// resulting snapshot. The lock is released before observers run.
    pub(crate) fn mutate<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        let (result, snapshot) = {
            let mut state = self.state.lock();
            let revision = state.revision;
            let result = f(&mut state);
            state.revision = revision + 1;
            (result, state.clone())
        };
        self.notify(&snapshot);
        result
    }

    fn notify(&self, snapshot: &ViewState) {
        let observers: Vec<Arc<dyn StateObserver>> = self.observers.lock().clone();
        for observer in observers {
            observer.state_changed(snapshot);
        }
    }

    /// Queue a toast.
    pub fn push_toast(&self, toast: Toast) {
        self.mutate(|state| state.notifications.push(toast));
    }

    /// Dismiss a toast by id.
    pub fn dismiss_toast(&self, toast_id: &str) {
        self.mutate(|state| state.notifications.dismiss(toast_id));
    }

    /// Log a failure, surface it as a toast, and hand the error back.
    pub(crate) fn fail<T>(&self, message: String, err: AppError) -> Result<T, AppError> {
        tracing::error!(error = %err, category = %err.category(), "{message}");
        self.push_toast(Toast::new(message, err.category().toast_level()));
        Err(err)
    }

    /// Dispatch an intent to its workflow.
    pub async fn dispatch(&self, intent: Intent) -> Result<(), AppError> {
        match intent {
            Intent::Initialize => workflows::session::initialize(self).await,
            Intent::Login { email, password } => {
                workflows::session::login(self, &email, &password).await
            }
            Intent::Signup { form } => workflows::session::signup(self, form).await,
            Intent::GuestLogin => workflows::session::login_as_guest(self).await,
            Intent::Logout => workflows::session::logout(self),
            Intent::Navigate { screen } => workflows::navigation::navigate(self, screen).await,
            Intent::RefreshFeed => workflows::feed::refresh_feed(self).await,
            Intent::OpenComposer => {
                workflows::compose::open_composer(self);
                Ok(())
            }
            Intent::CloseComposer => {
                workflows::compose::close_composer(self);
                Ok(())
            }
            Intent::SetDraft { content } => {
                workflows::compose::set_draft(self, content);
                Ok(())
            }
            Intent::AttachMedia { url } => {
                workflows::compose::attach_media(self, url);
                Ok(())
            }
            Intent::ClearMedia => {
                workflows::compose::clear_media(self);
                Ok(())
            }
            Intent::SubmitPost => workflows::feed::submit_post(self).await,
            Intent::SubmitComment { post_id, content } => {
                workflows::feed::submit_comment(self, &post_id, &content).await
            }
            Intent::ToggleLike { post_id } => workflows::feed::toggle_like(self, &post_id).await,
            Intent::SharePost { post_id } => {
                workflows::feed::share_post(self, &post_id);
                Ok(())
            }
            Intent::ReportPost { post_id } => {
                workflows::feed::report_post(self, &post_id);
                Ok(())
            }
            Intent::LoadProfile => workflows::profile::load_profile(self).await,
            Intent::SaveProfile {
                display_name,
                bio,
                location,
                website,
            } => {
                workflows::profile::save_profile(self, display_name, bio, location, website).await
            }
            Intent::SendGift { gift_id, recipient } => {
                workflows::gifts::send_gift(self, &gift_id, &recipient)
            }
            Intent::AddMedia { url, caption, tags } => {
                workflows::media::add_media(self, &url, &caption, tags)
            }
            Intent::DismissToast { toast_id } => {
                self.dismiss_toast(&toast_id);
                Ok(())
            }
        }
    }
}
