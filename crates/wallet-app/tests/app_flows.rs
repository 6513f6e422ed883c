//! End-to-end workflow tests against a scripted backend.
//!
//! [`MockApi`] implements the backend trait with canned responses and a
//! call log, so every flow runs exactly as in production minus the wire.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use wallet_app::identity::{IdentityError, MemorySessionStorage, SessionStorage, SESSION_KEY};
use wallet_app::views::ActivityKind;
use wallet_app::{AppConfig, AppCore, Intent, Screen, StateObserver, ViewState};
use wallet_client::{ClientError, SocialWalletApi};
use wallet_types::{
    HealthStatus, NewComment, NewPost, NewUser, Post, PostAuthor, PostId, Profile, ProfileUpdate,
    User, UserId,
};

// =========================================================================
// Scripted backend
// =========================================================================

#[derive(Default)]
struct MockApi {
    calls: Mutex<Vec<String>>,
    health_status: Mutex<String>,
    posts: Mutex<Vec<Post>>,
    profile: Mutex<Profile>,
    fail_like: Mutex<bool>,
    fail_create_post: Mutex<bool>,
    /// Consumed by the next `toggle_like` call.
    like_delay: Mutex<Option<Duration>>,
}

impl MockApi {
    fn healthy() -> Arc<Self> {
        let api = Self::default();
        *api.health_status.lock() = "OK".to_string();
        Arc::new(api)
    }

    fn healthy_with_posts(posts: Vec<Post>) -> Arc<Self> {
        let api = Self::healthy();
        *api.posts.lock() = posts;
        api
    }

    fn log(&self, call: &str) {
        self.calls.lock().push(call.to_string());
    }

    fn count(&self, call: &str) -> usize {
        self.calls.lock().iter().filter(|c| *c == call).count()
    }
}

#[async_trait]
impl SocialWalletApi for MockApi {
    async fn health(&self) -> Result<HealthStatus, ClientError> {
        self.log("health");
        Ok(HealthStatus {
            status: self.health_status.lock().clone(),
        })
    }

    async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        self.log("list_users");
        Ok(Vec::new())
    }

    async fn create_user(&self, new_user: &NewUser) -> Result<User, ClientError> {
        self.log("create_user");
        Ok(User {
            id: UserId::new("usr_created"),
            username: new_user.username.clone(),
            display_name: new_user.display_name.clone(),
            email: new_user.email.clone(),
            bio: new_user.bio.clone(),
            location: new_user.location.clone(),
            website: new_user.website.clone(),
            profile_image: None,
            verified: false,
            join_date: Utc::now(),
        })
    }

    async fn get_profile(&self, _user_id: &UserId) -> Result<Profile, ClientError> {
        self.log("get_profile");
        Ok(self.profile.lock().clone())
    }

    async fn update_profile(&self, _update: &ProfileUpdate) -> Result<(), ClientError> {
        self.log("update_profile");
        Ok(())
    }

    async fn list_posts(&self) -> Result<Vec<Post>, ClientError> {
        self.log("list_posts");
        Ok(self.posts.lock().clone())
    }

    async fn create_post(&self, new_post: &NewPost) -> Result<Option<Post>, ClientError> {
        self.log("create_post");
        if *self.fail_create_post.lock() {
            return Err(ClientError::Rejected {
                status: 500,
                message: "Database error".to_string(),
            });
        }
        let post = Post {
            id: PostId::new(format!("p_{}", self.posts.lock().len() + 1)),
            author: PostAuthor {
                id: new_post.user_id.clone(),
                username: "you".to_string(),
                display_name: "You".to_string(),
            },
            content: new_post.content.clone(),
            media: new_post.media.clone(),
            hashtags: new_post.hashtags.clone(),
            likes: 0,
            shares: 0,
            comments: vec![],
            is_liked: false,
            created_at: Utc::now(),
        };
        self.posts.lock().insert(0, post.clone());
        Ok(Some(post))
    }

    async fn add_comment(
        &self,
        _post_id: &PostId,
        _comment: &NewComment,
    ) -> Result<(), ClientError> {
        self.log("add_comment");
        Ok(())
    }

    async fn toggle_like(&self, post_id: &PostId, _user_id: &UserId) -> Result<bool, ClientError> {
        self.log("toggle_like");
        let delay = self.like_delay.lock().take();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if *self.fail_like.lock() {
            return Err(ClientError::Rejected {
                status: 500,
                message: "Database error".to_string(),
            });
        }
        let mut posts = self.posts.lock();
        let post = posts
            .iter_mut()
            .find(|p| &p.id == post_id)
            .ok_or(ClientError::Malformed("liked"))?;
        if post.is_liked {
            post.likes -= 1;
        } else {
            post.likes += 1;
        }
        post.is_liked = !post.is_liked;
        Ok(post.is_liked)
    }
}

/// Storage handle the test keeps while the core owns a boxed clone.
struct SharedStorage(Arc<MemorySessionStorage>);

impl SessionStorage for SharedStorage {
    fn read(&self, key: &str) -> Result<Option<String>, IdentityError> {
        self.0.read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), IdentityError> {
        self.0.write(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), IdentityError> {
        self.0.remove(key)
    }
}

fn core_with(api: Arc<MockApi>, storage: &Arc<MemorySessionStorage>) -> AppCore {
    AppCore::with_parts(
        AppConfig::with_base_url("http://backend.test"),
        api,
        Box::new(SharedStorage(Arc::clone(storage))),
    )
}

fn sample_post(id: &str, content: &str, likes: u64, is_liked: bool) -> Post {
    Post {
        id: PostId::new(id),
        author: PostAuthor {
            id: UserId::new("usr_ada"),
            username: "ada".to_string(),
            display_name: "Ada".to_string(),
        },
        content: content.to_string(),
        media: None,
        hashtags: vec![],
        likes,
        shares: 0,
        comments: vec![],
        is_liked,
        created_at: Utc::now(),
    }
}

// =========================================================================
// Startup
// =========================================================================

#[tokio::test]
async fn failed_health_probe_lands_on_auth_with_a_toast() {
    let api = Arc::new(MockApi::default());
    *api.health_status.lock() = "degraded".to_string();
    let storage = Arc::new(MemorySessionStorage::new());
    let core = core_with(Arc::clone(&api), &storage);

    core.dispatch(Intent::Initialize).await.unwrap();

    let state = core.snapshot();
    assert_eq!(state.screen, Screen::Auth);
    assert!(state.session.is_none());
    assert!(state
        .notifications
        .contains_message("Failed to connect to Social Wallet API"));
    // No data loads happen against an unreachable backend.
    assert_eq!(api.count("list_posts"), 0);
}

#[tokio::test]
async fn persisted_session_is_restored_into_the_feed() {
    let user = User::from_email("ada@example.com", Utc::now());
    let storage = Arc::new(MemorySessionStorage::new());
    storage.insert_raw(SESSION_KEY, &serde_json::to_string(&user).unwrap());
    let api = MockApi::healthy_with_posts(vec![sample_post("p1", "hello", 2, false)]);
    let core = core_with(Arc::clone(&api), &storage);

    core.dispatch(Intent::Initialize).await.unwrap();

    let state = core.snapshot();
    assert_eq!(state.screen, Screen::Feed);
    assert_eq!(state.session.as_ref().map(|u| u.id.clone()), Some(user.id));
    assert_eq!(state.feed.posts().len(), 1);
}

#[tokio::test]
async fn corrupt_session_record_is_cleared_and_reported() {
    let storage = Arc::new(MemorySessionStorage::new());
    storage.insert_raw(SESSION_KEY, "not json{");
    let core = core_with(MockApi::healthy(), &storage);

    core.dispatch(Intent::Initialize).await.unwrap();

    let state = core.snapshot();
    assert_eq!(state.screen, Screen::Auth);
    assert!(state
        .notifications
        .contains_message("Stored session could not be read"));
    assert_eq!(storage.read(SESSION_KEY).unwrap(), None);
}

// =========================================================================
// Session
// =========================================================================

#[tokio::test]
async fn guest_login_enters_the_feed_and_persists() {
    let storage = Arc::new(MemorySessionStorage::new());
    let core = core_with(MockApi::healthy(), &storage);

    core.dispatch(Intent::GuestLogin).await.unwrap();

    let state = core.snapshot();
    assert_eq!(state.screen, Screen::Feed);
    assert_eq!(
        state.session.as_ref().map(|u| u.username.as_str()),
        Some("guest")
    );
    assert!(state.notifications.contains_message("Welcome, Guest!"));
    assert!(storage.read(SESSION_KEY).unwrap().is_some());
}

#[tokio::test]
async fn login_requires_an_email() {
    let storage = Arc::new(MemorySessionStorage::new());
    let core = core_with(MockApi::healthy(), &storage);

    let result = core
        .dispatch(Intent::Login {
            email: "   ".to_string(),
            password: "pw".to_string(),
        })
        .await;

    assert!(result.is_err());
    let state = core.snapshot();
    assert_eq!(state.screen, Screen::Auth);
    assert!(state
        .notifications
        .contains_message("Login failed: email is required"));
}

#[tokio::test]
async fn signup_starts_a_session_with_the_created_record() {
    let storage = Arc::new(MemorySessionStorage::new());
    let api = MockApi::healthy();
    let core = core_with(Arc::clone(&api), &storage);

    core.dispatch(Intent::Signup {
        form: NewUser {
            display_name: "Ada Lovelace".to_string(),
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            ..NewUser::default()
        },
    })
    .await
    .unwrap();

    let state = core.snapshot();
    assert_eq!(state.screen, Screen::Feed);
    assert_eq!(
        state.session.as_ref().map(|u| u.display_name.as_str()),
        Some("Ada Lovelace")
    );
    assert!(state
        .notifications
        .contains_message("Account created successfully!"));
    assert_eq!(api.count("create_user"), 1);
}

#[tokio::test]
async fn logout_clears_the_record_and_the_next_start_needs_auth() {
    let storage = Arc::new(MemorySessionStorage::new());
    let core = core_with(MockApi::healthy(), &storage);
    core.dispatch(Intent::GuestLogin).await.unwrap();

    core.dispatch(Intent::Logout).await.unwrap();

    let state = core.snapshot();
    assert_eq!(state.screen, Screen::Auth);
    assert!(state.session.is_none());
    assert!(state.notifications.contains_message("Logged out successfully"));
    assert_eq!(storage.read(SESSION_KEY).unwrap(), None);

    // A fresh core over the same storage starts unauthenticated.
    let next = core_with(MockApi::healthy(), &storage);
    next.dispatch(Intent::Initialize).await.unwrap();
    assert_eq!(next.snapshot().screen, Screen::Auth);
}

// =========================================================================
// Posting
// =========================================================================

#[tokio::test]
async fn submitting_a_post_publishes_and_refetches_once() {
    let storage = Arc::new(MemorySessionStorage::new());
    let api = MockApi::healthy();
    let core = core_with(Arc::clone(&api), &storage);
    core.dispatch(Intent::GuestLogin).await.unwrap();

    core.dispatch(Intent::OpenComposer).await.unwrap();
    core.dispatch(Intent::SetDraft {
        content: "Hello #rust world".to_string(),
    })
    .await
    .unwrap();

    let fetches_before = api.count("list_posts");
    core.dispatch(Intent::SubmitPost).await.unwrap();

    assert_eq!(api.count("create_post"), 1);
    assert_eq!(api.count("list_posts"), fetches_before + 1);

    let state = core.snapshot();
    assert!(!state.compose.is_open);
    assert!(state.compose.draft.is_empty());
    assert!(state
        .notifications
        .contains_message("Post published successfully!"));
    // The refetched feed carries the new post with its extracted hashtag.
    assert_eq!(state.feed.posts()[0].hashtags, vec!["rust"]);
}

#[tokio::test]
async fn empty_post_is_rejected_without_a_request() {
    let storage = Arc::new(MemorySessionStorage::new());
    let api = MockApi::healthy();
    let core = core_with(Arc::clone(&api), &storage);
    core.dispatch(Intent::GuestLogin).await.unwrap();

    let result = core.dispatch(Intent::SubmitPost).await;

    assert!(result.is_err());
    assert_eq!(api.count("create_post"), 0);
    assert!(core
        .snapshot()
        .notifications
        .contains_message("Please add some content or media"));
}

#[tokio::test]
async fn over_limit_post_is_rejected_without_a_request() {
    let storage = Arc::new(MemorySessionStorage::new());
    let api = MockApi::healthy();
    let core = core_with(Arc::clone(&api), &storage);
    core.dispatch(Intent::GuestLogin).await.unwrap();

    core.dispatch(Intent::SetDraft {
        content: "x".repeat(281),
    })
    .await
    .unwrap();
    let result = core.dispatch(Intent::SubmitPost).await;

    assert!(result.is_err());
    assert_eq!(api.count("create_post"), 0);
    assert!(core
        .snapshot()
        .notifications
        .contains_message("Post is too long (280 character limit)"));
}

// =========================================================================
// Likes
// =========================================================================

#[tokio::test]
async fn like_toggle_applies_optimistically_and_reconciles() {
    let storage = Arc::new(MemorySessionStorage::new());
    let api = MockApi::healthy_with_posts(vec![sample_post("p1", "hello", 4, false)]);
    let core = core_with(Arc::clone(&api), &storage);
    core.dispatch(Intent::GuestLogin).await.unwrap();

    core.dispatch(Intent::ToggleLike {
        post_id: PostId::new("p1"),
    })
    .await
    .unwrap();

    let state = core.snapshot();
    let post = state.feed.post(&PostId::new("p1")).unwrap();
    assert!(post.is_liked);
    assert_eq!(post.likes, 5);
    assert_eq!(api.count("toggle_like"), 1);
}

#[tokio::test]
async fn failed_like_toggle_rolls_back() {
    let storage = Arc::new(MemorySessionStorage::new());
    let api = MockApi::healthy_with_posts(vec![sample_post("p1", "hello", 4, false)]);
    let core = core_with(Arc::clone(&api), &storage);
    core.dispatch(Intent::GuestLogin).await.unwrap();
    *api.fail_like.lock() = true;

    let result = core
        .dispatch(Intent::ToggleLike {
            post_id: PostId::new("p1"),
        })
        .await;

    assert!(result.is_err());
    let state = core.snapshot();
    let post = state.feed.post(&PostId::new("p1")).unwrap();
    assert!(!post.is_liked);
    assert_eq!(post.likes, 4);
    assert!(state.notifications.has_error());
}

#[tokio::test]
async fn overlapping_like_toggles_settle_on_the_backend_state() {
    let storage = Arc::new(MemorySessionStorage::new());
    let api = MockApi::healthy_with_posts(vec![sample_post("p1", "hello", 4, false)]);
    let core = core_with(Arc::clone(&api), &storage);
    core.dispatch(Intent::GuestLogin).await.unwrap();

    // The first toggle's request stalls; the second completes while it is
    // in flight, so the stalled toggle's refetch resolves last.
    *api.like_delay.lock() = Some(Duration::from_millis(50));
    let first = core.dispatch(Intent::ToggleLike {
        post_id: PostId::new("p1"),
    });
    let second = core.dispatch(Intent::ToggleLike {
        post_id: PostId::new("p1"),
    });
    let (a, b) = tokio::join!(first, second);
    a.unwrap();
    b.unwrap();

    // Two toggles cancel out on the backend; the cache agrees with it.
    let state = core.snapshot();
    let post = state.feed.post(&PostId::new("p1")).unwrap();
    assert!(!post.is_liked);
    assert_eq!(post.likes, 4);
    assert_eq!(api.count("toggle_like"), 2);
}

#[tokio::test]
async fn commenting_refetches_the_feed() {
    let storage = Arc::new(MemorySessionStorage::new());
    let api = MockApi::healthy_with_posts(vec![sample_post("p1", "hello", 0, false)]);
    let core = core_with(Arc::clone(&api), &storage);
    core.dispatch(Intent::GuestLogin).await.unwrap();

    let fetches_before = api.count("list_posts");
    core.dispatch(Intent::SubmitComment {
        post_id: PostId::new("p1"),
        content: "nice".to_string(),
    })
    .await
    .unwrap();

    assert_eq!(api.count("add_comment"), 1);
    assert_eq!(api.count("list_posts"), fetches_before + 1);
    assert!(core.snapshot().notifications.contains_message("Comment added!"));
}

// =========================================================================
// Profile
// =========================================================================

#[tokio::test]
async fn saving_the_profile_updates_session_and_storage() {
    let storage = Arc::new(MemorySessionStorage::new());
    let api = MockApi::healthy();
    let core = core_with(Arc::clone(&api), &storage);
    core.dispatch(Intent::GuestLogin).await.unwrap();

    core.dispatch(Intent::SaveProfile {
        display_name: "Ada Lovelace".to_string(),
        bio: "Analyst".to_string(),
        location: "London".to_string(),
        website: "https://example.com".to_string(),
    })
    .await
    .unwrap();

    assert_eq!(api.count("update_profile"), 1);
    let state = core.snapshot();
    let session = state.session.as_ref().unwrap();
    assert_eq!(session.display_name, "Ada Lovelace");
    assert_eq!(session.location, "London");
    assert!(state
        .notifications
        .contains_message("Profile updated successfully!"));

    let persisted: User =
        serde_json::from_str(&storage.read(SESSION_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(persisted.display_name, "Ada Lovelace");
}

// =========================================================================
// Wallet screens
// =========================================================================

#[tokio::test]
async fn sending_a_gift_deducts_and_records() {
    let storage = Arc::new(MemorySessionStorage::new());
    let core = core_with(MockApi::healthy(), &storage);

    core.dispatch(Intent::SendGift {
        gift_id: "rose".to_string(),
        recipient: "@ada".to_string(),
    })
    .await
    .unwrap();

    let state = core.snapshot();
    assert_eq!(state.gifts.balance, 1200);
    assert_eq!(state.gifts.history[0].gift_name, "Rose");
    assert_eq!(state.gifts.history[0].counterparty, "@ada");
    assert!(state.notifications.contains_message("Rose sent successfully!"));
}

#[tokio::test]
async fn insufficient_balance_leaves_the_wallet_untouched() {
    let storage = Arc::new(MemorySessionStorage::new());
    let core = core_with(MockApi::healthy(), &storage);

    core.dispatch(Intent::SendGift {
        gift_id: "crown".to_string(),
        recipient: "@ada".to_string(),
    })
    .await
    .unwrap();
    let result = core
        .dispatch(Intent::SendGift {
            gift_id: "crown".to_string(),
            recipient: "@ada".to_string(),
        })
        .await;

    assert!(result.is_err());
    let state = core.snapshot();
    assert_eq!(state.gifts.balance, 250);
    assert_eq!(state.gifts.history.len(), 1);
    assert!(state
        .notifications
        .contains_message("Insufficient balance! Earn more coins by being active."));
}

#[tokio::test]
async fn adding_media_populates_the_library_and_activity() {
    let storage = Arc::new(MemorySessionStorage::new());
    let core = core_with(MockApi::healthy(), &storage);

    core.dispatch(Intent::AddMedia {
        url: "https://example.com/cat.png".to_string(),
        caption: "My cat".to_string(),
        tags: vec!["pets".to_string()],
    })
    .await
    .unwrap();

    let state = core.snapshot();
    assert_eq!(state.media.items.len(), 1);
    assert_eq!(state.media.items[0].caption, "My cat");
    assert_eq!(state.activity.entries()[0].kind, ActivityKind::Upload);
}

// =========================================================================
// Observers
// =========================================================================

struct CountingObserver {
    seen: Mutex<Vec<u64>>,
}

impl StateObserver for CountingObserver {
    fn state_changed(&self, state: &ViewState) {
        self.seen.lock().push(state.revision);
    }
}

#[tokio::test]
async fn observers_see_monotonic_revisions() {
    let storage = Arc::new(MemorySessionStorage::new());
    let core = core_with(MockApi::healthy(), &storage);
    let observer = Arc::new(CountingObserver {
        seen: Mutex::new(Vec::new()),
    });
    core.register_observer(Arc::clone(&observer) as Arc<dyn StateObserver>);

    core.dispatch(Intent::GuestLogin).await.unwrap();
    core.dispatch(Intent::Navigate {
        screen: Screen::Dashboard,
    })
    .await
    .unwrap();

    let seen = observer.seen.lock();
    assert!(seen.len() >= 2);
    assert!(seen.windows(2).all(|w| w[0] < w[1]));
}
