use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use super::notifier::{Notice, Notifier};
use super::state::{Session, UserProfile};
use crate::constants::{
    LOGIN_NOT_SAVED_MESSAGE, LOGIN_SUCCESS_MESSAGE, LOGOUT_NOT_SAVED_MESSAGE,
    LOGOUT_SUCCESS_MESSAGE, USER_INFO_KEY,
};
use crate::storage::KeyValueStore;
use crate::utils::Result;

/// How the shared `loading` flag is driven
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadingMode {
    /// Plain boolean. Each operation sets it on and off, so two overlapping
    /// operations can mask each other: the first to finish clears the flag
    /// while the second is still running.
    #[default]
    Shared,
    /// Counts in-flight operations; the flag stays on until the last one
    /// finishes. Deviates from the plain boolean behavior.
    Counted,
}

#[derive(Debug, Default)]
struct LoadCounter {
    in_flight: usize,
    manual: bool,
}

struct Inner {
    state: watch::Sender<Session>,
    storage: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn Notifier>,
    mode: LoadingMode,
    counter: Mutex<LoadCounter>,
}

/// Single authority for the logged-in user and the shared loading flag
///
/// Cheap to clone; every clone is a handle to the same session. Operations are
/// not serialized against each other: a `login` racing a `logout` ends with
/// whichever wrote last, both in memory and in storage.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl SessionStore {
    /// Create an empty (logged out, idle) session over `storage`
    pub fn new(storage: Arc<dyn KeyValueStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self::with_loading_mode(storage, notifier, LoadingMode::default())
    }

    pub fn with_loading_mode(
        storage: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn Notifier>,
        mode: LoadingMode,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: watch::Sender::new(Session::default()),
                storage,
                notifier,
                mode,
                counter: Mutex::new(LoadCounter::default()),
            }),
        }
    }

    /// Hydrate the session from storage at process start
    ///
    /// A missing, unreadable or malformed record leaves the user logged out.
    /// Those cases are logged and never returned as errors.
    pub async fn restore(&self) -> Option<UserProfile> {
        let _loading = LoadingGuard::acquire(self);

        let stored = match self.inner.storage.get_item(USER_INFO_KEY).await {
            Ok(Some(json)) => json,
            Ok(None) => {
                debug!("No stored session found");
                return None;
            }
            Err(e) => {
                warn!(error = %e, "Failed to read stored session, starting logged out");
                return None;
            }
        };

        match UserProfile::from_json(&stored) {
            Ok(profile) => {
                info!(user_id = %profile.id, "Session restored");
                self.set_user(Some(profile.clone()));
                Some(profile)
            }
            Err(e) => {
                warn!(error = %e, "Stored session is malformed, starting logged out");
                None
            }
        }
    }

    /// Log `profile` in and persist it
    ///
    /// The in-memory user is set before persisting. If the write fails the
    /// session stays logged in for this process, an error notice is raised
    /// and the storage error is returned, since the login will not survive a
    /// restart.
    pub async fn login(&self, profile: UserProfile) -> Result<()> {
        let _loading = LoadingGuard::acquire(self);

        let user_id = profile.id.clone();
        let json = profile.to_json();
        self.set_user(Some(profile));

        let persisted = match json {
            Ok(json) => self.inner.storage.set_item(USER_INFO_KEY, &json).await,
            Err(e) => Err(e),
        };
        if let Err(e) = persisted {
            warn!(user_id = %user_id, error = %e, "Login not persisted");
            self.inner.notifier.notify(Notice::error(LOGIN_NOT_SAVED_MESSAGE));
            return Err(e);
        }

        info!(user_id = %user_id, "User logged in");
        self.inner.notifier.notify(Notice::success(LOGIN_SUCCESS_MESSAGE));
        Ok(())
    }

    /// Clear the user and delete the stored record. Safe to call when
    /// already logged out.
    ///
    /// A failed delete still clears the in-memory user, but raises an error
    /// notice and returns the storage error.
    pub async fn logout(&self) -> Result<()> {
        let _loading = LoadingGuard::acquire(self);

        self.set_user(None);
        if let Err(e) = self.inner.storage.remove_item(USER_INFO_KEY).await {
            warn!(error = %e, "Stored session not removed");
            self.inner.notifier.notify(Notice::error(LOGOUT_NOT_SAVED_MESSAGE));
            return Err(e);
        }

        info!("User logged out");
        self.inner.notifier.notify(Notice::success(LOGOUT_SUCCESS_MESSAGE));
        Ok(())
    }

    /// Flip the shared loading flag
    ///
    /// For screens running their own long operations. Every call must be
    /// paired with exactly one matching call; this is a flip, not a counter.
    pub fn toggle_loading(&self) {
        match self.inner.mode {
            LoadingMode::Shared => {
                self.inner.state.send_modify(|s| s.loading = !s.loading);
            }
            LoadingMode::Counted => {
                let mut counter = self.inner.counter.lock();
                counter.manual = !counter.manual;
                self.publish_counted(&counter);
            }
        }
    }

    /// Copy of the current session
    pub fn snapshot(&self) -> Session {
        self.inner.state.borrow().clone()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.inner.state.borrow().user.clone()
    }

    /// Bearer token of the logged-in user
    pub fn token(&self) -> Option<String> {
        self.inner.state.borrow().token().map(str::to_string)
    }

    pub fn is_logged_in(&self) -> bool {
        self.inner.state.borrow().is_logged_in()
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state.borrow().loading
    }

    pub fn loading_mode(&self) -> LoadingMode {
        self.inner.mode
    }

    /// Watch every change to the session
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.inner.state.subscribe()
    }

    fn set_user(&self, user: Option<UserProfile>) {
        self.inner.state.send_if_modified(|s| {
            if s.user == user {
                return false;
            }
            s.user = user;
            true
        });
    }

    fn begin_loading(&self) {
        match self.inner.mode {
            LoadingMode::Shared => self.set_loading(true),
            LoadingMode::Counted => {
                let mut counter = self.inner.counter.lock();
                counter.in_flight += 1;
                self.publish_counted(&counter);
            }
        }
    }

    fn end_loading(&self) {
        match self.inner.mode {
            LoadingMode::Shared => self.set_loading(false),
            LoadingMode::Counted => {
                let mut counter = self.inner.counter.lock();
                counter.in_flight = counter.in_flight.saturating_sub(1);
                self.publish_counted(&counter);
            }
        }
    }

    fn publish_counted(&self, counter: &LoadCounter) {
        self.set_loading(counter.in_flight > 0 || counter.manual);
    }

    fn set_loading(&self, loading: bool) {
        self.inner.state.send_if_modified(|s| {
            let changed = s.loading != loading;
            s.loading = loading;
            changed
        });
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("session", &*self.inner.state.borrow())
            .field("mode", &self.inner.mode)
            .finish()
    }
}

/// Holds the loading flag on for its lifetime. Dropping it, on any exit path
/// including an early `?` return or a cancelled future, turns the flag back off.
struct LoadingGuard<'a> {
    store: &'a SessionStore,
}

impl<'a> LoadingGuard<'a> {
    fn acquire(store: &'a SessionStore) -> Self {
        store.begin_loading();
        Self { store }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.store.end_loading();
    }
}
