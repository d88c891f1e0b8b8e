//! Session state for the signed-in browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` owns the durable copy (`token` + `user` keys) and applies
//! pure transitions to a [`SessionState`]. `SessionContext` wraps it in a
//! reactive signal provided through Leptos context, so the header, guards,
//! and pages all read the same user.
//!
//! ERROR HANDLING
//! ==============
//! A persisted user that no longer parses is treated as logged out: both keys
//! are removed and the problem is only logged. Nothing here returns an error
//! to UI code.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::routes;
use crate::util::storage::{BrowserStorage, KeyValueStore, StorageError};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Marker some serializers leave behind when persisting a missing value.
const UNDEFINED_MARKER: &str = "undefined";

/// Current user plus the rehydration flag.
///
/// `loading` starts `true` and is cleared exactly once by
/// [`SessionStore::rehydrate`]. `logged_out` is set by an explicit logout and
/// cleared by the next login; while it is set the logout redirect owns
/// navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub loading: bool,
    pub logged_out: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, loading: true, logged_out: false }
    }
}

impl SessionState {
    /// A session whose rehydration already finished.
    pub fn resolved(user: Option<User>) -> Self {
        Self { user, loading: false, logged_out: false }
    }

    /// True once rehydration finished and no user is signed in.
    pub fn is_anonymous(&self) -> bool {
        !self.loading && self.user.is_none()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("persisted user record is corrupt: {0}")]
    CorruptUser(#[from] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Durable session persistence over a [`KeyValueStore`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the persisted user.
    ///
    /// Returns `Ok(None)` when the token or user is missing, empty, or the
    /// `"undefined"` marker.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::CorruptUser`] when a user record is present but
    /// does not decode.
    pub fn load(&self) -> Result<Option<User>, SessionError> {
        let token = self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty());
        let raw_user = self
            .storage
            .get(USER_KEY)
            .filter(|u| !u.is_empty() && u != UNDEFINED_MARKER);
        let (Some(_), Some(raw_user)) = (token, raw_user) else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw_user)?))
    }

    /// Resolve the initial session from durable storage.
    ///
    /// Only the first call on a loading state has any effect.
    pub fn rehydrate(&self, state: &mut SessionState) {
        if !state.loading {
            return;
        }
        state.user = match self.load() {
            Ok(user) => user,
            Err(e) => {
                log::warn!("discarding persisted session: {e}");
                self.clear();
                None
            }
        };
        state.loading = false;
        log::debug!("session rehydrated (signed_in={})", state.user.is_some());
    }

    /// Persist `user` and `token` and make `user` the current session.
    pub fn login(&self, state: &mut SessionState, user: User, token: &str) {
        if let Err(e) = self.persist(&user, token) {
            log::error!("failed to persist session for {}: {e}", user.id);
        }
        log::debug!("session login (user={}, role={})", user.id, user.role);
        state.user = Some(user);
        state.loading = false;
        state.logged_out = false;
    }

    /// Erase the persisted session and clear the user.
    ///
    /// Returns the path the caller should navigate to next.
    pub fn logout(&self, state: &mut SessionState) -> String {
        self.clear();
        state.user = None;
        state.loading = false;
        state.logged_out = true;
        log::debug!("session logout");
        routes::logout_redirect()
    }

    fn persist(&self, user: &User, token: &str) -> Result<(), SessionError> {
        let raw_user = serde_json::to_string(user)?;
        self.storage.set(TOKEN_KEY, token)?;
        self.storage.set(USER_KEY, &raw_user)?;
        Ok(())
    }

    fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}

/// Reactive session handle shared through Leptos context.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
    store: SessionStore<BrowserStorage>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::default()),
            store: SessionStore::new(BrowserStorage),
        }
    }

    /// Underlying signal, for `Effect`s that react to session changes.
    pub fn state(&self) -> RwSignal<SessionState> {
        self.state
    }

    pub fn rehydrate(&self) {
        let store = self.store;
        self.state.update(|s| store.rehydrate(s));
    }

    pub fn login(&self, user: User, token: &str) {
        let store = self.store;
        self.state.update(|s| store.login(s, user, token));
    }

    /// Clear the session. The returned path is the post-logout route; the
    /// caller owns the navigation.
    pub fn logout(&self) -> String {
        let store = self.store;
        let mut redirect = String::new();
        self.state.update(|s| redirect = store.logout(s));
        redirect
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Current session handle. Panics outside a `SessionProvider`.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
