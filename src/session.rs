//! Session store: the single source of truth for "who is logged in".
//!
//! The identity survives page reloads by living in browser `localStorage`
//! under two keys: the opaque bearer token and the serialized identity.
//! Every mutation writes through immediately; there is no buffering.
//!
//! The store is explicit rather than ambient — pages and services receive
//! a [`SessionStore`] over a storage backend, which is `localStorage` in
//! the browser and an in-memory map in tests and native builds.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::HashMap;

use crate::net::auth;
use crate::net::error::ApiError;
use crate::net::types::{Credentials, Registration, Role, User};

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "authToken";
/// Storage key for the serialized identity.
pub const IDENTITY_KEY: &str = "user";

/// Key-value persistence behind the session store.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// In-memory storage for native builds and tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Browser `localStorage`. Missing storage (disabled by the user agent)
/// reads as empty and drops writes.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "hydrate")]
impl SessionStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&mut self, key: &str) {
        if let Some(storage) = Self::local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

/// What the route guard needs to know about the current session.
///
/// `role` is `None` both when nobody is logged in and when a token exists
/// but the stored identity is unreadable; the guard denies role-gated
/// routes in the latter case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionView {
    pub authenticated: bool,
    pub role: Option<Role>,
}

impl SessionView {
    pub const ANONYMOUS: SessionView = SessionView {
        authenticated: false,
        role: None,
    };
}

/// Session store over a storage backend. At most one identity at a time.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The stored bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    /// The stored token, or `NotAuthenticated` for endpoints that need one.
    pub fn authorized(&self) -> Result<String, ApiError> {
        self.token().ok_or(ApiError::NotAuthenticated)
    }

    /// True iff a token is present, regardless of the identity's state.
    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    /// The stored identity. Corrupt stored JSON reads as logged out
    /// rather than propagating an error.
    pub fn current_identity(&self) -> Option<User> {
        let json = self.storage.get(IDENTITY_KEY)?;
        serde_json::from_str(&json).ok()
    }

    /// Snapshot for guard evaluation.
    pub fn view(&self) -> SessionView {
        SessionView {
            authenticated: self.is_logged_in(),
            role: self.current_identity().map(|user| user.role),
        }
    }

    /// Store a freshly issued token and identity, replacing any previous
    /// session wholesale.
    pub fn establish(&mut self, token: &str, user: &User) {
        self.storage.set(TOKEN_KEY, token);
        self.store_identity(user);
    }

    /// Remove token and identity unconditionally. No backend call.
    pub fn logout(&mut self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(IDENTITY_KEY);
    }

    /// `POST /auth/login`, persisting the outcome on success.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<User, ApiError> {
        let outcome = auth::login(credentials).await?;
        self.establish(&outcome.token, &outcome.user);
        Ok(outcome.user)
    }

    /// `POST /auth/register`, persisting the outcome on success.
    pub async fn register(&mut self, registration: &Registration) -> Result<User, ApiError> {
        let outcome = auth::register(registration).await?;
        self.establish(&outcome.token, &outcome.user);
        Ok(outcome.user)
    }

    /// Re-fetch the authoritative profile for the stored token and
    /// overwrite the stored identity in place. Picks up server-side
    /// changes (role updates, name edits) without a re-login.
    pub async fn refresh_profile(&mut self) -> Result<User, ApiError> {
        let token = self.authorized()?;
        let user = auth::fetch_profile(&token).await?;
        self.store_identity(&user);
        Ok(user)
    }

    fn store_identity(&mut self, user: &User) {
        if let Ok(json) = serde_json::to_string(user) {
            self.storage.set(IDENTITY_KEY, &json);
        }
    }

    #[cfg(test)]
    fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}

/// Session store over the ambient browser storage.
///
/// Outside the browser the backing store is empty, so reads behave as
/// logged out and writes are discarded with the page.
pub fn browser_session() -> SessionStore<impl SessionStorage> {
    #[cfg(feature = "hydrate")]
    {
        SessionStore::new(BrowserStorage)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SessionStore::new(MemoryStorage::default())
    }
}

/// Guard snapshot of the persisted browser session.
pub fn browser_view() -> SessionView {
    browser_session().view()
}

/// The persisted identity, if readable.
pub fn browser_identity() -> Option<User> {
    browser_session().current_identity()
}
