//! Persisted session: token, email and display name.
//!
//! DESIGN
//! ======
//! Storage is reached through the [`SessionStore`] trait so the auth flow can
//! run against [`MemoryStore`] in tests and [`BrowserStore`] (`localStorage`)
//! in the browser. Values are plain strings under fixed keys with no expiry.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

use crate::auth::AuthMode;
use crate::net::types::{AuthResponse, Credentials};

pub const TOKEN_KEY: &str = "token";
pub const EMAIL_KEY: &str = "email";
pub const AUTHOR_NAME_KEY: &str = "authorName";

/// Session storage failures.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("storage unavailable")]
    Unavailable,
    #[error("storage rejected write to {key}: {reason}")]
    Write { key: String, reason: String },
}

/// Key/value storage for session entries.
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    ///
    /// Returns an error if the backing storage is missing or refuses the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// # Errors
    ///
    /// Returns an error if the backing storage is missing or refuses the removal.
    fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Remove every session entry.
    ///
    /// # Errors
    ///
    /// Returns the first removal error.
    fn clear(&self) -> Result<(), StoreError> {
        for key in [TOKEN_KEY, EMAIL_KEY, AUTHOR_NAME_KEY] {
            self.remove(key)?;
        }
        Ok(())
    }
}

/// An authenticated session as persisted client-side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub email: String,
    pub display_name: String,
}

impl Session {
    /// Build the session for a successful auth response.
    ///
    /// Signup prefers the name typed into the form and falls back to the
    /// server's copy when the field was left empty. Signin always uses the
    /// server's name.
    pub fn from_response(mode: AuthMode, credentials: &Credentials, response: AuthResponse) -> Self {
        let server_name = response.user.name.unwrap_or_default();
        let display_name = match mode {
            AuthMode::SignUp if !credentials.name.is_empty() => credentials.name.clone(),
            AuthMode::SignUp | AuthMode::SignIn => server_name,
        };
        Self {
            token: response.jwt,
            email: response.user.email,
            display_name,
        }
    }

    /// Write all three entries. The token goes last so a partial write
    /// never looks like a signed-in session.
    ///
    /// # Errors
    ///
    /// Returns the first write error; earlier entries may already be stored.
    pub fn persist<S: SessionStore + ?Sized>(&self, store: &S) -> Result<(), StoreError> {
        store.set(EMAIL_KEY, &self.email)?;
        store.set(AUTHOR_NAME_KEY, &self.display_name)?;
        store.set(TOKEN_KEY, &self.token)
    }

    /// Read the stored session; `None` without a non-empty token.
    pub fn load<S: SessionStore + ?Sized>(store: &S) -> Option<Self> {
        let token = stored_token(store)?;
        Some(Self {
            token,
            email: store.get(EMAIL_KEY).unwrap_or_default(),
            display_name: store.get(AUTHOR_NAME_KEY).unwrap_or_default(),
        })
    }
}

/// The stored token, ignoring empty values.
pub fn stored_token<S: SessionStore + ?Sized>(store: &S) -> Option<String> {
    store.get(TOKEN_KEY).filter(|token| !token.is_empty())
}

/// In-memory store for tests and non-browser rendering.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// `window.localStorage`. Outside the browser build every read misses and
/// every write fails with [`StoreError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    let window = web_sys::window().ok_or(StoreError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) | Err(_) => Err(StoreError::Unavailable),
    }
}

impl SessionStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let Ok(storage) = local_storage() else {
                return None;
            };
            storage.get_item(key).unwrap_or_default()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(|e| StoreError::Write {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(key).map_err(|e| StoreError::Write {
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }
}
