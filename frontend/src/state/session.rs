//! Persistent session: the bearer token and the cached user profile.
//!
//! The store is created once by the app root and handed to the
//! [`ApiClient`](crate::api::ApiClient); nothing reads browser storage
//! behind its back.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{api::User, utils::storage as storage_utils};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write `{0}`")]
    Write(String),
    #[error("failed to serialize user profile: {0}")]
    Serialize(String),
}

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, looked up on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = storage_utils::local_storage().map_err(StorageError::Unavailable)?;
        storage
            .get_item(key)
            .map_err(|_| StorageError::Unavailable(format!("cannot read `{}`", key)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = storage_utils::local_storage().map_err(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let storage = storage_utils::local_storage().map_err(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|_| StorageError::Write(key.to_string()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: User,
}

#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl Default for SessionStore {
    #[cfg(target_arch = "wasm32")]
    fn default() -> Self {
        Self::browser()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn default() -> Self {
        Self::in_memory()
    }
}

impl SessionStore {
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        Self { storage }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStorage))
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::new()))
    }

    pub fn set(&self, token: &str, user: &User) -> Result<(), StorageError> {
        let user_json =
            serde_json::to_string(user).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.storage.set_item(TOKEN_KEY, token)?;
        self.storage.set_item(USER_KEY, &user_json)?;
        Ok(())
    }

    /// Cached profile, or `None` when there is no session or the stored JSON
    /// is unreadable.
    pub fn get(&self) -> Option<User> {
        let raw = self.storage.get_item(USER_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(err) => {
                warn!("Ignoring unreadable cached user profile: {}", err);
                None
            }
        }
    }

    pub fn token(&self) -> Option<String> {
        self.storage
            .get_item(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    pub fn session(&self) -> Option<Session> {
        Some(Session {
            token: self.token()?,
            user: self.get()?,
        })
    }

    pub fn clear(&self) {
        for key in [TOKEN_KEY, USER_KEY] {
            if let Err(err) = self.storage.remove_item(key) {
                warn!("Failed to clear session key: {}", err);
            }
        }
    }

    /// Presence check only; the server may still reject the token.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
