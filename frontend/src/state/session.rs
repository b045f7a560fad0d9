use crate::{api::Role, utils::storage as storage_utils};
use leptos::*;
use std::{cell::RefCell, collections::HashMap, rc::Rc};

pub const TOKEN_KEY: &str = "token";
pub const ROLE_KEY: &str = "role";
pub const NAME_KEY: &str = "name";

pub const DEFAULT_NAME: &str = "User";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write `{0}`")]
    Write(String),
}

/// Flat string key-value storage the session lives in.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Drops every key, not only the session ones.
    fn clear(&self);
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

/// `window.localStorage`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStore;

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        storage_utils::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = storage_utils::local_storage()
            .map_err(|err| StorageError::Unavailable(err.to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|_| StorageError::Write(key.to_string()))
    }

    fn clear(&self) {
        match storage_utils::local_storage() {
            Ok(storage) => {
                if storage.clear().is_err() {
                    log::warn!("Failed to clear localStorage");
                }
            }
            Err(err) => log::warn!("Cannot clear session: {}", err),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub role: Role,
    pub name: String,
}

/// Identity of the signed-in user. Created once at startup and handed to the
/// API client and the component tree; `logout` tears it down.
#[derive(Clone)]
pub struct SessionContext {
    store: Rc<dyn KeyValueStore>,
}

impl SessionContext {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn browser() -> Self {
        Self::new(Rc::new(BrowserStore))
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStore::new()))
    }

    pub fn save(&self, token: &str, role: &str, name: &str) {
        for (key, value) in [(TOKEN_KEY, token), (ROLE_KEY, role), (NAME_KEY, name)] {
            if let Err(err) = self.store.set(key, value) {
                log::warn!("Session not persisted: {}", err);
            }
        }
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|token| !token.is_empty())
    }

    /// Stored role; EMPLOYEE when missing or unrecognised.
    pub fn role(&self) -> Role {
        match self.store.get(ROLE_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|err| {
                log::debug!("{}; treating session as EMPLOYEE", err);
                Role::Employee
            }),
            None => Role::Employee,
        }
    }

    pub fn name(&self) -> String {
        self.store
            .get(NAME_KEY)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| DEFAULT_NAME.to_string())
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }

    pub fn snapshot(&self) -> Session {
        Session {
            token: self.token(),
            role: self.role(),
            name: self.name(),
        }
    }

    pub fn logout(&self) {
        self.store.clear();
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(SessionContext::browser)
}
