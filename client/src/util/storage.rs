//! Key-value persistence seam over `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme preference is the only persisted datum. The trait keeps the store
//! swappable so theme logic runs natively in tests against [`MemoryStore`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use super::browser::BrowserError;

/// String key-value store with fallible access.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, BrowserError>;
    fn set(&self, key: &str, value: &str) -> Result<(), BrowserError>;
}

/// Browser `localStorage`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

#[cfg(feature = "hydrate")]
impl LocalStore {
    fn storage() -> Result<web_sys::Storage, BrowserError> {
        match super::browser::window()?.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) | Err(_) => Err(BrowserError::StorageUnavailable),
        }
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, BrowserError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| BrowserError::StorageUnavailable)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BrowserError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| BrowserError::StorageWrite(super::browser::describe_js(&err)))
    }
}

/// In-memory store; `unavailable()` builds one that refuses every call.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: std::cell::RefCell<std::collections::HashMap<String, String>>,
    unavailable: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }

    pub fn unavailable() -> Self {
        Self { unavailable: true, ..Self::default() }
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, BrowserError> {
        if self.unavailable {
            return Err(BrowserError::StorageUnavailable);
        }
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BrowserError> {
        if self.unavailable {
            return Err(BrowserError::StorageWrite("quota exceeded".to_owned()));
        }
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, BrowserError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BrowserError> {
        (**self).set(key, value)
    }
}
