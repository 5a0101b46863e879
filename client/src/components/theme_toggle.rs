//! Theme preference store and the toggle that applies it.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a refused read falls back to the light theme
//! and a refused write keeps the new theme for this page only. Neither is
//! surfaced to the user.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use crate::state::theme::{STORAGE_KEY, Theme};
use crate::util::storage::KeyValueStore;

/// Reads and writes the persisted theme preference.
pub struct ThemeStore<K> {
    storage: K,
}

impl<K: KeyValueStore> ThemeStore<K> {
    pub fn new(storage: K) -> Self {
        Self { storage }
    }

    /// Persisted theme, or `Light` when absent, unrecognized or unreadable.
    pub fn get(&self) -> Theme {
        match self.storage.get(STORAGE_KEY) {
            Ok(raw) => Theme::from_stored(raw.as_deref()),
            Err(err) => {
                log::debug!("theme preference unreadable, using light: {err}");
                Theme::Light
            }
        }
    }

    pub fn persist(&self, theme: Theme) {
        if let Err(err) = self.storage.set(STORAGE_KEY, theme.as_str()) {
            log::warn!("theme preference not saved: {err}");
        }
    }
}

/// Applies a theme to the page chrome.
pub trait ThemeView {
    /// Body class, toggle icon, tooltip and highlighter stylesheet.
    fn apply(&self, theme: Theme);
}

type ThemeListener = Box<dyn Fn(Theme)>;

pub struct ThemeToggle<K, V> {
    store: ThemeStore<K>,
    view: V,
    current: Theme,
    listeners: Vec<ThemeListener>,
}

impl<K: KeyValueStore, V: ThemeView> ThemeToggle<K, V> {
    /// Apply the stored preference without rewriting it.
    pub fn load(store: ThemeStore<K>, view: V) -> Self {
        let current = store.get();
        view.apply(current);
        Self { store, view, current, listeners: Vec::new() }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Register a callback run after every [`ThemeToggle::toggle`].
    pub fn on_toggle(&mut self, listener: impl Fn(Theme) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Apply and persist `theme`.
    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        self.view.apply(theme);
        self.store.persist(theme);
    }

    /// Flip the theme, then notify listeners (copy icons, side menu).
    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set(next);
        for listener in &self.listeners {
            listener(next);
        }
        next
    }
}
