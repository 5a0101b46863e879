use super::*;
use crate::util::storage::MemoryStore;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Default)]
struct FakeChrome {
    applied: RefCell<Vec<Theme>>,
}

impl ThemeView for Rc<FakeChrome> {
    fn apply(&self, theme: Theme) {
        self.applied.borrow_mut().push(theme);
    }
}

fn toggle_with(storage: Rc<MemoryStore>) -> (ThemeToggle<Rc<MemoryStore>, Rc<FakeChrome>>, Rc<FakeChrome>) {
    let chrome = Rc::new(FakeChrome::default());
    let toggle = ThemeToggle::load(ThemeStore::new(storage), Rc::clone(&chrome));
    (toggle, chrome)
}

// =============================================================
// ThemeStore
// =============================================================

#[test]
fn store_defaults_to_light_when_empty() {
    let store = ThemeStore::new(MemoryStore::default());
    assert_eq!(store.get(), Theme::Light);
}

#[test]
fn store_reads_persisted_dark() {
    let store = ThemeStore::new(MemoryStore::with(STORAGE_KEY, "dark"));
    assert_eq!(store.get(), Theme::Dark);
}

#[test]
fn store_treats_garbage_as_light() {
    let store = ThemeStore::new(MemoryStore::with(STORAGE_KEY, "{\"mode\":1}"));
    assert_eq!(store.get(), Theme::Light);
}

#[test]
fn store_swallows_unavailable_storage() {
    let store = ThemeStore::new(MemoryStore::unavailable());
    assert_eq!(store.get(), Theme::Light);
    store.persist(Theme::Dark);
}

// =============================================================
// ThemeToggle
// =============================================================

#[test]
fn load_applies_stored_theme_without_rewriting_it() {
    let storage = Rc::new(MemoryStore::default());
    let (toggle, chrome) = toggle_with(Rc::clone(&storage));

    assert_eq!(toggle.current(), Theme::Light);
    assert_eq!(*chrome.applied.borrow(), vec![Theme::Light]);
    assert_eq!(storage.raw(STORAGE_KEY), None);
}

#[test]
fn toggle_twice_round_trips_persisted_value() {
    let storage = Rc::new(MemoryStore::default());
    let (mut toggle, chrome) = toggle_with(Rc::clone(&storage));

    assert_eq!(toggle.toggle(), Theme::Dark);
    assert_eq!(storage.raw(STORAGE_KEY).as_deref(), Some("dark"));
    assert_eq!(ThemeStore::new(Rc::clone(&storage)).get(), Theme::Dark);

    assert_eq!(toggle.toggle(), Theme::Light);
    assert_eq!(storage.raw(STORAGE_KEY).as_deref(), Some("light"));
    assert_eq!(*chrome.applied.borrow(), vec![Theme::Light, Theme::Dark, Theme::Light]);
}

#[test]
fn toggle_keeps_working_when_storage_refuses_writes() {
    let storage = Rc::new(MemoryStore::unavailable());
    let (mut toggle, chrome) = toggle_with(storage);

    assert_eq!(toggle.toggle(), Theme::Dark);
    assert_eq!(toggle.current(), Theme::Dark);
    assert_eq!(chrome.applied.borrow().last(), Some(&Theme::Dark));
}

#[test]
fn set_applies_and_persists_without_notifying() {
    let storage = Rc::new(MemoryStore::default());
    let (mut toggle, _) = toggle_with(Rc::clone(&storage));
    let notified = Rc::new(Cell::new(0));
    let seen = Rc::clone(&notified);
    toggle.on_toggle(move |_| seen.set(seen.get() + 1));

    toggle.set(Theme::Dark);

    assert_eq!(storage.raw(STORAGE_KEY).as_deref(), Some("dark"));
    assert_eq!(notified.get(), 0);
}

#[test]
fn toggle_notifies_listeners_with_new_theme() {
    let (mut toggle, _) = toggle_with(Rc::new(MemoryStore::default()));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let first = Rc::clone(&seen);
    toggle.on_toggle(move |theme| first.borrow_mut().push(("icons", theme)));
    let second = Rc::clone(&seen);
    toggle.on_toggle(move |theme| second.borrow_mut().push(("menu", theme)));

    toggle.toggle();

    assert_eq!(*seen.borrow(), vec![("icons", Theme::Dark), ("menu", Theme::Dark)]);
}
