use super::*;
use crate::util::manual_clock::ManualScheduler;

#[derive(Default)]
struct FakePopup {
    displayed: Cell<bool>,
    active: Cell<bool>,
}

fn menu() -> (LanguageMenu<FakePopup, ManualScheduler>, Rc<FakePopup>, ManualScheduler) {
    let view = Rc::new(FakePopup::default());
    let scheduler = ManualScheduler::new();
    (LanguageMenu::new(Rc::clone(&view), scheduler.clone()), view, scheduler)
}

impl PopupView for FakePopup {
    fn set_displayed(&self, displayed: bool) {
        self.displayed.set(displayed);
    }

    fn set_active(&self, active: bool) {
        self.active.set(active);
    }
}

// =============================================================
// Visibility animation
// =============================================================

#[test]
fn open_displays_then_activates() {
    let (mut menu, view, scheduler) = menu();
    menu.toggle();
    assert!(view.displayed.get());
    assert!(!view.active.get());
    assert_eq!(menu.phase(), PopupPhase::Opening);

    scheduler.advance(u64::from(ACTIVATE_DELAY_MS));
    assert!(view.active.get());
    assert_eq!(menu.phase(), PopupPhase::Open);
}

#[test]
fn close_deactivates_then_hides_after_fade() {
    let (mut menu, view, scheduler) = menu();
    menu.toggle();
    scheduler.advance(u64::from(ACTIVATE_DELAY_MS));

    menu.toggle();
    assert!(!view.active.get());
    assert!(view.displayed.get());
    assert_eq!(menu.phase(), PopupPhase::Closing);

    scheduler.advance(u64::from(HIDE_DELAY_MS) - 1);
    assert!(view.displayed.get());
    scheduler.advance(1);
    assert!(!view.displayed.get());
    assert_eq!(menu.phase(), PopupPhase::Hidden);
}

#[test]
fn closing_before_activation_cancels_it() {
    let (mut menu, view, scheduler) = menu();
    menu.toggle();
    menu.toggle();

    scheduler.advance(1000);
    assert!(!view.active.get());
    assert!(!view.displayed.get());
    assert_eq!(menu.phase(), PopupPhase::Hidden);
    assert_eq!(scheduler.fired(), 1);
}

#[test]
fn reopening_mid_fade_keeps_popup_visible() {
    let (mut menu, view, scheduler) = menu();
    menu.toggle();
    scheduler.advance(u64::from(ACTIVATE_DELAY_MS));
    menu.toggle();
    scheduler.advance(50);
    menu.toggle();

    scheduler.advance(1000);
    assert!(view.displayed.get());
    assert!(view.active.get());
    assert_eq!(menu.phase(), PopupPhase::Open);
}

#[test]
fn outside_click_closes_only_when_showing() {
    let (mut menu, view, scheduler) = menu();
    menu.on_outside_click();
    assert_eq!(menu.phase(), PopupPhase::Hidden);
    assert_eq!(scheduler.pending(), 0);

    menu.toggle();
    scheduler.advance(u64::from(ACTIVATE_DELAY_MS));
    menu.on_outside_click();
    scheduler.advance(u64::from(HIDE_DELAY_MS));
    assert!(!view.displayed.get());
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_swaps_locale_segment_only() {
    let (mut menu, _, _) = menu();
    assert_eq!(
        menu.select("/en/algorithms/sorting", "fr").as_deref(),
        Some("/fr/algorithms/sorting")
    );
}

#[test]
fn select_on_bare_root_does_not_navigate() {
    let (mut menu, _, _) = menu();
    assert_eq!(menu.select("/", "it"), None);
}

#[test]
fn select_closes_open_popup() {
    let (mut menu, view, scheduler) = menu();
    menu.toggle();
    scheduler.advance(u64::from(ACTIVATE_DELAY_MS));

    assert!(menu.select("/es/sql", "en").is_some());
    assert_eq!(menu.phase(), PopupPhase::Closing);
    assert!(!view.active.get());
}
