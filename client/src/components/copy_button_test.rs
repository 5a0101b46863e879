use super::*;
use crate::util::manual_clock::ManualScheduler;
use std::cell::RefCell;

#[derive(Default)]
struct FakeBlock {
    icon: RefCell<&'static str>,
    label_visible: Cell<bool>,
    renders: RefCell<Vec<CopyFeedback>>,
}

impl CopyView for FakeBlock {
    fn render(&self, feedback: CopyFeedback, theme: Theme) {
        *self.icon.borrow_mut() = feedback.icon(theme);
        self.label_visible.set(feedback.shows_label());
        self.renders.borrow_mut().push(feedback);
    }
}

fn button(theme: Theme) -> (CopyButton<FakeBlock, ManualScheduler>, Rc<FakeBlock>, ManualScheduler) {
    let view = Rc::new(FakeBlock::default());
    let scheduler = ManualScheduler::new();
    let button = CopyButton::new(Rc::clone(&view), scheduler.clone(), theme);
    (button, view, scheduler)
}

#[test]
fn new_button_renders_idle_copy_icon() {
    let (button, view, _) = button(Theme::Light);
    assert_eq!(button.feedback(), CopyFeedback::Idle);
    assert_eq!(*view.icon.borrow(), Theme::Light.copy_icon());
    assert!(!view.label_visible.get());
}

#[test]
fn confirm_shows_tick_then_reverts_after_delay() {
    let (mut button, view, scheduler) = button(Theme::Light);
    button.confirm();

    assert_eq!(*view.icon.borrow(), Theme::Light.tick_icon());
    assert!(view.label_visible.get());

    scheduler.advance(u64::from(REVERT_DELAY_MS) - 1);
    assert_eq!(button.feedback(), CopyFeedback::Confirmed);
    scheduler.advance(1);
    assert_eq!(button.feedback(), CopyFeedback::Idle);
    assert_eq!(*view.icon.borrow(), Theme::Light.copy_icon());
    assert!(!view.label_visible.get());
}

#[test]
fn second_click_restarts_revert_instead_of_stacking() {
    let (mut button, view, scheduler) = button(Theme::Light);
    button.confirm();
    scheduler.advance(1000);
    button.confirm();

    scheduler.advance(u64::from(REVERT_DELAY_MS) - 1);
    assert_eq!(button.feedback(), CopyFeedback::Confirmed);
    assert!(view.label_visible.get());

    scheduler.advance(1);
    assert_eq!(button.feedback(), CopyFeedback::Idle);
    assert_eq!(scheduler.now_ms(), 1000 + u64::from(REVERT_DELAY_MS));
    assert_eq!(scheduler.fired(), 1);

    let idle_renders = view.renders.borrow().iter().filter(|f| **f == CopyFeedback::Idle).count();
    assert_eq!(idle_renders, 2);
}

#[test]
fn revert_uses_theme_current_at_revert_time() {
    let (mut button, view, scheduler) = button(Theme::Light);
    button.confirm();
    button.set_theme(Theme::Dark);
    assert_eq!(*view.icon.borrow(), Theme::Dark.tick_icon());

    scheduler.advance(u64::from(REVERT_DELAY_MS));
    assert_eq!(*view.icon.borrow(), Theme::Dark.copy_icon());
}

#[test]
fn set_theme_recolors_idle_icon() {
    let (button, view, _) = button(Theme::Dark);
    button.set_theme(Theme::Light);
    assert_eq!(*view.icon.borrow(), Theme::Light.copy_icon());
    assert_eq!(button.feedback(), CopyFeedback::Idle);
}

#[test]
fn failure_leaves_button_idle() {
    let (button, view, scheduler) = button(Theme::Light);
    button.fail(&BrowserError::ClipboardDenied("NotAllowedError".to_owned()));
    assert_eq!(button.feedback(), CopyFeedback::Idle);
    assert_eq!(view.renders.borrow().len(), 1);
    assert_eq!(scheduler.pending(), 0);
}
