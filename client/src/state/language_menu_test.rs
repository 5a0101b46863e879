use super::*;

#[test]
fn popup_starts_hidden() {
    let phase = PopupPhase::default();
    assert_eq!(phase, PopupPhase::Hidden);
    assert!(!phase.is_displayed());
    assert!(!phase.is_showing());
}

#[test]
fn opening_is_displayed_but_not_yet_active() {
    assert!(PopupPhase::Opening.is_displayed());
    assert!(PopupPhase::Opening.is_showing());
    assert!(!PopupPhase::Opening.is_active());
}

#[test]
fn closing_is_displayed_but_not_showing() {
    assert!(PopupPhase::Closing.is_displayed());
    assert!(!PopupPhase::Closing.is_showing());
    assert!(!PopupPhase::Closing.is_active());
}

#[test]
fn only_open_is_active() {
    assert!(PopupPhase::Open.is_active());
    assert!(PopupPhase::Open.is_showing());
}
