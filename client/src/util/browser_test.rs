use super::*;

#[test]
fn navigation_error_names_target_and_reason() {
    let err = BrowserError::Navigation { href: "/fr/".to_owned(), reason: "blocked".to_owned() };
    assert_eq!(err.to_string(), "navigation to /fr/ failed: blocked");
}

#[test]
fn clipboard_denied_carries_browser_message() {
    let err = BrowserError::ClipboardDenied("NotAllowedError".to_owned());
    assert_eq!(err.to_string(), "clipboard write denied: NotAllowedError");
}

#[test]
fn unit_variants_have_stable_messages() {
    assert_eq!(BrowserError::NoWindow.to_string(), "no window object");
    assert_eq!(BrowserError::StorageUnavailable.to_string(), "local storage unavailable");
    assert_eq!(BrowserError::ClipboardUnavailable.to_string(), "clipboard unavailable");
}
