use super::*;

#[test]
fn escape_cancels() {
    assert!(is_cancel_key("Escape"));
    assert!(is_cancel_key("Esc"));
}

#[test]
fn other_keys_do_not_cancel() {
    assert!(!is_cancel_key("Enter"));
    assert!(!is_cancel_key(" "));
    assert!(!is_cancel_key("e"));
}
