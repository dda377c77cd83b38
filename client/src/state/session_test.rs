use super::*;
use market::fixtures::demo_member;

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_default_is_anonymous_and_loading() {
    let state = SessionState::default();
    assert_eq!(state.viewer, Viewer::Anonymous);
    assert!(state.loading);
}

#[test]
fn server_render_and_first_browser_render_agree() {
    // Both sides build the first render from the default state; the browser
    // only changes it once the session answer arrives after hydration.
    let server = SessionState::default();
    let browser = SessionState::default();
    assert_eq!(server.needs_sign_in(), browser.needs_sign_in());
    assert!(!server.needs_sign_in());
}

#[test]
fn sign_in_prompt_appears_only_after_resolving_anonymous() {
    let mut state = SessionState::default();
    assert!(!state.needs_sign_in());
    state.resolve(None);
    assert!(state.needs_sign_in());
}

// =============================================================
// resolve / needs_sign_in
// =============================================================

#[test]
fn resolve_with_member_clears_loading() {
    let mut state = SessionState { viewer: Viewer::Anonymous, loading: true };
    state.resolve(Some(Viewer::Member(demo_member())));
    assert!(state.viewer.is_member());
    assert!(!state.loading);
    assert!(!state.needs_sign_in());
}

#[test]
fn resolve_without_answer_stays_anonymous() {
    let mut state = SessionState { viewer: Viewer::Member(demo_member()), loading: true };
    state.resolve(None);
    assert_eq!(state.viewer, Viewer::Anonymous);
    assert!(state.needs_sign_in());
}

#[test]
fn no_sign_in_prompt_while_loading() {
    let state = SessionState { viewer: Viewer::Anonymous, loading: true };
    assert!(!state.needs_sign_in());
}
