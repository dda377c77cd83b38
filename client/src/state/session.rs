//! Viewer-session state for the current browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the site header and member-only pages to pick between anonymous
//! and signed-in rendering. The viewer comes from the session boundary;
//! until it answers, the page renders as anonymous.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use market::Viewer;

/// Session state tracking the current viewer and loading status.
///
/// Starts out loading on both the server and the browser so the SSR markup
/// and the first hydrated render agree. Only `resolve` clears it, and that
/// runs after hydration.
#[derive(Clone, Debug)]
pub struct SessionState {
    pub viewer: Viewer,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { viewer: Viewer::Anonymous, loading: true }
    }
}

impl SessionState {
    /// Record the session boundary's answer. `None` keeps the viewer anonymous.
    pub fn resolve(&mut self, viewer: Option<Viewer>) {
        self.viewer = viewer.unwrap_or_default();
        self.loading = false;
    }

    /// Whether a member-only page should show its sign-in prompt.
    #[must_use]
    pub fn needs_sign_in(&self) -> bool {
        !self.loading && !self.viewer.is_member()
    }
}
