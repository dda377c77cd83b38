//! Viewer session routes and the member-only extractor.
//!
//! There is no sign-in flow. Every request is served as the viewer chosen
//! by config, so `MemberViewer` either always succeeds or always rejects.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::Json;
use market::{Member, Viewer};

use crate::state::AppState;

/// Extractor for handlers that need a signed-in member.
/// Rejects anonymous viewers with `401 Unauthorized`.
pub struct MemberViewer(pub Member);

impl<S> axum::extract::FromRequestParts<S> for MemberViewer
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(_parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        app_state.viewer.member().cloned().map(Self).ok_or(StatusCode::UNAUTHORIZED)
    }
}

/// `GET /api/session` — the current viewer.
pub async fn current_viewer(State(state): State<AppState>) -> Json<Viewer> {
    Json(state.viewer.as_ref().clone())
}
