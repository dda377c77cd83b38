//! Member profile routes.
//!
//! Updates are validated and acknowledged but not applied; the profile
//! served by `GET` never changes.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use market::profile::{ProfileField, ProfileForm, UserProfile};

use super::session::MemberViewer;
use crate::state::AppState;

/// First field that fails validation, if any.
pub(crate) fn invalid_field(form: &ProfileForm) -> Option<ProfileField> {
    let required = [ProfileField::FirstName, ProfileField::LastName, ProfileField::Email];
    if let Some(field) = required.into_iter().find(|f| form.get(*f).trim().is_empty()) {
        return Some(field);
    }
    (!form.email.contains('@')).then_some(ProfileField::Email)
}

/// `GET /api/me/profile` — the member's profile.
pub async fn get_profile(State(state): State<AppState>, _member: MemberViewer) -> Json<UserProfile> {
    Json(state.store.profile().await)
}

/// `PUT /api/me/profile` — accept profile edits.
pub async fn update_profile(
    _state: State<AppState>,
    MemberViewer(member): MemberViewer,
    Json(form): Json<ProfileForm>,
) -> StatusCode {
    if let Some(field) = invalid_field(&form) {
        tracing::debug!(member = %member.id, field = field.label(), "rejecting profile update");
        return StatusCode::UNPROCESSABLE_ENTITY;
    }
    tracing::info!(member = %member.id, "profile update acknowledged, not applied");
    StatusCode::ACCEPTED
}
