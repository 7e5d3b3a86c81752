//! Profile API endpoints.

use axum::{extract::State, Json};

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::{Profile, UpdateProfileRequest};
use crate::AppState;

/// GET /api/profile - Profile of the signed-in user.
pub async fn get_profile(State(state): State<AppState>) -> ApiResult<Profile> {
    let revision_id = state.store.revision_id().await;
    let Some(identity) = state.sessions.current().await else {
        return error(
            AppError::Unauthorized("No active session".to_string()),
            revision_id,
        );
    };

    success(state.store.profile_for(&identity).await, revision_id)
}

/// PUT /api/profile - Update the signed-in user's profile.
pub async fn update_profile(
    State(state): State<AppState>,
    Json(request): Json<UpdateProfileRequest>,
) -> ApiResult<Profile> {
    let revision_id = state.store.revision_id().await;
    let Some(identity) = state.sessions.current().await else {
        return error(
            AppError::Unauthorized("No active session".to_string()),
            revision_id,
        );
    };

    let profile = state.store.update_profile(&identity, &request).await;
    let new_revision = state.store.revision_id().await;
    success(profile, new_revision)
}
