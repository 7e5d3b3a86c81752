//! Session API endpoints.

use std::time::Duration;

use axum::{extract::State, Json};

use super::{error, success, ApiResult};
use crate::auth;
use crate::models::{SessionView, SignInRequest};
use crate::AppState;

/// GET /api/session - The current session, or null when signed out.
pub async fn get_session(State(state): State<AppState>) -> ApiResult<Option<SessionView>> {
    let revision_id = state.store.revision_id().await;
    let session = state.sessions.current().await.map(SessionView::new);
    success(session, revision_id)
}

/// POST /api/session - Sign in with a demo account.
pub async fn sign_in(
    State(state): State<AppState>,
    Json(request): Json<SignInRequest>,
) -> ApiResult<SessionView> {
    let revision_id = state.store.revision_id().await;

    // Cosmetic delay so the frontend's loading state is visible
    if state.config.sign_in_delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(state.config.sign_in_delay_ms)).await;
    }

    let identity = match auth::verify_credentials(&request.email, &request.password) {
        Ok(identity) => identity,
        Err(e) => return error(e, revision_id),
    };

    if let Err(e) = state.sessions.sign_in(identity.clone()).await {
        return error(e, revision_id);
    }

    tracing::info!("Signed in {} as {}", identity.email, identity.role.as_str());
    success(SessionView::new(identity), revision_id)
}

/// DELETE /api/session - Sign out. Succeeds even when nobody is signed in.
pub async fn sign_out(State(state): State<AppState>) -> ApiResult<()> {
    let revision_id = state.store.revision_id().await;
    match state.sessions.sign_out().await {
        Ok(()) => success((), revision_id),
        Err(e) => error(e, revision_id),
    }
}
