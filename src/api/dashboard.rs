//! Dashboard API endpoints.

use axum::extract::State;
use chrono::Utc;

use super::{error, success, ApiResult};
use crate::errors::AppError;
use crate::models::Dashboard;
use crate::AppState;

/// GET /api/dashboard - Dashboard payload shaped by the signed-in role.
pub async fn get_dashboard(State(state): State<AppState>) -> ApiResult<Dashboard> {
    let revision_id = state.store.revision_id().await;
    let Some(identity) = state.sessions.current().await else {
        return error(
            AppError::Unauthorized("No active session".to_string()),
            revision_id,
        );
    };

    let today = Utc::now().date_naive();
    success(state.store.dashboard(identity.role, today).await, revision_id)
}
