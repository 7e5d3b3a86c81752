//! Datastore API endpoints.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::{Datastore, RevisionInfo};
use crate::AppState;

/// GET /api/datastore - Get the full datastore.
pub async fn get_datastore(State(state): State<AppState>) -> ApiResult<Datastore> {
    let datastore = state.store.datastore().await;
    let revision_id = datastore.revision_id;
    success(datastore, revision_id)
}

/// GET /api/datastore/revision - Get the current revision info.
pub async fn get_revision(State(state): State<AppState>) -> ApiResult<RevisionInfo> {
    let revision_info = state.store.revision_info().await;
    let revision_id = revision_info.revision_id;
    success(revision_info, revision_id)
}
