use axum::{
    extract::{Path, State},
    Json,
};
use models::car_service::{Model, Summary};
use uuid::Uuid;

use super::auth::ServerState;
use crate::errors::JsonApiError;

#[utoipa::path(get, path = "/services", tag = "services", responses((status = 200, description = "Whole catalog", body = [crate::openapi::ServiceDoc])))]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Model>>, JsonApiError> {
    Ok(Json(state.catalog.list().await?))
}

#[utoipa::path(get, path = "/services/{id}", tag = "services", params(("id" = Uuid, Path, description = "Service id")), responses((status = 200, description = "Service summary", body = crate::openapi::ServiceSummaryDoc), (status = 404, description = "Not Found")))]
pub async fn get(State(state): State<ServerState>, Path(id): Path<Uuid>) -> Result<Json<Summary>, JsonApiError> {
    state
        .catalog
        .get_summary(id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found("service not found"))
}
