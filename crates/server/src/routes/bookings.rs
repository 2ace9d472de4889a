use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use models::booking::{Model, NewBooking};
use serde::Deserialize;
use service::auth::SessionContext;
use uuid::Uuid;

use super::auth::ServerState;
use crate::errors::JsonApiError;

#[derive(Debug, Default, Deserialize)]
pub struct BookingQuery {
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

#[utoipa::path(get, path = "/bookings", tag = "bookings", params(("email" = Option<String>, Query, description = "Owner filter; must equal the caller")), responses((status = 200, description = "Bookings", body = [crate::openapi::BookingDoc]), (status = 401, description = "Unauthorized"), (status = 403, description = "Forbidden")))]
pub async fn list(
    State(state): State<ServerState>,
    Extension(session): Extension<SessionContext>,
    Query(q): Query<BookingQuery>,
) -> Result<Json<Vec<Model>>, JsonApiError> {
    Ok(Json(state.bookings.list(&session, q.email.as_deref()).await?))
}

#[utoipa::path(post, path = "/bookings", tag = "bookings", request_body = crate::openapi::NewBookingDoc, responses((status = 200, description = "Created", body = crate::openapi::BookingDoc), (status = 400, description = "Validation Error"), (status = 401, description = "Unauthorized"), (status = 403, description = "Forbidden")))]
pub async fn create(
    State(state): State<ServerState>,
    Extension(session): Extension<SessionContext>,
    Json(input): Json<NewBooking>,
) -> Result<Json<Model>, JsonApiError> {
    Ok(Json(state.bookings.create(&session, input).await?))
}

#[utoipa::path(patch, path = "/bookings/{id}", tag = "bookings", params(("id" = Uuid, Path, description = "Booking id")), request_body = crate::openapi::StatusUpdateDoc, responses((status = 200, description = "Updated", body = crate::openapi::BookingDoc), (status = 403, description = "Forbidden"), (status = 404, description = "Not Found")))]
pub async fn update_status(
    State(state): State<ServerState>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<Uuid>,
    Json(input): Json<StatusUpdate>,
) -> Result<Json<Model>, JsonApiError> {
    Ok(Json(state.bookings.update_status(&session, id, &input.status).await?))
}

#[utoipa::path(delete, path = "/bookings/{id}", tag = "bookings", params(("id" = Uuid, Path, description = "Booking id")), responses((status = 204, description = "Deleted"), (status = 403, description = "Forbidden"), (status = 404, description = "Not Found")))]
pub async fn delete(
    State(state): State<ServerState>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, JsonApiError> {
    state.bookings.delete(&session, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
