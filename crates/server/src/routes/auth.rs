use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use tracing::info;

use common::types::Success;
use service::auth::{AccessGuard, IdentityClaim, TokenIssuer};
use service::booking::BookingService;
use service::catalog::ServiceCatalogRepository;

use crate::cookies::{CookiePolicy, SESSION_COOKIE};
use crate::errors::JsonApiError;

#[derive(Clone)]
pub struct ServerState {
    pub issuer: Arc<TokenIssuer>,
    pub guard: Arc<AccessGuard>,
    pub cookies: CookiePolicy,
    pub catalog: Arc<dyn ServiceCatalogRepository>,
    pub bookings: Arc<BookingService>,
}

/// Mint a session token for the posted identity and hand it back as an
/// HttpOnly cookie. Served on both `/login` and `/jwt`.
#[utoipa::path(post, path = "/login", tag = "auth", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "Cookie set", body = crate::openapi::SuccessResponse), (status = 422, description = "Body without email")))]
pub async fn login(
    State(state): State<ServerState>,
    jar: CookieJar,
    Json(claim): Json<IdentityClaim>,
) -> Result<(CookieJar, Json<Success>), JsonApiError> {
    let issued = state.issuer.issue(claim)?;
    info!(event = "login", expires_at = issued.expires_at, "session issued");
    Ok((jar.add(state.cookies.session_cookie(&issued)), Json(Success::ok())))
}

/// Clear the client's cookie. The token itself stays valid until it expires.
#[utoipa::path(post, path = "/logout", tag = "auth", responses((status = 200, description = "Cookie cleared", body = crate::openapi::SuccessResponse)))]
pub async fn logout(State(state): State<ServerState>, jar: CookieJar) -> (CookieJar, Json<Success>) {
    (jar.add(state.cookies.cleared_cookie()), Json(Success::ok()))
}

/// Route middleware: verify the `token` cookie and attach the session, or
/// answer 401 without running the handler.
pub async fn require_session(
    State(state): State<ServerState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, JsonApiError> {
    let session = state.guard.verify(jar.get(SESSION_COOKIE).map(|c| c.value()))?;
    req.extensions_mut().insert(session);
    Ok(next.run(req).await)
}
