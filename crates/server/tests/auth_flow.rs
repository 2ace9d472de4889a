use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::Service;
use uuid::Uuid;

use configs::AuthConfig;
use models::car_service;
use server::routes;
use server::startup::{build_cors, build_state};
use service::auth::{IdentityClaim, SigningKeys, TokenIssuer};
use service::booking::repository::mock::MockBookingRepository;
use service::catalog::repository::mock::MockServiceCatalogRepository;

const SECRET: &str = "test-secret";

fn catalog_item(code: &str, title: &str) -> car_service::Model {
    car_service::Model {
        id: Uuid::new_v4(),
        service_id: code.into(),
        title: title.into(),
        img: format!("https://img.example.com/{code}.jpg"),
        price: "20.00".into(),
        description: "Detailed description".into(),
    }
}

fn build_app(items: Vec<car_service::Model>) -> anyhow::Result<Router> {
    let auth = AuthConfig { jwt_secret: SECRET.into(), ..AuthConfig::default() };
    let state = build_state(
        &auth,
        Arc::new(MockServiceCatalogRepository::with_items(items)),
        Arc::new(MockBookingRepository::default()),
    )?;
    Ok(routes::build_router(state, build_cors(&Default::default())?))
}

fn json_req(method: &str, uri: &str, cookie: Option<&str>, body: Value) -> anyhow::Result<Request<Body>> {
    let mut b = Request::builder().method(method).uri(uri).header("content-type", "application/json");
    if let Some(c) = cookie {
        b = b.header(header::COOKIE, c);
    }
    Ok(b.body(Body::from(serde_json::to_vec(&body)?))?)
}

fn get_req(uri: &str, cookie: Option<&str>) -> anyhow::Result<Request<Body>> {
    let mut b = Request::builder().method("GET").uri(uri);
    if let Some(c) = cookie {
        b = b.header(header::COOKIE, c);
    }
    Ok(b.body(Body::empty())?)
}

async fn body_json(resp: Response) -> anyhow::Result<Value> {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn set_cookie(resp: &Response) -> String {
    resp.headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

/// `token=<value>` pair suitable for a Cookie request header.
fn cookie_pair(set_cookie: &str) -> String {
    set_cookie.split(';').next().unwrap_or_default().trim().to_string()
}

async fn login(app: &Router, email: &str) -> anyhow::Result<String> {
    let resp = app.clone().call(json_req("POST", "/login", None, json!({"email": email}))?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    Ok(cookie_pair(&set_cookie(&resp)))
}

fn booking_body(email: &str) -> Value {
    json!({
        "customer_name": "Alice",
        "email": email,
        "service_id": "01",
        "service": "Full Car Repair",
        "date": "2024-08-15",
        "price": "200.00",
        "img": "https://img.example.com/01.jpg"
    })
}

#[tokio::test]
async fn root_and_health_are_public() -> anyhow::Result<()> {
    let app = build_app(vec![])?;
    let resp = app.clone().call(get_req("/", None)?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let text = to_bytes(resp.into_body(), usize::MAX).await?;
    assert_eq!(&text[..], routes::BANNER.as_bytes());

    let resp = app.clone().call(get_req("/health", None)?).await?;
    assert_eq!(body_json(resp).await?, json!({"status": "ok"}));
    Ok(())
}

#[tokio::test]
async fn login_sets_http_only_cookie() -> anyhow::Result<()> {
    let app = build_app(vec![])?;
    let resp = app.clone().call(json_req("POST", "/jwt", None, json!({"email": "a@x.com", "name": "Alice"}))?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let cookie = set_cookie(&resp);
    assert!(cookie.starts_with("token="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("Max-Age=3600"));
    assert!(cookie.contains("SameSite=Strict"));
    assert_eq!(body_json(resp).await?, json!({"success": true}));
    Ok(())
}

#[tokio::test]
async fn login_without_email_is_rejected() -> anyhow::Result<()> {
    let app = build_app(vec![])?;
    let resp = app.clone().call(json_req("POST", "/login", None, json!({"name": "Alice"}))?).await?;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(resp.headers().get(header::SET_COOKIE).is_none());
    Ok(())
}

#[tokio::test]
async fn owner_sees_own_bookings_and_not_others() -> anyhow::Result<()> {
    let app = build_app(vec![])?;
    let alice = login(&app, "a@x.com").await?;
    let bob = login(&app, "b@x.com").await?;

    let resp = app.clone().call(json_req("POST", "/bookings", Some(&alice), booking_body("a@x.com"))?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let created = body_json(resp).await?;
    assert_eq!(created["status"], "pending");
    app.clone().call(json_req("POST", "/bookings", Some(&bob), booking_body("b@x.com"))?).await?;

    let resp = app.clone().call(get_req("/bookings?email=a@x.com", Some(&alice))?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let list = body_json(resp).await?;
    let rows = list.as_array().cloned().unwrap_or_default();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["email"], "a@x.com");

    let resp = app.clone().call(get_req("/bookings?email=b@x.com", Some(&alice))?).await?;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(resp).await?, json!({"message": "forbidden access"}));

    // Unfiltered listing is scoped to the caller.
    let resp = app.clone().call(get_req("/bookings", Some(&bob))?).await?;
    let rows = body_json(resp).await?.as_array().cloned().unwrap_or_default();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["email"], "b@x.com");
    Ok(())
}

#[tokio::test]
async fn missing_cookie_is_unauthorized() -> anyhow::Result<()> {
    let app = build_app(vec![])?;
    let resp = app.clone().call(get_req("/bookings?email=a@x.com", None)?).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(resp).await?, json!({"message": "unauthorized access"}));

    let resp = app.clone().call(json_req("POST", "/bookings", None, booking_body("a@x.com"))?).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn expired_and_tampered_tokens_are_unauthorized() -> anyhow::Result<()> {
    let app = build_app(vec![])?;
    let keys = Arc::new(SigningKeys::from_secret(SECRET.as_bytes())?);
    let past = chrono::Utc::now().timestamp() - 7200;
    let expired = TokenIssuer::new(keys, 3600).issue_at(IdentityClaim::new("a@x.com"), past)?;

    let resp = app.clone().call(get_req("/bookings", Some(&format!("token={}", expired.token)))?).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(resp).await?, json!({"message": "unauthorized access"}));

    let foreign = TokenIssuer::new(Arc::new(SigningKeys::from_secret(b"other-secret")?), 3600)
        .issue(IdentityClaim::new("a@x.com"))?;
    let resp = app.clone().call(get_req("/bookings", Some(&format!("token={}", foreign.token)))?).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app.clone().call(get_req("/bookings", Some("token=garbage"))?).await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn logout_clears_cookie_but_token_stays_valid() -> anyhow::Result<()> {
    let app = build_app(vec![])?;
    let alice = login(&app, "a@x.com").await?;

    let resp = app.clone().call(json_req("POST", "/logout", Some(&alice), json!({}))?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let cleared = set_cookie(&resp);
    assert!(cleared.starts_with("token=;") || cleared.starts_with("token=\"\""), "{cleared}");
    assert!(cleared.contains("Max-Age=0"));
    assert_eq!(body_json(resp).await?, json!({"success": true}));

    // No server-side revocation: a replayed token still passes until exp.
    let resp = app.clone().call(get_req("/bookings?email=a@x.com", Some(&alice))?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn create_for_another_owner_is_forbidden() -> anyhow::Result<()> {
    let app = build_app(vec![])?;
    let alice = login(&app, "a@x.com").await?;
    let resp = app.clone().call(json_req("POST", "/bookings", Some(&alice), booking_body("b@x.com"))?).await?;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn invalid_booking_is_bad_request() -> anyhow::Result<()> {
    let app = build_app(vec![])?;
    let alice = login(&app, "a@x.com").await?;
    let mut body = booking_body("a@x.com");
    body["price"] = json!("lots");
    let resp = app.clone().call(json_req("POST", "/bookings", Some(&alice), body)?).await?;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let err = body_json(resp).await?;
    assert_eq!(err["message"], "validation error");
    assert!(err["detail"].as_str().unwrap_or_default().contains("price"));
    Ok(())
}

#[tokio::test]
async fn update_and_delete_respect_ownership() -> anyhow::Result<()> {
    let app = build_app(vec![])?;
    let alice = login(&app, "a@x.com").await?;
    let mallory = login(&app, "m@x.com").await?;

    let resp = app.clone().call(json_req("POST", "/bookings", Some(&alice), booking_body("a@x.com"))?).await?;
    let id = body_json(resp).await?["id"].as_str().unwrap_or_default().to_string();
    let uri = format!("/bookings/{id}");

    let resp = app.clone().call(json_req("PATCH", &uri, Some(&mallory), json!({"status": "confirm"}))?).await?;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = app.clone().call(json_req("PATCH", &uri, Some(&alice), json!({"status": "confirm"}))?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await?["status"], "confirm");

    let del = |cookie: &str| -> anyhow::Result<Request<Body>> {
        Ok(Request::builder().method("DELETE").uri(&uri).header(header::COOKIE, cookie).body(Body::empty())?)
    };
    assert_eq!(app.clone().call(del(&mallory)?).await?.status(), StatusCode::FORBIDDEN);
    assert_eq!(app.clone().call(del(&alice)?).await?.status(), StatusCode::NO_CONTENT);
    assert_eq!(app.clone().call(del(&alice)?).await?.status(), StatusCode::NOT_FOUND);

    let missing = format!("/bookings/{}", Uuid::new_v4());
    let resp = app.clone().call(json_req("PATCH", &missing, Some(&alice), json!({"status": "confirm"}))?).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn services_are_public() -> anyhow::Result<()> {
    let oil = catalog_item("02", "Engine Oil Change");
    let repair = catalog_item("01", "Full Car Repair");
    let app = build_app(vec![oil.clone(), repair.clone()])?;

    let resp = app.clone().call(get_req("/services", None)?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let list = body_json(resp).await?;
    assert_eq!(list[0]["service_id"], "01");
    assert_eq!(list[1]["title"], "Engine Oil Change");
    assert_eq!(list[0]["description"], "Detailed description");

    let resp = app.clone().call(get_req(&format!("/services/{}", oil.id), None)?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let one = body_json(resp).await?;
    assert_eq!(one["title"], "Engine Oil Change");
    assert!(one.get("description").is_none());

    let resp = app.clone().call(get_req(&format!("/services/{}", Uuid::new_v4()), None)?).await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn openapi_document_is_served() -> anyhow::Result<()> {
    let app = build_app(vec![])?;
    let resp = app.clone().call(get_req("/api-docs/openapi.json", None)?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let doc = body_json(resp).await?;
    assert!(doc["paths"].get("/bookings").is_some());
    Ok(())
}
