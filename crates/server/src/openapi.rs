use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct SuccessResponse { pub success: bool }

/// Identity claim; any extra attributes are carried into the token.
#[derive(ToSchema)]
pub struct LoginRequest { pub email: String }

#[derive(ToSchema)]
pub struct ServiceDoc {
    pub id: Uuid,
    pub service_id: String,
    pub title: String,
    pub img: String,
    pub price: String,
    pub description: String,
}

#[derive(ToSchema)]
pub struct ServiceSummaryDoc {
    pub id: Uuid,
    pub service_id: String,
    pub title: String,
    pub price: String,
    pub img: String,
}

#[derive(ToSchema)]
pub struct NewBookingDoc {
    pub customer_name: String,
    pub email: String,
    pub service_id: String,
    pub service: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub price: String,
    pub img: Option<String>,
}

#[derive(ToSchema)]
pub struct BookingDoc {
    pub id: Uuid,
    pub customer_name: String,
    pub email: String,
    pub service_id: String,
    pub service: String,
    pub date: String,
    pub price: String,
    pub img: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(ToSchema)]
pub struct StatusUpdateDoc { pub status: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::login,
        crate::routes::auth::logout,
        crate::routes::services::list,
        crate::routes::services::get,
        crate::routes::bookings::list,
        crate::routes::bookings::create,
        crate::routes::bookings::update_status,
        crate::routes::bookings::delete,
    ),
    components(
        schemas(
            HealthResponse,
            SuccessResponse,
            LoginRequest,
            ServiceDoc,
            ServiceSummaryDoc,
            NewBookingDoc,
            BookingDoc,
            StatusUpdateDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "services"),
        (name = "bookings")
    )
)]
pub struct ApiDoc;
