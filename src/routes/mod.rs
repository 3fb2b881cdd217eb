//! HTTP surface: one handler per operation, assembled into a single router
//! with permissive CORS, request tracing, and OpenAPI docs at `/docs`.

pub mod category;
pub mod sale;
pub mod spare_part;

use axum::{Json, Router};
use sea_orm::DatabaseConnection;
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(info(
    title = "Auto spares API",
    description = "Inventory and sales tracking for an auto-spare-parts shop"
))]
struct ApiDoc;

/// Static status message for the root route.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service status message")
    )
)]
async fn status() -> Json<serde_json::Value> {
    Json(json!({ "message": "Auto spares API is running" }))
}

/// Build the full application router around an injected database handle.
///
/// Cross-origin requests are permitted from any origin, with any method and
/// any headers.
#[must_use]
pub fn build_router(db: DatabaseConnection) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(status))
        .merge(category::router())
        .merge(spare_part::router())
        .merge(sale::router())
        .with_state(db)
        .split_for_parts();

    router
        .merge(Scalar::with_url("/docs", api))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
