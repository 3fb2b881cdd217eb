use axum::{Json, extract::State, http::StatusCode};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::errors::ApiError;
use crate::models::sale::{self, Sale, SaleCreate};

pub fn router() -> OpenApiRouter<DatabaseConnection> {
    OpenApiRouter::new()
        .routes(routes!(create_sale))
        .routes(routes!(list_sales))
}

/// Record a sale.
///
/// The insert is unconditional: no existence check on the referenced part,
/// no stock-availability check, and stock is never decremented.
#[utoipa::path(
    post,
    path = "/sale",
    request_body = SaleCreate,
    responses(
        (status = 201, description = "Sale recorded", body = Sale)
    )
)]
pub async fn create_sale(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<SaleCreate>,
) -> Result<(StatusCode, Json<Sale>), ApiError> {
    let model = sale::ActiveModel {
        id: ActiveValue::NotSet,
        spare_part_id: ActiveValue::Set(payload.spare_part_id),
        quantity: ActiveValue::Set(payload.quantity),
        created_at: ActiveValue::Set(Utc::now()),
    };
    let created = model.insert(&db).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// List every sale record, unfiltered, in primary-key order.
#[utoipa::path(
    get,
    path = "/sales",
    responses(
        (status = 200, description = "List of sales", body = [Sale])
    )
)]
pub async fn list_sales(State(db): State<DatabaseConnection>) -> Result<Json<Vec<Sale>>, ApiError> {
    let rows = sale::Entity::find().all(&db).await?;
    Ok(Json(rows.into_iter().map(Sale::from).collect()))
}
