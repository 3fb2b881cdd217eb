use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait};
use serde::Deserialize;
use utoipa::IntoParams;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::errors::ApiError;
use crate::models::category;
use crate::models::spare_part::{self, SparePart, SparePartCreate, SparePartWithCategory};

pub fn router() -> OpenApiRouter<DatabaseConnection> {
    OpenApiRouter::new()
        .routes(routes!(create_spare_part, list_spare_parts))
        .routes(routes!(update_spare_part_category))
}

/// Create a spare part.
///
/// The category reference is accepted as-is: there is no existence check, so
/// a dangling `category_id` is possible and tolerated (it lists as
/// "Unknown").
#[utoipa::path(
    post,
    path = "/sparepart",
    request_body = SparePartCreate,
    responses(
        (status = 201, description = "Spare part created", body = SparePart)
    )
)]
pub async fn create_spare_part(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<SparePartCreate>,
) -> Result<(StatusCode, Json<SparePart>), ApiError> {
    let model = spare_part::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(payload.name),
        price: ActiveValue::Set(payload.price),
        stock: ActiveValue::Set(payload.stock),
        category_id: ActiveValue::Set(payload.category_id),
        created_at: ActiveValue::Set(Utc::now()),
    };
    let created = model.insert(&db).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// List every spare part with its resolved category name.
///
/// The category lookup is an explicit left join issued here, not a lazy
/// relationship access. Parts with no category, or with a dangling
/// reference, carry the name "Unknown".
#[utoipa::path(
    get,
    path = "/sparepart",
    responses(
        (status = 200, description = "List of spare parts", body = [SparePartWithCategory])
    )
)]
pub async fn list_spare_parts(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<SparePartWithCategory>>, ApiError> {
    let rows = spare_part::Entity::find()
        .find_also_related(category::Entity)
        .all(&db)
        .await?;
    let parts = rows
        .into_iter()
        .map(|(part, cat)| SparePartWithCategory::from_joined(part, cat))
        .collect();
    Ok(Json(parts))
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReassignParams {
    /// Id of the category to move the spare part into
    pub new_category_id: i32,
}

/// Reassign a spare part to another category.
///
/// Both ids must exist; on 404 the part's prior category is left unchanged.
/// This is the only update operation on spare parts.
#[utoipa::path(
    patch,
    path = "/sparepart/{id}/category",
    params(
        ("id" = i32, Path, description = "Spare part id"),
        ReassignParams
    ),
    responses(
        (status = 200, description = "Spare part reassigned", body = SparePart),
        (status = 404, description = "Spare part or category not found")
    )
)]
pub async fn update_spare_part_category(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
    Query(params): Query<ReassignParams>,
) -> Result<Json<SparePart>, ApiError> {
    let Some(part) = spare_part::Entity::find_by_id(id).one(&db).await? else {
        return Err(ApiError::not_found("Spare part", Some(id)));
    };
    if category::Entity::find_by_id(params.new_category_id)
        .one(&db)
        .await?
        .is_none()
    {
        return Err(ApiError::not_found(
            "Category",
            Some(params.new_category_id),
        ));
    }

    let mut active: spare_part::ActiveModel = part.into();
    active.category_id = ActiveValue::Set(Some(params.new_category_id));
    let updated = active.update(&db).await?;
    Ok(Json(updated.into()))
}
