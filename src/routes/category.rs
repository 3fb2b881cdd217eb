use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, SqlErr,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::errors::ApiError;
use crate::models::category::{self, Category, CategoryCreate};
use crate::models::spare_part;

pub fn router() -> OpenApiRouter<DatabaseConnection> {
    OpenApiRouter::new()
        .routes(routes!(create_category))
        .routes(routes!(list_categories))
        .routes(routes!(delete_category))
}

/// Create a category. The name must not already be taken.
///
/// The name lookup and the insert are two separate statements; the unique
/// constraint on the name column catches racing duplicates, which also map
/// to 409.
#[utoipa::path(
    post,
    path = "/category",
    request_body = CategoryCreate,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 409, description = "Category name already exists")
    )
)]
pub async fn create_category(
    State(db): State<DatabaseConnection>,
    Json(payload): Json<CategoryCreate>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let existing = category::Entity::find()
        .filter(category::Column::Name.eq(payload.name.as_str()))
        .one(&db)
        .await?;
    if existing.is_some() {
        return Err(ApiError::conflict("Category already exists"));
    }

    let model = category::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(payload.name),
        created_at: ActiveValue::Set(Utc::now()),
    };
    match model.insert(&db).await {
        Ok(created) => Ok((StatusCode::CREATED, Json(created.into()))),
        Err(err) => match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                Err(ApiError::conflict("Category already exists"))
            }
            _ => Err(err.into()),
        },
    }
}

/// List every category, unfiltered, in primary-key order.
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "List of categories", body = [Category])
    )
)]
pub async fn list_categories(
    State(db): State<DatabaseConnection>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let rows = category::Entity::find().all(&db).await?;
    Ok(Json(rows.into_iter().map(Category::from).collect()))
}

/// Delete a category, refused while any spare part still references it.
///
/// The referential-integrity guard lives here, not in the database: the
/// store has no foreign keys, so the reference count is checked before the
/// delete is issued.
#[utoipa::path(
    delete,
    path = "/category/{id}",
    params(("id" = i32, Path, description = "Category id")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 404, description = "Category not found"),
        (status = 409, description = "Category is still referenced by spare parts")
    )
)]
pub async fn delete_category(
    State(db): State<DatabaseConnection>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let Some(found) = category::Entity::find_by_id(id).one(&db).await? else {
        return Err(ApiError::not_found("Category", Some(id)));
    };

    let referencing_parts = spare_part::Entity::find()
        .filter(spare_part::Column::CategoryId.eq(id))
        .count(&db)
        .await?;
    if referencing_parts > 0 {
        return Err(ApiError::conflict(
            "Category is referenced by spare parts and cannot be deleted",
        ));
    }

    found.delete(&db).await?;
    Ok(StatusCode::NO_CONTENT)
}
