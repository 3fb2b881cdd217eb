use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "spareparts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    pub price: i32,
    pub stock: i32,
    // Plain integer column, no store-level foreign key. Dangling references
    // are representable and tolerated.
    pub category_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    #[sea_orm(has_many = "super::sale::Entity")]
    Sale,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::sale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sale.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// A stocked item, optionally grouped under a category.
#[derive(ToSchema, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SparePart {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub stock: i32,
    pub category_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(ToSchema, Serialize, Deserialize, Clone, Debug)]
pub struct SparePartCreate {
    pub name: String,
    pub price: i32,
    #[serde(default)]
    pub stock: i32,
    pub category_id: Option<i32>,
}

/// List shape for spare parts: the record plus its resolved category name,
/// or `"Unknown"` when no category is linked or the link dangles.
#[derive(ToSchema, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SparePartWithCategory {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub stock: i32,
    pub category_id: Option<i32>,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl From<Model> for SparePart {
    fn from(model: Model) -> Self {
        SparePart {
            id: model.id,
            name: model.name,
            price: model.price,
            stock: model.stock,
            category_id: model.category_id,
            created_at: model.created_at,
        }
    }
}

impl SparePartWithCategory {
    pub fn from_joined(part: Model, category: Option<super::category::Model>) -> Self {
        SparePartWithCategory {
            id: part.id,
            name: part.name,
            price: part.price,
            stock: part.stock,
            category_id: part.category_id,
            category: category.map_or_else(|| "Unknown".to_string(), |c| c.name),
            created_at: part.created_at,
        }
    }
}
