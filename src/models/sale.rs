use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sales")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub spare_part_id: i32,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::spare_part::Entity",
        from = "Column::SparePartId",
        to = "super::spare_part::Column::Id"
    )]
    SparePart,
}

impl Related<super::spare_part::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SparePart.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// A recorded sale of a quantity of a spare part. Immutable once created;
/// recording a sale never checks or decrements the part's stock.
#[derive(ToSchema, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Sale {
    pub id: i32,
    pub spare_part_id: i32,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(ToSchema, Serialize, Deserialize, Clone, Debug)]
pub struct SaleCreate {
    pub spare_part_id: i32,
    pub quantity: i32,
}

impl From<Model> for Sale {
    fn from(model: Model) -> Self {
        Sale {
            id: model.id,
            spare_part_id: model.spare_part_id,
            quantity: model.quantity,
            created_at: model.created_at,
        }
    }
}
