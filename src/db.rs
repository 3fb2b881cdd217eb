//! Connection setup and schema auto-provisioning.
//!
//! The schema is created on startup if absent. There is no migration history
//! beyond the initial table creation; column changes require manual schema
//! evolution.

use sea_orm::{Database, DatabaseConnection, DbErr};
use sea_orm_migration::prelude::*;

/// Connect to the store and create the three tables if they do not exist.
///
/// # Errors
/// Returns `DbErr` if the connection or the schema provisioning fails.
pub async fn connect(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreateTables)]
    }
}

pub struct CreateTables;

impl MigrationName for CreateTables {
    fn name(&self) -> &'static str {
        "m20240101_000001_create_tables"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateTables {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No indexes beyond primary keys and the unique constraint on
        // categories.name. No foreign keys: category_id and spare_part_id
        // are plain integer columns and may dangle.
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Categories::Name)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Categories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SpareParts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SpareParts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SpareParts::Name).string().not_null())
                    .col(ColumnDef::new(SpareParts::Price).integer().not_null())
                    .col(
                        ColumnDef::new(SpareParts::Stock)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(SpareParts::CategoryId).integer())
                    .col(
                        ColumnDef::new(SpareParts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Sales::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sales::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Sales::SparePartId).integer().not_null())
                    .col(ColumnDef::new(Sales::Quantity).integer().not_null())
                    .col(
                        ColumnDef::new(Sales::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sales::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SpareParts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SpareParts {
    #[sea_orm(iden = "spareparts")]
    Table,
    Id,
    Name,
    Price,
    Stock,
    CategoryId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Sales {
    Table,
    Id,
    SparePartId,
    Quantity,
    CreatedAt,
}
