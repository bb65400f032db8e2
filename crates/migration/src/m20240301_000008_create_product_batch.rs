//! Create `product_batch` table.
//!
//! `(product_id, batch_number)` uniqueness lives in the index migration.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductBatch::Table)
                    .if_not_exists()
                    .col(big_integer(ProductBatch::Id).primary_key().auto_increment())
                    .col(integer(ProductBatch::BatchNumber).not_null())
                    .col(integer(ProductBatch::CurrentQuantity).not_null())
                    .col(double(ProductBatch::CurrentTemperature).not_null())
                    .col(date(ProductBatch::DueDate).not_null())
                    .col(integer(ProductBatch::InitialQuantity).not_null())
                    .col(date(ProductBatch::ManufacturingDate).not_null())
                    .col(integer(ProductBatch::ManufacturingHour).not_null())
                    .col(double(ProductBatch::MinimumTemperature).not_null())
                    .col(big_integer(ProductBatch::ProductId).not_null())
                    .col(big_integer(ProductBatch::SectionId).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ProductBatch::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ProductBatch {
    Table,
    Id,
    BatchNumber,
    CurrentQuantity,
    CurrentTemperature,
    DueDate,
    InitialQuantity,
    ManufacturingDate,
    ManufacturingHour,
    MinimumTemperature,
    ProductId,
    SectionId,
}
