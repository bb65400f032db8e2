//! Create `product_record` table (append-only price history).
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProductRecord::Table)
                    .if_not_exists()
                    .col(big_integer(ProductRecord::Id).primary_key().auto_increment())
                    .col(timestamp_with_time_zone(ProductRecord::LastUpdateDate).not_null())
                    .col(double(ProductRecord::PurchasePrice).not_null())
                    .col(double(ProductRecord::SalePrice).not_null())
                    .col(big_integer(ProductRecord::ProductId).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ProductRecord::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ProductRecord { Table, Id, LastUpdateDate, PurchasePrice, SalePrice, ProductId }
