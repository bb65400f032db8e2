//! Create `product` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(big_integer(Product::Id).primary_key().auto_increment())
                    .col(string_len(Product::ProductCode, 64).unique_key().not_null())
                    .col(string_len(Product::Description, 255).not_null())
                    .col(double(Product::Width).not_null())
                    .col(double(Product::Height).not_null())
                    .col(double(Product::Length).not_null())
                    .col(double(Product::NetWeight).not_null())
                    .col(double(Product::ExpirationRate).not_null())
                    .col(double(Product::RecommendedFreezingTemperature).not_null())
                    .col(double(Product::FreezingRate).not_null())
                    .col(big_integer(Product::ProductTypeId).not_null())
                    .col(big_integer(Product::SellerId).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Product::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Product {
    Table,
    Id,
    ProductCode,
    Description,
    Width,
    Height,
    Length,
    NetWeight,
    ExpirationRate,
    RecommendedFreezingTemperature,
    FreezingRate,
    ProductTypeId,
    SellerId,
}
