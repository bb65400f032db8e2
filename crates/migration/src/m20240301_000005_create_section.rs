//! Create `section` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Section::Table)
                    .if_not_exists()
                    .col(big_integer(Section::Id).primary_key().auto_increment())
                    .col(string_len(Section::SectionNumber, 64).unique_key().not_null())
                    .col(double(Section::CurrentTemperature).not_null())
                    .col(double(Section::MinimumTemperature).not_null())
                    .col(integer(Section::CurrentCapacity).not_null())
                    .col(integer(Section::MinimumCapacity).not_null())
                    .col(integer(Section::MaximumCapacity).not_null())
                    .col(big_integer(Section::WarehouseId).not_null())
                    .col(big_integer(Section::ProductTypeId).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Section::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Section {
    Table,
    Id,
    SectionNumber,
    CurrentTemperature,
    MinimumTemperature,
    CurrentCapacity,
    MinimumCapacity,
    MaximumCapacity,
    WarehouseId,
    ProductTypeId,
}
