//! Create `warehouse` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Warehouse::Table)
                    .if_not_exists()
                    .col(big_integer(Warehouse::Id).primary_key().auto_increment())
                    .col(string_len(Warehouse::WarehouseCode, 64).unique_key().not_null())
                    .col(string_len(Warehouse::Address, 255).not_null())
                    .col(string_len(Warehouse::Telephone, 64).not_null())
                    .col(integer(Warehouse::MinimumCapacity).not_null())
                    .col(double(Warehouse::MinimumTemperature).not_null())
                    .col(
                        ColumnDef::new(Warehouse::LocalityId)
                            .big_integer()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Warehouse::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Warehouse { Table, Id, WarehouseCode, Address, Telephone, MinimumCapacity, MinimumTemperature, LocalityId }
