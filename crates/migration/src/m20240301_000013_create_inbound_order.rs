//! Create `inbound_order` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InboundOrder::Table)
                    .if_not_exists()
                    .col(big_integer(InboundOrder::Id).primary_key().auto_increment())
                    .col(string_len(InboundOrder::OrderNumber, 64).unique_key().not_null())
                    .col(date(InboundOrder::OrderDate).not_null())
                    .col(big_integer(InboundOrder::EmployeeId).not_null())
                    .col(big_integer(InboundOrder::ProductBatchId).not_null())
                    .col(big_integer(InboundOrder::WarehouseId).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(InboundOrder::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum InboundOrder { Table, Id, OrderNumber, OrderDate, EmployeeId, ProductBatchId, WarehouseId }
