//! Create `purchase_order` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PurchaseOrder::Table)
                    .if_not_exists()
                    .col(big_integer(PurchaseOrder::Id).primary_key().auto_increment())
                    .col(string_len(PurchaseOrder::OrderNumber, 64).unique_key().not_null())
                    .col(date(PurchaseOrder::OrderDate).not_null())
                    .col(string_len(PurchaseOrder::TrackingCode, 128).not_null())
                    .col(big_integer(PurchaseOrder::BuyerId).not_null())
                    .col(big_integer(PurchaseOrder::ProductRecordId).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PurchaseOrder::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PurchaseOrder { Table, Id, OrderNumber, OrderDate, TrackingCode, BuyerId, ProductRecordId }
