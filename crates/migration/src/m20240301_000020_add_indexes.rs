use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Locality: composite natural key (locality_name, province_id)
        manager
            .create_index(
                Index::create()
                    .name("uniq_locality_name_province")
                    .table(Locality::Table)
                    .col(Locality::LocalityName)
                    .col(Locality::ProvinceId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // ProductBatch: composite natural key (product_id, batch_number)
        manager
            .create_index(
                Index::create()
                    .name("uniq_batch_product_number")
                    .table(ProductBatch::Table)
                    .col(ProductBatch::ProductId)
                    .col(ProductBatch::BatchNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Report join columns
        manager
            .create_index(Index::create().name("idx_seller_locality").table(Seller::Table).col(Seller::LocalityId).to_owned())
            .await?;
        manager
            .create_index(Index::create().name("idx_carrier_locality").table(Carrier::Table).col(Carrier::LocalityId).to_owned())
            .await?;
        manager
            .create_index(Index::create().name("idx_batch_section").table(ProductBatch::Table).col(ProductBatch::SectionId).to_owned())
            .await?;
        manager
            .create_index(Index::create().name("idx_record_product").table(ProductRecord::Table).col(ProductRecord::ProductId).to_owned())
            .await?;
        manager
            .create_index(Index::create().name("idx_inbound_employee").table(InboundOrder::Table).col(InboundOrder::EmployeeId).to_owned())
            .await?;
        manager
            .create_index(Index::create().name("idx_purchase_buyer").table(PurchaseOrder::Table).col(PurchaseOrder::BuyerId).to_owned())
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_locality_name_province").table(Locality::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_batch_product_number").table(ProductBatch::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_seller_locality").table(Seller::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_carrier_locality").table(Carrier::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_batch_section").table(ProductBatch::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_record_product").table(ProductRecord::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_inbound_employee").table(InboundOrder::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_purchase_buyer").table(PurchaseOrder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Locality { Table, LocalityName, ProvinceId }

#[derive(DeriveIden)]
enum ProductBatch { Table, ProductId, BatchNumber, SectionId }

#[derive(DeriveIden)]
enum Seller { Table, LocalityId }

#[derive(DeriveIden)]
enum Carrier { Table, LocalityId }

#[derive(DeriveIden)]
enum ProductRecord { Table, ProductId }

#[derive(DeriveIden)]
enum InboundOrder { Table, EmployeeId }

#[derive(DeriveIden)]
enum PurchaseOrder { Table, BuyerId }
