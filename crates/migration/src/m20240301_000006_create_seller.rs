//! Create `seller` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Seller::Table)
                    .if_not_exists()
                    .col(big_integer(Seller::Id).primary_key().auto_increment())
                    .col(integer(Seller::Cid).unique_key().not_null())
                    .col(string_len(Seller::CompanyName, 255).not_null())
                    .col(string_len(Seller::Address, 255).not_null())
                    .col(string_len(Seller::Telephone, 64).not_null())
                    .col(big_integer(Seller::LocalityId).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Seller::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Seller { Table, Id, Cid, CompanyName, Address, Telephone, LocalityId }
