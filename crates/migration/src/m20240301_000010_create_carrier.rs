//! Create `carrier` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Carrier::Table)
                    .if_not_exists()
                    .col(big_integer(Carrier::Id).primary_key().auto_increment())
                    .col(string_len(Carrier::Cid, 64).unique_key().not_null())
                    .col(string_len(Carrier::CompanyName, 255).not_null())
                    .col(string_len(Carrier::Address, 255).not_null())
                    .col(string_len(Carrier::Telephone, 64).not_null())
                    .col(big_integer(Carrier::LocalityId).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Carrier::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Carrier { Table, Id, Cid, CompanyName, Address, Telephone, LocalityId }
