//! Create `buyer` table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Buyer::Table)
                    .if_not_exists()
                    .col(big_integer(Buyer::Id).primary_key().auto_increment())
                    .col(string_len(Buyer::CardNumberId, 64).unique_key().not_null())
                    .col(string_len(Buyer::FirstName, 128).not_null())
                    .col(string_len(Buyer::LastName, 128).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Buyer::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Buyer { Table, Id, CardNumberId, FirstName, LastName }
