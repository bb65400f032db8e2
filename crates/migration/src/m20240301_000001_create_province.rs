//! Create `province` lookup table.
//!
//! Localities resolve their province by name against this table.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Province::Table)
                    .if_not_exists()
                    .col(big_integer(Province::Id).primary_key().auto_increment())
                    .col(string_len(Province::ProvinceName, 128).unique_key().not_null())
                    .col(string_len(Province::CountryName, 128).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Province::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Province { Table, Id, ProvinceName, CountryName }
