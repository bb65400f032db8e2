//! Create `locality` table.
//!
//! `province_id` is a plain column; the service layer checks it exists.
//! Uniqueness of `(locality_name, province_id)` is added by the index migration.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Locality::Table)
                    .if_not_exists()
                    .col(big_integer(Locality::Id).primary_key().auto_increment())
                    .col(string_len(Locality::LocalityName, 128).not_null())
                    .col(big_integer(Locality::ProvinceId).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Locality::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Locality { Table, Id, LocalityName, ProvinceId }
