//! Seed the province and product type lookups.
//!
//! Rows are inserted with `ON CONFLICT DO NOTHING` so re-running is harmless.
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const PROVINCES: &[(&str, &str)] = &[
    ("Buenos Aires", "Argentina"),
    ("Cordoba", "Argentina"),
    ("Santa Fe", "Argentina"),
    ("Mendoza", "Argentina"),
    ("Sao Paulo", "Brasil"),
    ("Antioquia", "Colombia"),
];

const PRODUCT_TYPES: &[&str] = &["frozen", "refrigerated", "fresh", "dry"];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut provinces = Query::insert();
        provinces
            .into_table(Province::Table)
            .columns([Province::ProvinceName, Province::CountryName])
            .on_conflict(OnConflict::column(Province::ProvinceName).do_nothing().to_owned());
        for (name, country) in PROVINCES {
            provinces
                .values([(*name).into(), (*country).into()])
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }
        manager.exec_stmt(provinces).await?;

        let mut types = Query::insert();
        types
            .into_table(ProductType::Table)
            .columns([ProductType::Description])
            .on_conflict(OnConflict::column(ProductType::Description).do_nothing().to_owned());
        for description in PRODUCT_TYPES {
            types
                .values([(*description).into()])
                .map_err(|e| DbErr::Custom(e.to_string()))?;
        }
        manager.exec_stmt(types).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let names: Vec<&str> = PROVINCES.iter().map(|(name, _)| *name).collect();
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Province::Table)
                    .and_where(Expr::col(Province::ProvinceName).is_in(names))
                    .to_owned(),
            )
            .await?;
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(ProductType::Table)
                    .and_where(Expr::col(ProductType::Description).is_in(PRODUCT_TYPES.iter().copied()))
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Province { Table, ProvinceName, CountryName }

#[derive(DeriveIden)]
enum ProductType { Table, Description }
