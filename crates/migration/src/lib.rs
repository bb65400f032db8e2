//! Migrator registering entity-specific migrations.
//! Lookup tables first, indexes and seed data last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_province;
mod m20240301_000002_create_product_type;
mod m20240301_000003_create_locality;
mod m20240301_000004_create_warehouse;
mod m20240301_000005_create_section;
mod m20240301_000006_create_seller;
mod m20240301_000007_create_product;
mod m20240301_000008_create_product_batch;
mod m20240301_000009_create_product_record;
mod m20240301_000010_create_carrier;
mod m20240301_000011_create_buyer;
mod m20240301_000012_create_employee;
mod m20240301_000013_create_inbound_order;
mod m20240301_000014_create_purchase_order;
mod m20240301_000020_add_indexes;
mod m20240301_000021_seed_lookups;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_province::Migration),
            Box::new(m20240301_000002_create_product_type::Migration),
            Box::new(m20240301_000003_create_locality::Migration),
            Box::new(m20240301_000004_create_warehouse::Migration),
            Box::new(m20240301_000005_create_section::Migration),
            Box::new(m20240301_000006_create_seller::Migration),
            Box::new(m20240301_000007_create_product::Migration),
            Box::new(m20240301_000008_create_product_batch::Migration),
            Box::new(m20240301_000009_create_product_record::Migration),
            Box::new(m20240301_000010_create_carrier::Migration),
            Box::new(m20240301_000011_create_buyer::Migration),
            Box::new(m20240301_000012_create_employee::Migration),
            Box::new(m20240301_000013_create_inbound_order::Migration),
            Box::new(m20240301_000014_create_purchase_order::Migration),
            // Indexes and seed rows need every table in place
            Box::new(m20240301_000020_add_indexes::Migration),
            Box::new(m20240301_000021_seed_lookups::Migration),
        ]
    }
}
