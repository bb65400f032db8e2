#![cfg(test)]
use std::sync::Arc;

use chrono::NaiveDate;
use migration::MigratorTrait;
use models::db::connect_with_config;
use models::{buyer, employee, locality, product, product_batch, product_record, section, seller, warehouse};
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

use crate::buyer::NewBuyer;
use crate::carrier::NewCarrier;
use crate::employee::NewEmployee;
use crate::inbound_order::NewInboundOrder;
use crate::locality::NewLocality;
use crate::memory::MemoryStore;
use crate::product::NewProduct;
use crate::product_batch::NewProductBatch;
use crate::product_record::NewProductRecord;
use crate::purchase_order::NewPurchaseOrder;
use crate::registry::Services;
use crate::section::NewSection;
use crate::seller::NewSeller;
use crate::warehouse::NewWarehouse;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// Connection to the configured test database, or `None` when DB tests are
/// switched off (`SKIP_DB_TESTS`) or nothing is reachable.
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let cfg = match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg.database,
        Err(e) => {
            eprintln!("skip: no database configured: {e}");
            return None;
        }
    };
    let migrated = *MIGRATED
        .get_or_init(|| async {
            match connect_with_config(&cfg).await {
                Ok(db) => migration::Migrator::up(&db, None).await.is_ok(),
                Err(_) => false,
            }
        })
        .await;
    if !migrated {
        eprintln!("skip: cannot connect to or migrate the test database");
        return None;
    }
    connect_with_config(&cfg).await.ok()
}

/// In-memory services over a store seeded with the default lookups.
pub fn fixture() -> (Arc<MemoryStore>, Services) {
    let store = Arc::new(MemoryStore::seeded());
    let services = Services::new(store.clone());
    (store, services)
}

pub fn new_locality(locality_name: &str, province_name: &str) -> NewLocality {
    NewLocality { locality_name: locality_name.into(), province_name: province_name.into() }
}

pub fn new_warehouse(code: &str) -> NewWarehouse {
    NewWarehouse {
        warehouse_code: code.into(),
        address: "Av. Corrientes 1234".into(),
        telephone: "+54 11 5555 0000".into(),
        minimum_capacity: 100,
        minimum_temperature: -18.0,
        locality_id: None,
    }
}

pub fn new_section(number: &str, warehouse_id: i64) -> NewSection {
    NewSection {
        section_number: number.into(),
        current_temperature: 2.0,
        minimum_temperature: -5.0,
        current_capacity: 10,
        minimum_capacity: 5,
        maximum_capacity: 50,
        warehouse_id,
        product_type_id: 1,
    }
}

pub fn new_seller(cid: i32, locality_id: i64) -> NewSeller {
    NewSeller {
        cid,
        company_name: format!("Seller {cid}"),
        address: "Calle Falsa 123".into(),
        telephone: "4444-1234".into(),
        locality_id,
    }
}

pub fn new_product(code: &str, seller_id: i64) -> NewProduct {
    NewProduct {
        product_code: code.into(),
        description: format!("product {code}"),
        width: 1.5,
        height: 0.5,
        length: 2.0,
        net_weight: 3.25,
        expiration_rate: 0.1,
        recommended_freezing_temperature: -20.0,
        freezing_rate: 0.5,
        product_type_id: 1,
        seller_id,
    }
}

pub fn new_batch(batch_number: i32, product_id: i64, section_id: i64) -> NewProductBatch {
    NewProductBatch {
        batch_number,
        current_quantity: 200,
        current_temperature: 4.0,
        due_date: date(2024, 9, 1),
        initial_quantity: 200,
        manufacturing_date: date(2024, 6, 1),
        manufacturing_hour: 10,
        minimum_temperature: -2.0,
        product_id,
        section_id,
    }
}

pub fn new_record(product_id: i64) -> NewProductRecord {
    NewProductRecord { last_update_date: None, purchase_price: 10.0, sale_price: 15.5, product_id }
}

pub fn new_carrier(cid: &str, locality_id: i64) -> NewCarrier {
    NewCarrier {
        cid: cid.into(),
        company_name: format!("Carrier {cid}"),
        address: "Ruta 9 km 12".into(),
        telephone: "0351-555-0000".into(),
        locality_id,
    }
}

pub fn new_buyer(card: &str) -> NewBuyer {
    NewBuyer { card_number_id: card.into(), first_name: "Ana".into(), last_name: "Suarez".into() }
}

pub fn new_employee(card: &str, warehouse_id: i64) -> NewEmployee {
    NewEmployee { card_number_id: card.into(), first_name: "Luis".into(), last_name: "Perez".into(), warehouse_id }
}

pub fn new_inbound(order_number: &str, employee_id: i64, product_batch_id: i64, warehouse_id: i64) -> NewInboundOrder {
    NewInboundOrder { order_number: order_number.into(), order_date: date(2024, 7, 1), employee_id, product_batch_id, warehouse_id }
}

pub fn new_purchase(order_number: &str, buyer_id: i64, product_record_id: i64) -> NewPurchaseOrder {
    NewPurchaseOrder {
        order_number: order_number.into(),
        order_date: date(2024, 7, 2),
        tracking_code: "TRK-1".into(),
        buyer_id,
        product_record_id,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// One row of every family, each referencing the one before it.
pub struct Chain {
    pub locality: locality::Model,
    pub warehouse: warehouse::Model,
    pub section: section::Model,
    pub seller: seller::Model,
    pub product: product::Model,
    pub batch: product_batch::Model,
    pub record: product_record::Model,
    pub buyer: buyer::Model,
    pub employee: employee::Model,
}

pub async fn chain(s: &Services) -> Chain {
    let locality = s.localities.create(new_locality("Palermo", "Buenos Aires")).await.unwrap();
    let warehouse = s
        .warehouses
        .create(NewWarehouse { locality_id: Some(locality.id), ..new_warehouse("WH-1") })
        .await
        .unwrap();
    let section = s.sections.create(new_section("S-1", warehouse.id)).await.unwrap();
    let seller = s.sellers.create(new_seller(1, locality.id)).await.unwrap();
    let product = s.products.create(new_product("P-1", seller.id)).await.unwrap();
    let batch = s.product_batches.create(new_batch(1, product.id, section.id)).await.unwrap();
    let record = s.product_records.create(new_record(product.id)).await.unwrap();
    let buyer = s.buyers.create(new_buyer("B-1")).await.unwrap();
    let employee = s.employees.create(new_employee("E-1", warehouse.id)).await.unwrap();
    Chain { locality, warehouse, section, seller, product, batch, record, buyer, employee }
}
