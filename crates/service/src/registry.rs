//! Wires every service over one store.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::buyer::{BuyerRepository, BuyerService};
use crate::carrier::{CarrierRepository, CarrierService};
use crate::employee::{EmployeeRepository, EmployeeService};
use crate::exists::ExistsById;
use crate::inbound_order::{InboundOrderRepository, InboundOrderService};
use crate::locality::{LocalityRepository, LocalityService};
use crate::lookup::{ProductTypeLookup, ProductTypeRepository, ProvinceDirectory, ProvinceLookup, ProvinceRepository};
use crate::product::{ProductRepository, ProductService};
use crate::product_batch::{ProductBatchRepository, ProductBatchService};
use crate::product_record::{ProductRecordRepository, ProductRecordService};
use crate::purchase_order::{PurchaseOrderRepository, PurchaseOrderService};
use crate::section::{SectionRepository, SectionService};
use crate::seaorm::SeaOrmStore;
use crate::seller::{SellerRepository, SellerService};
use crate::warehouse::{WarehouseRepository, WarehouseService};

/// A backend implementing every family's gateway.
pub trait Store:
    ProvinceRepository
    + ProductTypeRepository
    + LocalityRepository
    + WarehouseRepository
    + SectionRepository
    + SellerRepository
    + ProductRepository
    + ProductBatchRepository
    + ProductRecordRepository
    + CarrierRepository
    + BuyerRepository
    + EmployeeRepository
    + InboundOrderRepository
    + PurchaseOrderRepository
    + 'static
{
}

impl<T> Store for T where
    T: ProvinceRepository
        + ProductTypeRepository
        + LocalityRepository
        + WarehouseRepository
        + SectionRepository
        + SellerRepository
        + ProductRepository
        + ProductBatchRepository
        + ProductRecordRepository
        + CarrierRepository
        + BuyerRepository
        + EmployeeRepository
        + InboundOrderRepository
        + PurchaseOrderRepository
        + 'static
{
}

#[derive(Clone)]
pub struct Services {
    pub provinces: Arc<ProvinceLookup>,
    pub product_types: Arc<ProductTypeLookup>,
    pub localities: Arc<LocalityService>,
    pub warehouses: Arc<WarehouseService>,
    pub sections: Arc<SectionService>,
    pub sellers: Arc<SellerService>,
    pub products: Arc<ProductService>,
    pub product_batches: Arc<ProductBatchService>,
    pub product_records: Arc<ProductRecordService>,
    pub carriers: Arc<CarrierService>,
    pub buyers: Arc<BuyerService>,
    pub employees: Arc<EmployeeService>,
    pub inbound_orders: Arc<InboundOrderService>,
    pub purchase_orders: Arc<PurchaseOrderService>,
}

impl Services {
    /// Build the services leaves first; each one only sees the existence
    /// predicates of the families it references.
    pub fn new<S: Store>(store: Arc<S>) -> Self {
        let provinces = Arc::new(ProvinceLookup::new(store.clone() as Arc<dyn ProvinceRepository>));
        let product_types = Arc::new(ProductTypeLookup::new(store.clone() as Arc<dyn ProductTypeRepository>));
        let localities = Arc::new(LocalityService::new(
            store.clone() as Arc<dyn LocalityRepository>,
            provinces.clone() as Arc<dyn ProvinceDirectory>,
        ));
        let warehouses = Arc::new(WarehouseService::new(
            store.clone() as Arc<dyn WarehouseRepository>,
            predicate(&localities),
        ));
        let sections = Arc::new(SectionService::new(
            store.clone() as Arc<dyn SectionRepository>,
            predicate(&warehouses),
            predicate(&product_types),
        ));
        let sellers = Arc::new(SellerService::new(store.clone() as Arc<dyn SellerRepository>, predicate(&localities)));
        let products = Arc::new(ProductService::new(
            store.clone() as Arc<dyn ProductRepository>,
            predicate(&sellers),
            predicate(&product_types),
        ));
        let product_batches = Arc::new(ProductBatchService::new(
            store.clone() as Arc<dyn ProductBatchRepository>,
            predicate(&products),
            predicate(&sections),
        ));
        let product_records = Arc::new(ProductRecordService::new(
            store.clone() as Arc<dyn ProductRecordRepository>,
            predicate(&products),
        ));
        let carriers = Arc::new(CarrierService::new(store.clone() as Arc<dyn CarrierRepository>, predicate(&localities)));
        let buyers = Arc::new(BuyerService::new(store.clone() as Arc<dyn BuyerRepository>));
        let employees = Arc::new(EmployeeService::new(
            store.clone() as Arc<dyn EmployeeRepository>,
            predicate(&warehouses),
        ));
        let inbound_orders = Arc::new(InboundOrderService::new(
            store.clone() as Arc<dyn InboundOrderRepository>,
            predicate(&employees),
            predicate(&product_batches),
            predicate(&warehouses),
        ));
        let purchase_orders = Arc::new(PurchaseOrderService::new(
            store as Arc<dyn PurchaseOrderRepository>,
            predicate(&buyers),
            predicate(&product_records),
        ));
        Self {
            provinces,
            product_types,
            localities,
            warehouses,
            sections,
            sellers,
            products,
            product_batches,
            product_records,
            carriers,
            buyers,
            employees,
            inbound_orders,
            purchase_orders,
        }
    }

    pub fn seaorm(db: DatabaseConnection) -> Self { Self::new(Arc::new(SeaOrmStore::new(db))) }
}

fn predicate<T: ExistsById + 'static>(service: &Arc<T>) -> Arc<dyn ExistsById> { service.clone() }
