//! SeaORM entities for the warehouse schema plus connection and validation helpers.
//!
//! Reference columns (`*_id`) are plain integers: the schema carries no
//! foreign-key constraints, the service layer checks them before writing.

pub mod errors;
pub mod db;
pub mod validate;

pub mod province;
pub mod product_type;
pub mod locality;
pub mod warehouse;
pub mod section;
pub mod seller;
pub mod product;
pub mod product_batch;
pub mod product_record;
pub mod carrier;
pub mod buyer;
pub mod employee;
pub mod inbound_order;
pub mod purchase_order;
