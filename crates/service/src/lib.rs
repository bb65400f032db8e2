//! Validation and reporting layer of the warehouse backend.
//! - One repository trait per entity family, implemented by the SeaORM store
//!   and by the in-memory store used in tests.
//! - One service per family enforcing uniqueness and reference checks.
//! - Cross-family checks go through [`exists::ExistsById`] only.

pub mod errors;
pub mod exists;
pub mod patch;
pub mod report;
pub mod memory;
pub mod seaorm;
pub mod registry;
pub mod lookup;

pub mod warehouse;
pub mod section;
pub mod product;
pub mod product_batch;
pub mod product_record;
pub mod seller;
pub mod locality;
pub mod carrier;
pub mod buyer;
pub mod employee;
pub mod inbound_order;
pub mod purchase_order;

#[cfg(test)]
pub mod test_support;
