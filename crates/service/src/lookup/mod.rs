//! Read-only lookup families: provinces (resolved by name for localities)
//! and product types (referenced by sections and products).

pub mod repository;
pub mod seaorm;
pub mod service;

pub use repository::{ProductTypeRepository, ProvinceRepository};
pub use service::{ProductTypeLookup, ProvinceDirectory, ProvinceLookup};
