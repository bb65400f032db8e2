pub mod domain;
pub mod repository;
pub mod seaorm;
pub mod service;

pub use domain::{NewWarehouse, WarehousePatch};
pub use repository::WarehouseRepository;
pub use service::WarehouseService;
