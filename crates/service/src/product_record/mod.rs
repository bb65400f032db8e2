//! Product price history. Records are append-only: no update, no delete.

pub mod domain;
pub mod repository;
pub mod seaorm;
pub mod service;

pub use domain::NewProductRecord;
pub use repository::ProductRecordRepository;
pub use service::ProductRecordService;
