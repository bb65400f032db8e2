pub mod domain;
pub mod repository;
pub mod seaorm;
pub mod service;

pub use domain::{NewProductBatch, ProductBatchPatch};
pub use repository::ProductBatchRepository;
pub use service::ProductBatchService;
