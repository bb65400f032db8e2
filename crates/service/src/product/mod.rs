pub mod domain;
pub mod repository;
pub mod seaorm;
pub mod service;

pub use domain::{NewProduct, ProductPatch};
pub use repository::ProductRepository;
pub use service::ProductService;
