pub mod domain;
pub mod repository;
pub mod seaorm;
pub mod service;

pub use domain::{CarrierPatch, NewCarrier};
pub use repository::CarrierRepository;
pub use service::CarrierService;
