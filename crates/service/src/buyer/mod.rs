pub mod domain;
pub mod repository;
pub mod seaorm;
pub mod service;

pub use domain::{BuyerPatch, NewBuyer};
pub use repository::BuyerRepository;
pub use service::BuyerService;
