pub mod domain;
pub mod repository;
pub mod seaorm;
pub mod service;

pub use domain::{NewSeller, SellerPatch};
pub use repository::SellerRepository;
pub use service::SellerService;
