//! Localities. Clients name the province; the service stores its id.

pub mod domain;
pub mod repository;
pub mod seaorm;
pub mod service;

pub use domain::{LocalityPatch, NewLocality};
pub use repository::LocalityRepository;
pub use service::LocalityService;
