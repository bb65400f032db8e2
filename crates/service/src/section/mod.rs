pub mod domain;
pub mod repository;
pub mod seaorm;
pub mod service;

pub use domain::{NewSection, SectionPatch};
pub use repository::SectionRepository;
pub use service::SectionService;
