pub mod domain;
pub mod repository;
pub mod seaorm;
pub mod service;

pub use domain::{InboundOrderPatch, NewInboundOrder};
pub use repository::InboundOrderRepository;
pub use service::InboundOrderService;
