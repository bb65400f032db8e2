pub mod domain;
pub mod repository;
pub mod seaorm;
pub mod service;

pub use domain::{NewPurchaseOrder, PurchaseOrderPatch};
pub use repository::PurchaseOrderRepository;
pub use service::PurchaseOrderService;
