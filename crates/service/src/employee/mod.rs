pub mod domain;
pub mod repository;
pub mod seaorm;
pub mod service;

pub use domain::{EmployeePatch, NewEmployee};
pub use repository::EmployeeRepository;
pub use service::EmployeeService;
