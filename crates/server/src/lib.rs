pub mod errors;
pub mod metrics;
pub mod routes;
pub mod startup;

pub use startup::{load_config, serve};
