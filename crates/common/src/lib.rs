//! Cross-crate helpers shared by the binary and the HTTP layer.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok", service: "warehouse_api" };
        assert_eq!(h.status, "ok");
    }
}
