use models::warehouse;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWarehouse {
    pub warehouse_code: String,
    pub address: String,
    pub telephone: String,
    pub minimum_capacity: i32,
    pub minimum_temperature: f64,
    #[serde(default)]
    pub locality_id: Option<i64>,
}

impl NewWarehouse {
    pub(crate) fn into_candidate(self) -> warehouse::Model {
        warehouse::Model {
            id: 0,
            warehouse_code: self.warehouse_code,
            address: self.address,
            telephone: self.telephone,
            minimum_capacity: self.minimum_capacity,
            minimum_temperature: self.minimum_temperature,
            locality_id: self.locality_id,
        }
    }
}

/// Partial update. `locality_id: Some(None)` clears the locality.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WarehousePatch {
    pub warehouse_code: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
    pub minimum_capacity: Option<i32>,
    pub minimum_temperature: Option<f64>,
    #[serde(default, deserialize_with = "crate::patch::double_option")]
    pub locality_id: Option<Option<i64>>,
}

impl WarehousePatch {
    pub(crate) fn apply(self, m: &mut warehouse::Model) {
        if let Some(v) = self.warehouse_code { m.warehouse_code = v; }
        if let Some(v) = self.address { m.address = v; }
        if let Some(v) = self.telephone { m.telephone = v; }
        if let Some(v) = self.minimum_capacity { m.minimum_capacity = v; }
        if let Some(v) = self.minimum_temperature { m.minimum_temperature = v; }
        if let Some(v) = self.locality_id { m.locality_id = v; }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_locality_is_distinct_from_missing() {
        let cleared: WarehousePatch = serde_json::from_str(r#"{"locality_id": null}"#).unwrap();
        assert_eq!(cleared.locality_id, Some(None));
        let untouched: WarehousePatch = serde_json::from_str(r#"{"address": "Calle 2"}"#).unwrap();
        assert_eq!(untouched.locality_id, None);
    }
}
