use models::section;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSection {
    pub section_number: String,
    pub current_temperature: f64,
    pub minimum_temperature: f64,
    pub current_capacity: i32,
    pub minimum_capacity: i32,
    pub maximum_capacity: i32,
    pub warehouse_id: i64,
    pub product_type_id: i64,
}

impl NewSection {
    pub(crate) fn into_candidate(self) -> section::Model {
        section::Model {
            id: 0,
            section_number: self.section_number,
            current_temperature: self.current_temperature,
            minimum_temperature: self.minimum_temperature,
            current_capacity: self.current_capacity,
            minimum_capacity: self.minimum_capacity,
            maximum_capacity: self.maximum_capacity,
            warehouse_id: self.warehouse_id,
            product_type_id: self.product_type_id,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionPatch {
    pub section_number: Option<String>,
    pub current_temperature: Option<f64>,
    pub minimum_temperature: Option<f64>,
    pub current_capacity: Option<i32>,
    pub minimum_capacity: Option<i32>,
    pub maximum_capacity: Option<i32>,
    pub warehouse_id: Option<i64>,
    pub product_type_id: Option<i64>,
}

impl SectionPatch {
    pub(crate) fn apply(self, m: &mut section::Model) {
        if let Some(v) = self.section_number { m.section_number = v; }
        if let Some(v) = self.current_temperature { m.current_temperature = v; }
        if let Some(v) = self.minimum_temperature { m.minimum_temperature = v; }
        if let Some(v) = self.current_capacity { m.current_capacity = v; }
        if let Some(v) = self.minimum_capacity { m.minimum_capacity = v; }
        if let Some(v) = self.maximum_capacity { m.maximum_capacity = v; }
        if let Some(v) = self.warehouse_id { m.warehouse_id = v; }
        if let Some(v) = self.product_type_id { m.product_type_id = v; }
    }
}
