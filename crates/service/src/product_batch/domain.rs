use chrono::NaiveDate;
use models::product_batch;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProductBatch {
    pub batch_number: i32,
    pub current_quantity: i32,
    pub current_temperature: f64,
    pub due_date: NaiveDate,
    pub initial_quantity: i32,
    pub manufacturing_date: NaiveDate,
    pub manufacturing_hour: i32,
    pub minimum_temperature: f64,
    pub product_id: i64,
    pub section_id: i64,
}

impl NewProductBatch {
    pub(crate) fn into_candidate(self) -> product_batch::Model {
        product_batch::Model {
            id: 0,
            batch_number: self.batch_number,
            current_quantity: self.current_quantity,
            current_temperature: self.current_temperature,
            due_date: self.due_date,
            initial_quantity: self.initial_quantity,
            manufacturing_date: self.manufacturing_date,
            manufacturing_hour: self.manufacturing_hour,
            minimum_temperature: self.minimum_temperature,
            product_id: self.product_id,
            section_id: self.section_id,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductBatchPatch {
    pub batch_number: Option<i32>,
    pub current_quantity: Option<i32>,
    pub current_temperature: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub initial_quantity: Option<i32>,
    pub manufacturing_date: Option<NaiveDate>,
    pub manufacturing_hour: Option<i32>,
    pub minimum_temperature: Option<f64>,
    pub product_id: Option<i64>,
    pub section_id: Option<i64>,
}

impl ProductBatchPatch {
    pub(crate) fn apply(self, m: &mut product_batch::Model) {
        if let Some(v) = self.batch_number { m.batch_number = v; }
        if let Some(v) = self.current_quantity { m.current_quantity = v; }
        if let Some(v) = self.current_temperature { m.current_temperature = v; }
        if let Some(v) = self.due_date { m.due_date = v; }
        if let Some(v) = self.initial_quantity { m.initial_quantity = v; }
        if let Some(v) = self.manufacturing_date { m.manufacturing_date = v; }
        if let Some(v) = self.manufacturing_hour { m.manufacturing_hour = v; }
        if let Some(v) = self.minimum_temperature { m.minimum_temperature = v; }
        if let Some(v) = self.product_id { m.product_id = v; }
        if let Some(v) = self.section_id { m.section_id = v; }
    }
}
