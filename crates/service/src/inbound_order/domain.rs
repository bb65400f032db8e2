use chrono::NaiveDate;
use models::inbound_order;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewInboundOrder {
    pub order_number: String,
    pub order_date: NaiveDate,
    pub employee_id: i64,
    pub product_batch_id: i64,
    pub warehouse_id: i64,
}

impl NewInboundOrder {
    pub(crate) fn into_candidate(self) -> inbound_order::Model {
        inbound_order::Model {
            id: 0,
            order_number: self.order_number,
            order_date: self.order_date,
            employee_id: self.employee_id,
            product_batch_id: self.product_batch_id,
            warehouse_id: self.warehouse_id,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InboundOrderPatch {
    pub order_number: Option<String>,
    pub order_date: Option<NaiveDate>,
    pub employee_id: Option<i64>,
    pub product_batch_id: Option<i64>,
    pub warehouse_id: Option<i64>,
}

impl InboundOrderPatch {
    pub(crate) fn apply(self, m: &mut inbound_order::Model) {
        if let Some(v) = self.order_number { m.order_number = v; }
        if let Some(v) = self.order_date { m.order_date = v; }
        if let Some(v) = self.employee_id { m.employee_id = v; }
        if let Some(v) = self.product_batch_id { m.product_batch_id = v; }
        if let Some(v) = self.warehouse_id { m.warehouse_id = v; }
    }
}
