use chrono::NaiveDate;
use models::purchase_order;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPurchaseOrder {
    pub order_number: String,
    pub order_date: NaiveDate,
    pub tracking_code: String,
    pub buyer_id: i64,
    pub product_record_id: i64,
}

impl NewPurchaseOrder {
    pub(crate) fn into_candidate(self) -> purchase_order::Model {
        purchase_order::Model {
            id: 0,
            order_number: self.order_number,
            order_date: self.order_date,
            tracking_code: self.tracking_code,
            buyer_id: self.buyer_id,
            product_record_id: self.product_record_id,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PurchaseOrderPatch {
    pub order_number: Option<String>,
    pub order_date: Option<NaiveDate>,
    pub tracking_code: Option<String>,
    pub buyer_id: Option<i64>,
    pub product_record_id: Option<i64>,
}

impl PurchaseOrderPatch {
    pub(crate) fn apply(self, m: &mut purchase_order::Model) {
        if let Some(v) = self.order_number { m.order_number = v; }
        if let Some(v) = self.order_date { m.order_date = v; }
        if let Some(v) = self.tracking_code { m.tracking_code = v; }
        if let Some(v) = self.buyer_id { m.buyer_id = v; }
        if let Some(v) = self.product_record_id { m.product_record_id = v; }
    }
}
