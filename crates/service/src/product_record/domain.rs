use chrono::{DateTime, FixedOffset, Utc};
use models::product_record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProductRecord {
    /// Defaults to the time of creation.
    #[serde(default)]
    pub last_update_date: Option<DateTime<FixedOffset>>,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub product_id: i64,
}

impl NewProductRecord {
    pub(crate) fn into_candidate(self) -> product_record::Model {
        product_record::Model {
            id: 0,
            last_update_date: self.last_update_date.unwrap_or_else(|| Utc::now().fixed_offset()),
            purchase_price: self.purchase_price,
            sale_price: self.sale_price,
            product_id: self.product_id,
        }
    }
}
