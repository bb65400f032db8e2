use models::product;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub product_code: String,
    pub description: String,
    pub width: f64,
    pub height: f64,
    pub length: f64,
    pub net_weight: f64,
    pub expiration_rate: f64,
    pub recommended_freezing_temperature: f64,
    pub freezing_rate: f64,
    pub product_type_id: i64,
    pub seller_id: i64,
}

impl NewProduct {
    pub(crate) fn into_candidate(self) -> product::Model {
        product::Model {
            id: 0,
            product_code: self.product_code,
            description: self.description,
            width: self.width,
            height: self.height,
            length: self.length,
            net_weight: self.net_weight,
            expiration_rate: self.expiration_rate,
            recommended_freezing_temperature: self.recommended_freezing_temperature,
            freezing_rate: self.freezing_rate,
            product_type_id: self.product_type_id,
            seller_id: self.seller_id,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub product_code: Option<String>,
    pub description: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub length: Option<f64>,
    pub net_weight: Option<f64>,
    pub expiration_rate: Option<f64>,
    pub recommended_freezing_temperature: Option<f64>,
    pub freezing_rate: Option<f64>,
    pub product_type_id: Option<i64>,
    pub seller_id: Option<i64>,
}

impl ProductPatch {
    pub(crate) fn apply(self, m: &mut product::Model) {
        if let Some(v) = self.product_code { m.product_code = v; }
        if let Some(v) = self.description { m.description = v; }
        if let Some(v) = self.width { m.width = v; }
        if let Some(v) = self.height { m.height = v; }
        if let Some(v) = self.length { m.length = v; }
        if let Some(v) = self.net_weight { m.net_weight = v; }
        if let Some(v) = self.expiration_rate { m.expiration_rate = v; }
        if let Some(v) = self.recommended_freezing_temperature { m.recommended_freezing_temperature = v; }
        if let Some(v) = self.freezing_rate { m.freezing_rate = v; }
        if let Some(v) = self.product_type_id { m.product_type_id = v; }
        if let Some(v) = self.seller_id { m.seller_id = v; }
    }
}
