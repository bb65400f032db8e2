use models::seller;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSeller {
    pub cid: i32,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: i64,
}

impl NewSeller {
    pub(crate) fn into_candidate(self) -> seller::Model {
        seller::Model {
            id: 0,
            cid: self.cid,
            company_name: self.company_name,
            address: self.address,
            telephone: self.telephone,
            locality_id: self.locality_id,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SellerPatch {
    pub cid: Option<i32>,
    pub company_name: Option<String>,
    pub address: Option<String>,
    pub telephone: Option<String>,
    pub locality_id: Option<i64>,
}

impl SellerPatch {
    pub(crate) fn apply(self, m: &mut seller::Model) {
        if let Some(v) = self.cid { m.cid = v; }
        if let Some(v) = self.company_name { m.company_name = v; }
        if let Some(v) = self.address { m.address = v; }
        if let Some(v) = self.telephone { m.telephone = v; }
        if let Some(v) = self.locality_id { m.locality_id = v; }
    }
}
