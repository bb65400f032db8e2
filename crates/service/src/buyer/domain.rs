use models::buyer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBuyer {
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
}

impl NewBuyer {
    pub(crate) fn into_candidate(self) -> buyer::Model {
        buyer::Model { id: 0, card_number_id: self.card_number_id, first_name: self.first_name, last_name: self.last_name }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuyerPatch {
    pub card_number_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl BuyerPatch {
    pub(crate) fn apply(self, m: &mut buyer::Model) {
        if let Some(v) = self.card_number_id { m.card_number_id = v; }
        if let Some(v) = self.first_name { m.first_name = v; }
        if let Some(v) = self.last_name { m.last_name = v; }
    }
}
