use models::employee;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
    pub card_number_id: String,
    pub first_name: String,
    pub last_name: String,
    pub warehouse_id: i64,
}

impl NewEmployee {
    pub(crate) fn into_candidate(self) -> employee::Model {
        employee::Model {
            id: 0,
            card_number_id: self.card_number_id,
            first_name: self.first_name,
            last_name: self.last_name,
            warehouse_id: self.warehouse_id,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeePatch {
    pub card_number_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub warehouse_id: Option<i64>,
}

impl EmployeePatch {
    pub(crate) fn apply(self, m: &mut employee::Model) {
        if let Some(v) = self.card_number_id { m.card_number_id = v; }
        if let Some(v) = self.first_name { m.first_name = v; }
        if let Some(v) = self.last_name { m.last_name = v; }
        if let Some(v) = self.warehouse_id { m.warehouse_id = v; }
    }
}
