use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLocality {
    pub locality_name: String,
    pub province_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalityPatch {
    pub locality_name: Option<String>,
    pub province_name: Option<String>,
}
