use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{product_type, seller, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
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

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Seller,
    ProductType,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Seller => Entity::belongs_to(seller::Entity).from(Column::SellerId).to(seller::Column::Id).into(),
            Relation::ProductType => Entity::belongs_to(product_type::Entity).from(Column::ProductTypeId).to(product_type::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate(m: &Model) -> Result<(), ModelError> {
    validate::required("product_code", &m.product_code)?;
    validate::required("description", &m.description)?;
    validate::non_negative_f64("width", m.width)?;
    validate::non_negative_f64("height", m.height)?;
    validate::non_negative_f64("length", m.length)?;
    validate::non_negative_f64("net_weight", m.net_weight)?;
    validate::non_negative_f64("expiration_rate", m.expiration_rate)?;
    validate::finite("recommended_freezing_temperature", m.recommended_freezing_temperature)?;
    validate::non_negative_f64("freezing_rate", m.freezing_rate)
}
