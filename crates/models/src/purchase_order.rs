use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{buyer, product_record, validate};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "purchase_order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub order_number: String,
    pub order_date: Date,
    pub tracking_code: String,
    pub buyer_id: i64,
    pub product_record_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Buyer,
    ProductRecord,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Buyer => Entity::belongs_to(buyer::Entity).from(Column::BuyerId).to(buyer::Column::Id).into(),
            Relation::ProductRecord => Entity::belongs_to(product_record::Entity).from(Column::ProductRecordId).to(product_record::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate(m: &Model) -> Result<(), ModelError> {
    validate::required("order_number", &m.order_number)?;
    validate::required("tracking_code", &m.tracking_code)
}
