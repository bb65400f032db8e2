use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{product, validate};

/// Price snapshot of a product. Rows are only ever appended.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_record")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub last_update_date: DateTimeWithTimeZone,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub product_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Product,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Product => Entity::belongs_to(product::Entity).from(Column::ProductId).to(product::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate(m: &Model) -> Result<(), ModelError> {
    validate::non_negative_f64("purchase_price", m.purchase_price)?;
    validate::non_negative_f64("sale_price", m.sale_price)
}
