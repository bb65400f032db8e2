use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{employee, product_batch, validate, warehouse};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inbound_order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub order_number: String,
    pub order_date: Date,
    pub employee_id: i64,
    pub product_batch_id: i64,
    pub warehouse_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Employee,
    ProductBatch,
    Warehouse,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Employee => Entity::belongs_to(employee::Entity).from(Column::EmployeeId).to(employee::Column::Id).into(),
            Relation::ProductBatch => Entity::belongs_to(product_batch::Entity).from(Column::ProductBatchId).to(product_batch::Column::Id).into(),
            Relation::Warehouse => Entity::belongs_to(warehouse::Entity).from(Column::WarehouseId).to(warehouse::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate(m: &Model) -> Result<(), ModelError> {
    validate::required("order_number", &m.order_number)
}
