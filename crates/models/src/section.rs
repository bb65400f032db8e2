use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{product_type, validate, warehouse};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "section")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub section_number: String,
    pub current_temperature: f64,
    pub minimum_temperature: f64,
    pub current_capacity: i32,
    pub minimum_capacity: i32,
    pub maximum_capacity: i32,
    pub warehouse_id: i64,
    pub product_type_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Warehouse,
    ProductType,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Warehouse => Entity::belongs_to(warehouse::Entity).from(Column::WarehouseId).to(warehouse::Column::Id).into(),
            Relation::ProductType => Entity::belongs_to(product_type::Entity).from(Column::ProductTypeId).to(product_type::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate(m: &Model) -> Result<(), ModelError> {
    validate::required("section_number", &m.section_number)?;
    validate::finite("current_temperature", m.current_temperature)?;
    validate::finite("minimum_temperature", m.minimum_temperature)?;
    validate::non_negative_i32("current_capacity", m.current_capacity)?;
    validate::non_negative_i32("minimum_capacity", m.minimum_capacity)?;
    validate::non_negative_i32("maximum_capacity", m.maximum_capacity)?;
    if m.minimum_capacity > m.maximum_capacity {
        return Err(ModelError::validation("minimum_capacity must not exceed maximum_capacity"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> Model {
        Model {
            id: 0,
            section_number: "S-01".into(),
            current_temperature: 2.0,
            minimum_temperature: -5.0,
            current_capacity: 10,
            minimum_capacity: 5,
            maximum_capacity: 50,
            warehouse_id: 1,
            product_type_id: 1,
        }
    }

    #[test]
    fn accepts_consistent_capacities() {
        assert!(validate(&section()).is_ok());
    }

    #[test]
    fn rejects_inverted_capacities() {
        let m = Model { minimum_capacity: 60, ..section() };
        assert_eq!(
            validate(&m),
            Err(ModelError::validation("minimum_capacity must not exceed maximum_capacity"))
        );
    }
}
