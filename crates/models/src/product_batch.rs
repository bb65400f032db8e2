use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{product, section, validate};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product_batch")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub batch_number: i32,
    pub current_quantity: i32,
    pub current_temperature: f64,
    pub due_date: Date,
    pub initial_quantity: i32,
    pub manufacturing_date: Date,
    pub manufacturing_hour: i32,
    pub minimum_temperature: f64,
    pub product_id: i64,
    pub section_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Product,
    Section,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Product => Entity::belongs_to(product::Entity).from(Column::ProductId).to(product::Column::Id).into(),
            Relation::Section => Entity::belongs_to(section::Entity).from(Column::SectionId).to(section::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate(m: &Model) -> Result<(), ModelError> {
    validate::non_negative_i32("batch_number", m.batch_number)?;
    validate::non_negative_i32("current_quantity", m.current_quantity)?;
    validate::non_negative_i32("initial_quantity", m.initial_quantity)?;
    validate::finite("current_temperature", m.current_temperature)?;
    validate::finite("minimum_temperature", m.minimum_temperature)?;
    if !(0..=23).contains(&m.manufacturing_hour) {
        return Err(ModelError::validation("manufacturing_hour must be in 0..=23"));
    }
    if m.due_date < m.manufacturing_date {
        return Err(ModelError::validation("due_date must not precede manufacturing_date"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn batch() -> Model {
        Model {
            id: 0,
            batch_number: 111,
            current_quantity: 200,
            current_temperature: 20.0,
            due_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            initial_quantity: 200,
            manufacturing_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            manufacturing_hour: 10,
            minimum_temperature: 5.0,
            product_id: 1,
            section_id: 1,
        }
    }

    #[test]
    fn accepts_well_formed_batch() {
        assert!(validate(&batch()).is_ok());
    }

    #[test]
    fn rejects_hour_out_of_range() {
        assert!(validate(&Model { manufacturing_hour: 24, ..batch() }).is_err());
    }

    #[test]
    fn rejects_due_date_before_manufacturing() {
        let m = Model { due_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(), ..batch() };
        assert!(validate(&m).is_err());
    }

    #[test]
    fn serializes_dates_as_iso_strings() {
        let json = serde_json::to_value(batch()).unwrap();
        assert_eq!(json["due_date"], "2024-09-01");
    }
}
