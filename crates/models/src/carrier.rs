use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;
use crate::{locality, validate};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "carrier")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub cid: String,
    pub company_name: String,
    pub address: String,
    pub telephone: String,
    pub locality_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Locality,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Locality => Entity::belongs_to(locality::Entity).from(Column::LocalityId).to(locality::Column::Id).into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate(m: &Model) -> Result<(), ModelError> {
    validate::required("cid", &m.cid)?;
    validate::required("company_name", &m.company_name)?;
    validate::required("address", &m.address)?;
    validate::required("telephone", &m.telephone)
}
