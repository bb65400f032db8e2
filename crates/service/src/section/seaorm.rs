use async_trait::async_trait;
use models::{product_batch, section};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, RelationTrait};

use super::repository::SectionRepository;
use crate::errors::ServiceError;
use crate::report::{count_by_parent, CountReport};
use crate::seaorm::SeaOrmStore;

fn active(m: section::Model) -> section::ActiveModel {
    section::ActiveModel {
        id: Unchanged(m.id),
        section_number: Set(m.section_number),
        current_temperature: Set(m.current_temperature),
        minimum_temperature: Set(m.minimum_temperature),
        current_capacity: Set(m.current_capacity),
        minimum_capacity: Set(m.minimum_capacity),
        maximum_capacity: Set(m.maximum_capacity),
        warehouse_id: Set(m.warehouse_id),
        product_type_id: Set(m.product_type_id),
    }
}

#[async_trait]
impl SectionRepository for SeaOrmStore {
    async fn list(&self) -> Result<Vec<section::Model>, ServiceError> {
        Ok(section::Entity::find().order_by_asc(section::Column::Id).all(&self.db).await?)
    }

    async fn get(&self, id: i64) -> Result<Option<section::Model>, ServiceError> {
        Ok(section::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(section::Entity::find_by_id(id).count(&self.db).await? > 0)
    }

    async fn number_taken(&self, section_number: &str) -> Result<bool, ServiceError> {
        let n = section::Entity::find()
            .filter(section::Column::SectionNumber.eq(section_number))
            .count(&self.db)
            .await?;
        Ok(n > 0)
    }

    async fn insert(&self, candidate: section::Model) -> Result<section::Model, ServiceError> {
        let mut am = active(candidate);
        am.id = NotSet;
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, model: section::Model) -> Result<section::Model, ServiceError> {
        Ok(active(model).update(&self.db).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(section::Entity::delete_by_id(id).exec(&self.db).await?.rows_affected > 0)
    }

    async fn count_batches(&self, only: Option<i64>) -> Result<Vec<CountReport>, ServiceError> {
        count_by_parent::<section::Entity, _>(
            &self.db,
            section::Column::Id,
            section::Column::SectionNumber,
            product_batch::Relation::Section.def().rev(),
            product_batch::Column::Id,
            only,
        )
        .await
    }
}
