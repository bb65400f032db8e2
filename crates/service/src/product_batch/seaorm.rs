use async_trait::async_trait;
use models::product_batch;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use super::repository::ProductBatchRepository;
use crate::errors::ServiceError;
use crate::seaorm::SeaOrmStore;

fn active(m: product_batch::Model) -> product_batch::ActiveModel {
    product_batch::ActiveModel {
        id: Unchanged(m.id),
        batch_number: Set(m.batch_number),
        current_quantity: Set(m.current_quantity),
        current_temperature: Set(m.current_temperature),
        due_date: Set(m.due_date),
        initial_quantity: Set(m.initial_quantity),
        manufacturing_date: Set(m.manufacturing_date),
        manufacturing_hour: Set(m.manufacturing_hour),
        minimum_temperature: Set(m.minimum_temperature),
        product_id: Set(m.product_id),
        section_id: Set(m.section_id),
    }
}

#[async_trait]
impl ProductBatchRepository for SeaOrmStore {
    async fn list(&self) -> Result<Vec<product_batch::Model>, ServiceError> {
        Ok(product_batch::Entity::find().order_by_asc(product_batch::Column::Id).all(&self.db).await?)
    }

    async fn get(&self, id: i64) -> Result<Option<product_batch::Model>, ServiceError> {
        Ok(product_batch::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(product_batch::Entity::find_by_id(id).count(&self.db).await? > 0)
    }

    async fn number_taken(&self, product_id: i64, batch_number: i32) -> Result<bool, ServiceError> {
        let n = product_batch::Entity::find()
            .filter(product_batch::Column::ProductId.eq(product_id))
            .filter(product_batch::Column::BatchNumber.eq(batch_number))
            .count(&self.db)
            .await?;
        Ok(n > 0)
    }

    async fn insert(&self, candidate: product_batch::Model) -> Result<product_batch::Model, ServiceError> {
        let mut am = active(candidate);
        am.id = NotSet;
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, model: product_batch::Model) -> Result<product_batch::Model, ServiceError> {
        Ok(active(model).update(&self.db).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(product_batch::Entity::delete_by_id(id).exec(&self.db).await?.rows_affected > 0)
    }
}
