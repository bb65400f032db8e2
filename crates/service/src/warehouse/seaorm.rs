use async_trait::async_trait;
use models::warehouse;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use super::repository::WarehouseRepository;
use crate::errors::ServiceError;
use crate::seaorm::SeaOrmStore;

fn active(m: warehouse::Model) -> warehouse::ActiveModel {
    warehouse::ActiveModel {
        id: Unchanged(m.id),
        warehouse_code: Set(m.warehouse_code),
        address: Set(m.address),
        telephone: Set(m.telephone),
        minimum_capacity: Set(m.minimum_capacity),
        minimum_temperature: Set(m.minimum_temperature),
        locality_id: Set(m.locality_id),
    }
}

#[async_trait]
impl WarehouseRepository for SeaOrmStore {
    async fn list(&self) -> Result<Vec<warehouse::Model>, ServiceError> {
        Ok(warehouse::Entity::find().order_by_asc(warehouse::Column::Id).all(&self.db).await?)
    }

    async fn get(&self, id: i64) -> Result<Option<warehouse::Model>, ServiceError> {
        Ok(warehouse::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(warehouse::Entity::find_by_id(id).count(&self.db).await? > 0)
    }

    async fn code_taken(&self, warehouse_code: &str) -> Result<bool, ServiceError> {
        let n = warehouse::Entity::find()
            .filter(warehouse::Column::WarehouseCode.eq(warehouse_code))
            .count(&self.db)
            .await?;
        Ok(n > 0)
    }

    async fn insert(&self, candidate: warehouse::Model) -> Result<warehouse::Model, ServiceError> {
        let mut am = active(candidate);
        am.id = NotSet;
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, model: warehouse::Model) -> Result<warehouse::Model, ServiceError> {
        Ok(active(model).update(&self.db).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(warehouse::Entity::delete_by_id(id).exec(&self.db).await?.rows_affected > 0)
    }
}
