use async_trait::async_trait;
use models::inbound_order;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use super::repository::InboundOrderRepository;
use crate::errors::ServiceError;
use crate::seaorm::SeaOrmStore;

fn active(m: inbound_order::Model) -> inbound_order::ActiveModel {
    inbound_order::ActiveModel {
        id: Unchanged(m.id),
        order_number: Set(m.order_number),
        order_date: Set(m.order_date),
        employee_id: Set(m.employee_id),
        product_batch_id: Set(m.product_batch_id),
        warehouse_id: Set(m.warehouse_id),
    }
}

#[async_trait]
impl InboundOrderRepository for SeaOrmStore {
    async fn list(&self) -> Result<Vec<inbound_order::Model>, ServiceError> {
        Ok(inbound_order::Entity::find().order_by_asc(inbound_order::Column::Id).all(&self.db).await?)
    }

    async fn get(&self, id: i64) -> Result<Option<inbound_order::Model>, ServiceError> {
        Ok(inbound_order::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(inbound_order::Entity::find_by_id(id).count(&self.db).await? > 0)
    }

    async fn order_number_taken(&self, order_number: &str) -> Result<bool, ServiceError> {
        let n = inbound_order::Entity::find()
            .filter(inbound_order::Column::OrderNumber.eq(order_number))
            .count(&self.db)
            .await?;
        Ok(n > 0)
    }

    async fn insert(&self, candidate: inbound_order::Model) -> Result<inbound_order::Model, ServiceError> {
        let mut am = active(candidate);
        am.id = NotSet;
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, model: inbound_order::Model) -> Result<inbound_order::Model, ServiceError> {
        Ok(active(model).update(&self.db).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(inbound_order::Entity::delete_by_id(id).exec(&self.db).await?.rows_affected > 0)
    }
}
