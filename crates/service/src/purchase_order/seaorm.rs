use async_trait::async_trait;
use models::purchase_order;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use super::repository::PurchaseOrderRepository;
use crate::errors::ServiceError;
use crate::seaorm::SeaOrmStore;

fn active(m: purchase_order::Model) -> purchase_order::ActiveModel {
    purchase_order::ActiveModel {
        id: Unchanged(m.id),
        order_number: Set(m.order_number),
        order_date: Set(m.order_date),
        tracking_code: Set(m.tracking_code),
        buyer_id: Set(m.buyer_id),
        product_record_id: Set(m.product_record_id),
    }
}

#[async_trait]
impl PurchaseOrderRepository for SeaOrmStore {
    async fn list(&self) -> Result<Vec<purchase_order::Model>, ServiceError> {
        Ok(purchase_order::Entity::find().order_by_asc(purchase_order::Column::Id).all(&self.db).await?)
    }

    async fn get(&self, id: i64) -> Result<Option<purchase_order::Model>, ServiceError> {
        Ok(purchase_order::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(purchase_order::Entity::find_by_id(id).count(&self.db).await? > 0)
    }

    async fn order_number_taken(&self, order_number: &str) -> Result<bool, ServiceError> {
        let n = purchase_order::Entity::find()
            .filter(purchase_order::Column::OrderNumber.eq(order_number))
            .count(&self.db)
            .await?;
        Ok(n > 0)
    }

    async fn insert(&self, candidate: purchase_order::Model) -> Result<purchase_order::Model, ServiceError> {
        let mut am = active(candidate);
        am.id = NotSet;
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, model: purchase_order::Model) -> Result<purchase_order::Model, ServiceError> {
        Ok(active(model).update(&self.db).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(purchase_order::Entity::delete_by_id(id).exec(&self.db).await?.rows_affected > 0)
    }
}
