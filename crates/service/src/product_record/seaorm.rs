use async_trait::async_trait;
use models::product_record;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder};

use super::repository::ProductRecordRepository;
use crate::errors::ServiceError;
use crate::seaorm::SeaOrmStore;

#[async_trait]
impl ProductRecordRepository for SeaOrmStore {
    async fn list(&self) -> Result<Vec<product_record::Model>, ServiceError> {
        Ok(product_record::Entity::find().order_by_asc(product_record::Column::Id).all(&self.db).await?)
    }

    async fn get(&self, id: i64) -> Result<Option<product_record::Model>, ServiceError> {
        Ok(product_record::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(product_record::Entity::find_by_id(id).count(&self.db).await? > 0)
    }

    async fn insert(&self, candidate: product_record::Model) -> Result<product_record::Model, ServiceError> {
        let am = product_record::ActiveModel {
            id: NotSet,
            last_update_date: Set(candidate.last_update_date),
            purchase_price: Set(candidate.purchase_price),
            sale_price: Set(candidate.sale_price),
            product_id: Set(candidate.product_id),
        };
        Ok(am.insert(&self.db).await?)
    }
}
