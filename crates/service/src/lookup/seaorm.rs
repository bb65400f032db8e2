use async_trait::async_trait;
use models::{product_type, province};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use super::repository::{ProductTypeRepository, ProvinceRepository};
use crate::errors::ServiceError;
use crate::seaorm::SeaOrmStore;

#[async_trait]
impl ProvinceRepository for SeaOrmStore {
    async fn list(&self) -> Result<Vec<province::Model>, ServiceError> {
        Ok(province::Entity::find().order_by_asc(province::Column::Id).all(&self.db).await?)
    }

    async fn get_by_name(&self, province_name: &str) -> Result<Option<province::Model>, ServiceError> {
        Ok(province::Entity::find()
            .filter(province::Column::ProvinceName.eq(province_name))
            .one(&self.db)
            .await?)
    }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(province::Entity::find_by_id(id).count(&self.db).await? > 0)
    }
}

#[async_trait]
impl ProductTypeRepository for SeaOrmStore {
    async fn list(&self) -> Result<Vec<product_type::Model>, ServiceError> {
        Ok(product_type::Entity::find().order_by_asc(product_type::Column::Id).all(&self.db).await?)
    }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(product_type::Entity::find_by_id(id).count(&self.db).await? > 0)
    }
}
