use async_trait::async_trait;
use models::seller;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use super::repository::SellerRepository;
use crate::errors::ServiceError;
use crate::seaorm::SeaOrmStore;

fn active(m: seller::Model) -> seller::ActiveModel {
    seller::ActiveModel {
        id: Unchanged(m.id),
        cid: Set(m.cid),
        company_name: Set(m.company_name),
        address: Set(m.address),
        telephone: Set(m.telephone),
        locality_id: Set(m.locality_id),
    }
}

#[async_trait]
impl SellerRepository for SeaOrmStore {
    async fn list(&self) -> Result<Vec<seller::Model>, ServiceError> {
        Ok(seller::Entity::find().order_by_asc(seller::Column::Id).all(&self.db).await?)
    }

    async fn get(&self, id: i64) -> Result<Option<seller::Model>, ServiceError> {
        Ok(seller::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(seller::Entity::find_by_id(id).count(&self.db).await? > 0)
    }

    async fn cid_taken(&self, cid: i32) -> Result<bool, ServiceError> {
        Ok(seller::Entity::find().filter(seller::Column::Cid.eq(cid)).count(&self.db).await? > 0)
    }

    async fn insert(&self, candidate: seller::Model) -> Result<seller::Model, ServiceError> {
        let mut am = active(candidate);
        am.id = NotSet;
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, model: seller::Model) -> Result<seller::Model, ServiceError> {
        Ok(active(model).update(&self.db).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(seller::Entity::delete_by_id(id).exec(&self.db).await?.rows_affected > 0)
    }
}
