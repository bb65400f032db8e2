use async_trait::async_trait;
use models::carrier;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use super::repository::CarrierRepository;
use crate::errors::ServiceError;
use crate::seaorm::SeaOrmStore;

fn active(m: carrier::Model) -> carrier::ActiveModel {
    carrier::ActiveModel {
        id: Unchanged(m.id),
        cid: Set(m.cid),
        company_name: Set(m.company_name),
        address: Set(m.address),
        telephone: Set(m.telephone),
        locality_id: Set(m.locality_id),
    }
}

#[async_trait]
impl CarrierRepository for SeaOrmStore {
    async fn list(&self) -> Result<Vec<carrier::Model>, ServiceError> {
        Ok(carrier::Entity::find().order_by_asc(carrier::Column::Id).all(&self.db).await?)
    }

    async fn get(&self, id: i64) -> Result<Option<carrier::Model>, ServiceError> {
        Ok(carrier::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(carrier::Entity::find_by_id(id).count(&self.db).await? > 0)
    }

    async fn cid_taken(&self, cid: &str) -> Result<bool, ServiceError> {
        Ok(carrier::Entity::find().filter(carrier::Column::Cid.eq(cid)).count(&self.db).await? > 0)
    }

    async fn insert(&self, candidate: carrier::Model) -> Result<carrier::Model, ServiceError> {
        let mut am = active(candidate);
        am.id = NotSet;
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, model: carrier::Model) -> Result<carrier::Model, ServiceError> {
        Ok(active(model).update(&self.db).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(carrier::Entity::delete_by_id(id).exec(&self.db).await?.rows_affected > 0)
    }
}
