use async_trait::async_trait;
use models::{carrier, locality, seller};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, RelationTrait};

use super::repository::LocalityRepository;
use crate::errors::ServiceError;
use crate::report::{count_by_parent, CountReport};
use crate::seaorm::SeaOrmStore;

#[async_trait]
impl LocalityRepository for SeaOrmStore {
    async fn list(&self) -> Result<Vec<locality::Model>, ServiceError> {
        Ok(locality::Entity::find().order_by_asc(locality::Column::Id).all(&self.db).await?)
    }

    async fn get(&self, id: i64) -> Result<Option<locality::Model>, ServiceError> {
        Ok(locality::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(locality::Entity::find_by_id(id).count(&self.db).await? > 0)
    }

    async fn name_taken(&self, locality_name: &str, province_id: i64) -> Result<bool, ServiceError> {
        let n = locality::Entity::find()
            .filter(locality::Column::LocalityName.eq(locality_name))
            .filter(locality::Column::ProvinceId.eq(province_id))
            .count(&self.db)
            .await?;
        Ok(n > 0)
    }

    async fn insert(&self, candidate: locality::Model) -> Result<locality::Model, ServiceError> {
        let am = locality::ActiveModel {
            id: NotSet,
            locality_name: Set(candidate.locality_name),
            province_id: Set(candidate.province_id),
        };
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, model: locality::Model) -> Result<locality::Model, ServiceError> {
        let am = locality::ActiveModel {
            id: Unchanged(model.id),
            locality_name: Set(model.locality_name),
            province_id: Set(model.province_id),
        };
        Ok(am.update(&self.db).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(locality::Entity::delete_by_id(id).exec(&self.db).await?.rows_affected > 0)
    }

    async fn count_sellers(&self, only: Option<i64>) -> Result<Vec<CountReport>, ServiceError> {
        count_by_parent::<locality::Entity, _>(
            &self.db,
            locality::Column::Id,
            locality::Column::LocalityName,
            seller::Relation::Locality.def().rev(),
            seller::Column::Id,
            only,
        )
        .await
    }

    async fn count_carriers(&self, only: Option<i64>) -> Result<Vec<CountReport>, ServiceError> {
        count_by_parent::<locality::Entity, _>(
            &self.db,
            locality::Column::Id,
            locality::Column::LocalityName,
            carrier::Relation::Locality.def().rev(),
            carrier::Column::Id,
            only,
        )
        .await
    }
}
