use async_trait::async_trait;
use models::{product, product_record};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, RelationTrait};

use super::repository::ProductRepository;
use crate::errors::ServiceError;
use crate::report::{count_by_parent, CountReport};
use crate::seaorm::SeaOrmStore;

fn active(m: product::Model) -> product::ActiveModel {
    product::ActiveModel {
        id: Unchanged(m.id),
        product_code: Set(m.product_code),
        description: Set(m.description),
        width: Set(m.width),
        height: Set(m.height),
        length: Set(m.length),
        net_weight: Set(m.net_weight),
        expiration_rate: Set(m.expiration_rate),
        recommended_freezing_temperature: Set(m.recommended_freezing_temperature),
        freezing_rate: Set(m.freezing_rate),
        product_type_id: Set(m.product_type_id),
        seller_id: Set(m.seller_id),
    }
}

#[async_trait]
impl ProductRepository for SeaOrmStore {
    async fn list(&self) -> Result<Vec<product::Model>, ServiceError> {
        Ok(product::Entity::find().order_by_asc(product::Column::Id).all(&self.db).await?)
    }

    async fn get(&self, id: i64) -> Result<Option<product::Model>, ServiceError> {
        Ok(product::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(product::Entity::find_by_id(id).count(&self.db).await? > 0)
    }

    async fn code_taken(&self, product_code: &str) -> Result<bool, ServiceError> {
        let n = product::Entity::find()
            .filter(product::Column::ProductCode.eq(product_code))
            .count(&self.db)
            .await?;
        Ok(n > 0)
    }

    async fn insert(&self, candidate: product::Model) -> Result<product::Model, ServiceError> {
        let mut am = active(candidate);
        am.id = NotSet;
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, model: product::Model) -> Result<product::Model, ServiceError> {
        Ok(active(model).update(&self.db).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(product::Entity::delete_by_id(id).exec(&self.db).await?.rows_affected > 0)
    }

    async fn count_records(&self, only: Option<i64>) -> Result<Vec<CountReport>, ServiceError> {
        count_by_parent::<product::Entity, _>(
            &self.db,
            product::Column::Id,
            product::Column::Description,
            product_record::Relation::Product.def().rev(),
            product_record::Column::Id,
            only,
        )
        .await
    }
}
