use async_trait::async_trait;
use models::{buyer, purchase_order};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, RelationTrait};

use super::repository::BuyerRepository;
use crate::errors::ServiceError;
use crate::report::{count_by_parent, CountReport};
use crate::seaorm::SeaOrmStore;

fn active(m: buyer::Model) -> buyer::ActiveModel {
    buyer::ActiveModel {
        id: Unchanged(m.id),
        card_number_id: Set(m.card_number_id),
        first_name: Set(m.first_name),
        last_name: Set(m.last_name),
    }
}

#[async_trait]
impl BuyerRepository for SeaOrmStore {
    async fn list(&self) -> Result<Vec<buyer::Model>, ServiceError> {
        Ok(buyer::Entity::find().order_by_asc(buyer::Column::Id).all(&self.db).await?)
    }

    async fn get(&self, id: i64) -> Result<Option<buyer::Model>, ServiceError> {
        Ok(buyer::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(buyer::Entity::find_by_id(id).count(&self.db).await? > 0)
    }

    async fn card_taken(&self, card_number_id: &str) -> Result<bool, ServiceError> {
        let n = buyer::Entity::find()
            .filter(buyer::Column::CardNumberId.eq(card_number_id))
            .count(&self.db)
            .await?;
        Ok(n > 0)
    }

    async fn insert(&self, candidate: buyer::Model) -> Result<buyer::Model, ServiceError> {
        let mut am = active(candidate);
        am.id = NotSet;
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, model: buyer::Model) -> Result<buyer::Model, ServiceError> {
        Ok(active(model).update(&self.db).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(buyer::Entity::delete_by_id(id).exec(&self.db).await?.rows_affected > 0)
    }

    async fn count_purchase_orders(&self, only: Option<i64>) -> Result<Vec<CountReport>, ServiceError> {
        count_by_parent::<buyer::Entity, _>(
            &self.db,
            buyer::Column::Id,
            buyer::Column::CardNumberId,
            purchase_order::Relation::Buyer.def().rev(),
            purchase_order::Column::Id,
            only,
        )
        .await
    }
}
