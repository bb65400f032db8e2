use async_trait::async_trait;
use models::{employee, inbound_order};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, RelationTrait};

use super::repository::EmployeeRepository;
use crate::errors::ServiceError;
use crate::report::{count_by_parent, CountReport};
use crate::seaorm::SeaOrmStore;

fn active(m: employee::Model) -> employee::ActiveModel {
    employee::ActiveModel {
        id: Unchanged(m.id),
        card_number_id: Set(m.card_number_id),
        first_name: Set(m.first_name),
        last_name: Set(m.last_name),
        warehouse_id: Set(m.warehouse_id),
    }
}

#[async_trait]
impl EmployeeRepository for SeaOrmStore {
    async fn list(&self) -> Result<Vec<employee::Model>, ServiceError> {
        Ok(employee::Entity::find().order_by_asc(employee::Column::Id).all(&self.db).await?)
    }

    async fn get(&self, id: i64) -> Result<Option<employee::Model>, ServiceError> {
        Ok(employee::Entity::find_by_id(id).one(&self.db).await?)
    }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(employee::Entity::find_by_id(id).count(&self.db).await? > 0)
    }

    async fn card_taken(&self, card_number_id: &str) -> Result<bool, ServiceError> {
        let n = employee::Entity::find()
            .filter(employee::Column::CardNumberId.eq(card_number_id))
            .count(&self.db)
            .await?;
        Ok(n > 0)
    }

    async fn insert(&self, candidate: employee::Model) -> Result<employee::Model, ServiceError> {
        let mut am = active(candidate);
        am.id = NotSet;
        Ok(am.insert(&self.db).await?)
    }

    async fn update(&self, model: employee::Model) -> Result<employee::Model, ServiceError> {
        Ok(active(model).update(&self.db).await?)
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(employee::Entity::delete_by_id(id).exec(&self.db).await?.rows_affected > 0)
    }

    async fn count_inbound_orders(&self, only: Option<i64>) -> Result<Vec<CountReport>, ServiceError> {
        count_by_parent::<employee::Entity, _>(
            &self.db,
            employee::Column::Id,
            employee::Column::CardNumberId,
            inbound_order::Relation::Employee.def().rev(),
            inbound_order::Column::Id,
            only,
        )
        .await
    }
}
