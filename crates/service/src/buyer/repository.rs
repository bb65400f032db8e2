use async_trait::async_trait;
use models::buyer;

use crate::errors::ServiceError;
use crate::memory::MemoryStore;
use crate::report::{self, CountReport};

#[async_trait]
pub trait BuyerRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<buyer::Model>, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<buyer::Model>, ServiceError>;
    async fn exists(&self, id: i64) -> Result<bool, ServiceError>;
    async fn card_taken(&self, card_number_id: &str) -> Result<bool, ServiceError>;
    async fn insert(&self, candidate: buyer::Model) -> Result<buyer::Model, ServiceError>;
    async fn update(&self, model: buyer::Model) -> Result<buyer::Model, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
    async fn count_purchase_orders(&self, only: Option<i64>) -> Result<Vec<CountReport>, ServiceError>;
}

#[async_trait]
impl BuyerRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<buyer::Model>, ServiceError> { Ok(self.tables()?.buyers.list()) }

    async fn get(&self, id: i64) -> Result<Option<buyer::Model>, ServiceError> { Ok(self.tables()?.buyers.get(id)) }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> { Ok(self.tables()?.buyers.contains(id)) }

    async fn card_taken(&self, card_number_id: &str) -> Result<bool, ServiceError> {
        Ok(self.tables()?.buyers.any(|b| b.card_number_id == card_number_id))
    }

    async fn insert(&self, candidate: buyer::Model) -> Result<buyer::Model, ServiceError> {
        Ok(self.tables()?.buyers.insert_with(|id| buyer::Model { id, ..candidate }))
    }

    async fn update(&self, model: buyer::Model) -> Result<buyer::Model, ServiceError> {
        self.tables()?.buyers.replace(model.id, model).ok_or_else(|| ServiceError::not_found("buyer"))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> { Ok(self.tables()?.buyers.remove(id)) }

    async fn count_purchase_orders(&self, only: Option<i64>) -> Result<Vec<CountReport>, ServiceError> {
        let t = self.tables()?;
        Ok(report::tally(
            t.buyers.rows().map(|b| (b.id, b.card_number_id.clone())),
            t.purchase_orders.rows().map(|o| o.buyer_id),
            only,
        ))
    }
}
