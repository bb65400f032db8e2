use async_trait::async_trait;
use models::inbound_order;

use crate::errors::ServiceError;
use crate::memory::MemoryStore;

#[async_trait]
pub trait InboundOrderRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<inbound_order::Model>, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<inbound_order::Model>, ServiceError>;
    async fn exists(&self, id: i64) -> Result<bool, ServiceError>;
    async fn order_number_taken(&self, order_number: &str) -> Result<bool, ServiceError>;
    async fn insert(&self, candidate: inbound_order::Model) -> Result<inbound_order::Model, ServiceError>;
    async fn update(&self, model: inbound_order::Model) -> Result<inbound_order::Model, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

#[async_trait]
impl InboundOrderRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<inbound_order::Model>, ServiceError> { Ok(self.tables()?.inbound_orders.list()) }

    async fn get(&self, id: i64) -> Result<Option<inbound_order::Model>, ServiceError> {
        Ok(self.tables()?.inbound_orders.get(id))
    }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> { Ok(self.tables()?.inbound_orders.contains(id)) }

    async fn order_number_taken(&self, order_number: &str) -> Result<bool, ServiceError> {
        Ok(self.tables()?.inbound_orders.any(|o| o.order_number == order_number))
    }

    async fn insert(&self, candidate: inbound_order::Model) -> Result<inbound_order::Model, ServiceError> {
        Ok(self.tables()?.inbound_orders.insert_with(|id| inbound_order::Model { id, ..candidate }))
    }

    async fn update(&self, model: inbound_order::Model) -> Result<inbound_order::Model, ServiceError> {
        self.tables()?
            .inbound_orders
            .replace(model.id, model)
            .ok_or_else(|| ServiceError::not_found("inbound_order"))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> { Ok(self.tables()?.inbound_orders.remove(id)) }
}
