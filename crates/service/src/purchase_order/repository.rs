use async_trait::async_trait;
use models::purchase_order;

use crate::errors::ServiceError;
use crate::memory::MemoryStore;

#[async_trait]
pub trait PurchaseOrderRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<purchase_order::Model>, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<purchase_order::Model>, ServiceError>;
    async fn exists(&self, id: i64) -> Result<bool, ServiceError>;
    async fn order_number_taken(&self, order_number: &str) -> Result<bool, ServiceError>;
    async fn insert(&self, candidate: purchase_order::Model) -> Result<purchase_order::Model, ServiceError>;
    async fn update(&self, model: purchase_order::Model) -> Result<purchase_order::Model, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

#[async_trait]
impl PurchaseOrderRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<purchase_order::Model>, ServiceError> { Ok(self.tables()?.purchase_orders.list()) }

    async fn get(&self, id: i64) -> Result<Option<purchase_order::Model>, ServiceError> {
        Ok(self.tables()?.purchase_orders.get(id))
    }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> { Ok(self.tables()?.purchase_orders.contains(id)) }

    async fn order_number_taken(&self, order_number: &str) -> Result<bool, ServiceError> {
        Ok(self.tables()?.purchase_orders.any(|o| o.order_number == order_number))
    }

    async fn insert(&self, candidate: purchase_order::Model) -> Result<purchase_order::Model, ServiceError> {
        Ok(self.tables()?.purchase_orders.insert_with(|id| purchase_order::Model { id, ..candidate }))
    }

    async fn update(&self, model: purchase_order::Model) -> Result<purchase_order::Model, ServiceError> {
        self.tables()?
            .purchase_orders
            .replace(model.id, model)
            .ok_or_else(|| ServiceError::not_found("purchase_order"))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> { Ok(self.tables()?.purchase_orders.remove(id)) }
}
