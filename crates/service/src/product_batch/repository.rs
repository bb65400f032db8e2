use async_trait::async_trait;
use models::product_batch;

use crate::errors::ServiceError;
use crate::memory::MemoryStore;

#[async_trait]
pub trait ProductBatchRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<product_batch::Model>, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<product_batch::Model>, ServiceError>;
    async fn exists(&self, id: i64) -> Result<bool, ServiceError>;
    /// Batch numbers are unique per product.
    async fn number_taken(&self, product_id: i64, batch_number: i32) -> Result<bool, ServiceError>;
    async fn insert(&self, candidate: product_batch::Model) -> Result<product_batch::Model, ServiceError>;
    async fn update(&self, model: product_batch::Model) -> Result<product_batch::Model, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

#[async_trait]
impl ProductBatchRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<product_batch::Model>, ServiceError> { Ok(self.tables()?.product_batches.list()) }

    async fn get(&self, id: i64) -> Result<Option<product_batch::Model>, ServiceError> {
        Ok(self.tables()?.product_batches.get(id))
    }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> { Ok(self.tables()?.product_batches.contains(id)) }

    async fn number_taken(&self, product_id: i64, batch_number: i32) -> Result<bool, ServiceError> {
        Ok(self.tables()?.product_batches.any(|b| b.product_id == product_id && b.batch_number == batch_number))
    }

    async fn insert(&self, candidate: product_batch::Model) -> Result<product_batch::Model, ServiceError> {
        Ok(self.tables()?.product_batches.insert_with(|id| product_batch::Model { id, ..candidate }))
    }

    async fn update(&self, model: product_batch::Model) -> Result<product_batch::Model, ServiceError> {
        self.tables()?
            .product_batches
            .replace(model.id, model)
            .ok_or_else(|| ServiceError::not_found("product_batch"))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> { Ok(self.tables()?.product_batches.remove(id)) }
}
