use async_trait::async_trait;
use models::product_record;

use crate::errors::ServiceError;
use crate::memory::MemoryStore;

#[async_trait]
pub trait ProductRecordRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<product_record::Model>, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<product_record::Model>, ServiceError>;
    async fn exists(&self, id: i64) -> Result<bool, ServiceError>;
    async fn insert(&self, candidate: product_record::Model) -> Result<product_record::Model, ServiceError>;
}

#[async_trait]
impl ProductRecordRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<product_record::Model>, ServiceError> { Ok(self.tables()?.product_records.list()) }

    async fn get(&self, id: i64) -> Result<Option<product_record::Model>, ServiceError> {
        Ok(self.tables()?.product_records.get(id))
    }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> { Ok(self.tables()?.product_records.contains(id)) }

    async fn insert(&self, candidate: product_record::Model) -> Result<product_record::Model, ServiceError> {
        Ok(self.tables()?.product_records.insert_with(|id| product_record::Model { id, ..candidate }))
    }
}
