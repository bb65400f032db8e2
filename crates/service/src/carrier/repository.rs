use async_trait::async_trait;
use models::carrier;

use crate::errors::ServiceError;
use crate::memory::MemoryStore;

#[async_trait]
pub trait CarrierRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<carrier::Model>, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<carrier::Model>, ServiceError>;
    async fn exists(&self, id: i64) -> Result<bool, ServiceError>;
    async fn cid_taken(&self, cid: &str) -> Result<bool, ServiceError>;
    async fn insert(&self, candidate: carrier::Model) -> Result<carrier::Model, ServiceError>;
    async fn update(&self, model: carrier::Model) -> Result<carrier::Model, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

#[async_trait]
impl CarrierRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<carrier::Model>, ServiceError> { Ok(self.tables()?.carriers.list()) }

    async fn get(&self, id: i64) -> Result<Option<carrier::Model>, ServiceError> { Ok(self.tables()?.carriers.get(id)) }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> { Ok(self.tables()?.carriers.contains(id)) }

    async fn cid_taken(&self, cid: &str) -> Result<bool, ServiceError> { Ok(self.tables()?.carriers.any(|c| c.cid == cid)) }

    async fn insert(&self, candidate: carrier::Model) -> Result<carrier::Model, ServiceError> {
        Ok(self.tables()?.carriers.insert_with(|id| carrier::Model { id, ..candidate }))
    }

    async fn update(&self, model: carrier::Model) -> Result<carrier::Model, ServiceError> {
        self.tables()?.carriers.replace(model.id, model).ok_or_else(|| ServiceError::not_found("carrier"))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> { Ok(self.tables()?.carriers.remove(id)) }
}
