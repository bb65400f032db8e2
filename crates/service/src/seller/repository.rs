use async_trait::async_trait;
use models::seller;

use crate::errors::ServiceError;
use crate::memory::MemoryStore;

#[async_trait]
pub trait SellerRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<seller::Model>, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<seller::Model>, ServiceError>;
    async fn exists(&self, id: i64) -> Result<bool, ServiceError>;
    async fn cid_taken(&self, cid: i32) -> Result<bool, ServiceError>;
    async fn insert(&self, candidate: seller::Model) -> Result<seller::Model, ServiceError>;
    async fn update(&self, model: seller::Model) -> Result<seller::Model, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

#[async_trait]
impl SellerRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<seller::Model>, ServiceError> { Ok(self.tables()?.sellers.list()) }

    async fn get(&self, id: i64) -> Result<Option<seller::Model>, ServiceError> { Ok(self.tables()?.sellers.get(id)) }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> { Ok(self.tables()?.sellers.contains(id)) }

    async fn cid_taken(&self, cid: i32) -> Result<bool, ServiceError> { Ok(self.tables()?.sellers.any(|s| s.cid == cid)) }

    async fn insert(&self, candidate: seller::Model) -> Result<seller::Model, ServiceError> {
        Ok(self.tables()?.sellers.insert_with(|id| seller::Model { id, ..candidate }))
    }

    async fn update(&self, model: seller::Model) -> Result<seller::Model, ServiceError> {
        self.tables()?.sellers.replace(model.id, model).ok_or_else(|| ServiceError::not_found("seller"))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> { Ok(self.tables()?.sellers.remove(id)) }
}
