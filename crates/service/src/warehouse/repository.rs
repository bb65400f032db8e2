use async_trait::async_trait;
use models::warehouse;

use crate::errors::ServiceError;
use crate::memory::MemoryStore;

/// Persistence gateway for warehouses.
#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<warehouse::Model>, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<warehouse::Model>, ServiceError>;
    async fn exists(&self, id: i64) -> Result<bool, ServiceError>;
    async fn code_taken(&self, warehouse_code: &str) -> Result<bool, ServiceError>;
    /// Store `candidate` under a fresh id (its own `id` is ignored).
    async fn insert(&self, candidate: warehouse::Model) -> Result<warehouse::Model, ServiceError>;
    async fn update(&self, model: warehouse::Model) -> Result<warehouse::Model, ServiceError>;
    /// `false` when no row had this id.
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
}

#[async_trait]
impl WarehouseRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<warehouse::Model>, ServiceError> { Ok(self.tables()?.warehouses.list()) }

    async fn get(&self, id: i64) -> Result<Option<warehouse::Model>, ServiceError> {
        Ok(self.tables()?.warehouses.get(id))
    }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> { Ok(self.tables()?.warehouses.contains(id)) }

    async fn code_taken(&self, warehouse_code: &str) -> Result<bool, ServiceError> {
        Ok(self.tables()?.warehouses.any(|w| w.warehouse_code == warehouse_code))
    }

    async fn insert(&self, candidate: warehouse::Model) -> Result<warehouse::Model, ServiceError> {
        Ok(self.tables()?.warehouses.insert_with(|id| warehouse::Model { id, ..candidate }))
    }

    async fn update(&self, model: warehouse::Model) -> Result<warehouse::Model, ServiceError> {
        self.tables()?
            .warehouses
            .replace(model.id, model)
            .ok_or_else(|| ServiceError::not_found("warehouse"))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> { Ok(self.tables()?.warehouses.remove(id)) }
}
