use async_trait::async_trait;
use models::{product_type, province};

use crate::errors::ServiceError;
use crate::memory::MemoryStore;

#[async_trait]
pub trait ProvinceRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<province::Model>, ServiceError>;
    async fn get_by_name(&self, province_name: &str) -> Result<Option<province::Model>, ServiceError>;
    async fn exists(&self, id: i64) -> Result<bool, ServiceError>;
}

#[async_trait]
pub trait ProductTypeRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<product_type::Model>, ServiceError>;
    async fn exists(&self, id: i64) -> Result<bool, ServiceError>;
}

#[async_trait]
impl ProvinceRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<province::Model>, ServiceError> { Ok(self.tables()?.provinces.list()) }

    async fn get_by_name(&self, province_name: &str) -> Result<Option<province::Model>, ServiceError> {
        let t = self.tables()?;
        let found = t.provinces.rows().find(|p| p.province_name == province_name).cloned();
        Ok(found)
    }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> { Ok(self.tables()?.provinces.contains(id)) }
}

#[async_trait]
impl ProductTypeRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<product_type::Model>, ServiceError> { Ok(self.tables()?.product_types.list()) }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> { Ok(self.tables()?.product_types.contains(id)) }
}
