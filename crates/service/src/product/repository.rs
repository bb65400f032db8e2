use async_trait::async_trait;
use models::product;

use crate::errors::ServiceError;
use crate::memory::MemoryStore;
use crate::report::{self, CountReport};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<product::Model>, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<product::Model>, ServiceError>;
    async fn exists(&self, id: i64) -> Result<bool, ServiceError>;
    async fn code_taken(&self, product_code: &str) -> Result<bool, ServiceError>;
    async fn insert(&self, candidate: product::Model) -> Result<product::Model, ServiceError>;
    async fn update(&self, model: product::Model) -> Result<product::Model, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
    async fn count_records(&self, only: Option<i64>) -> Result<Vec<CountReport>, ServiceError>;
}

#[async_trait]
impl ProductRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<product::Model>, ServiceError> { Ok(self.tables()?.products.list()) }

    async fn get(&self, id: i64) -> Result<Option<product::Model>, ServiceError> { Ok(self.tables()?.products.get(id)) }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> { Ok(self.tables()?.products.contains(id)) }

    async fn code_taken(&self, product_code: &str) -> Result<bool, ServiceError> {
        Ok(self.tables()?.products.any(|p| p.product_code == product_code))
    }

    async fn insert(&self, candidate: product::Model) -> Result<product::Model, ServiceError> {
        Ok(self.tables()?.products.insert_with(|id| product::Model { id, ..candidate }))
    }

    async fn update(&self, model: product::Model) -> Result<product::Model, ServiceError> {
        self.tables()?.products.replace(model.id, model).ok_or_else(|| ServiceError::not_found("product"))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> { Ok(self.tables()?.products.remove(id)) }

    async fn count_records(&self, only: Option<i64>) -> Result<Vec<CountReport>, ServiceError> {
        let t = self.tables()?;
        Ok(report::tally(
            t.products.rows().map(|p| (p.id, p.description.clone())),
            t.product_records.rows().map(|r| r.product_id),
            only,
        ))
    }
}
