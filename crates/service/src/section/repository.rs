use async_trait::async_trait;
use models::section;

use crate::errors::ServiceError;
use crate::memory::MemoryStore;
use crate::report::{self, CountReport};

#[async_trait]
pub trait SectionRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<section::Model>, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<section::Model>, ServiceError>;
    async fn exists(&self, id: i64) -> Result<bool, ServiceError>;
    async fn number_taken(&self, section_number: &str) -> Result<bool, ServiceError>;
    async fn insert(&self, candidate: section::Model) -> Result<section::Model, ServiceError>;
    async fn update(&self, model: section::Model) -> Result<section::Model, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
    /// Product batches stored per section; restricted to one section when `only` is set.
    async fn count_batches(&self, only: Option<i64>) -> Result<Vec<CountReport>, ServiceError>;
}

#[async_trait]
impl SectionRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<section::Model>, ServiceError> { Ok(self.tables()?.sections.list()) }

    async fn get(&self, id: i64) -> Result<Option<section::Model>, ServiceError> { Ok(self.tables()?.sections.get(id)) }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> { Ok(self.tables()?.sections.contains(id)) }

    async fn number_taken(&self, section_number: &str) -> Result<bool, ServiceError> {
        Ok(self.tables()?.sections.any(|s| s.section_number == section_number))
    }

    async fn insert(&self, candidate: section::Model) -> Result<section::Model, ServiceError> {
        Ok(self.tables()?.sections.insert_with(|id| section::Model { id, ..candidate }))
    }

    async fn update(&self, model: section::Model) -> Result<section::Model, ServiceError> {
        self.tables()?.sections.replace(model.id, model).ok_or_else(|| ServiceError::not_found("section"))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> { Ok(self.tables()?.sections.remove(id)) }

    async fn count_batches(&self, only: Option<i64>) -> Result<Vec<CountReport>, ServiceError> {
        let t = self.tables()?;
        Ok(report::tally(
            t.sections.rows().map(|s| (s.id, s.section_number.clone())),
            t.product_batches.rows().map(|b| b.section_id),
            only,
        ))
    }
}
