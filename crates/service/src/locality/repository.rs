use async_trait::async_trait;
use models::locality;

use crate::errors::ServiceError;
use crate::memory::MemoryStore;
use crate::report::{self, CountReport};

#[async_trait]
pub trait LocalityRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<locality::Model>, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<locality::Model>, ServiceError>;
    async fn exists(&self, id: i64) -> Result<bool, ServiceError>;
    /// Locality names are unique within a province.
    async fn name_taken(&self, locality_name: &str, province_id: i64) -> Result<bool, ServiceError>;
    async fn insert(&self, candidate: locality::Model) -> Result<locality::Model, ServiceError>;
    async fn update(&self, model: locality::Model) -> Result<locality::Model, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
    async fn count_sellers(&self, only: Option<i64>) -> Result<Vec<CountReport>, ServiceError>;
    async fn count_carriers(&self, only: Option<i64>) -> Result<Vec<CountReport>, ServiceError>;
}

#[async_trait]
impl LocalityRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<locality::Model>, ServiceError> { Ok(self.tables()?.localities.list()) }

    async fn get(&self, id: i64) -> Result<Option<locality::Model>, ServiceError> { Ok(self.tables()?.localities.get(id)) }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> { Ok(self.tables()?.localities.contains(id)) }

    async fn name_taken(&self, locality_name: &str, province_id: i64) -> Result<bool, ServiceError> {
        Ok(self
            .tables()?
            .localities
            .any(|l| l.locality_name == locality_name && l.province_id == province_id))
    }

    async fn insert(&self, candidate: locality::Model) -> Result<locality::Model, ServiceError> {
        Ok(self.tables()?.localities.insert_with(|id| locality::Model { id, ..candidate }))
    }

    async fn update(&self, model: locality::Model) -> Result<locality::Model, ServiceError> {
        self.tables()?.localities.replace(model.id, model).ok_or_else(|| ServiceError::not_found("locality"))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> { Ok(self.tables()?.localities.remove(id)) }

    async fn count_sellers(&self, only: Option<i64>) -> Result<Vec<CountReport>, ServiceError> {
        let t = self.tables()?;
        Ok(report::tally(
            t.localities.rows().map(|l| (l.id, l.locality_name.clone())),
            t.sellers.rows().map(|s| s.locality_id),
            only,
        ))
    }

    async fn count_carriers(&self, only: Option<i64>) -> Result<Vec<CountReport>, ServiceError> {
        let t = self.tables()?;
        Ok(report::tally(
            t.localities.rows().map(|l| (l.id, l.locality_name.clone())),
            t.carriers.rows().map(|c| c.locality_id),
            only,
        ))
    }
}
