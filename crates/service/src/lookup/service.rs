use std::sync::Arc;

use async_trait::async_trait;
use models::{product_type, province};
use tracing::debug;

use super::repository::{ProductTypeRepository, ProvinceRepository};
use crate::errors::ServiceError;
use crate::exists::{self, ExistsById};

/// Province resolution as seen by the locality service.
#[async_trait]
pub trait ProvinceDirectory: ExistsById {
    /// Id of the province called `province_name`, or `ProvinceNotFound`.
    async fn resolve(&self, province_name: &str) -> Result<i64, ServiceError>;
}

pub struct ProvinceLookup<R: ProvinceRepository + ?Sized = dyn ProvinceRepository> {
    repo: Arc<R>,
}

impl<R: ProvinceRepository + ?Sized> ProvinceLookup<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<province::Model>, ServiceError> { self.repo.list().await }
}

#[async_trait]
impl<R: ProvinceRepository + ?Sized> ExistsById for ProvinceLookup<R> {
    async fn exists_by_id(&self, id: i64) -> bool { exists::answer("province", id, self.repo.exists(id).await) }
}

#[async_trait]
impl<R: ProvinceRepository + ?Sized> ProvinceDirectory for ProvinceLookup<R> {
    async fn resolve(&self, province_name: &str) -> Result<i64, ServiceError> {
        match self.repo.get_by_name(province_name).await? {
            Some(p) => Ok(p.id),
            None => {
                debug!(province_name, "unknown province");
                Err(ServiceError::ProvinceNotFound(province_name.to_string()))
            }
        }
    }
}

pub struct ProductTypeLookup<R: ProductTypeRepository + ?Sized = dyn ProductTypeRepository> {
    repo: Arc<R>,
}

impl<R: ProductTypeRepository + ?Sized> ProductTypeLookup<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<product_type::Model>, ServiceError> { self.repo.list().await }
}

#[async_trait]
impl<R: ProductTypeRepository + ?Sized> ExistsById for ProductTypeLookup<R> {
    async fn exists_by_id(&self, id: i64) -> bool { exists::answer("product_type", id, self.repo.exists(id).await) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    #[tokio::test]
    async fn resolves_seeded_province_by_exact_name() {
        let lookup = ProvinceLookup::new(Arc::new(MemoryStore::seeded()));
        assert_eq!(lookup.resolve("Cordoba").await, Ok(2));
        assert!(lookup.exists_by_id(2).await);
        assert_eq!(lookup.resolve("cordoba").await, Err(ServiceError::ProvinceNotFound("cordoba".into())));
    }

    #[tokio::test]
    async fn storage_failure_reads_as_absent() {
        let store = Arc::new(MemoryStore::seeded());
        let lookup = ProductTypeLookup::new(store.clone());
        assert!(lookup.exists_by_id(1).await);
        store.set_unavailable(true);
        assert!(!lookup.exists_by_id(1).await);
    }
}
