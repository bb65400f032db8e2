use std::sync::Arc;

use async_trait::async_trait;
use models::warehouse;
use tracing::{debug, info, instrument};

use super::domain::{NewWarehouse, WarehousePatch};
use super::repository::WarehouseRepository;
use crate::errors::ServiceError;
use crate::exists::{self, require, ExistsById};

pub struct WarehouseService<R: WarehouseRepository + ?Sized = dyn WarehouseRepository> {
    repo: Arc<R>,
    localities: Arc<dyn ExistsById>,
}

impl<R: WarehouseRepository + ?Sized> WarehouseService<R> {
    pub fn new(repo: Arc<R>, localities: Arc<dyn ExistsById>) -> Self { Self { repo, localities } }

    /// Create a warehouse after checking its code is free and its locality (if any) exists.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::memory::MemoryStore;
    /// use service::registry::Services;
    /// use service::warehouse::NewWarehouse;
    ///
    /// let services = Services::new(Arc::new(MemoryStore::seeded()));
    /// let input = NewWarehouse {
    ///     warehouse_code: "WH-BA-01".into(),
    ///     address: "Av. Corrientes 1234".into(),
    ///     telephone: "+54 11 5555 0000".into(),
    ///     minimum_capacity: 100,
    ///     minimum_temperature: -18.0,
    ///     locality_id: None,
    /// };
    /// let created = tokio_test::block_on(services.warehouses.create(input)).unwrap();
    /// assert_eq!(created.id, 1);
    /// ```
    #[instrument(skip(self, input), fields(warehouse_code = %input.warehouse_code))]
    pub async fn create(&self, input: NewWarehouse) -> Result<warehouse::Model, ServiceError> {
        let candidate = input.into_candidate();
        warehouse::validate(&candidate)?;
        if self.repo.code_taken(&candidate.warehouse_code).await? {
            debug!("warehouse code taken");
            return Err(ServiceError::already_exists("warehouse_code"));
        }
        if let Some(locality_id) = candidate.locality_id {
            require(&*self.localities, "locality_id", locality_id).await?;
        }
        let stored = self.repo.insert(candidate).await?;
        info!(id = stored.id, "warehouse_created");
        Ok(stored)
    }

    pub async fn get(&self, id: i64) -> Result<warehouse::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("warehouse"))
    }

    pub async fn list(&self) -> Result<Vec<warehouse::Model>, ServiceError> { self.repo.list().await }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: WarehousePatch) -> Result<warehouse::Model, ServiceError> {
        let current = self.get(id).await?;
        let mut next = current.clone();
        patch.apply(&mut next);
        warehouse::validate(&next)?;
        if next.warehouse_code != current.warehouse_code && self.repo.code_taken(&next.warehouse_code).await? {
            debug!("warehouse code taken");
            return Err(ServiceError::already_exists("warehouse_code"));
        }
        if next.locality_id != current.locality_id {
            if let Some(locality_id) = next.locality_id {
                require(&*self.localities, "locality_id", locality_id).await?;
            }
        }
        let stored = self.repo.update(next).await?;
        info!(id, "warehouse_updated");
        Ok(stored)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("warehouse"));
        }
        info!(id, "warehouse_deleted");
        Ok(())
    }
}

#[async_trait]
impl<R: WarehouseRepository + ?Sized> ExistsById for WarehouseService<R> {
    async fn exists_by_id(&self, id: i64) -> bool { exists::answer("warehouse", id, self.repo.exists(id).await) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fixture, new_locality, new_warehouse};

    #[tokio::test]
    async fn duplicate_code_is_rejected_without_write() {
        let (_, s) = fixture();
        s.warehouses.create(new_warehouse("WH-1")).await.unwrap();
        let again = s.warehouses.create(new_warehouse("WH-1")).await;
        assert_eq!(again, Err(ServiceError::already_exists("warehouse_code")));
        assert_eq!(s.warehouses.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_locality_is_a_reference_error() {
        let (_, s) = fixture();
        let input = NewWarehouse { locality_id: Some(42), ..new_warehouse("WH-1") };
        assert_eq!(s.warehouses.create(input).await, Err(ServiceError::ReferenceNotFound { field: "locality_id" }));
        assert!(s.warehouses.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn validation_runs_before_uniqueness() {
        let (_, s) = fixture();
        let input = NewWarehouse { address: "  ".into(), ..new_warehouse("WH-1") };
        assert!(matches!(s.warehouses.create(input).await, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn patch_touches_only_present_fields() {
        let (_, s) = fixture();
        let created = s.warehouses.create(new_warehouse("WH-1")).await.unwrap();
        let patch = WarehousePatch { telephone: Some("555-0101".into()), ..Default::default() };
        let updated = s.warehouses.update(created.id, patch).await.unwrap();
        assert_eq!(updated.telephone, "555-0101");
        assert_eq!(updated.warehouse_code, created.warehouse_code);
        assert_eq!(updated.minimum_capacity, created.minimum_capacity);
        assert_eq!(s.warehouses.get(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn zero_capacity_is_a_real_value() {
        let (_, s) = fixture();
        let created = s.warehouses.create(new_warehouse("WH-1")).await.unwrap();
        let patch = WarehousePatch { minimum_capacity: Some(0), ..Default::default() };
        let updated = s.warehouses.update(created.id, patch).await.unwrap();
        assert_eq!(updated.minimum_capacity, 0);
        assert_eq!(s.warehouses.get(created.id).await.unwrap().minimum_capacity, 0);
    }

    #[tokio::test]
    async fn explicit_null_clears_locality_only() {
        let (_, s) = fixture();
        let loc = s.localities.create(new_locality("Palermo", "Buenos Aires")).await.unwrap();
        let before = s
            .warehouses
            .create(NewWarehouse { locality_id: Some(loc.id), ..new_warehouse("WH-1") })
            .await
            .unwrap();
        let patch: WarehousePatch = serde_json::from_str(r#"{"locality_id": null}"#).unwrap();
        let after = s.warehouses.update(before.id, patch).await.unwrap();
        assert_eq!(after, warehouse::Model { locality_id: None, ..before.clone() });
        assert_eq!(s.warehouses.get(before.id).await.unwrap(), after);
    }

    #[tokio::test]
    async fn keeping_own_code_is_not_a_conflict() {
        let (_, s) = fixture();
        let created = s.warehouses.create(new_warehouse("WH-1")).await.unwrap();
        s.warehouses.create(new_warehouse("WH-2")).await.unwrap();
        let same = WarehousePatch { warehouse_code: Some("WH-1".into()), ..Default::default() };
        assert!(s.warehouses.update(created.id, same).await.is_ok());
        let taken = WarehousePatch { warehouse_code: Some("WH-2".into()), ..Default::default() };
        assert_eq!(s.warehouses.update(created.id, taken).await, Err(ServiceError::already_exists("warehouse_code")));
    }

    #[tokio::test]
    async fn missing_rows_are_not_found_everywhere() {
        let (_, s) = fixture();
        let nf = Err(ServiceError::not_found("warehouse"));
        assert_eq!(s.warehouses.get(9).await, nf);
        assert_eq!(s.warehouses.update(9, WarehousePatch::default()).await, nf);
        assert_eq!(s.warehouses.delete(9).await, Err(ServiceError::not_found("warehouse")));
        assert!(!s.warehouses.exists_by_id(9).await);
    }

    #[tokio::test]
    async fn deleted_row_stops_existing() {
        let (_, s) = fixture();
        let created = s.warehouses.create(new_warehouse("WH-1")).await.unwrap();
        assert!(s.warehouses.exists_by_id(created.id).await);
        s.warehouses.delete(created.id).await.unwrap();
        assert!(!s.warehouses.exists_by_id(created.id).await);
        assert_eq!(s.warehouses.delete(created.id).await, Err(ServiceError::not_found("warehouse")));
    }

    #[tokio::test]
    async fn storage_outage_surfaces_as_storage() {
        let (store, s) = fixture();
        store.set_unavailable(true);
        assert!(matches!(s.warehouses.list().await, Err(ServiceError::Storage(_))));
        assert!(!s.warehouses.exists_by_id(1).await);
    }
}
