use std::sync::Arc;

use async_trait::async_trait;
use models::carrier;
use tracing::{debug, info, instrument};

use super::domain::{CarrierPatch, NewCarrier};
use super::repository::CarrierRepository;
use crate::errors::ServiceError;
use crate::exists::{self, require, ExistsById};

pub struct CarrierService<R: CarrierRepository + ?Sized = dyn CarrierRepository> {
    repo: Arc<R>,
    localities: Arc<dyn ExistsById>,
}

impl<R: CarrierRepository + ?Sized> CarrierService<R> {
    pub fn new(repo: Arc<R>, localities: Arc<dyn ExistsById>) -> Self { Self { repo, localities } }

    #[instrument(skip(self, input), fields(cid = %input.cid))]
    pub async fn create(&self, input: NewCarrier) -> Result<carrier::Model, ServiceError> {
        let candidate = input.into_candidate();
        carrier::validate(&candidate)?;
        if self.repo.cid_taken(&candidate.cid).await? {
            debug!("carrier cid taken");
            return Err(ServiceError::already_exists("cid"));
        }
        require(&*self.localities, "locality_id", candidate.locality_id).await?;
        let stored = self.repo.insert(candidate).await?;
        info!(id = stored.id, "carrier_created");
        Ok(stored)
    }

    pub async fn get(&self, id: i64) -> Result<carrier::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("carrier"))
    }

    pub async fn list(&self) -> Result<Vec<carrier::Model>, ServiceError> { self.repo.list().await }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: CarrierPatch) -> Result<carrier::Model, ServiceError> {
        let current = self.get(id).await?;
        let mut next = current.clone();
        patch.apply(&mut next);
        carrier::validate(&next)?;
        if next.cid != current.cid && self.repo.cid_taken(&next.cid).await? {
            debug!("carrier cid taken");
            return Err(ServiceError::already_exists("cid"));
        }
        if next.locality_id != current.locality_id {
            require(&*self.localities, "locality_id", next.locality_id).await?;
        }
        let stored = self.repo.update(next).await?;
        info!(id, "carrier_updated");
        Ok(stored)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("carrier"));
        }
        info!(id, "carrier_deleted");
        Ok(())
    }
}

#[async_trait]
impl<R: CarrierRepository + ?Sized> ExistsById for CarrierService<R> {
    async fn exists_by_id(&self, id: i64) -> bool { exists::answer("carrier", id, self.repo.exists(id).await) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fixture, new_carrier, new_locality};

    #[tokio::test]
    async fn duplicate_cid_rejected_before_locality_check() {
        let (_, s) = fixture();
        let loc = s.localities.create(new_locality("Nunez", "Buenos Aires")).await.unwrap();
        s.carriers.create(new_carrier("CR-9", loc.id)).await.unwrap();
        assert_eq!(s.carriers.create(new_carrier("CR-9", 1234)).await, Err(ServiceError::already_exists("cid")));
    }

    #[tokio::test]
    async fn deleting_locality_does_not_cascade() {
        let (_, s) = fixture();
        let loc = s.localities.create(new_locality("Nunez", "Buenos Aires")).await.unwrap();
        let c = s.carriers.create(new_carrier("CR-9", loc.id)).await.unwrap();
        s.localities.delete(loc.id).await.unwrap();
        assert_eq!(s.carriers.get(c.id).await.unwrap().locality_id, loc.id);
        // unchanged references are not rechecked
        let patch = CarrierPatch { telephone: Some("011-4444".into()), ..Default::default() };
        assert!(s.carriers.update(c.id, patch).await.is_ok());
    }
}
