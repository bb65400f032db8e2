use std::sync::Arc;

use async_trait::async_trait;
use models::seller;
use tracing::{debug, info, instrument};

use super::domain::{NewSeller, SellerPatch};
use super::repository::SellerRepository;
use crate::errors::ServiceError;
use crate::exists::{self, require, ExistsById};

pub struct SellerService<R: SellerRepository + ?Sized = dyn SellerRepository> {
    repo: Arc<R>,
    localities: Arc<dyn ExistsById>,
}

impl<R: SellerRepository + ?Sized> SellerService<R> {
    pub fn new(repo: Arc<R>, localities: Arc<dyn ExistsById>) -> Self { Self { repo, localities } }

    #[instrument(skip(self, input), fields(cid = input.cid))]
    pub async fn create(&self, input: NewSeller) -> Result<seller::Model, ServiceError> {
        let candidate = input.into_candidate();
        seller::validate(&candidate)?;
        if self.repo.cid_taken(candidate.cid).await? {
            debug!("seller cid taken");
            return Err(ServiceError::already_exists("cid"));
        }
        require(&*self.localities, "locality_id", candidate.locality_id).await?;
        let stored = self.repo.insert(candidate).await?;
        info!(id = stored.id, "seller_created");
        Ok(stored)
    }

    pub async fn get(&self, id: i64) -> Result<seller::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("seller"))
    }

    pub async fn list(&self) -> Result<Vec<seller::Model>, ServiceError> { self.repo.list().await }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: SellerPatch) -> Result<seller::Model, ServiceError> {
        let current = self.get(id).await?;
        let mut next = current.clone();
        patch.apply(&mut next);
        seller::validate(&next)?;
        if next.cid != current.cid && self.repo.cid_taken(next.cid).await? {
            debug!("seller cid taken");
            return Err(ServiceError::already_exists("cid"));
        }
        if next.locality_id != current.locality_id {
            require(&*self.localities, "locality_id", next.locality_id).await?;
        }
        let stored = self.repo.update(next).await?;
        info!(id, "seller_updated");
        Ok(stored)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("seller"));
        }
        info!(id, "seller_deleted");
        Ok(())
    }
}

#[async_trait]
impl<R: SellerRepository + ?Sized> ExistsById for SellerService<R> {
    async fn exists_by_id(&self, id: i64) -> bool { exists::answer("seller", id, self.repo.exists(id).await) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fixture, new_locality, new_seller};

    #[tokio::test]
    async fn cid_is_unique() {
        let (_, s) = fixture();
        let loc = s.localities.create(new_locality("Palermo", "Buenos Aires")).await.unwrap();
        s.sellers.create(new_seller(10, loc.id)).await.unwrap();
        assert_eq!(s.sellers.create(new_seller(10, loc.id)).await, Err(ServiceError::already_exists("cid")));
    }

    #[tokio::test]
    async fn seller_requires_locality() {
        let (_, s) = fixture();
        assert_eq!(
            s.sellers.create(new_seller(10, 8)).await,
            Err(ServiceError::ReferenceNotFound { field: "locality_id" })
        );
        assert!(s.sellers.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_cannot_steal_another_cid() {
        let (_, s) = fixture();
        let loc = s.localities.create(new_locality("Palermo", "Buenos Aires")).await.unwrap();
        let a = s.sellers.create(new_seller(10, loc.id)).await.unwrap();
        s.sellers.create(new_seller(11, loc.id)).await.unwrap();
        let patch = SellerPatch { cid: Some(11), ..Default::default() };
        assert_eq!(s.sellers.update(a.id, patch).await, Err(ServiceError::already_exists("cid")));
        assert_eq!(s.sellers.get(a.id).await.unwrap().cid, 10);
    }
}
