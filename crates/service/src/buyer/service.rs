use std::sync::Arc;

use async_trait::async_trait;
use models::buyer;
use tracing::{debug, info, instrument};

use super::domain::{BuyerPatch, NewBuyer};
use super::repository::BuyerRepository;
use crate::errors::ServiceError;
use crate::exists::{self, ExistsById};
use crate::report::{self, CountReport};

pub struct BuyerService<R: BuyerRepository + ?Sized = dyn BuyerRepository> {
    repo: Arc<R>,
}

impl<R: BuyerRepository + ?Sized> BuyerService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, input), fields(card_number_id = %input.card_number_id))]
    pub async fn create(&self, input: NewBuyer) -> Result<buyer::Model, ServiceError> {
        let candidate = input.into_candidate();
        buyer::validate(&candidate)?;
        if self.repo.card_taken(&candidate.card_number_id).await? {
            debug!("buyer card number taken");
            return Err(ServiceError::already_exists("card_number_id"));
        }
        let stored = self.repo.insert(candidate).await?;
        info!(id = stored.id, "buyer_created");
        Ok(stored)
    }

    pub async fn get(&self, id: i64) -> Result<buyer::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("buyer"))
    }

    pub async fn list(&self) -> Result<Vec<buyer::Model>, ServiceError> { self.repo.list().await }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: BuyerPatch) -> Result<buyer::Model, ServiceError> {
        let current = self.get(id).await?;
        let mut next = current.clone();
        patch.apply(&mut next);
        buyer::validate(&next)?;
        if next.card_number_id != current.card_number_id && self.repo.card_taken(&next.card_number_id).await? {
            debug!("buyer card number taken");
            return Err(ServiceError::already_exists("card_number_id"));
        }
        let stored = self.repo.update(next).await?;
        info!(id, "buyer_updated");
        Ok(stored)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("buyer"));
        }
        info!(id, "buyer_deleted");
        Ok(())
    }

    pub async fn report_purchase_orders(&self, id: i64) -> Result<CountReport, ServiceError> {
        if !self.exists_by_id(id).await {
            return Err(ServiceError::parent_not_found("buyer"));
        }
        report::single("buyer", id, self.repo.count_purchase_orders(Some(id)).await?)
    }

    pub async fn report_all_purchase_orders(&self) -> Result<Vec<CountReport>, ServiceError> {
        self.repo.count_purchase_orders(None).await
    }
}

#[async_trait]
impl<R: BuyerRepository + ?Sized> ExistsById for BuyerService<R> {
    async fn exists_by_id(&self, id: i64) -> bool { exists::answer("buyer", id, self.repo.exists(id).await) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fixture, new_buyer};

    #[tokio::test]
    async fn card_number_is_unique() {
        let (_, s) = fixture();
        s.buyers.create(new_buyer("B-100")).await.unwrap();
        assert_eq!(s.buyers.create(new_buyer("B-100")).await, Err(ServiceError::already_exists("card_number_id")));
    }

    #[tokio::test]
    async fn blank_patch_field_is_invalid() {
        let (_, s) = fixture();
        let b = s.buyers.create(new_buyer("B-100")).await.unwrap();
        let patch = BuyerPatch { last_name: Some(String::new()), ..Default::default() };
        assert!(matches!(s.buyers.update(b.id, patch).await, Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn buyer_without_orders_reports_zero() {
        let (_, s) = fixture();
        let b = s.buyers.create(new_buyer("B-100")).await.unwrap();
        let row = s.buyers.report_purchase_orders(b.id).await.unwrap();
        assert_eq!(row, CountReport { parent_id: b.id, parent_name: "B-100".into(), count: 0 });
    }
}
