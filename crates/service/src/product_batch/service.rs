use std::sync::Arc;

use async_trait::async_trait;
use models::product_batch;
use tracing::{debug, info, instrument};

use super::domain::{NewProductBatch, ProductBatchPatch};
use super::repository::ProductBatchRepository;
use crate::errors::ServiceError;
use crate::exists::{self, require, ExistsById};

pub struct ProductBatchService<R: ProductBatchRepository + ?Sized = dyn ProductBatchRepository> {
    repo: Arc<R>,
    products: Arc<dyn ExistsById>,
    sections: Arc<dyn ExistsById>,
}

impl<R: ProductBatchRepository + ?Sized> ProductBatchService<R> {
    pub fn new(repo: Arc<R>, products: Arc<dyn ExistsById>, sections: Arc<dyn ExistsById>) -> Self {
        Self { repo, products, sections }
    }

    #[instrument(skip(self, input), fields(product_id = input.product_id, batch_number = input.batch_number))]
    pub async fn create(&self, input: NewProductBatch) -> Result<product_batch::Model, ServiceError> {
        let candidate = input.into_candidate();
        product_batch::validate(&candidate)?;
        if self.repo.number_taken(candidate.product_id, candidate.batch_number).await? {
            debug!("batch number taken for product");
            return Err(ServiceError::already_exists("batch_number"));
        }
        require(&*self.products, "product_id", candidate.product_id).await?;
        require(&*self.sections, "section_id", candidate.section_id).await?;
        let stored = self.repo.insert(candidate).await?;
        info!(id = stored.id, "product_batch_created");
        Ok(stored)
    }

    pub async fn get(&self, id: i64) -> Result<product_batch::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("product_batch"))
    }

    pub async fn list(&self) -> Result<Vec<product_batch::Model>, ServiceError> { self.repo.list().await }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: ProductBatchPatch) -> Result<product_batch::Model, ServiceError> {
        let current = self.get(id).await?;
        let mut next = current.clone();
        patch.apply(&mut next);
        product_batch::validate(&next)?;
        let key_changed = next.product_id != current.product_id || next.batch_number != current.batch_number;
        if key_changed && self.repo.number_taken(next.product_id, next.batch_number).await? {
            debug!("batch number taken for product");
            return Err(ServiceError::already_exists("batch_number"));
        }
        if next.product_id != current.product_id {
            require(&*self.products, "product_id", next.product_id).await?;
        }
        if next.section_id != current.section_id {
            require(&*self.sections, "section_id", next.section_id).await?;
        }
        let stored = self.repo.update(next).await?;
        info!(id, "product_batch_updated");
        Ok(stored)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("product_batch"));
        }
        info!(id, "product_batch_deleted");
        Ok(())
    }
}

#[async_trait]
impl<R: ProductBatchRepository + ?Sized> ExistsById for ProductBatchService<R> {
    async fn exists_by_id(&self, id: i64) -> bool { exists::answer("product_batch", id, self.repo.exists(id).await) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{chain, fixture, new_batch, new_product};

    #[tokio::test]
    async fn batch_number_is_unique_per_product_only() {
        let (_, s) = fixture();
        let c = chain(&s).await;
        let dup = new_batch(c.batch.batch_number, c.product.id, c.section.id);
        assert_eq!(s.product_batches.create(dup).await, Err(ServiceError::already_exists("batch_number")));

        let other = s.products.create(new_product("P-2", c.seller.id)).await.unwrap();
        let same_number = new_batch(c.batch.batch_number, other.id, c.section.id);
        assert!(s.product_batches.create(same_number).await.is_ok());
    }

    #[tokio::test]
    async fn batch_requires_section() {
        let (_, s) = fixture();
        let c = chain(&s).await;
        assert_eq!(
            s.product_batches.create(new_batch(9, c.product.id, 500)).await,
            Err(ServiceError::ReferenceNotFound { field: "section_id" })
        );
    }

    #[tokio::test]
    async fn quantity_patch_leaves_dates_alone() {
        let (_, s) = fixture();
        let c = chain(&s).await;
        let patch = ProductBatchPatch { current_quantity: Some(5), ..Default::default() };
        let updated = s.product_batches.update(c.batch.id, patch).await.unwrap();
        assert_eq!(updated.current_quantity, 5);
        assert_eq!(updated.due_date, c.batch.due_date);
        assert_eq!(updated.batch_number, c.batch.batch_number);
    }
}
