use std::sync::Arc;

use async_trait::async_trait;
use models::product_record;
use tracing::{info, instrument};

use super::domain::NewProductRecord;
use super::repository::ProductRecordRepository;
use crate::errors::ServiceError;
use crate::exists::{self, require, ExistsById};

pub struct ProductRecordService<R: ProductRecordRepository + ?Sized = dyn ProductRecordRepository> {
    repo: Arc<R>,
    products: Arc<dyn ExistsById>,
}

impl<R: ProductRecordRepository + ?Sized> ProductRecordService<R> {
    pub fn new(repo: Arc<R>, products: Arc<dyn ExistsById>) -> Self { Self { repo, products } }

    #[instrument(skip(self, input), fields(product_id = input.product_id))]
    pub async fn create(&self, input: NewProductRecord) -> Result<product_record::Model, ServiceError> {
        let candidate = input.into_candidate();
        product_record::validate(&candidate)?;
        require(&*self.products, "product_id", candidate.product_id).await?;
        let stored = self.repo.insert(candidate).await?;
        info!(id = stored.id, "product_record_created");
        Ok(stored)
    }

    pub async fn get(&self, id: i64) -> Result<product_record::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("product_record"))
    }

    pub async fn list(&self) -> Result<Vec<product_record::Model>, ServiceError> { self.repo.list().await }
}

#[async_trait]
impl<R: ProductRecordRepository + ?Sized> ExistsById for ProductRecordService<R> {
    async fn exists_by_id(&self, id: i64) -> bool { exists::answer("product_record", id, self.repo.exists(id).await) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{chain, fixture, new_record};

    #[tokio::test]
    async fn record_requires_product() {
        let (_, s) = fixture();
        assert_eq!(
            s.product_records.create(new_record(1)).await,
            Err(ServiceError::ReferenceNotFound { field: "product_id" })
        );
    }

    #[tokio::test]
    async fn missing_date_defaults_to_now() {
        let (_, s) = fixture();
        let c = chain(&s).await;
        let before = chrono::Utc::now();
        let stored = s.product_records.create(NewProductRecord { last_update_date: None, ..new_record(c.product.id) }).await.unwrap();
        assert!(stored.last_update_date >= before);
    }

    #[tokio::test]
    async fn negative_price_is_invalid() {
        let (_, s) = fixture();
        let c = chain(&s).await;
        let input = NewProductRecord { sale_price: -1.0, ..new_record(c.product.id) };
        assert!(matches!(s.product_records.create(input).await, Err(ServiceError::Validation(_))));
    }
}
