use std::sync::Arc;

use async_trait::async_trait;
use models::product;
use tracing::{debug, info, instrument};

use super::domain::{NewProduct, ProductPatch};
use super::repository::ProductRepository;
use crate::errors::ServiceError;
use crate::exists::{self, require, ExistsById};
use crate::report::{self, CountReport};

pub struct ProductService<R: ProductRepository + ?Sized = dyn ProductRepository> {
    repo: Arc<R>,
    sellers: Arc<dyn ExistsById>,
    product_types: Arc<dyn ExistsById>,
}

impl<R: ProductRepository + ?Sized> ProductService<R> {
    pub fn new(repo: Arc<R>, sellers: Arc<dyn ExistsById>, product_types: Arc<dyn ExistsById>) -> Self {
        Self { repo, sellers, product_types }
    }

    #[instrument(skip(self, input), fields(product_code = %input.product_code))]
    pub async fn create(&self, input: NewProduct) -> Result<product::Model, ServiceError> {
        let candidate = input.into_candidate();
        product::validate(&candidate)?;
        if self.repo.code_taken(&candidate.product_code).await? {
            debug!("product code taken");
            return Err(ServiceError::already_exists("product_code"));
        }
        require(&*self.sellers, "seller_id", candidate.seller_id).await?;
        require(&*self.product_types, "product_type_id", candidate.product_type_id).await?;
        let stored = self.repo.insert(candidate).await?;
        info!(id = stored.id, "product_created");
        Ok(stored)
    }

    pub async fn get(&self, id: i64) -> Result<product::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("product"))
    }

    pub async fn list(&self) -> Result<Vec<product::Model>, ServiceError> { self.repo.list().await }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: ProductPatch) -> Result<product::Model, ServiceError> {
        let current = self.get(id).await?;
        let mut next = current.clone();
        patch.apply(&mut next);
        product::validate(&next)?;
        if next.product_code != current.product_code && self.repo.code_taken(&next.product_code).await? {
            debug!("product code taken");
            return Err(ServiceError::already_exists("product_code"));
        }
        if next.seller_id != current.seller_id {
            require(&*self.sellers, "seller_id", next.seller_id).await?;
        }
        if next.product_type_id != current.product_type_id {
            require(&*self.product_types, "product_type_id", next.product_type_id).await?;
        }
        let stored = self.repo.update(next).await?;
        info!(id, "product_updated");
        Ok(stored)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("product"));
        }
        info!(id, "product_deleted");
        Ok(())
    }

    pub async fn report_records(&self, id: i64) -> Result<CountReport, ServiceError> {
        if !self.exists_by_id(id).await {
            return Err(ServiceError::parent_not_found("product"));
        }
        report::single("product", id, self.repo.count_records(Some(id)).await?)
    }

    pub async fn report_all_records(&self) -> Result<Vec<CountReport>, ServiceError> {
        self.repo.count_records(None).await
    }
}

#[async_trait]
impl<R: ProductRepository + ?Sized> ExistsById for ProductService<R> {
    async fn exists_by_id(&self, id: i64) -> bool { exists::answer("product", id, self.repo.exists(id).await) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{chain, fixture, new_product, new_record};

    #[tokio::test]
    async fn product_requires_seller() {
        let (_, s) = fixture();
        assert_eq!(
            s.products.create(new_product("P-1", 3)).await,
            Err(ServiceError::ReferenceNotFound { field: "seller_id" })
        );
    }

    #[tokio::test]
    async fn moving_to_unknown_seller_keeps_row_unchanged() {
        let (_, s) = fixture();
        let c = chain(&s).await;
        let patch = ProductPatch { seller_id: Some(999), description: Some("renamed".into()), ..Default::default() };
        assert_eq!(
            s.products.update(c.product.id, patch).await,
            Err(ServiceError::ReferenceNotFound { field: "seller_id" })
        );
        assert_eq!(s.products.get(c.product.id).await.unwrap(), c.product);
    }

    #[tokio::test]
    async fn record_report_includes_products_without_records() {
        let (_, s) = fixture();
        let c = chain(&s).await;
        let bare = s.products.create(new_product("P-BARE", c.seller.id)).await.unwrap();
        s.product_records.create(new_record(c.product.id)).await.unwrap();

        let all = s.products.report_all_records().await.unwrap();
        let counts: Vec<(i64, i64)> = all.iter().map(|r| (r.parent_id, r.count)).collect();
        assert_eq!(counts, vec![(c.product.id, 2), (bare.id, 0)]);
        assert_eq!(s.products.report_records(bare.id).await.unwrap().parent_name, bare.description);
        assert_eq!(s.products.report_records(77).await, Err(ServiceError::parent_not_found("product")));
    }
}
