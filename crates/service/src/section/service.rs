use std::sync::Arc;

use async_trait::async_trait;
use models::section;
use tracing::{debug, info, instrument};

use super::domain::{NewSection, SectionPatch};
use super::repository::SectionRepository;
use crate::errors::ServiceError;
use crate::exists::{self, require, ExistsById};
use crate::report::{self, CountReport};

pub struct SectionService<R: SectionRepository + ?Sized = dyn SectionRepository> {
    repo: Arc<R>,
    warehouses: Arc<dyn ExistsById>,
    product_types: Arc<dyn ExistsById>,
}

impl<R: SectionRepository + ?Sized> SectionService<R> {
    pub fn new(repo: Arc<R>, warehouses: Arc<dyn ExistsById>, product_types: Arc<dyn ExistsById>) -> Self {
        Self { repo, warehouses, product_types }
    }

    #[instrument(skip(self, input), fields(section_number = %input.section_number))]
    pub async fn create(&self, input: NewSection) -> Result<section::Model, ServiceError> {
        let candidate = input.into_candidate();
        section::validate(&candidate)?;
        if self.repo.number_taken(&candidate.section_number).await? {
            debug!("section number taken");
            return Err(ServiceError::already_exists("section_number"));
        }
        require(&*self.warehouses, "warehouse_id", candidate.warehouse_id).await?;
        require(&*self.product_types, "product_type_id", candidate.product_type_id).await?;
        let stored = self.repo.insert(candidate).await?;
        info!(id = stored.id, "section_created");
        Ok(stored)
    }

    pub async fn get(&self, id: i64) -> Result<section::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("section"))
    }

    pub async fn list(&self) -> Result<Vec<section::Model>, ServiceError> { self.repo.list().await }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: SectionPatch) -> Result<section::Model, ServiceError> {
        let current = self.get(id).await?;
        let mut next = current.clone();
        patch.apply(&mut next);
        section::validate(&next)?;
        if next.section_number != current.section_number && self.repo.number_taken(&next.section_number).await? {
            debug!("section number taken");
            return Err(ServiceError::already_exists("section_number"));
        }
        if next.warehouse_id != current.warehouse_id {
            require(&*self.warehouses, "warehouse_id", next.warehouse_id).await?;
        }
        if next.product_type_id != current.product_type_id {
            require(&*self.product_types, "product_type_id", next.product_type_id).await?;
        }
        let stored = self.repo.update(next).await?;
        info!(id, "section_updated");
        Ok(stored)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("section"));
        }
        info!(id, "section_deleted");
        Ok(())
    }

    /// Number of product batches stored in one section.
    pub async fn report_batches(&self, id: i64) -> Result<CountReport, ServiceError> {
        if !self.exists_by_id(id).await {
            return Err(ServiceError::parent_not_found("section"));
        }
        report::single("section", id, self.repo.count_batches(Some(id)).await?)
    }

    pub async fn report_all_batches(&self) -> Result<Vec<CountReport>, ServiceError> {
        self.repo.count_batches(None).await
    }
}

#[async_trait]
impl<R: SectionRepository + ?Sized> ExistsById for SectionService<R> {
    async fn exists_by_id(&self, id: i64) -> bool { exists::answer("section", id, self.repo.exists(id).await) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{chain, fixture, new_batch, new_section, new_warehouse};

    #[tokio::test]
    async fn section_needs_existing_warehouse_and_product_type() {
        let (_, s) = fixture();
        assert_eq!(
            s.sections.create(new_section("S-1", 1)).await,
            Err(ServiceError::ReferenceNotFound { field: "warehouse_id" })
        );
        let wh = s.warehouses.create(new_warehouse("WH-1")).await.unwrap();
        let bad_type = NewSection { product_type_id: 99, ..new_section("S-1", wh.id) };
        assert_eq!(s.sections.create(bad_type).await, Err(ServiceError::ReferenceNotFound { field: "product_type_id" }));
        assert!(s.sections.create(new_section("S-1", wh.id)).await.is_ok());
    }

    #[tokio::test]
    async fn uniqueness_is_checked_before_references() {
        let (_, s) = fixture();
        let wh = s.warehouses.create(new_warehouse("WH-1")).await.unwrap();
        s.sections.create(new_section("S-1", wh.id)).await.unwrap();
        // both the key and the warehouse are bad: the key wins
        assert_eq!(
            s.sections.create(new_section("S-1", 404)).await,
            Err(ServiceError::already_exists("section_number"))
        );
    }

    #[tokio::test]
    async fn patch_with_inverted_capacities_is_rejected() {
        let (_, s) = fixture();
        let wh = s.warehouses.create(new_warehouse("WH-1")).await.unwrap();
        let sec = s.sections.create(new_section("S-1", wh.id)).await.unwrap();
        let patch = SectionPatch { minimum_capacity: Some(sec.maximum_capacity + 1), ..Default::default() };
        assert!(matches!(s.sections.update(sec.id, patch).await, Err(ServiceError::Validation(_))));
        assert_eq!(s.sections.get(sec.id).await.unwrap(), sec);
    }

    #[tokio::test]
    async fn batch_report_counts_every_section() {
        let (_, s) = fixture();
        let c = chain(&s).await;
        let empty = s.sections.create(new_section("S-EMPTY", c.warehouse.id)).await.unwrap();
        s.product_batches.create(new_batch(2, c.product.id, c.section.id)).await.unwrap();
        s.product_batches.create(new_batch(3, c.product.id, c.section.id)).await.unwrap();

        let all = s.sections.report_all_batches().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all.iter().map(|r| r.count).sum::<i64>(), 3);
        assert_eq!(all[0].parent_id, c.section.id);
        assert_eq!(all[1], CountReport { parent_id: empty.id, parent_name: "S-EMPTY".into(), count: 0 });

        let one = s.sections.report_batches(c.section.id).await.unwrap();
        assert_eq!((one.parent_name.as_str(), one.count), (c.section.section_number.as_str(), 3));
        assert_eq!(s.sections.report_all_batches().await.unwrap(), all);
    }

    #[tokio::test]
    async fn batch_report_for_unknown_section() {
        let (_, s) = fixture();
        assert_eq!(s.sections.report_batches(7).await, Err(ServiceError::parent_not_found("section")));
    }
}
