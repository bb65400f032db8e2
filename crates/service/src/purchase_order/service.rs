use std::sync::Arc;

use async_trait::async_trait;
use models::purchase_order;
use tracing::{debug, info, instrument};

use super::domain::{NewPurchaseOrder, PurchaseOrderPatch};
use super::repository::PurchaseOrderRepository;
use crate::errors::ServiceError;
use crate::exists::{self, require, ExistsById};

pub struct PurchaseOrderService<R: PurchaseOrderRepository + ?Sized = dyn PurchaseOrderRepository> {
    repo: Arc<R>,
    buyers: Arc<dyn ExistsById>,
    product_records: Arc<dyn ExistsById>,
}

impl<R: PurchaseOrderRepository + ?Sized> PurchaseOrderService<R> {
    pub fn new(repo: Arc<R>, buyers: Arc<dyn ExistsById>, product_records: Arc<dyn ExistsById>) -> Self {
        Self { repo, buyers, product_records }
    }

    #[instrument(skip(self, input), fields(order_number = %input.order_number))]
    pub async fn create(&self, input: NewPurchaseOrder) -> Result<purchase_order::Model, ServiceError> {
        let candidate = input.into_candidate();
        purchase_order::validate(&candidate)?;
        if self.repo.order_number_taken(&candidate.order_number).await? {
            debug!("purchase order number taken");
            return Err(ServiceError::already_exists("order_number"));
        }
        require(&*self.buyers, "buyer_id", candidate.buyer_id).await?;
        require(&*self.product_records, "product_record_id", candidate.product_record_id).await?;
        let stored = self.repo.insert(candidate).await?;
        info!(id = stored.id, "purchase_order_created");
        Ok(stored)
    }

    pub async fn get(&self, id: i64) -> Result<purchase_order::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("purchase_order"))
    }

    pub async fn list(&self) -> Result<Vec<purchase_order::Model>, ServiceError> { self.repo.list().await }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: PurchaseOrderPatch) -> Result<purchase_order::Model, ServiceError> {
        let current = self.get(id).await?;
        let mut next = current.clone();
        patch.apply(&mut next);
        purchase_order::validate(&next)?;
        if next.order_number != current.order_number && self.repo.order_number_taken(&next.order_number).await? {
            debug!("purchase order number taken");
            return Err(ServiceError::already_exists("order_number"));
        }
        if next.buyer_id != current.buyer_id {
            require(&*self.buyers, "buyer_id", next.buyer_id).await?;
        }
        if next.product_record_id != current.product_record_id {
            require(&*self.product_records, "product_record_id", next.product_record_id).await?;
        }
        let stored = self.repo.update(next).await?;
        info!(id, "purchase_order_updated");
        Ok(stored)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("purchase_order"));
        }
        info!(id, "purchase_order_deleted");
        Ok(())
    }
}

#[async_trait]
impl<R: PurchaseOrderRepository + ?Sized> ExistsById for PurchaseOrderService<R> {
    async fn exists_by_id(&self, id: i64) -> bool { exists::answer("purchase_order", id, self.repo.exists(id).await) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{chain, fixture, new_purchase};

    #[tokio::test]
    async fn purchase_needs_buyer_and_record() {
        let (_, s) = fixture();
        let c = chain(&s).await;
        assert_eq!(
            s.purchase_orders.create(new_purchase("PO-1", 99, c.record.id)).await,
            Err(ServiceError::ReferenceNotFound { field: "buyer_id" })
        );
        assert_eq!(
            s.purchase_orders.create(new_purchase("PO-1", c.buyer.id, 99)).await,
            Err(ServiceError::ReferenceNotFound { field: "product_record_id" })
        );
        let po = s.purchase_orders.create(new_purchase("PO-1", c.buyer.id, c.record.id)).await.unwrap();
        assert_eq!(s.buyers.report_purchase_orders(c.buyer.id).await.unwrap().count, 1);

        let patch = PurchaseOrderPatch { tracking_code: Some("TRK-2".into()), ..Default::default() };
        let updated = s.purchase_orders.update(po.id, patch).await.unwrap();
        assert_eq!((updated.tracking_code.as_str(), updated.buyer_id), ("TRK-2", c.buyer.id));
    }
}
