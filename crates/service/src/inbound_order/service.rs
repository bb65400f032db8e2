use std::sync::Arc;

use async_trait::async_trait;
use models::inbound_order;
use tracing::{debug, info, instrument};

use super::domain::{InboundOrderPatch, NewInboundOrder};
use super::repository::InboundOrderRepository;
use crate::errors::ServiceError;
use crate::exists::{self, require, ExistsById};

/// Inbound orders reference an employee, the received batch and the warehouse.
pub struct InboundOrderService<R: InboundOrderRepository + ?Sized = dyn InboundOrderRepository> {
    repo: Arc<R>,
    employees: Arc<dyn ExistsById>,
    product_batches: Arc<dyn ExistsById>,
    warehouses: Arc<dyn ExistsById>,
}

impl<R: InboundOrderRepository + ?Sized> InboundOrderService<R> {
    pub fn new(
        repo: Arc<R>,
        employees: Arc<dyn ExistsById>,
        product_batches: Arc<dyn ExistsById>,
        warehouses: Arc<dyn ExistsById>,
    ) -> Self {
        Self { repo, employees, product_batches, warehouses }
    }

    #[instrument(skip(self, input), fields(order_number = %input.order_number))]
    pub async fn create(&self, input: NewInboundOrder) -> Result<inbound_order::Model, ServiceError> {
        let candidate = input.into_candidate();
        inbound_order::validate(&candidate)?;
        if self.repo.order_number_taken(&candidate.order_number).await? {
            debug!("inbound order number taken");
            return Err(ServiceError::already_exists("order_number"));
        }
        require(&*self.employees, "employee_id", candidate.employee_id).await?;
        require(&*self.product_batches, "product_batch_id", candidate.product_batch_id).await?;
        require(&*self.warehouses, "warehouse_id", candidate.warehouse_id).await?;
        let stored = self.repo.insert(candidate).await?;
        info!(id = stored.id, "inbound_order_created");
        Ok(stored)
    }

    pub async fn get(&self, id: i64) -> Result<inbound_order::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("inbound_order"))
    }

    pub async fn list(&self) -> Result<Vec<inbound_order::Model>, ServiceError> { self.repo.list().await }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: InboundOrderPatch) -> Result<inbound_order::Model, ServiceError> {
        let current = self.get(id).await?;
        let mut next = current.clone();
        patch.apply(&mut next);
        inbound_order::validate(&next)?;
        if next.order_number != current.order_number && self.repo.order_number_taken(&next.order_number).await? {
            debug!("inbound order number taken");
            return Err(ServiceError::already_exists("order_number"));
        }
        if next.employee_id != current.employee_id {
            require(&*self.employees, "employee_id", next.employee_id).await?;
        }
        if next.product_batch_id != current.product_batch_id {
            require(&*self.product_batches, "product_batch_id", next.product_batch_id).await?;
        }
        if next.warehouse_id != current.warehouse_id {
            require(&*self.warehouses, "warehouse_id", next.warehouse_id).await?;
        }
        let stored = self.repo.update(next).await?;
        info!(id, "inbound_order_updated");
        Ok(stored)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("inbound_order"));
        }
        info!(id, "inbound_order_deleted");
        Ok(())
    }
}

#[async_trait]
impl<R: InboundOrderRepository + ?Sized> ExistsById for InboundOrderService<R> {
    async fn exists_by_id(&self, id: i64) -> bool { exists::answer("inbound_order", id, self.repo.exists(id).await) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{chain, fixture, new_inbound};

    #[tokio::test]
    async fn references_are_checked_in_declaration_order() {
        let (_, s) = fixture();
        let c = chain(&s).await;
        let cases = [
            (new_inbound("IO-1", 0, 0, 0), "employee_id"),
            (new_inbound("IO-1", c.employee.id, 0, 0), "product_batch_id"),
            (new_inbound("IO-1", c.employee.id, c.batch.id, 0), "warehouse_id"),
        ];
        for (input, field) in cases {
            assert_eq!(s.inbound_orders.create(input).await, Err(ServiceError::ReferenceNotFound { field }));
        }
        assert!(s.inbound_orders.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn order_number_is_unique() {
        let (_, s) = fixture();
        let c = chain(&s).await;
        let input = new_inbound("IO-1", c.employee.id, c.batch.id, c.warehouse.id);
        s.inbound_orders.create(input.clone()).await.unwrap();
        assert_eq!(s.inbound_orders.create(input).await, Err(ServiceError::already_exists("order_number")));
    }
}
