use std::sync::Arc;

use async_trait::async_trait;
use models::employee;
use tracing::{debug, info, instrument};

use super::domain::{EmployeePatch, NewEmployee};
use super::repository::EmployeeRepository;
use crate::errors::ServiceError;
use crate::exists::{self, require, ExistsById};
use crate::report::{self, CountReport};

pub struct EmployeeService<R: EmployeeRepository + ?Sized = dyn EmployeeRepository> {
    repo: Arc<R>,
    warehouses: Arc<dyn ExistsById>,
}

impl<R: EmployeeRepository + ?Sized> EmployeeService<R> {
    pub fn new(repo: Arc<R>, warehouses: Arc<dyn ExistsById>) -> Self { Self { repo, warehouses } }

    #[instrument(skip(self, input), fields(card_number_id = %input.card_number_id))]
    pub async fn create(&self, input: NewEmployee) -> Result<employee::Model, ServiceError> {
        let candidate = input.into_candidate();
        employee::validate(&candidate)?;
        if self.repo.card_taken(&candidate.card_number_id).await? {
            debug!("employee card number taken");
            return Err(ServiceError::already_exists("card_number_id"));
        }
        require(&*self.warehouses, "warehouse_id", candidate.warehouse_id).await?;
        let stored = self.repo.insert(candidate).await?;
        info!(id = stored.id, "employee_created");
        Ok(stored)
    }

    pub async fn get(&self, id: i64) -> Result<employee::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found("employee"))
    }

    pub async fn list(&self) -> Result<Vec<employee::Model>, ServiceError> { self.repo.list().await }

    #[instrument(skip(self, patch))]
    pub async fn update(&self, id: i64, patch: EmployeePatch) -> Result<employee::Model, ServiceError> {
        let current = self.get(id).await?;
        let mut next = current.clone();
        patch.apply(&mut next);
        employee::validate(&next)?;
        if next.card_number_id != current.card_number_id && self.repo.card_taken(&next.card_number_id).await? {
            debug!("employee card number taken");
            return Err(ServiceError::already_exists("card_number_id"));
        }
        if next.warehouse_id != current.warehouse_id {
            require(&*self.warehouses, "warehouse_id", next.warehouse_id).await?;
        }
        let stored = self.repo.update(next).await?;
        info!(id, "employee_updated");
        Ok(stored)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found("employee"));
        }
        info!(id, "employee_deleted");
        Ok(())
    }

    pub async fn report_inbound_orders(&self, id: i64) -> Result<CountReport, ServiceError> {
        if !self.exists_by_id(id).await {
            return Err(ServiceError::parent_not_found("employee"));
        }
        report::single("employee", id, self.repo.count_inbound_orders(Some(id)).await?)
    }

    pub async fn report_all_inbound_orders(&self) -> Result<Vec<CountReport>, ServiceError> {
        self.repo.count_inbound_orders(None).await
    }
}

#[async_trait]
impl<R: EmployeeRepository + ?Sized> ExistsById for EmployeeService<R> {
    async fn exists_by_id(&self, id: i64) -> bool { exists::answer("employee", id, self.repo.exists(id).await) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{chain, fixture, new_employee, new_inbound};

    #[tokio::test]
    async fn employee_requires_warehouse() {
        let (_, s) = fixture();
        assert_eq!(
            s.employees.create(new_employee("E-1", 5)).await,
            Err(ServiceError::ReferenceNotFound { field: "warehouse_id" })
        );
    }

    #[tokio::test]
    async fn inbound_report_sums_to_order_count() {
        let (_, s) = fixture();
        let c = chain(&s).await;
        let idle = s.employees.create(new_employee("E-IDLE", c.warehouse.id)).await.unwrap();
        for n in ["IO-1", "IO-2", "IO-3"] {
            s.inbound_orders.create(new_inbound(n, c.employee.id, c.batch.id, c.warehouse.id)).await.unwrap();
        }
        let all = s.employees.report_all_inbound_orders().await.unwrap();
        let orders = s.inbound_orders.list().await.unwrap().len() as i64;
        assert_eq!(all.iter().map(|r| r.count).sum::<i64>(), orders);
        assert_eq!(s.employees.report_inbound_orders(idle.id).await.unwrap().count, 0);
        assert_eq!(s.employees.report_inbound_orders(c.employee.id).await.unwrap().parent_name, "E-1");
    }
}
