use async_trait::async_trait;
use models::employee;

use crate::errors::ServiceError;
use crate::memory::MemoryStore;
use crate::report::{self, CountReport};

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<employee::Model>, ServiceError>;
    async fn get(&self, id: i64) -> Result<Option<employee::Model>, ServiceError>;
    async fn exists(&self, id: i64) -> Result<bool, ServiceError>;
    async fn card_taken(&self, card_number_id: &str) -> Result<bool, ServiceError>;
    async fn insert(&self, candidate: employee::Model) -> Result<employee::Model, ServiceError>;
    async fn update(&self, model: employee::Model) -> Result<employee::Model, ServiceError>;
    async fn delete(&self, id: i64) -> Result<bool, ServiceError>;
    async fn count_inbound_orders(&self, only: Option<i64>) -> Result<Vec<CountReport>, ServiceError>;
}

#[async_trait]
impl EmployeeRepository for MemoryStore {
    async fn list(&self) -> Result<Vec<employee::Model>, ServiceError> { Ok(self.tables()?.employees.list()) }

    async fn get(&self, id: i64) -> Result<Option<employee::Model>, ServiceError> { Ok(self.tables()?.employees.get(id)) }

    async fn exists(&self, id: i64) -> Result<bool, ServiceError> { Ok(self.tables()?.employees.contains(id)) }

    async fn card_taken(&self, card_number_id: &str) -> Result<bool, ServiceError> {
        Ok(self.tables()?.employees.any(|e| e.card_number_id == card_number_id))
    }

    async fn insert(&self, candidate: employee::Model) -> Result<employee::Model, ServiceError> {
        Ok(self.tables()?.employees.insert_with(|id| employee::Model { id, ..candidate }))
    }

    async fn update(&self, model: employee::Model) -> Result<employee::Model, ServiceError> {
        self.tables()?.employees.replace(model.id, model).ok_or_else(|| ServiceError::not_found("employee"))
    }

    async fn delete(&self, id: i64) -> Result<bool, ServiceError> { Ok(self.tables()?.employees.remove(id)) }

    async fn count_inbound_orders(&self, only: Option<i64>) -> Result<Vec<CountReport>, ServiceError> {
        let t = self.tables()?;
        Ok(report::tally(
            t.employees.rows().map(|e| (e.id, e.card_number_id.clone())),
            t.inbound_orders.rows().map(|o| o.employee_id),
            only,
        ))
    }
}
