use std::sync::Arc;

use tracing::{info, warn, instrument};

use super::domain::{CustomerDetail, CustomerPatch, CustomerSummary, DeleteAck, NewCustomer};
use super::repository::CustomerRepository;
use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};

/// Application service for customers, independent of the web framework.
/// Every call is a single store round-trip; failures are logged once here and returned.
pub struct CustomerService<R: CustomerRepository> {
    repo: Arc<R>,
}

impl<R: CustomerRepository> Clone for CustomerService<R> {
    fn clone(&self) -> Self { Self { repo: Arc::clone(&self.repo) } }
}

fn log_failure(op: &'static str, e: &ServiceError) {
    match e {
        ServiceError::NotFound(_) | ServiceError::Validation(_) => {
            info!(op, kind = e.kind(), error = %e, "customer operation rejected");
        }
        _ => warn!(op, kind = e.kind(), error = %e, "customer operation failed"),
    }
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Full list, newest first. Unbounded by contract; see `list_page` for a bounded variant.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<CustomerSummary>, ServiceError> {
        let rows = self.repo.list_all().await.inspect_err(|e| log_failure("list_all", e))?;
        info!(count = rows.len(), "listed customers");
        Ok(rows)
    }

    #[instrument(skip(self))]
    pub async fn list_page(&self, opts: Pagination) -> Result<Page<CustomerSummary>, ServiceError> {
        self.repo.list_page(opts).await.inspect_err(|e| log_failure("list_page", e))
    }

    #[instrument(skip(self))]
    pub async fn get_one(&self, id: i32) -> Result<CustomerDetail, ServiceError> {
        self.repo.get_one(id).await.inspect_err(|e| log_failure("get_one", e))
    }

    #[instrument(skip(self, input))]
    pub async fn create(&self, input: NewCustomer) -> Result<CustomerDetail, ServiceError> {
        let created = self.repo.create(input).await.inspect_err(|e| log_failure("create", e))?;
        info!(id = created.id, "customer_created");
        Ok(created)
    }

    #[instrument(skip(self, patch), fields(empty_patch = patch.is_empty()))]
    pub async fn update(&self, id: i32, patch: CustomerPatch) -> Result<CustomerDetail, ServiceError> {
        let updated = self.repo.update(id, patch).await.inspect_err(|e| log_failure("update", e))?;
        info!(id, "customer_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: i32) -> Result<DeleteAck, ServiceError> {
        let ack = self.repo.remove(id).await.inspect_err(|e| log_failure("remove", e))?;
        info!(id, "customer_deleted");
        Ok(ack)
    }
}
