use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use super::domain::{CustomerDetail, CustomerPatch, CustomerSummary, DeleteAck, NewCustomer};
use crate::db::customer_queries;
use crate::errors::ServiceError;
use crate::pagination::{Page, Pagination};

/// Customer persistence as seen by the application: display-shaped records in,
/// display-shaped records out.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<CustomerSummary>, ServiceError>;
    async fn list_page(&self, opts: Pagination) -> Result<Page<CustomerSummary>, ServiceError>;
    async fn get_one(&self, id: i32) -> Result<CustomerDetail, ServiceError>;
    async fn create(&self, input: NewCustomer) -> Result<CustomerDetail, ServiceError>;
    async fn update(&self, id: i32, patch: CustomerPatch) -> Result<CustomerDetail, ServiceError>;
    async fn remove(&self, id: i32) -> Result<DeleteAck, ServiceError>;
}

/// SeaORM-backed repository implementation.
#[derive(Clone)]
pub struct SeaOrmCustomerRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl CustomerRepository for SeaOrmCustomerRepository {
    async fn list_all(&self) -> Result<Vec<CustomerSummary>, ServiceError> {
        let rows = customer_queries::list_customer_stats(&self.db).await?;
        Ok(rows.into_iter().map(CustomerSummary::from).collect())
    }

    async fn list_page(&self, opts: Pagination) -> Result<Page<CustomerSummary>, ServiceError> {
        let page = customer_queries::list_customer_stats_paginated(&self.db, opts).await?;
        Ok(Page {
            items: page.items.into_iter().map(CustomerSummary::from).collect(),
            page: page.page,
            per_page: page.per_page,
            total_items: page.total_items,
            total_pages: page.total_pages,
        })
    }

    async fn get_one(&self, id: i32) -> Result<CustomerDetail, ServiceError> {
        customer_queries::get_customer(&self.db, id).await.map(CustomerDetail::from)
    }

    async fn create(&self, input: NewCustomer) -> Result<CustomerDetail, ServiceError> {
        customer_queries::create_customer(&self.db, input).await.map(CustomerDetail::from)
    }

    async fn update(&self, id: i32, patch: CustomerPatch) -> Result<CustomerDetail, ServiceError> {
        customer_queries::update_customer(&self.db, id, patch).await.map(CustomerDetail::from)
    }

    async fn remove(&self, id: i32) -> Result<DeleteAck, ServiceError> {
        customer_queries::delete_customer(&self.db, id).await?;
        Ok(DeleteAck::customer_deleted())
    }
}
