use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::customer::{repository::SeaOrmCustomerRepository, CustomerService};

/// Shared handler state: the pool handle plus the customer service built on it.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub customers: CustomerService<SeaOrmCustomerRepository>,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmCustomerRepository::new(db.clone()));
        Self { db, customers: CustomerService::new(repo) }
    }
}
