//! Minimal order collaborator: enough to create orders and read them back so
//! the customer view and the dashboard have something to aggregate.

use chrono::{DateTime, FixedOffset};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use models::order;
use crate::db::order_queries;
use crate::errors::ServiceError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    #[serde(alias = "customerId")]
    pub customer_id: i32,
    #[serde(alias = "totalAmount")]
    pub total_amount: f64,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: i32,
    pub customer_id: i32,
    pub total_amount: f64,
    pub status: String,
    pub created_at: DateTime<FixedOffset>,
}

impl From<order::Model> for OrderView {
    fn from(m: order::Model) -> Self {
        Self { id: m.id, customer_id: m.customer_id, total_amount: m.total_amount, status: m.status, created_at: m.created_at }
    }
}

#[instrument(skip(db, input), fields(customer_id = input.customer_id))]
pub async fn create_order(db: &DatabaseConnection, input: NewOrder) -> Result<OrderView, ServiceError> {
    let created = order_queries::create_order(db, input.customer_id, input.total_amount, input.status.as_deref()).await?;
    info!(id = created.id, "order_created");
    Ok(created.into())
}

#[instrument(skip(db))]
pub async fn list_orders(db: &DatabaseConnection, customer_id: Option<i32>) -> Result<Vec<OrderView>, ServiceError> {
    let rows = order_queries::list_orders(db, customer_id).await?;
    Ok(rows.into_iter().map(OrderView::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::customer::domain::NewCustomer;
    use crate::db::customer_queries::create_customer;
    use crate::test_support::get_db;

    #[test]
    fn new_order_accepts_camel_case() {
        let o: NewOrder = serde_json::from_value(json!({"customerId": 3, "totalAmount": 9.5})).unwrap();
        assert_eq!(o.customer_id, 3);
        assert_eq!(o.total_amount, 9.5);
        assert!(o.status.is_none());
    }

    #[tokio::test]
    async fn create_and_list() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let c = create_customer(&db, NewCustomer { first_name: "Rob".into(), last_name: "Pike".into(), ..Default::default() }).await?;

        let view = create_order(&db, NewOrder { customer_id: c.id, total_amount: 42.0, status: Some("shipped".into()) }).await?;
        assert_eq!(view.status, "shipped");

        let bad = create_order(&db, NewOrder { customer_id: c.id, total_amount: -5.0, status: None }).await;
        assert!(matches!(bad, Err(ServiceError::Validation(_))));

        let listed = list_orders(&db, Some(c.id)).await?;
        assert_eq!(listed, vec![view]);
        Ok(())
    }
}
