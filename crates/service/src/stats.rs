//! Dashboard aggregation. Nothing is cached: each call reads the current
//! customer count and order amounts and folds them here.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::db::order_queries;
use crate::errors::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_customers: u64,
    pub total_orders: u64,
    pub total_revenue: f64,
    pub avg_order_value: f64,
}

/// Round to two decimal places using the exact decimal value of the double,
/// ties away from zero. `0.015` is stored as `0.01499..`, so it rounds down.
pub fn round_currency(v: f64) -> f64 {
    Decimal::from_f64_retain(v)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .unwrap_or(v)
}

/// Fold order amounts into dashboard figures. Missing amounts count as orders
/// but contribute nothing to revenue.
pub fn summarize(total_customers: u64, amounts: &[Option<f64>]) -> DashboardStats {
    let total_orders = amounts.len() as u64;
    let revenue: f64 = amounts.iter().map(|a| a.unwrap_or(0.0)).sum();
    let avg = if total_orders == 0 { 0.0 } else { revenue / total_orders as f64 };
    DashboardStats {
        total_customers,
        total_orders,
        total_revenue: round_currency(revenue),
        avg_order_value: round_currency(avg),
    }
}

#[instrument(skip(db))]
pub async fn compute_dashboard_stats(db: &DatabaseConnection) -> Result<DashboardStats, ServiceError> {
    let total_customers = order_queries::count_customers(db).await?;
    let amounts = order_queries::order_amounts(db).await?;
    let stats = summarize(total_customers, &amounts);
    info!(customers = stats.total_customers, orders = stats.total_orders, "dashboard stats computed");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::customer::domain::NewCustomer;
    use crate::db::customer_queries::{create_customer, delete_customer};
    use crate::db::order_queries::create_order;
    use crate::test_support::get_db;
    use sea_orm::ConnectionTrait;

    #[test]
    fn empty_store_is_all_zeros() {
        let s = summarize(0, &[]);
        assert_eq!(s, DashboardStats { total_customers: 0, total_orders: 0, total_revenue: 0.0, avg_order_value: 0.0 });
    }

    #[test]
    fn null_amounts_count_but_add_nothing() {
        let s = summarize(1, &[Some(10.0), None]);
        assert_eq!(s.total_orders, 2);
        assert_eq!(s.total_revenue, 10.0);
        assert_eq!(s.avg_order_value, 5.0);
    }

    #[test]
    fn rounding_is_two_places() {
        assert_eq!(round_currency(12.344), 12.34);
        assert_eq!(round_currency(12.346), 12.35);
        assert_eq!(round_currency(0.0), 0.0);
    }

    #[test]
    fn rounding_follows_the_stored_decimal_value() {
        // below the midpoint once the binary expansion is taken exactly
        assert_eq!(round_currency(0.015), 0.01);
        assert_eq!(round_currency(0.045), 0.04);
        assert_eq!(round_currency(0.155), 0.15);
        // exactly representable midpoints go away from zero
        assert_eq!(round_currency(0.125), 0.13);
        assert_eq!(round_currency(2.5), 2.5);
        assert_eq!(summarize(1, &[Some(0.015)]).total_revenue, 0.01);
    }

    #[tokio::test]
    async fn recomputed_from_store_on_each_call() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        assert_eq!(compute_dashboard_stats(&db).await?, summarize(0, &[]));

        let a = create_customer(&db, NewCustomer { first_name: "A".into(), last_name: "One".into(), ..Default::default() }).await?;
        let b = create_customer(&db, NewCustomer { first_name: "B".into(), last_name: "Two".into(), ..Default::default() }).await?;
        create_order(&db, a.id, 10.005, None).await?;
        create_order(&db, a.id, 20.00, None).await?;
        create_order(&db, b.id, 5.995, None).await?;

        let s = compute_dashboard_stats(&db).await?;
        assert_eq!(s.total_customers, 2);
        assert_eq!(s.total_orders, 3);
        assert_eq!(s.total_revenue, 36.0);
        assert_eq!(s.avg_order_value, 12.0);

        // cascade removes b's order; totals follow without any invalidation
        delete_customer(&db, b.id).await?;
        let s = compute_dashboard_stats(&db).await?;
        assert_eq!(s.total_customers, 1);
        assert_eq!(s.total_orders, 2);
        assert!((s.total_revenue - 30.0).abs() <= 0.01);
        Ok(())
    }

    #[tokio::test]
    async fn store_failure_yields_db_error_without_partial_stats() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let c = create_customer(&db, NewCustomer { first_name: "A".into(), last_name: "One".into(), ..Default::default() }).await?;
        create_order(&db, c.id, 10.0, None).await?;

        // the customer count still succeeds; the order projection does not
        db.execute_unprepared("DROP VIEW customer_stats").await?;
        db.execute_unprepared("DROP TABLE orders").await?;

        let res = compute_dashboard_stats(&db).await;
        assert!(matches!(res, Err(ServiceError::Db(_))), "{res:?}");
        Ok(())
    }
}
