//! Create the `customer_stats` view.
//!
//! Per-customer order totals are computed at read time from `orders`; nothing
//! is maintained incrementally. Customers without orders report zero totals
//! and a NULL `last_order_date`.
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DatabaseBackend;

#[derive(DeriveMigrationName)]
pub struct Migration;

const VIEW_BODY: &str = "\
SELECT c.id, \
       c.first_name || ' ' || c.last_name AS customer_name, \
       c.first_name, \
       c.last_name, \
       c.email, \
       c.phone, \
       c.balance, \
       COUNT(o.id) AS total_orders, \
       COALESCE(SUM(o.total_amount), 0.0) AS total_spent, \
       MAX(o.created_at) AS last_order_date \
FROM customers c \
LEFT JOIN orders o ON o.customer_id = c.id \
GROUP BY c.id, c.first_name, c.last_name, c.email, c.phone, c.balance";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite has no CREATE OR REPLACE VIEW; Postgres has no IF NOT EXISTS for views.
        let create = match manager.get_database_backend() {
            DatabaseBackend::Sqlite => "CREATE VIEW IF NOT EXISTS customer_stats AS",
            _ => "CREATE OR REPLACE VIEW customer_stats AS",
        };
        manager
            .get_connection()
            .execute_unprepared(&format!("{create} {VIEW_BODY}"))
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP VIEW IF EXISTS customer_stats")
            .await?;
        Ok(())
    }
}
