//! SeaORM queries, one module per table family. Functions take a
//! `DatabaseConnection` and return entity models; callers map to DTOs.

pub mod customer_queries;
pub mod order_queries;
