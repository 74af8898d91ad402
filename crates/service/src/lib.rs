//! Service layer for the customer ledger.
//! - `customer`: repository seam and application service over customers.
//! - `stats`: dashboard aggregation recomputed from the store on every call.
//! - `order`: the minimal order collaborator the aggregations read from.
//! - `db`: SeaORM queries shared by the above.

pub mod errors;
pub mod pagination;
pub mod db;
pub mod customer;
pub mod stats;
pub mod order;
#[cfg(test)]
pub mod test_support;
