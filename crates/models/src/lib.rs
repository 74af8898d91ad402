pub mod errors;
pub mod db;
pub mod customer;
pub mod order;
pub mod customer_stats;

#[cfg(test)]
mod tests;
