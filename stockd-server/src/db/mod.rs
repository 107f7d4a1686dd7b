//! Database layer - connection pool, schema bootstrap, and the stock repository
//!
//! # Design Principles
//!
//! - One bounded connection pool, checked out per statement - no
//!   connection-per-request churn
//! - One parameterized statement per operation, auto-committed
//! - Rows map back by column name, never by position

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, ping};
pub use repos::{DbError, StockRepo};
