//! stockd-server: HTTP CRUD API over the stocks table
//!
//! Request handlers decode JSON bodies and path identifiers, the stock
//! repository issues one parameterized statement per operation against a
//! shared PostgreSQL pool, and every failure maps onto an HTTP status for
//! that request alone - the process keeps serving.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, ping, DbError, StockRepo};
pub use http::{run_server, ApiError, AppState, ServerConfig};
pub use models::{Stock, StockInput};
