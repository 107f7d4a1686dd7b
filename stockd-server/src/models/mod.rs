//! Domain models shared by the HTTP and database layers

pub mod stock;

pub use stock::{Stock, StockInput};
