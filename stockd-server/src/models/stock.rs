//! The stock entity and its wire shape

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted stock row.
///
/// `id` is assigned by the store on insert and never changes afterwards.
/// Rows are mapped back by column name, so a reordered SELECT cannot
/// silently shift values between fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Stock {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub company: String,
}

/// The mutable fields of a stock, as carried by create and update bodies.
///
/// All three fields are required: a body missing any of them fails to decode
/// instead of being half-applied. `price` is stored as-is, negative and zero
/// included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockInput {
    pub name: String,
    pub price: f64,
    pub company: String,
}
