//! Stock endpoints - one handler per route, one statement per request
//!
//! Body and path extraction go through `Result`-wrapped extractors so a
//! malformed body or a non-numeric id becomes a 400 from the error taxonomy
//! instead of axum's default rejection.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::db::StockRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{Stock, StockInput};

/// Response for the mutating routes: the id touched plus a summary line.
#[derive(Debug, Serialize)]
pub struct StockMutation {
    pub id: i64,
    pub message: String,
}

/// POST /stock - create a stock, id assigned by the store
async fn create_stock(
    State(state): State<AppState>,
    body: Result<Json<StockInput>, JsonRejection>,
) -> Result<Json<StockMutation>, ApiError> {
    let Json(input) = body?;
    let id = StockRepo::new(state.pool()).insert(&input).await?;

    Ok(Json(StockMutation {
        id,
        message: "Stock created Successfully".to_owned(),
    }))
}

/// GET /stock - list every stock
async fn list_stocks(State(state): State<AppState>) -> Result<Json<Vec<Stock>>, ApiError> {
    let stocks = StockRepo::new(state.pool()).list().await?;
    Ok(Json(stocks))
}

/// GET /stock/{id} - fetch a single stock, 404 when absent
async fn get_stock(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Stock>, ApiError> {
    let Path(id) = id?;
    let stock = StockRepo::new(state.pool()).get(id).await?;
    Ok(Json(stock))
}

/// PUT /stock/{id} - replace every mutable field wholesale
async fn update_stock(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<StockInput>, JsonRejection>,
) -> Result<Json<StockMutation>, ApiError> {
    let Path(id) = id?;
    let Json(input) = body?;
    let affected = StockRepo::new(state.pool()).update(id, &input).await?;

    Ok(Json(StockMutation {
        id,
        message: format!("stock updated successfully. Total rows affected: {}", affected),
    }))
}

/// DELETE /stock/{id} - remove a stock; repeating the call affects zero rows
async fn delete_stock(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<StockMutation>, ApiError> {
    let Path(id) = id?;
    let affected = StockRepo::new(state.pool()).delete(id).await?;

    Ok(Json(StockMutation {
        id,
        message: format!("stock deleted successfully. Total rows affected: {}", affected),
    }))
}

/// Stock routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stock", get(list_stocks).post(create_stock))
        .route(
            "/stock/{id}",
            get(get_stock).put(update_stock).delete(delete_stock),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mutation_response_shape() {
        let res = StockMutation {
            id: 1,
            message: "stock deleted successfully. Total rows affected: 1".to_owned(),
        };
        let json = serde_json::to_value(&res).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(
            json["message"],
            "stock deleted successfully. Total rows affected: 1"
        );
    }
}
