//! Stock repository
//!
//! Each operation checks a connection out of the pool, executes exactly one
//! parameterized statement, and maps the result set back by column name.

use sqlx::PgPool;

use crate::models::{Stock, StockInput};

/// Database error taxonomy.
///
/// `Unavailable` covers failures to reach the store at all (pool exhausted
/// or closed, I/O); `Query` covers statements the store accepted the
/// connection for but rejected.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("store unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: i64 },

    #[error("database error: {0}")]
    Query(#[source] sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        if matches!(
            e,
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_)
        ) {
            Self::Unavailable(e)
        } else {
            Self::Query(e)
        }
    }
}

/// Stock repository
pub struct StockRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> StockRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a stock, returning the id the store assigned.
    pub async fn insert(&self, input: &StockInput) -> Result<i64, DbError> {
        let (id,): (i64,) = sqlx::query_as(
            "INSERT INTO stocks (name, price, company) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(&input.company)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// Fetch every stock. An empty table yields an empty vec, not an error.
    pub async fn list(&self) -> Result<Vec<Stock>, DbError> {
        let stocks = sqlx::query_as("SELECT id, name, price, company FROM stocks ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(stocks)
    }

    /// Fetch a single stock by id.
    pub async fn get(&self, id: i64) -> Result<Stock, DbError> {
        sqlx::query_as("SELECT id, name, price, company FROM stocks WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound {
                resource: "stock",
                id,
            })
    }

    /// Replace all mutable fields of a stock wholesale.
    ///
    /// Returns the number of rows affected; an unknown id affects zero rows
    /// and is not an error.
    pub async fn update(&self, id: i64, input: &StockInput) -> Result<u64, DbError> {
        let result =
            sqlx::query("UPDATE stocks SET name = $2, price = $3, company = $4 WHERE id = $1")
                .bind(id)
                .bind(&input.name)
                .bind(input.price)
                .bind(&input.company)
                .execute(self.pool)
                .await?;

        Ok(result.rows_affected())
    }

    /// Delete a stock by id (idempotent).
    ///
    /// Returns the number of rows affected.
    pub async fn delete(&self, id: i64) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM stocks WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
