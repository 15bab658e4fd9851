//! Invoice repository
//!
//! - create: only comp_code and amt are written, paid/paid_date take
//!   their column defaults
//! - update: touches amt and nothing else

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::{InvoiceUpdate, NewInvoice};

/// Invoice record from database
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub paid_date: Option<NaiveDate>,
}

/// Invoice repository
pub struct InvoiceRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> InvoiceRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Invoice>, DbError> {
        let invoices = sqlx::query_as::<_, Invoice>(
            "SELECT id, comp_code, amt, paid, paid_date FROM invoices",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(invoices)
    }

    pub async fn get(&self, id: i32) -> Result<Invoice, DbError> {
        sqlx::query_as::<_, Invoice>(
            "SELECT id, comp_code, amt, paid, paid_date FROM invoices WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::invoice_not_found(id))
    }

    /// Insert an invoice. An unknown `comp_code` fails on the foreign key.
    pub async fn create(&self, new: &NewInvoice) -> Result<Invoice, DbError> {
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            INSERT INTO invoices (comp_code, amt)
            VALUES ($1, $2)
            RETURNING id, comp_code, amt, paid, paid_date
            "#,
        )
        .bind(&new.comp_code)
        .bind(new.amt)
        .fetch_one(self.pool)
        .await?;

        Ok(invoice)
    }

    pub async fn update(&self, id: i32, update: &InvoiceUpdate) -> Result<Invoice, DbError> {
        sqlx::query_as::<_, Invoice>(
            r#"
            UPDATE invoices SET amt = $1
            WHERE id = $2
            RETURNING id, comp_code, amt, paid, paid_date
            "#,
        )
        .bind(update.amt)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::invoice_not_found(id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::invoice_not_found(id));
        }
        Ok(())
    }
}
