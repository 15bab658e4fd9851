//! Company repository
//!
//! - get: company row, then invoice ids in a second statement
//! - create: plain INSERT, duplicate codes surface as a sqlx error
//! - update/delete: `RETURNING` decides between the row and NotFound

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::{CompanyUpdate, NewCompany};

/// Company record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: String,
}

/// Company repository
pub struct CompanyRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CompanyRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all companies in whatever order Postgres returns them.
    pub async fn list(&self) -> Result<Vec<Company>, DbError> {
        let companies = sqlx::query_as::<_, Company>(
            "SELECT code, name, description FROM companies",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(companies)
    }

    /// Get a single company by code.
    pub async fn get(&self, code: &str) -> Result<Company, DbError> {
        sqlx::query_as::<_, Company>(
            "SELECT code, name, description FROM companies WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::company_not_found(code))
    }

    /// Ids of every invoice billed to `code`. Empty when there are none.
    pub async fn invoice_ids(&self, code: &str) -> Result<Vec<i32>, DbError> {
        let ids = sqlx::query_scalar::<_, i32>("SELECT id FROM invoices WHERE comp_code = $1")
            .bind(code)
            .fetch_all(self.pool)
            .await?;

        Ok(ids)
    }

    pub async fn create(&self, new: &NewCompany) -> Result<Company, DbError> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (code, name, description)
            VALUES ($1, $2, $3)
            RETURNING code, name, description
            "#,
        )
        .bind(&new.code)
        .bind(&new.name)
        .bind(&new.description)
        .fetch_one(self.pool)
        .await?;

        Ok(company)
    }

    /// Replace name and description of the company with `code`.
    pub async fn update(&self, code: &str, update: &CompanyUpdate) -> Result<Company, DbError> {
        sqlx::query_as::<_, Company>(
            r#"
            UPDATE companies SET name = $1, description = $2
            WHERE code = $3
            RETURNING code, name, description
            "#,
        )
        .bind(&update.name)
        .bind(&update.description)
        .bind(code)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::company_not_found(code))
    }

    /// Delete the company with `code`. Its invoices follow the foreign
    /// key's ON DELETE rule.
    pub async fn delete(&self, code: &str) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM companies WHERE code = $1")
            .bind(code)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::company_not_found(code));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_pool, unique_code};

    // Run with: DATABASE_URL=... cargo test -p biztime-server -- --ignored

    fn sample(code: &str) -> NewCompany {
        NewCompany {
            code: code.to_owned(),
            name: "Apple Inc.".into(),
            description: "They make things.".into(),
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get() {
        let pool = test_pool().await;
        let repo = CompanyRepo::new(&pool);
        let code = unique_code("appl");

        let created = repo.create(&sample(&code)).await.unwrap();
        assert_eq!(created.code, code);

        let fetched = repo.get(&code).await.unwrap();
        assert_eq!(fetched, created);
        assert!(repo.invoice_ids(&code).await.unwrap().is_empty());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn duplicate_code_is_a_sqlx_error() {
        let pool = test_pool().await;
        let repo = CompanyRepo::new(&pool);
        let code = unique_code("dup");

        repo.create(&sample(&code)).await.unwrap();
        let err = repo.create(&sample(&code)).await.unwrap_err();
        assert!(matches!(err, DbError::Sqlx(_)));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_missing_company_is_not_found() {
        let pool = test_pool().await;
        let update = CompanyUpdate {
            name: "Nobody".into(),
            description: "Nothing".into(),
        };

        let err = CompanyRepo::new(&pool)
            .update(&unique_code("ghost"), &update)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "Company", .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn second_delete_is_not_found() {
        let pool = test_pool().await;
        let repo = CompanyRepo::new(&pool);
        let code = unique_code("gone");

        repo.create(&sample(&code)).await.unwrap();
        repo.delete(&code).await.unwrap();

        let err = repo.delete(&code).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
