//! Company endpoints, nested under `/companies`

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::{not_found, DeletedResponse};
use crate::db::repos::{Company, CompanyRepo};
use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{CompanyDetail, CompanyUpdate, NewCompany};

/// Company list response
#[derive(Serialize)]
pub struct CompaniesResponse {
    pub companies: Vec<Company>,
}

/// Single company response
#[derive(Serialize)]
pub struct CompanyResponse<T> {
    pub company: T,
}

/// GET /companies - list all companies
async fn list_companies(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CompaniesResponse>, ApiError> {
    let companies = CompanyRepo::new(&state.pool).list().await?;
    Ok(Json(CompaniesResponse { companies }))
}

/// GET /companies/{code} - company plus the ids of its invoices
async fn get_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<CompanyResponse<CompanyDetail>>, ApiError> {
    let repo = CompanyRepo::new(&state.pool);
    let company = repo.get(&code).await?;
    let invoices = repo.invoice_ids(&code).await?;

    Ok(Json(CompanyResponse {
        company: CompanyDetail { company, invoices },
    }))
}

/// POST /companies - create a company
async fn create_company(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody,
) -> Result<Json<CompanyResponse<Company>>, ApiError> {
    let new = NewCompany::from_body(&body)?;
    let company = CompanyRepo::new(&state.pool).create(&new).await?;
    tracing::info!(code = %company.code, "company created");

    Ok(Json(CompanyResponse { company }))
}

/// PATCH /companies/{code} - replace name and description
async fn update_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<CompanyResponse<Company>>, ApiError> {
    let update = CompanyUpdate::from_body(&body)?;
    let company = CompanyRepo::new(&state.pool).update(&code, &update).await?;

    Ok(Json(CompanyResponse { company }))
}

/// DELETE /companies/{code}
async fn delete_company(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Json<DeletedResponse>, ApiError> {
    CompanyRepo::new(&state.pool).delete(&code).await?;
    tracing::info!(%code, "company deleted");

    Ok(Json(DeletedResponse::new()))
}

/// Company routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_companies).post(create_company))
        .route(
            "/{code}",
            get(get_company).patch(update_company).delete(delete_company),
        )
        .method_not_allowed_fallback(not_found)
}
