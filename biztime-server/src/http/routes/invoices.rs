//! Invoice endpoints, nested under `/invoices`

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use super::{not_found, DeletedResponse};
use crate::db::repos::{Invoice, InvoiceRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{InvoiceId, JsonBody};
use crate::http::server::AppState;
use crate::models::{InvoiceUpdate, NewInvoice};

/// Invoice list response
#[derive(Serialize)]
pub struct InvoicesResponse {
    pub invoices: Vec<Invoice>,
}

/// Single invoice response
#[derive(Serialize)]
pub struct InvoiceResponse {
    pub invoice: Invoice,
}

/// GET /invoices - list all invoices
async fn list_invoices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<InvoicesResponse>, ApiError> {
    let invoices = InvoiceRepo::new(&state.pool).list().await?;
    Ok(Json(InvoicesResponse { invoices }))
}

/// GET /invoices/{id}
async fn get_invoice(
    State(state): State<Arc<AppState>>,
    InvoiceId(id): InvoiceId,
) -> Result<Json<InvoiceResponse>, ApiError> {
    let invoice = InvoiceRepo::new(&state.pool).get(id).await?;
    Ok(Json(InvoiceResponse { invoice }))
}

/// POST /invoices - create an unpaid invoice
async fn create_invoice(
    State(state): State<Arc<AppState>>,
    JsonBody(body): JsonBody,
) -> Result<Json<InvoiceResponse>, ApiError> {
    let new = NewInvoice::from_body(&body)?;
    let invoice = InvoiceRepo::new(&state.pool).create(&new).await?;
    tracing::info!(id = invoice.id, comp_code = %invoice.comp_code, "invoice created");

    Ok(Json(InvoiceResponse { invoice }))
}

/// PATCH /invoices/{id} - change the amount
///
/// The body is validated before the id, so a bad body is a 400 whatever
/// the path says.
async fn update_invoice(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<InvoiceResponse>, ApiError> {
    let update = InvoiceUpdate::from_body(&body)?;
    let InvoiceId(id) = InvoiceId::parse(&raw_id)?;
    let invoice = InvoiceRepo::new(&state.pool).update(id, &update).await?;

    Ok(Json(InvoiceResponse { invoice }))
}

/// DELETE /invoices/{id}
async fn delete_invoice(
    State(state): State<Arc<AppState>>,
    InvoiceId(id): InvoiceId,
) -> Result<Json<DeletedResponse>, ApiError> {
    InvoiceRepo::new(&state.pool).delete(id).await?;
    tracing::info!(id, "invoice deleted");

    Ok(Json(DeletedResponse::new()))
}

/// Invoice routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_invoices).post(create_invoice))
        .route(
            "/{id}",
            get(get_invoice).patch(update_invoice).delete(delete_invoice),
        )
        .method_not_allowed_fallback(not_found)
}
