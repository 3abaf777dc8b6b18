//! Invoice CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::models::{Company, Invoice, InvoiceDetail, InvoicePatch, InvoiceSummary, NewInvoice};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let invoices: Vec<InvoiceSummary> = sqlx::query_as("SELECT id, comp_code FROM invoices")
        .fetch_all(&state.pool)
        .await?;
    Ok(Json(json!({ "invoices": invoices })))
}

/// Fetches the invoice, then its owning company; the response nests the
/// company object in place of the raw comp_code.
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    let invoice: Invoice = sqlx::query_as(
        "SELECT id, comp_code, amt, paid, add_date, paid_date FROM invoices WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("No such invoice: {}", id)))?;

    let company: Company =
        sqlx::query_as("SELECT code, name, description FROM companies WHERE code = $1")
            .bind(&invoice.comp_code)
            .fetch_one(&state.pool)
            .await?;

    Ok(Json(json!({ "invoice": InvoiceDetail::new(invoice, company) })))
}

/// paid, add_date, and paid_date take their column defaults; an unknown
/// comp_code fails at the foreign key.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewInvoice>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    tracing::debug!(comp_code = %payload.comp_code, amt = payload.amt, "create invoice");
    let invoice: Invoice = sqlx::query_as(
        "INSERT INTO invoices (comp_code, amt) VALUES ($1, $2) \
         RETURNING id, comp_code, amt, paid, add_date, paid_date",
    )
    .bind(&payload.comp_code)
    .bind(payload.amt)
    .fetch_one(&state.pool)
    .await?;
    Ok((StatusCode::CREATED, Json(json!({ "invoice": invoice }))))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<InvoicePatch>,
) -> Result<Json<Value>, AppError> {
    let invoice: Invoice = sqlx::query_as(
        "UPDATE invoices SET amt = $1 WHERE id = $2 \
         RETURNING id, comp_code, amt, paid, add_date, paid_date",
    )
    .bind(payload.amt)
    .bind(id)
    .fetch_optional(&state.pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("No such invoice: {}", id)))?;
    Ok(Json(json!({ "invoice": invoice })))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, AppError> {
    let deleted: Option<(i32,)> = sqlx::query_as("DELETE FROM invoices WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(&state.pool)
        .await?;
    if deleted.is_none() {
        return Err(AppError::NotFound(format!("No such invoice: {}", id)));
    }
    Ok(Json(json!({ "status": "deleted" })))
}
