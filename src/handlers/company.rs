//! Company CRUD handlers: list, read, create, update, delete.

use crate::error::AppError;
use crate::models::{Company, CompanyDetail, CompanyPatch, CompanySummary, NewCompany};
use crate::slug::slugify;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let companies: Vec<CompanySummary> = sqlx::query_as("SELECT code, name FROM companies")
        .fetch_all(&state.pool)
        .await?;
    Ok(Json(json!({ "companies": companies })))
}

/// Three queries: the company row, its invoice ids, its industry labels.
pub async fn read(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Value>, AppError> {
    let company: Company =
        sqlx::query_as("SELECT code, name, description FROM companies WHERE code = $1")
            .bind(&code)
            .fetch_optional(&state.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No such company: {}", code)))?;

    let invoices: Vec<i32> = sqlx::query_scalar("SELECT id FROM invoices WHERE comp_code = $1")
        .bind(&code)
        .fetch_all(&state.pool)
        .await?;

    let industries: Vec<String> = sqlx::query_scalar(
        "SELECT industry FROM industries \
         WHERE code IN (SELECT ind_code FROM company_industries WHERE comp_code = $1)",
    )
    .bind(&code)
    .fetch_all(&state.pool)
    .await?;

    let detail = CompanyDetail {
        code: company.code,
        name: company.name,
        description: company.description,
        invoices,
        industries,
    };
    Ok(Json(json!({ "company": detail })))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewCompany>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let code = payload
        .code
        .unwrap_or_else(|| slugify(&payload.name));
    tracing::debug!(%code, name = %payload.name, "create company");
    let company: Company = sqlx::query_as(
        "INSERT INTO companies (code, name, description) VALUES ($1, $2, $3) \
         RETURNING code, name, description",
    )
    .bind(&code)
    .bind(&payload.name)
    .bind(&payload.description)
    .fetch_one(&state.pool)
    .await?;
    Ok((StatusCode::CREATED, Json(json!({ "company": company }))))
}

pub async fn update(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Json(payload): Json<CompanyPatch>,
) -> Result<Json<Value>, AppError> {
    let company: Company = sqlx::query_as(
        "UPDATE companies SET name = $1, description = $2 WHERE code = $3 \
         RETURNING code, name, description",
    )
    .bind(&payload.name)
    .bind(&payload.description)
    .bind(&code)
    .fetch_optional(&state.pool)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("No such company: {}", code)))?;
    Ok(Json(json!({ "company": company })))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Value>, AppError> {
    let deleted: Option<(String,)> =
        sqlx::query_as("DELETE FROM companies WHERE code = $1 RETURNING code")
            .bind(&code)
            .fetch_optional(&state.pool)
            .await?;
    if deleted.is_none() {
        return Err(AppError::NotFound(format!("No such company: {}", code)));
    }
    tracing::debug!(%code, "deleted company");
    Ok(Json(json!({ "status": "deleted" })))
}
