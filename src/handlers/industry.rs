//! Industry handlers: list, read, create, and company association.

use crate::error::AppError;
use crate::models::{CompanySummary, Industry, IndustryDetail, NewIndustry};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use sqlx::PgPool;

pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let industries: Vec<Industry> = sqlx::query_as("SELECT code, industry FROM industries")
        .fetch_all(&state.pool)
        .await?;
    Ok(Json(json!({ "industries": industries })))
}

pub async fn read(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Value>, AppError> {
    let detail = fetch_detail(&state.pool, &code).await?;
    Ok(Json(json!({ "industry": detail })))
}

pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewIndustry>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let industry: Industry = sqlx::query_as(
        "INSERT INTO industries (code, industry) VALUES ($1, $2) RETURNING code, industry",
    )
    .bind(&payload.code)
    .bind(&payload.industry)
    .fetch_one(&state.pool)
    .await?;
    Ok((StatusCode::CREATED, Json(json!({ "industry": industry }))))
}

/// Inserts the join row, then re-fetches the industry with its companies.
/// The write and the read are separate auto-committed statements; a
/// concurrent modification can be visible in the re-fetch.
pub async fn associate(
    State(state): State<AppState>,
    Path((code, comp_code)): Path<(String, String)>,
) -> Result<Json<Value>, AppError> {
    let inserted: Option<(String, String)> = sqlx::query_as(
        "INSERT INTO company_industries (comp_code, ind_code) VALUES ($1, $2) \
         RETURNING comp_code, ind_code",
    )
    .bind(&comp_code)
    .bind(&code)
    .fetch_optional(&state.pool)
    .await?;
    if inserted.is_none() {
        return Err(AppError::NotFound(format!("No such industry: {}", code)));
    }
    tracing::debug!(%code, %comp_code, "associated company with industry");

    let detail = fetch_detail(&state.pool, &code).await?;
    Ok(Json(json!({ "industry": detail })))
}

/// Industry row plus its member companies via the join relation. NotFound
/// when the industry is absent.
async fn fetch_detail(pool: &PgPool, code: &str) -> Result<IndustryDetail, AppError> {
    let industry: Industry =
        sqlx::query_as("SELECT code, industry FROM industries WHERE code = $1")
            .bind(code)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No such industry: {}", code)))?;

    let companies: Vec<CompanySummary> = sqlx::query_as(
        "SELECT code, name FROM companies \
         WHERE code IN (SELECT comp_code FROM company_industries WHERE ind_code = $1)",
    )
    .bind(code)
    .fetch_all(pool)
    .await?;

    Ok(IndustryDetail {
        code: industry.code,
        industry: industry.industry,
        companies,
    })
}
