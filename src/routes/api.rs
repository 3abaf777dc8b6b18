//! Resource routers. Each builder owns its state; the binary nests them
//! under /companies, /invoices, and /industries.

use crate::handlers::{company, industry, invoice};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn company_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(company::list).post(company::create))
        .route(
            "/:code",
            get(company::read).put(company::update).delete(company::delete),
        )
        .with_state(state)
}

pub fn invoice_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(invoice::list).post(invoice::create))
        .route(
            "/:id",
            get(invoice::read).put(invoice::update).delete(invoice::delete),
        )
        .with_state(state)
}

pub fn industry_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(industry::list).post(industry::create))
        .route("/:code", get(industry::read))
        .route("/:code/companies/:comp_code", post(industry::associate))
        .with_state(state)
}
