//! Router assembly.

mod api;
mod common;

pub use api::{company_routes, industry_routes, invoice_routes};
pub use common::common_routes;

use crate::state::AppState;
use axum::Router;

/// Full application router: common routes plus the three resources.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/companies", company_routes(state.clone()))
        .nest("/invoices", invoice_routes(state.clone()))
        .nest("/industries", industry_routes(state))
}
