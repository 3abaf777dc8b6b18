//! biztrack: company, invoice, and industry REST API over PostgreSQL.

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod slug;
pub mod state;
pub mod store;

pub use error::AppError;
pub use routes::{app, common_routes, company_routes, industry_routes, invoice_routes};
pub use slug::slugify;
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables};
