//! Row types, composed response shapes, and request payloads.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, FromRow)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// List shape: `{code, name}` only.
#[derive(Debug, Serialize, FromRow)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

/// Get-by-code shape: the company plus its invoice ids and industry labels.
#[derive(Debug, Serialize)]
pub struct CompanyDetail {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub invoices: Vec<i32>,
    pub industries: Vec<String>,
}

#[derive(Debug, Serialize, FromRow)]
pub struct Invoice {
    pub id: i32,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

#[derive(Debug, Serialize, FromRow)]
pub struct InvoiceSummary {
    pub id: i32,
    pub comp_code: String,
}

/// Get-by-id shape: the owning company replaces the raw comp_code.
#[derive(Debug, Serialize)]
pub struct InvoiceDetail {
    pub id: i32,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub company: Company,
}

impl InvoiceDetail {
    pub fn new(invoice: Invoice, company: Company) -> Self {
        InvoiceDetail {
            id: invoice.id,
            amt: invoice.amt,
            paid: invoice.paid,
            add_date: invoice.add_date,
            paid_date: invoice.paid_date,
            company,
        }
    }
}

#[derive(Debug, Serialize, FromRow)]
pub struct Industry {
    pub code: String,
    pub industry: String,
}

/// Get-by-code shape: the industry plus its member companies.
#[derive(Debug, Serialize)]
pub struct IndustryDetail {
    pub code: String,
    pub industry: String,
    pub companies: Vec<CompanySummary>,
}

/// Create payload. When `code` is absent it is derived by slugifying `name`.
#[derive(Debug, Deserialize)]
pub struct NewCompany {
    pub code: Option<String>,
    pub name: String,
    pub description: Option<String>,
}

/// Update payload. The code is never rewritten.
#[derive(Debug, Deserialize)]
pub struct CompanyPatch {
    pub name: String,
    pub description: Option<String>,
}

/// Create payload. paid, add_date, and paid_date take storage defaults.
#[derive(Debug, Deserialize)]
pub struct NewInvoice {
    pub comp_code: String,
    pub amt: f64,
}

/// Update payload. Only the amount is mutable; extra body fields are ignored.
#[derive(Debug, Deserialize)]
pub struct InvoicePatch {
    pub amt: f64,
}

#[derive(Debug, Deserialize)]
pub struct NewIndustry {
    pub code: String,
    pub industry: String,
}
