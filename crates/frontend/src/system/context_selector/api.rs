use contracts::shared::{CompanyOption, PayrollRunOption, PeriodOption};
use serde::Serialize;

use crate::shared::dependent_loader::with_query;
use crate::shared::http::{self, ApiError};

#[derive(Serialize)]
struct PeriodFilter {
    #[serde(rename = "IDEmpresa")]
    company_id: i64,
    #[serde(rename = "IDNomina")]
    payroll_run_id: i64,
}

/// Fetch all companies
pub async fn fetch_companies() -> Result<Vec<CompanyOption>, ApiError> {
    http::get_json("/empresa/").await
}

/// Fetch all payroll runs
pub async fn fetch_payroll_runs() -> Result<Vec<PayrollRunOption>, ApiError> {
    http::get_json("/lista-nomina/").await
}

/// Fetch the periods of a (company, payroll run) pair
pub async fn fetch_periods(company_id: i64, payroll_run_id: i64) -> Result<Vec<PeriodOption>, ApiError> {
    let path = with_query(
        "/lista-periodo/",
        &PeriodFilter {
            company_id,
            payroll_run_id,
        },
    );
    http::get_json(&path).await
}
