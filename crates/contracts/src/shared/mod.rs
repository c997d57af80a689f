//! Cross-entity contracts: selection context, combos, rows, error payloads, form coercion

pub mod api_error;
pub mod combos;
pub mod form;
pub mod row;
pub mod selection;

// Re-exports
pub use api_error::{ApiErrorPayload, ErrorDetail, LocSegment, ValidationEntry};
pub use combos::{CompanyOption, LookupRow, PayrollRunOption, PeriodOption};
pub use form::{FormError, FormValues, SaveMode};
pub use row::{row_id, value_text, Row};
pub use selection::{
    period_label, CompanyRef, PayrollRunRef, PeriodRef, Selection, SelectionContext,
};
