pub mod payload;

pub use payload::{CategoriaTrabajadorReintegroPayload, PeriodScope};

/// REST resource: `/ctr/` (listed per company, payroll run and period)
pub const RESOURCE: &str = "ctr";
