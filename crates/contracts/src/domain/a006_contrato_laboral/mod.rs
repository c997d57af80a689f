pub mod payload;

pub use payload::ContratoLaboralPayload;

/// REST resource: `/contrato-laboral/`
pub const RESOURCE: &str = "contrato-laboral";
