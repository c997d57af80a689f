pub mod payload;

pub use payload::CuentaContablePayload;

/// REST resource: `/cuenta-contable/`
pub const RESOURCE: &str = "cuenta-contable";
