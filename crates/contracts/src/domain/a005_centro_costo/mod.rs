pub mod payload;

pub use payload::CentroCostoPayload;

/// REST resource: `/centro-costo/`
pub const RESOURCE: &str = "centro-costo";
