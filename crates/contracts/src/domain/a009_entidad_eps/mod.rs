pub mod payload;

pub use payload::EntidadEpsPayload;

/// REST resource: `/entidad-eps/` (not company scoped)
pub const RESOURCE: &str = "entidad-eps";
