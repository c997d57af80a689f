pub mod payload;

pub use payload::BancoPayload;

/// REST resource: `/banco/`
pub const RESOURCE: &str = "banco";
