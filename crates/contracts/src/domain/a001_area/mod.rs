pub mod payload;

pub use payload::AreaPayload;

/// REST resource: `/area/`
pub const RESOURCE: &str = "area";
