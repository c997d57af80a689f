pub mod payload;

pub use payload::DiasUtilesMesPayload;

/// REST resource: `/dias-utiles-mes/`
pub const RESOURCE: &str = "dias-utiles-mes";
