pub mod payload;

pub use payload::CargoEmpresaPayload;

/// REST resource: `/cargo-empresa/`
pub const RESOURCE: &str = "cargo-empresa";
