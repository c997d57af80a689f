//! Per-entity request payloads of the payroll API.
//!
//! Each module owns the REST resource name and the normalization that turns the
//! generic form values into the body the API expects. Context-bound fields
//! (company, payroll run, year/month) always come from the selection context.

pub mod common;

pub mod a001_area;
pub mod a002_banco;
pub mod a003_cargo_empresa;
pub mod a004_categoria_trabajador_reintegro;
pub mod a005_centro_costo;
pub mod a006_contrato_laboral;
pub mod a007_cuenta_contable;
pub mod a008_dias_utiles_mes;
pub mod a009_entidad_eps;
