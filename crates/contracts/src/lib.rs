//! Data contracts shared between the payroll front end and the remote payroll API.
//!
//! Nothing in this crate performs IO: it only describes payloads, the selection
//! context and the coercion of raw form values into typed request bodies.

pub mod domain;
pub mod shared;
