//! Metadata-driven CRUD table: a column schema in, a paginated searchable
//! table with add/edit form out. The engine never issues requests.

pub mod engine;
pub mod schema;
pub mod view;

pub use engine::{FormState, SaveAction};
pub use schema::{check_mark, money, Column, SelectSource};
pub use view::TableGlobal;
