//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row, and re-exports the create/update DTOs it accepts.

pub mod project;
