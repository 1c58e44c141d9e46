//! Domain logic for the portfolio project gallery.
//!
//! Everything here is pure: no database or network access. The API crate
//! uses the validation helpers, the client crate uses the form, tag input,
//! load state and gallery reconciler.

pub mod error;
pub mod gallery;
pub mod load_state;
pub mod patch;
pub mod project_form;
pub mod projects;
pub mod technology_input;
pub mod types;
