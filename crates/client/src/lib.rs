//! Presentation-side logic for the portfolio gallery.
//!
//! - [`api`]: typed HTTP client for the project API.
//! - [`gallery`]: fetch the records and reconcile them into display cards.
//! - [`form`]: validate and submit the "add project" form.

pub mod api;
pub mod form;
pub mod gallery;
