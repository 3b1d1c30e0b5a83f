//! Controllers that bind check list models to views.
//!
//! Views own rendering and pointer geometry. Everything else lives here:
//! which model is attached, how clicks become toggles, and the
//! selection-changed notification views and applications listen to.

mod check_list;

pub use check_list::CheckList;
