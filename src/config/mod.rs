//! Veil map and fixture loading
//!
//! Loaders take explicit paths and return typed errors; callers decide
//! whether a failure aborts the run.

pub mod error;
pub mod loader;

pub use error::LoadError;
pub use loader::{load_document, load_map, load_map_into, parse_document, parse_map};
