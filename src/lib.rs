//! veil: load veil map and fixture documents
//!
//! A veil map names the columns to de-identify and time-shift; a fixture is
//! an arbitrary JSON document. This crate only loads them.

pub mod cli;
pub mod config;
pub mod domain;
pub mod utils;

pub use config::{load_document, load_map, load_map_into, LoadError};
pub use domain::{Document, VeilMap};
