//! Utility functions

pub mod math;

pub use math::add;
