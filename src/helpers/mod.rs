//! Helper Utilities
//!
//! Common utilities used across the crate.

mod action;
mod fs;

pub use action::*;
pub use fs::*;
