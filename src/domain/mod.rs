//! Domain - Core Data Types
//!
//! Cell values, records and configuration shared by the grid and its hosts.

pub mod config;
pub mod row;
pub mod scalar;

pub use config::{GridConfig, LogConfig};
pub use row::Row;
pub use scalar::Scalar;
