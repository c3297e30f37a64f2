//! Data Grid Library
//!
//! Headless core of a paginated, editable, resizable, column-toggleable data
//! grid. The [`grid::DataGrid`] controller owns all state; render surfaces
//! read it through [`surface::RenderSurface`] and feed user intents back as
//! [`helpers::GridAction`]s.

rust_i18n::i18n!("locales", fallback = "en");

pub mod constants;
pub mod domain;
pub mod error;
pub mod grid;
pub mod helpers;
pub mod i18n;
pub mod surface;
pub mod utils;

pub use domain::{GridConfig, Row, Scalar};
pub use error::{Error, Result};
pub use grid::{Column, DataGrid};
pub use helpers::GridAction;
