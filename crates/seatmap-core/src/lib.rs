//! # Seatmap Core
//!
//! Core types, errors, and constants for the seatmap venue map engine.
//! Provides the fundamental value types shared across the workspace:
//! world/screen geometry, colors, the error taxonomy, and callback aliases.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod types;

pub use error::{AreaError, ColorError, Error, Result, TemplateError};
pub use geometry::{Color, Point, ScreenPoint};
pub use types::{AreaId, SelectionCallback, Shared};
