//! Error handling for the seatmap engine.
//!
//! Provides error types for the two layers that can reject input:
//! - Area errors (malformed polygon payloads, caught at the data-entry boundary)
//! - Template errors (map-level validation and file format issues)
//!
//! All error types use `thiserror` for ergonomic error handling. Everything
//! here is local and non-fatal: the engine never aborts the host application,
//! the worst case is a payload rejected before it reaches the geometry model.

use thiserror::Error;

/// Color string parse error.
///
/// Fill colors arrive from area-creation payloads as `#rrggbb` strings;
/// anything else is rejected with the offending value and a reason.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid color string '{value}': {reason}")]
pub struct ColorError {
    /// The string that failed to parse.
    pub value: String,
    /// Why it failed.
    pub reason: &'static str,
}

/// Area validation error.
///
/// Produced by the validated `Area` constructor when a polygon payload is
/// malformed. Each variant names the field that failed, so the data-entry
/// boundary can surface a precise message instead of silently coercing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AreaError {
    /// The polygon has fewer than 3 vertices.
    #[error("area '{name}' has {count} vertices; a closed polygon needs at least 3")]
    TooFewVertices {
        /// Display name of the offending area.
        name: String,
        /// Number of vertices supplied.
        count: usize,
    },

    /// A vertex coordinate is NaN or infinite.
    #[error("area '{name}' vertex {index} is not finite: ({x}, {y})")]
    NonFiniteVertex {
        /// Display name of the offending area.
        name: String,
        /// Zero-based index of the bad vertex.
        index: usize,
        /// The vertex X coordinate.
        x: f64,
        /// The vertex Y coordinate.
        y: f64,
    },

    /// The fill color string did not parse.
    #[error("area '{name}' fill color rejected: {source}")]
    InvalidFillColor {
        /// Display name of the offending area.
        name: String,
        /// The underlying color parse failure.
        source: ColorError,
    },

    /// The display name is empty.
    #[error("area name must not be empty")]
    EmptyName,
}

/// Template-level error.
///
/// Covers map-wide validation and the JSON design file format.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Map extents must both be positive.
    #[error("map extents must be positive, got {width} x {height}")]
    InvalidExtents {
        /// Supplied map width.
        width: f64,
        /// Supplied map height.
        height: f64,
    },

    /// Two areas share an id.
    #[error("duplicate area id {id}")]
    DuplicateAreaId {
        /// The id that appears more than once.
        id: u64,
    },

    /// An area payload failed validation.
    #[error(transparent)]
    Area(#[from] AreaError),

    /// The design file declares a format version this build does not read.
    #[error("unsupported template format version '{version}'")]
    UnsupportedVersion {
        /// The version string found in the file.
        version: String,
    },

    /// The design file is not valid JSON for the template schema.
    #[error("template file deserialization failed: {0}")]
    Format(#[from] serde_json::Error),
}

/// Main error type for the seatmap workspace.
///
/// Unifies the two validation layers so callers crossing both (template
/// parsing, hosts feeding payloads through `?`) need a single error type.
/// File I/O failures stay in `anyhow` territory at the binary boundary and
/// are not represented here.
#[derive(Error, Debug)]
pub enum Error {
    /// Area validation error.
    #[error(transparent)]
    Area(#[from] AreaError),

    /// Template error.
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Result type using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
