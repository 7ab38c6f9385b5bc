//! Engine-wide constants: zoom limits, palette, and label metrics.

use crate::geometry::Color;

/// Minimum viewport scale.
pub const MIN_ZOOM: f64 = 0.5;

/// Maximum viewport scale.
pub const MAX_ZOOM: f64 = 2.0;

/// Fixed increment applied by one zoom-in/zoom-out step.
pub const ZOOM_STEP: f64 = 0.1;

/// Canvas clear color behind the map surface.
pub const CANVAS_CLEAR_COLOR: Color = Color::rgb8(0x2b, 0x2b, 0x2b);

/// Fill color of the map surface rectangle.
pub const MAP_SURFACE_COLOR: Color = Color::rgb8(0xec, 0xef, 0xf1);

/// Fill used for areas whose payload carries no color.
pub const DEFAULT_AREA_FILL: Color = Color::rgb8(0x90, 0xca, 0xf9);

/// Fill color painted over a selected (non-stage) area.
///
/// Distinct from any color the demo palette or sensible venue data uses,
/// so a selected area is unambiguous at a glance.
pub const SELECTION_FILL_COLOR: Color = Color::rgb8(0xff, 0xd5, 0x4f);

/// Stroke color for stage outlines.
pub const STAGE_STROKE_COLOR: Color = Color::rgb8(0x26, 0x32, 0x38);

/// Stage outline width in world units at scale 1.
pub const STAGE_STROKE_WIDTH: f32 = 2.0;

/// Stage outline width while the stage is selected.
pub const STAGE_STROKE_WIDTH_SELECTED: f32 = 4.0;

/// Label text color.
pub const LABEL_COLOR: Color = Color::rgb8(0x21, 0x21, 0x21);

/// Label font size in screen pixels, constant at any zoom.
pub const LABEL_FONT_SIZE: f32 = 14.0;

/// Horizontal label offset from an area's first vertex, in screen pixels.
pub const LABEL_OFFSET_X: f64 = 6.0;

/// Vertical label offset from an area's first vertex, in screen pixels.
pub const LABEL_OFFSET_Y: f64 = 4.0;
