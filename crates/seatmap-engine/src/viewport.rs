//! Viewport transform between screen and map coordinates.
//!
//! Holds the scale and world-space translation applied to every painted
//! frame and every pointer position. Purely a value type: nothing here has
//! side effects, and consumers must re-derive screen positions after any
//! mutation - there is no incremental update.
//!
//! Forward mapping (world to screen): `screen = (world + offset) * scale`.
//! Inverse mapping (screen to world): `world = screen / scale - offset`.
//!
//! Zoom steps are anchored at the world origin, not the pointer. That is a
//! usability limitation of the original map screens preserved on purpose;
//! do not quietly recenter on the cursor.

use std::fmt;

use seatmap_core::constants::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use seatmap_core::{Point, ScreenPoint};

/// The viewport transformation state (scale and pan offset).
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
}

impl Viewport {
    /// Creates a viewport at scale 1 with zero offset.
    pub fn new() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Current scale (1.0 = 100%).
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the scale, clamped silently to the configured zoom range.
    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Zooms in by one fixed step.
    pub fn zoom_in(&mut self) {
        self.set_scale(self.scale + ZOOM_STEP);
    }

    /// Zooms out by one fixed step.
    pub fn zoom_out(&mut self) {
        self.set_scale(self.scale - ZOOM_STEP);
    }

    /// World-space pan offset.
    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    /// Sets the pan offset.
    pub fn set_offset(&mut self, x: f64, y: f64) {
        self.offset_x = x;
        self.offset_y = y;
    }

    /// Resets to scale 1 and zero offset.
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.offset_x = 0.0;
        self.offset_y = 0.0;
    }

    /// Converts a screen (pointer) position to map coordinates.
    pub fn to_world(&self, screen: ScreenPoint) -> Point {
        Point::new(
            screen.x / self.scale - self.offset_x,
            screen.y / self.scale - self.offset_y,
        )
    }

    /// Converts a map position to screen coordinates.
    pub fn to_screen(&self, world: Point) -> ScreenPoint {
        ScreenPoint::new(
            (world.x + self.offset_x) * self.scale,
            (world.y + self.offset_y) * self.scale,
        )
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scale: {:.2}x | Offset: ({:.1}, {:.1})",
            self.scale, self.offset_x, self.offset_y
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}
