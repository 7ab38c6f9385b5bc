//! Geometry and color value types.
//!
//! World coordinates ([`Point`]) and screen coordinates ([`ScreenPoint`]) are
//! deliberately distinct types: the viewport transform is the only place the
//! two spaces meet, and keeping them apart makes it impossible to feed a raw
//! pointer position into a hit test without converting it first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;

/// A point in map (world) space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new world-space point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A point in screen (pixel) space, as delivered by a pointer device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    /// Creates a new screen-space point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An opaque RGB color.
///
/// Serialized as a `#rrggbb` hex string, matching the payload format the
/// area-creation screens supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Creates a color from 8-bit channel values.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#rrggbb` hex string.
    pub fn from_hex(value: &str) -> Result<Self, ColorError> {
        let err = |reason| ColorError {
            value: value.to_string(),
            reason,
        };

        let hex = value
            .strip_prefix('#')
            .ok_or_else(|| err("expected leading '#'"))?;
        if hex.len() != 6 {
            return Err(err("expected exactly 6 hex digits"));
        }
        let parse =
            |range| u8::from_str_radix(&hex[range], 16).map_err(|_| err("invalid hex digit"));
        Ok(Self {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
