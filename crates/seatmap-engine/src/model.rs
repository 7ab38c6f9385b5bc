//! Geometry model: areas and map templates.
//!
//! The model is pure data with no I/O. An [`Area`] is a value object: once
//! constructed it is never mutated in place, and replacing one in a
//! [`MapTemplate`] bumps the template's generation so the path cache knows
//! to rebuild rather than patch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use seatmap_core::constants::DEFAULT_AREA_FILL;
use seatmap_core::{AreaError, AreaId, Color, Point, TemplateError};

/// Unvalidated area payload, as supplied by the area-creation screens.
///
/// `vertices` must hold at least 3 finite points and `fill_color`, when
/// present, a `#rrggbb` string; [`Area::from_spec`] enforces both and names
/// the failing field instead of coercing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaSpec {
    pub id: AreaId,
    pub name: String,
    pub vertices: Vec<Point>,
    #[serde(default)]
    pub zone: Option<String>,
    #[serde(default)]
    pub fill_color: Option<String>,
    #[serde(default)]
    pub is_stage: bool,
}

/// One placeable polygonal region of a venue map.
///
/// Vertices are an ordered ring in map space; the last vertex implicitly
/// connects back to the first. Self-intersecting rings are accepted and
/// render under whatever the nonzero fill rule produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Area {
    id: AreaId,
    name: String,
    vertices: Vec<Point>,
    zone: Option<String>,
    fill: Color,
    is_stage: bool,
}

impl Area {
    /// Validates a payload into a typed area.
    ///
    /// Rejects empty names, polygons with fewer than 3 vertices, non-finite
    /// coordinates, and malformed fill-color strings. A missing fill color
    /// falls back to the default area fill.
    pub fn from_spec(spec: AreaSpec) -> Result<Self, AreaError> {
        if spec.name.trim().is_empty() {
            return Err(AreaError::EmptyName);
        }
        if spec.vertices.len() < 3 {
            return Err(AreaError::TooFewVertices {
                name: spec.name,
                count: spec.vertices.len(),
            });
        }
        if let Some((index, v)) = spec
            .vertices
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite())
        {
            return Err(AreaError::NonFiniteVertex {
                name: spec.name,
                index,
                x: v.x,
                y: v.y,
            });
        }

        let fill = match &spec.fill_color {
            Some(value) => Color::from_hex(value).map_err(|source| AreaError::InvalidFillColor {
                name: spec.name.clone(),
                source,
            })?,
            None => DEFAULT_AREA_FILL,
        };

        Ok(Self {
            id: spec.id,
            name: spec.name,
            vertices: spec.vertices,
            zone: spec.zone,
            fill,
            is_stage: spec.is_stage,
        })
    }

    /// Stable identifier, unique within a map.
    pub fn id(&self) -> AreaId {
        self.id
    }

    /// Display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The polygon ring in map space.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Advisory grouping tag; not rendered distinctly.
    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }

    /// Fill color.
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Stage areas get outline treatment and are never repainted with the
    /// selection highlight.
    pub fn is_stage(&self) -> bool {
        self.is_stage
    }
}

/// Authorship and lifecycle metadata carried by a stored template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateMetadata {
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub description: String,
}

impl Default for TemplateMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created: now,
            modified: now,
            author: String::new(),
            description: String::new(),
        }
    }
}

/// A named collection of areas plus the canvas extents at scale 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapTemplate {
    name: String,
    map_width: f64,
    map_height: f64,
    areas: Vec<Area>,
    #[serde(default)]
    metadata: TemplateMetadata,
    /// Bumped on every model change; consumed by the path cache.
    #[serde(skip)]
    generation: u64,
}

impl MapTemplate {
    /// Creates an empty template with the given canvas extents.
    pub fn new(
        name: impl Into<String>,
        map_width: f64,
        map_height: f64,
    ) -> Result<Self, TemplateError> {
        if !(map_width > 0.0 && map_height > 0.0) {
            return Err(TemplateError::InvalidExtents {
                width: map_width,
                height: map_height,
            });
        }
        Ok(Self {
            name: name.into(),
            map_width,
            map_height,
            areas: Vec::new(),
            metadata: TemplateMetadata::default(),
            generation: 0,
        })
    }

    /// Template display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Canvas width at scale 1.
    pub fn map_width(&self) -> f64 {
        self.map_width
    }

    /// Canvas height at scale 1.
    pub fn map_height(&self) -> f64 {
        self.map_height
    }

    /// Metadata block.
    pub fn metadata(&self) -> &TemplateMetadata {
        &self.metadata
    }

    /// Replaces the metadata block.
    pub fn set_metadata(&mut self, metadata: TemplateMetadata) {
        self.metadata = metadata;
    }

    /// Areas in array order: first-to-last is bottom-to-top paint order,
    /// and also the precedence order used by the hit tester.
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// Looks up an area by id.
    pub fn area(&self, id: AreaId) -> Option<&Area> {
        self.areas.iter().find(|a| a.id == id)
    }

    /// Appends a validated area, rejecting duplicate ids.
    pub fn add_area(&mut self, area: Area) -> Result<(), TemplateError> {
        if self.areas.iter().any(|a| a.id == area.id) {
            return Err(TemplateError::DuplicateAreaId { id: area.id });
        }
        self.areas.push(area);
        self.touch();
        Ok(())
    }

    /// Validates and appends a payload in one step.
    pub fn add_spec(&mut self, spec: AreaSpec) -> Result<AreaId, TemplateError> {
        let area = Area::from_spec(spec)?;
        let id = area.id;
        self.add_area(area)?;
        Ok(id)
    }

    /// Replaces an area wholesale. Areas are value objects; there is no
    /// in-place vertex editing.
    pub fn replace_area(&mut self, area: Area) -> bool {
        match self.areas.iter_mut().find(|a| a.id == area.id) {
            Some(slot) => {
                *slot = area;
                self.touch();
                true
            }
            None => false,
        }
    }

    /// Removes an area by id.
    pub fn remove_area(&mut self, id: AreaId) -> Option<Area> {
        let index = self.areas.iter().position(|a| a.id == id)?;
        let area = self.areas.remove(index);
        self.touch();
        Some(area)
    }

    /// Current model generation; changes whenever the area list does.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn touch(&mut self) {
        self.generation += 1;
        self.metadata.modified = Utc::now();
    }
}
