//! Template file save/load.
//!
//! Versioned JSON design files for venue map templates. This is host-side
//! convenience for tooling and demos; the engine hot path never touches
//! the filesystem, and server-side persistence belongs to the surrounding
//! CRUD layer.

use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use seatmap_core::{Result, TemplateError};

use crate::model::{AreaSpec, MapTemplate, TemplateMetadata};

/// Template file format version.
const FILE_FORMAT_VERSION: &str = "1.0";

/// On-disk template structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TemplateFile {
    version: String,
    name: String,
    metadata: TemplateMetadata,
    map_width: f64,
    map_height: f64,
    areas: Vec<AreaSpec>,
}

/// Serializes a template to pretty-printed JSON.
pub fn to_json(template: &MapTemplate) -> Result<String> {
    let mut metadata = template.metadata().clone();
    metadata.modified = Utc::now();

    let file = TemplateFile {
        version: FILE_FORMAT_VERSION.to_string(),
        name: template.name().to_string(),
        metadata,
        map_width: template.map_width(),
        map_height: template.map_height(),
        areas: template
            .areas()
            .iter()
            .map(|area| AreaSpec {
                id: area.id(),
                name: area.name().to_string(),
                vertices: area.vertices().to_vec(),
                zone: area.zone().map(str::to_string),
                fill_color: Some(area.fill().to_string()),
                is_stage: area.is_stage(),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&file).map_err(TemplateError::from)?)
}

/// Parses and validates a template from JSON.
///
/// Every area payload goes through the validated constructor, so malformed
/// polygons are rejected here with the failing field named, never silently
/// coerced into the geometry model.
pub fn from_json(json: &str) -> Result<MapTemplate> {
    let file: TemplateFile = serde_json::from_str(json).map_err(TemplateError::from)?;

    if file.version != FILE_FORMAT_VERSION {
        return Err(TemplateError::UnsupportedVersion {
            version: file.version,
        }
        .into());
    }

    let mut template = MapTemplate::new(file.name, file.map_width, file.map_height)?;
    for spec in file.areas {
        template.add_spec(spec)?;
    }
    template.set_metadata(file.metadata);
    Ok(template)
}

/// Saves a template to a JSON file.
pub fn save_to_file(template: &MapTemplate, path: &Path) -> anyhow::Result<()> {
    let json = to_json(template)?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), areas = template.areas().len(), "saved template");
    Ok(())
}

/// Loads a template from a JSON file.
pub fn load_from_file(path: &Path) -> anyhow::Result<MapTemplate> {
    let json =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let template = from_json(&json)
        .with_context(|| format!("failed to load template from {}", path.display()))?;
    info!(path = %path.display(), areas = template.areas().len(), "loaded template");
    Ok(template)
}
