//! Template file round-trips and payload validation at the parse boundary.

use seatmap_core::{Error, Point, TemplateError};
use seatmap_engine::model::{AreaSpec, MapTemplate, TemplateMetadata};
use seatmap_engine::template_io;

fn venue() -> MapTemplate {
    let mut template = MapTemplate::new("Club Floor", 800.0, 600.0).unwrap();
    template
        .add_spec(AreaSpec {
            id: 1,
            name: "Stage".to_string(),
            vertices: vec![
                Point::new(100.0, 50.0),
                Point::new(700.0, 50.0),
                Point::new(650.0, 150.0),
                Point::new(150.0, 150.0),
            ],
            zone: None,
            fill_color: Some("#8d6e63".to_string()),
            is_stage: true,
        })
        .unwrap();
    template
        .add_spec(AreaSpec {
            id: 2,
            name: "Pit".to_string(),
            vertices: vec![
                Point::new(200.0, 200.0),
                Point::new(600.0, 200.0),
                Point::new(600.0, 400.0),
                Point::new(200.0, 400.0),
            ],
            zone: Some("floor".to_string()),
            fill_color: None,
            is_stage: false,
        })
        .unwrap();
    let mut metadata = TemplateMetadata::default();
    metadata.author = "ops".to_string();
    metadata.description = "weekend layout".to_string();
    template.set_metadata(metadata);
    template
}

#[test]
fn test_json_round_trip_preserves_template() {
    let original = venue();
    let json = template_io::to_json(&original).unwrap();
    let loaded = template_io::from_json(&json).unwrap();

    assert_eq!(loaded.name(), "Club Floor");
    assert_eq!(loaded.map_width(), 800.0);
    assert_eq!(loaded.map_height(), 600.0);
    assert_eq!(loaded.areas().len(), 2);
    assert_eq!(loaded.metadata().author, "ops");
    assert_eq!(loaded.metadata().description, "weekend layout");

    let stage = loaded.area(1).unwrap();
    assert_eq!(stage.name(), "Stage");
    assert!(stage.is_stage());
    assert_eq!(stage.fill().to_string(), "#8d6e63");
    assert_eq!(stage.vertices().len(), 4);

    let pit = loaded.area(2).unwrap();
    assert_eq!(pit.zone(), Some("floor"));
    assert!(!pit.is_stage());
}

#[test]
fn test_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("club.json");

    let original = venue();
    template_io::save_to_file(&original, &path).unwrap();
    let loaded = template_io::load_from_file(&path).unwrap();

    assert_eq!(loaded.name(), original.name());
    assert_eq!(loaded.areas().len(), original.areas().len());
    assert_eq!(
        loaded.area(2).unwrap().vertices(),
        original.area(2).unwrap().vertices()
    );
}

#[test]
fn test_unsupported_version_is_rejected() {
    let json = template_io::to_json(&venue())
        .unwrap()
        .replace("\"version\": \"1.0\"", "\"version\": \"9.9\"");

    let err = template_io::from_json(&json).unwrap_err();
    assert!(matches!(
        err,
        Error::Template(TemplateError::UnsupportedVersion { .. })
    ));
    assert!(err.to_string().contains("unsupported template format"));
}

#[test]
fn test_too_few_vertices_names_the_area() {
    let json = r##"{
        "version": "1.0",
        "name": "bad",
        "metadata": {
            "created": "2026-01-01T00:00:00Z",
            "modified": "2026-01-01T00:00:00Z"
        },
        "map_width": 100.0,
        "map_height": 100.0,
        "areas": [
            {"id": 1, "name": "Sliver", "vertices": [{"x": 0.0, "y": 0.0}, {"x": 1.0, "y": 1.0}]}
        ]
    }"##;

    let err = template_io::from_json(json).unwrap_err();
    assert!(matches!(err, Error::Template(_)));
    let message = err.to_string();
    assert!(message.contains("Sliver"));
    assert!(message.contains("needs at least 3"));
}

#[test]
fn test_bad_fill_color_names_the_field() {
    let json = r##"{
        "version": "1.0",
        "name": "bad",
        "metadata": {
            "created": "2026-01-01T00:00:00Z",
            "modified": "2026-01-01T00:00:00Z"
        },
        "map_width": 100.0,
        "map_height": 100.0,
        "areas": [
            {
                "id": 1,
                "name": "Loge",
                "vertices": [{"x": 0.0, "y": 0.0}, {"x": 10.0, "y": 0.0}, {"x": 10.0, "y": 10.0}],
                "fill_color": "papayawhip"
            }
        ]
    }"##;

    let err = template_io::from_json(json).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("Loge"));
    assert!(message.contains("papayawhip"));
}

#[test]
fn test_duplicate_area_ids_rejected() {
    let mut template = MapTemplate::new("t", 100.0, 100.0).unwrap();
    let spec = AreaSpec {
        id: 7,
        name: "A".to_string(),
        vertices: vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ],
        zone: None,
        fill_color: None,
        is_stage: false,
    };
    template.add_spec(spec.clone()).unwrap();
    let err = template.add_spec(spec).unwrap_err();
    assert!(err.to_string().contains("duplicate area id 7"));
}

#[test]
fn test_non_finite_vertex_rejected() {
    let mut template = MapTemplate::new("t", 100.0, 100.0).unwrap();
    let err = template
        .add_spec(AreaSpec {
            id: 1,
            name: "Wing".to_string(),
            vertices: vec![
                Point::new(0.0, 0.0),
                Point::new(f64::NAN, 0.0),
                Point::new(10.0, 10.0),
            ],
            zone: None,
            fill_color: None,
            is_stage: false,
        })
        .unwrap_err();
    assert!(err.to_string().contains("vertex 1 is not finite"));
}

#[test]
fn test_invalid_extents_rejected() {
    assert!(MapTemplate::new("t", 0.0, 100.0).is_err());
    assert!(MapTemplate::new("t", 100.0, -5.0).is_err());
}
