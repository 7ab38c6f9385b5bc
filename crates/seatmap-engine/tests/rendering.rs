//! Renderer tests against actual pixels: selection highlight, stage
//! treatment, paint order, background, and tolerance of degenerate data.
//!
//! Checks sample deep inside polygons so anti-aliased edges and (system
//! font dependent) labels cannot disturb them.

use image::Rgb;
use seatmap_core::constants::{
    CANVAS_CLEAR_COLOR, MAP_SURFACE_COLOR, SELECTION_FILL_COLOR, STAGE_STROKE_COLOR,
};
use seatmap_core::{Color, Point, ScreenPoint};
use seatmap_engine::model::{AreaSpec, MapTemplate};
use seatmap_engine::{Area, MapEngine, PointerEvent};

const RED: &str = "#ff0000";
const GREEN: &str = "#00ff00";

fn rgb(color: Color) -> Rgb<u8> {
    Rgb([color.r, color.g, color.b])
}

fn square(id: u64, name: &str, x: f64, y: f64, side: f64, fill: &str, stage: bool) -> AreaSpec {
    AreaSpec {
        id,
        name: name.to_string(),
        vertices: vec![
            Point::new(x, y),
            Point::new(x + side, y),
            Point::new(x + side, y + side),
            Point::new(x, y + side),
        ],
        zone: None,
        fill_color: Some(fill.to_string()),
        is_stage: stage,
    }
}

fn test_engine() -> MapEngine {
    let mut template = MapTemplate::new("t", 400.0, 300.0).unwrap();
    template
        .add_spec(square(1, "Block", 20.0, 20.0, 120.0, RED, false))
        .unwrap();
    template
        .add_spec(square(2, "Stage", 200.0, 20.0, 120.0, GREEN, true))
        .unwrap();
    MapEngine::new(template)
}

fn click(engine: &mut MapEngine, x: f64, y: f64) {
    engine.handle_pointer(PointerEvent::Down(ScreenPoint::new(x, y)));
    engine.handle_pointer(PointerEvent::Up);
    engine.handle_pointer(PointerEvent::Click(ScreenPoint::new(x, y)));
}

#[test]
fn test_areas_painted_with_their_own_fill() {
    let mut engine = test_engine();
    let frame = engine.render_to_image(400, 300);

    assert_eq!(*frame.get_pixel(80, 80), Rgb([255, 0, 0]));
    assert_eq!(*frame.get_pixel(260, 80), Rgb([0, 255, 0]));
}

#[test]
fn test_map_surface_fills_logical_extents() {
    let mut engine = test_engine();
    let frame = engine.render_to_image(400, 300);

    // Inside the map but outside every area.
    assert_eq!(*frame.get_pixel(380, 280), rgb(MAP_SURFACE_COLOR));
}

#[test]
fn test_clear_color_visible_beyond_map_extents() {
    let mut engine = test_engine();
    // Zoom out: the 400x300 map shrinks to 200x150 on a 400x300 canvas.
    for _ in 0..10 {
        engine.zoom_out();
    }
    let frame = engine.render_to_image(400, 300);

    assert_eq!(*frame.get_pixel(350, 250), rgb(CANVAS_CLEAR_COLOR));
    assert_eq!(*frame.get_pixel(150, 100), rgb(MAP_SURFACE_COLOR));
}

#[test]
fn test_selected_area_repainted_with_highlight() {
    let mut engine = test_engine();
    click(&mut engine, 80.0, 80.0);
    let frame = engine.render_to_image(400, 300);

    assert_eq!(*frame.get_pixel(80, 80), rgb(SELECTION_FILL_COLOR));
    // The other area is untouched.
    assert_eq!(*frame.get_pixel(260, 80), Rgb([0, 255, 0]));
}

#[test]
fn test_selected_stage_keeps_own_fill() {
    // Stage areas signal selection through stroke weight only; the
    // highlight fill never applies to them.
    let mut engine = test_engine();
    click(&mut engine, 260.0, 80.0);
    assert_eq!(engine.selected_area(), Some(2));

    let frame = engine.render_to_image(400, 300);
    assert_eq!(*frame.get_pixel(260, 80), Rgb([0, 255, 0]));
}

#[test]
fn test_stage_outline_painted_and_heavier_when_selected() {
    let mut engine = test_engine();
    let unselected = engine.render_to_image(400, 300);
    // Width-2 outline centered on the stage's left edge at x=200: the
    // stroke covers x in [199, 201].
    assert_eq!(*unselected.get_pixel(199, 80), rgb(STAGE_STROKE_COLOR));
    assert_eq!(*unselected.get_pixel(198, 80), rgb(MAP_SURFACE_COLOR));
    // Non-stage areas get no outline at all.
    assert_eq!(*unselected.get_pixel(19, 80), rgb(MAP_SURFACE_COLOR));

    click(&mut engine, 260.0, 80.0);
    assert_eq!(engine.selected_area(), Some(2));
    let selected = engine.render_to_image(400, 300);
    // Width-4 outline reaches one pixel further out on each side.
    assert_eq!(*selected.get_pixel(199, 80), rgb(STAGE_STROKE_COLOR));
    assert_eq!(*selected.get_pixel(198, 80), rgb(STAGE_STROKE_COLOR));
}

#[test]
fn test_deselecting_restores_original_fill() {
    let mut engine = test_engine();
    click(&mut engine, 80.0, 80.0);
    click(&mut engine, 80.0, 80.0); // toggle off
    let frame = engine.render_to_image(400, 300);

    assert_eq!(*frame.get_pixel(80, 80), Rgb([255, 0, 0]));
}

#[test]
fn test_pan_shifts_painted_areas() {
    let mut engine = test_engine();
    engine.handle_pointer(PointerEvent::Down(ScreenPoint::new(0.0, 0.0)));
    engine.handle_pointer(PointerEvent::Move(ScreenPoint::new(100.0, 0.0)));
    engine.handle_pointer(PointerEvent::Up);

    let frame = engine.render_to_image(400, 300);
    // The red block's interior moved 100px right.
    assert_eq!(*frame.get_pixel(180, 80), Rgb([255, 0, 0]));
}

#[test]
fn test_later_area_paints_over_earlier_on_overlap() {
    let mut template = MapTemplate::new("t", 400.0, 300.0).unwrap();
    template
        .add_spec(square(1, "Under", 20.0, 20.0, 120.0, RED, false))
        .unwrap();
    template
        .add_spec(square(2, "Over", 80.0, 80.0, 120.0, GREEN, false))
        .unwrap();
    let mut engine = MapEngine::new(template);

    let frame = engine.render_to_image(400, 300);
    // Overlap region: array order is paint order, last wins on screen.
    assert_eq!(*frame.get_pixel(120, 120), Rgb([0, 255, 0]));
    // Even though the hit tester would resolve this point to area 1.
    click(&mut engine, 120.0, 120.0);
    assert_eq!(engine.selected_area(), Some(1));
}

#[test]
fn test_degenerate_area_renders_nothing_without_panicking() {
    let degenerate: Area = serde_json::from_str(
        r##"{
            "id": 9,
            "name": "broken",
            "vertices": [{"x": 0.0, "y": 0.0}, {"x": 50.0, "y": 50.0}],
            "zone": null,
            "fill": "#ff00ff",
            "is_stage": false
        }"##,
    )
    .unwrap();

    let mut template = MapTemplate::new("t", 400.0, 300.0).unwrap();
    template.add_area(degenerate).unwrap();
    let mut engine = MapEngine::new(template);

    let frame = engine.render_to_image(400, 300);
    // Nothing magenta anywhere: the degenerate area was skipped, and the
    // frame is still a valid paint of the empty map.
    assert!(frame.pixels().all(|p| *p != Rgb([255, 0, 255])));
    assert_eq!(*frame.get_pixel(200, 150), rgb(MAP_SURFACE_COLOR));
}
