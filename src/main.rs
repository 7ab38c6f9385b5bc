use anyhow::Context;
use tracing::info;

use seatmap::init_logging;
use seatmap_core::{Point, ScreenPoint};
use seatmap_engine::model::{AreaSpec, MapTemplate};
use seatmap_engine::template_io;
use seatmap_engine::{MapEngine, PointerEvent};

/// Builds a small demo venue: a stage and a few seating blocks.
fn demo_venue() -> anyhow::Result<MapTemplate> {
    let mut template = MapTemplate::new("Grand Hall", 1000.0, 700.0)?;

    template.add_spec(AreaSpec {
        id: 1,
        name: "Stage".to_string(),
        vertices: vec![
            Point::new(300.0, 40.0),
            Point::new(700.0, 40.0),
            Point::new(660.0, 160.0),
            Point::new(340.0, 160.0),
        ],
        zone: None,
        fill_color: Some("#8d6e63".to_string()),
        is_stage: true,
    })?;

    template.add_spec(AreaSpec {
        id: 2,
        name: "Floor A".to_string(),
        vertices: vec![
            Point::new(120.0, 220.0),
            Point::new(480.0, 220.0),
            Point::new(480.0, 460.0),
            Point::new(120.0, 460.0),
        ],
        zone: Some("floor".to_string()),
        fill_color: Some("#64b5f6".to_string()),
        is_stage: false,
    })?;

    template.add_spec(AreaSpec {
        id: 3,
        name: "Floor B".to_string(),
        vertices: vec![
            Point::new(520.0, 220.0),
            Point::new(880.0, 220.0),
            Point::new(880.0, 460.0),
            Point::new(520.0, 460.0),
        ],
        zone: Some("floor".to_string()),
        fill_color: Some("#4db6ac".to_string()),
        is_stage: false,
    })?;

    template.add_spec(AreaSpec {
        id: 4,
        name: "Balcony".to_string(),
        vertices: vec![
            Point::new(120.0, 520.0),
            Point::new(880.0, 520.0),
            Point::new(820.0, 660.0),
            Point::new(180.0, 660.0),
        ],
        zone: Some("balcony".to_string()),
        fill_color: Some("#ba68c8".to_string()),
        is_stage: false,
    })?;

    Ok(template)
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let template = demo_venue()?;
    info!(
        name = template.name(),
        areas = template.areas().len(),
        "built demo venue"
    );

    let mut engine = MapEngine::new(template);
    engine.on_area_selected(Box::new(|selected| match selected {
        Some(id) => info!(id, "area selected"),
        None => info!("selection cleared"),
    }));

    // Replay a typical pointer session: a short pan, then a click on a
    // seating block. The drag's terminating click lands on empty space, so
    // it does not disturb the selection that follows.
    engine.handle_pointer(PointerEvent::Down(ScreenPoint::new(500.0, 350.0)));
    engine.handle_pointer(PointerEvent::Move(ScreenPoint::new(540.0, 370.0)));
    engine.handle_pointer(PointerEvent::Up);
    engine.handle_pointer(PointerEvent::Click(ScreenPoint::new(540.0, 370.0)));

    engine.zoom_in();
    engine.handle_pointer(PointerEvent::Click(ScreenPoint::new(300.0, 380.0)));
    info!(selected = ?engine.selected_area(), viewport = %engine.viewport(), "session state");

    let frame = engine.render_to_image(1200, 800);
    frame
        .save("seatmap-demo.png")
        .context("failed to write seatmap-demo.png")?;
    info!("wrote seatmap-demo.png");

    template_io::save_to_file(engine.template(), std::path::Path::new("seatmap-demo.json"))?;

    Ok(())
}
