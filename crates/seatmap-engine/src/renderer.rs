//! Frame painting for the venue map.
//!
//! Renders to a `tiny-skia` pixmap: clear, map surface, then each area in
//! array order (bottom-to-top) with its fill, the selection highlight, the
//! stage outline, and a label anchored near the area's first vertex. The
//! viewport transform is passed per draw call, so there is no transform
//! state to restore afterwards.
//!
//! Failure tolerance: areas missing from the path cache (degenerate
//! polygons) are simply not painted - partial data renders partially
//! instead of erroring.

use image::{Rgb, RgbImage};
use rusttype::{point as rt_point, Scale};
use tiny_skia::{
    Color as SkiaColor, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform,
};
use tracing::warn;

use seatmap_core::constants::{
    CANVAS_CLEAR_COLOR, LABEL_COLOR, LABEL_FONT_SIZE, LABEL_OFFSET_X, LABEL_OFFSET_Y,
    MAP_SURFACE_COLOR, SELECTION_FILL_COLOR, STAGE_STROKE_COLOR, STAGE_STROKE_WIDTH,
    STAGE_STROKE_WIDTH_SELECTED,
};
use seatmap_core::Color;

use crate::font_manager;
use crate::model::MapTemplate;
use crate::path_cache::PathCache;
use crate::selection::SelectionState;
use crate::viewport::Viewport;

fn to_skia(color: Color) -> SkiaColor {
    SkiaColor::from_rgba8(color.r, color.g, color.b, 255)
}

/// Paints one frame of the map into the pixmap.
///
/// The cache must already be built for the template's current generation;
/// [`crate::engine::MapEngine::render`] takes care of that.
pub fn render(
    pixmap: &mut Pixmap,
    template: &MapTemplate,
    cache: &PathCache,
    viewport: &Viewport,
    selection: &SelectionState,
) {
    pixmap.fill(to_skia(CANVAS_CLEAR_COLOR));

    // screen = (world + offset) * scale: translate first, then scale.
    let (offset_x, offset_y) = viewport.offset();
    let scale = viewport.scale();
    let transform =
        Transform::from_translate(offset_x as f32, offset_y as f32).post_scale(scale as f32, scale as f32);

    // Map surface at the logical extents.
    if let Some(rect) = Rect::from_xywh(
        0.0,
        0.0,
        template.map_width() as f32,
        template.map_height() as f32,
    ) {
        let mut paint = Paint::default();
        paint.set_color(to_skia(MAP_SURFACE_COLOR));
        paint.anti_alias = false;
        let path = PathBuilder::from_rect(rect);
        pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
    }

    let font = font_manager::label_font();
    if font.is_none() {
        static FONT_WARNING: std::sync::Once = std::sync::Once::new();
        FONT_WARNING.call_once(|| warn!("no system font available, area labels will not be drawn"));
    }

    for entry in cache.entries() {
        let Some(area) = template.area(entry.id()) else {
            continue;
        };
        let selected = selection.selected_id() == Some(area.id());

        // Stage areas keep their own fill when selected; only their
        // outline weight signals the selection.
        let fill = if selected && !area.is_stage() {
            SELECTION_FILL_COLOR
        } else {
            area.fill()
        };

        let mut paint = Paint::default();
        paint.set_color(to_skia(fill));
        paint.anti_alias = true;
        pixmap.fill_path(entry.path(), &paint, FillRule::Winding, transform, None);

        // Non-stage areas get a zero-width (invisible) stroke, i.e. none.
        if area.is_stage() {
            let screen_width = if selected {
                STAGE_STROKE_WIDTH_SELECTED
            } else {
                STAGE_STROKE_WIDTH
            };
            let stroke = Stroke {
                // Divide out the zoom so the outline weight is constant
                // on screen.
                width: screen_width / scale as f32,
                ..Default::default()
            };
            let mut stroke_paint = Paint::default();
            stroke_paint.set_color(to_skia(STAGE_STROKE_COLOR));
            stroke_paint.anti_alias = true;
            pixmap.stroke_path(entry.path(), &stroke_paint, &stroke, transform, None);
        }

        if let Some(font) = font {
            // Labels are drawn in screen space at a fixed pixel size, which
            // is the same as scaling the world-space font size by 1/scale.
            let anchor = viewport.to_screen(area.vertices()[0]);
            draw_label(
                pixmap,
                font,
                area.name(),
                anchor.x + LABEL_OFFSET_X,
                anchor.y + LABEL_OFFSET_Y,
            );
        }
    }
}

/// Convenience wrapper producing an `RgbImage` frame of the given size.
pub fn render_to_image(
    template: &MapTemplate,
    cache: &PathCache,
    viewport: &Viewport,
    selection: &SelectionState,
    width: u32,
    height: u32,
) -> RgbImage {
    let Some(mut pixmap) = Pixmap::new(width, height) else {
        return RgbImage::new(width, height);
    };
    render(&mut pixmap, template, cache, viewport, selection);
    pixmap_to_image(&pixmap)
}

/// Converts an opaque pixmap to an `RgbImage`, dropping alpha.
pub fn pixmap_to_image(pixmap: &Pixmap) -> RgbImage {
    let width = pixmap.width();
    let data = pixmap.data();
    RgbImage::from_fn(width, pixmap.height(), |x, y| {
        let idx = ((y * width + x) * 4) as usize;
        Rgb([data[idx], data[idx + 1], data[idx + 2]])
    })
}

fn draw_label(pixmap: &mut Pixmap, font: &rusttype::Font<'_>, text: &str, x: f64, y: f64) {
    let scale = Scale::uniform(LABEL_FONT_SIZE);
    let v_metrics = font.v_metrics(scale);
    let start = rt_point(x as f32, y as f32 + v_metrics.ascent);

    let width = pixmap.width() as i32;
    let height = pixmap.height() as i32;
    let row_stride = pixmap.width();
    let data = pixmap.data_mut();

    for glyph in font.layout(text, scale, start) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, coverage| {
                let px = gx as i32 + bb.min.x;
                let py = gy as i32 + bb.min.y;
                if px < 0 || px >= width || py < 0 || py >= height || coverage <= 0.0 {
                    return;
                }
                let idx = ((py as u32 * row_stride + px as u32) * 4) as usize;
                let blend =
                    |dst: u8, src: u8| (src as f32 * coverage + dst as f32 * (1.0 - coverage)) as u8;
                // The canvas is opaque, so a straight source-over blend on
                // the color channels is enough.
                data[idx] = blend(data[idx], LABEL_COLOR.r);
                data[idx + 1] = blend(data[idx + 1], LABEL_COLOR.g);
                data[idx + 2] = blend(data[idx + 2], LABEL_COLOR.b);
                data[idx + 3] = 255;
            });
        }
    }
}
