//! The engine facade the host UI talks to.

use image::RgbImage;
use tiny_skia::Pixmap;
use tracing::debug;

use seatmap_core::types::Shared;
use seatmap_core::{AreaId, SelectionCallback};

use crate::hit_test::hit_test;
use crate::interaction::{InputEffect, InteractionController, PointerEvent, PointerEventSource};
use crate::model::MapTemplate;
use crate::path_cache::PathCache;
use crate::renderer;
use crate::selection::SelectionState;
use crate::viewport::Viewport;

/// Owns the geometry model, path cache, viewport, selection, and the
/// pointer state machine, and exposes the engine surface from one place:
/// `render`, `zoom_in`/`zoom_out`/`reset_view`, `handle_pointer`, and the
/// `on_area_selected` callback.
///
/// All state mutation happens synchronously inside these methods on the
/// calling thread; there is no background work and nothing to lock.
pub struct MapEngine {
    template: MapTemplate,
    cache: PathCache,
    viewport: Viewport,
    selection: SelectionState,
    controller: InteractionController,
    on_selected: Option<SelectionCallback>,
    needs_redraw: bool,
}

impl MapEngine {
    /// Creates an engine over a template, at the default viewport.
    pub fn new(template: MapTemplate) -> Self {
        Self {
            template,
            cache: PathCache::new(),
            viewport: Viewport::new(),
            selection: SelectionState::new(),
            controller: InteractionController::new(),
            on_selected: None,
            needs_redraw: true,
        }
    }

    /// The current template.
    pub fn template(&self) -> &MapTemplate {
        &self.template
    }

    /// Mutable access to the template. Any change bumps the template
    /// generation, so the cache rebuilds before the next frame or hit test.
    pub fn template_mut(&mut self) -> &mut MapTemplate {
        self.needs_redraw = true;
        &mut self.template
    }

    /// Swaps in a different template, clearing the selection.
    pub fn set_template(&mut self, template: MapTemplate) {
        self.template = template;
        self.cache = PathCache::new();
        self.selection.clear();
        self.needs_redraw = true;
        debug!(name = self.template.name(), "template replaced");
    }

    /// Read-only viewport access.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Currently selected area, if any.
    pub fn selected_area(&self) -> Option<AreaId> {
        self.selection.selected_id()
    }

    /// Registers the callback fired on every selection change.
    pub fn on_area_selected(&mut self, callback: SelectionCallback) {
        self.on_selected = Some(callback);
    }

    /// Zooms in by one step (clamped, anchored at the world origin).
    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
        self.needs_redraw = true;
    }

    /// Zooms out by one step (clamped).
    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
        self.needs_redraw = true;
    }

    /// Resets the viewport to scale 1, zero offset.
    pub fn reset_view(&mut self) {
        self.viewport.reset();
        self.needs_redraw = true;
    }

    /// Explicitly clears the selection.
    pub fn clear_selection(&mut self) {
        if self.selection.selected_id().is_some() {
            self.selection.clear();
            self.notify_selection();
            self.needs_redraw = true;
        }
    }

    /// Feeds one pointer event through the interaction state machine.
    ///
    /// Pans mutate the viewport; clicks resolved in the idle state are
    /// hit-tested and applied to the selection, firing the callback when
    /// the selection actually changes.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match self.controller.handle(event, &mut self.viewport) {
            InputEffect::None => {}
            InputEffect::Redraw => self.needs_redraw = true,
            InputEffect::ResolveClick(screen) => {
                let world = self.viewport.to_world(screen);
                self.cache.ensure(&self.template);
                let hit = hit_test(&self.cache, world);
                if self.selection.apply_hit(hit) {
                    debug!(selected = ?self.selection.selected_id(), "selection changed");
                    self.notify_selection();
                    self.needs_redraw = true;
                }
            }
        }
    }

    /// True when state changed since the last rendered frame.
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Paints the current state into the pixmap.
    pub fn render(&mut self, pixmap: &mut Pixmap) {
        self.cache.ensure(&self.template);
        renderer::render(
            pixmap,
            &self.template,
            &self.cache,
            &self.viewport,
            &self.selection,
        );
        self.needs_redraw = false;
    }

    /// Renders a frame of the given pixel size to an image.
    pub fn render_to_image(&mut self, width: u32, height: u32) -> RgbImage {
        self.cache.ensure(&self.template);
        let image = renderer::render_to_image(
            &self.template,
            &self.cache,
            &self.viewport,
            &self.selection,
            width,
            height,
        );
        self.needs_redraw = false;
        image
    }

    fn notify_selection(&mut self) {
        if let Some(callback) = self.on_selected.as_mut() {
            callback(self.selection.selected_id());
        }
    }
}

/// Wires a shared engine to a pointer event source, so every event the
/// source emits is fed through [`MapEngine::handle_pointer`].
pub fn attach_pointer_source(engine: &Shared<MapEngine>, source: &mut dyn PointerEventSource) {
    let engine = engine.clone();
    source.subscribe(Box::new(move |event| {
        engine.borrow_mut().handle_pointer(event);
    }));
}
