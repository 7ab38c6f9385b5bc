//! Pointer interaction state machine.
//!
//! Consumes raw pointer events and produces pan mutations on the viewport
//! plus click-resolution requests for the hit tester. The machine has two
//! states, `Idle` and `Panning`, and no movement-distance threshold: every
//! press enters `Panning` immediately, and every release returns to `Idle`
//! unconditionally.
//!
//! Because pointer-up always precedes the click event in standard delivery
//! order, a drag's terminating click is still resolved as a selection
//! attempt at the release point. That click/drag ambiguity is part of the
//! behavior this engine reproduces; keep it unless the host explicitly
//! wants a drag threshold.

use tracing::trace;

use seatmap_core::ScreenPoint;

use crate::viewport::Viewport;

/// A raw pointer event, already mapped to canvas-local screen coordinates.
///
/// Hosts should deliver `Leave` when the pointer exits the canvas mid-drag;
/// without it the machine has no other way out of `Panning`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button press at a screen position.
    Down(ScreenPoint),
    /// Pointer motion at a screen position.
    Move(ScreenPoint),
    /// Button release.
    Up,
    /// Pointer left the canvas; treated like a release.
    Leave,
    /// Click, delivered after `Up` by standard event ordering.
    Click(ScreenPoint),
}

/// Interaction state: idle, or panning from a recorded drag anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Panning {
        /// Screen position captured at drag start.
        anchor_screen: ScreenPoint,
        /// Viewport offset captured at drag start.
        anchor_offset: (f64, f64),
    },
}

/// Effect of one consumed pointer event, for the caller to act on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEffect {
    /// Nothing to do.
    None,
    /// The viewport moved; repaint.
    Redraw,
    /// A click should be hit-tested at this screen position.
    ResolveClick(ScreenPoint),
}

/// The `Idle`/`Panning` state machine.
///
/// Transitions are pure functions of (state, event); the only external
/// mutation is the viewport offset while panning. Drivable entirely by
/// synthetic events, no real pointer device required.
#[derive(Debug, Clone, Copy)]
pub struct InteractionController {
    state: DragState,
}

impl InteractionController {
    /// Creates a controller in the idle state.
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    /// Current state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// True while a drag is in progress.
    pub fn is_panning(&self) -> bool {
        matches!(self.state, DragState::Panning { .. })
    }

    /// Consumes one pointer event, panning the viewport as a side effect.
    pub fn handle(&mut self, event: PointerEvent, viewport: &mut Viewport) -> InputEffect {
        match event {
            PointerEvent::Down(screen) => {
                // Unconditional: there is no "about to click" state.
                self.state = DragState::Panning {
                    anchor_screen: screen,
                    anchor_offset: viewport.offset(),
                };
                trace!(x = screen.x, y = screen.y, "pointer down, panning");
                InputEffect::None
            }
            PointerEvent::Move(screen) => match self.state {
                DragState::Panning {
                    anchor_screen,
                    anchor_offset,
                } => {
                    // Scale-compensated so dragging feels consistent at any zoom.
                    let scale = viewport.scale();
                    viewport.set_offset(
                        anchor_offset.0 + (screen.x - anchor_screen.x) / scale,
                        anchor_offset.1 + (screen.y - anchor_screen.y) / scale,
                    );
                    InputEffect::Redraw
                }
                DragState::Idle => InputEffect::None,
            },
            PointerEvent::Up | PointerEvent::Leave => {
                self.state = DragState::Idle;
                InputEffect::None
            }
            PointerEvent::Click(screen) => match self.state {
                // Up has already reset the machine by the time a click
                // arrives, so dragged-then-released clicks land here too.
                DragState::Idle => InputEffect::ResolveClick(screen),
                DragState::Panning { .. } => InputEffect::None,
            },
        }
    }
}

impl Default for InteractionController {
    fn default() -> Self {
        Self::new()
    }
}

/// Seam between the controller and whatever produces pointer events.
///
/// A real host adapts its toolkit's mouse signals; tests feed synthetic
/// [`PointerEvent`] values through a fake implementation.
pub trait PointerEventSource {
    /// Registers the handler that will receive every pointer event.
    fn subscribe(&mut self, handler: Box<dyn FnMut(PointerEvent)>);

    /// Drops the registered handler, if any.
    fn unsubscribe(&mut self);
}
