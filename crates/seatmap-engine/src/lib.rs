//! # Seatmap Engine
//!
//! The interactive vector map engine behind the venue layout screens.
//! Venue operators define polygonal areas (stage, seating blocks, zones)
//! over a 2D canvas; this crate owns everything between a raw pointer event
//! and the painted frame:
//!
//! - **Geometry model** ([`model`]): typed, validated `Area` polygons and
//!   the `MapTemplate` that collects them.
//! - **Path cache** ([`path_cache`]): derived closed-polygon paths shared by
//!   the renderer and the hit tester, rebuilt whenever the model changes.
//! - **Viewport** ([`viewport`]): the scale/offset transform between screen
//!   and map coordinates, with stepped, clamped zoom.
//! - **Interaction** ([`interaction`]): the `Idle`/`Panning` state machine
//!   that turns pointer events into pan deltas and selection clicks.
//! - **Hit testing** ([`hit_test`]): point-in-polygon resolution in array
//!   order, under the nonzero winding rule.
//! - **Renderer** ([`renderer`]): fills, stage strokes, selection highlight,
//!   and labels, painted to a `tiny-skia` pixmap.
//! - **Facade** ([`engine`]): `MapEngine` wires the pieces together and is
//!   the surface the host UI talks to.
//!
//! The engine is single-threaded and event-driven: all mutation happens
//! synchronously inside pointer-event handling on the UI thread equivalent.

pub mod engine;
pub mod font_manager;
pub mod interaction;
pub mod model;
pub mod path_cache;
pub mod renderer;
pub mod selection;
pub mod template_io;
pub mod viewport;

pub use engine::MapEngine;
pub use hit_test::hit_test;
pub use interaction::{DragState, InputEffect, InteractionController, PointerEvent, PointerEventSource};
pub use model::{Area, AreaSpec, MapTemplate, TemplateMetadata};
pub use path_cache::{AreaPath, PathCache};
pub use selection::SelectionState;
pub use viewport::Viewport;
