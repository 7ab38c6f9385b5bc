//! # Seatmap
//!
//! Interactive vector map engine for venue seating layouts. Operators define
//! polygonal areas (stage, seating blocks, zones) over a 2D canvas; end
//! users click an area to select it, drag to pan, and zoom in steps.
//!
//! The workspace is organized as:
//!
//! 1. **seatmap-core** - geometry primitives, colors, errors, constants
//! 2. **seatmap-engine** - geometry model, path cache, viewport, renderer,
//!    pointer interaction, hit testing
//! 3. **seatmap** - this crate: a demo binary that drives the engine and
//!    writes a rendered frame to disk

pub use seatmap_core as core;
pub use seatmap_engine as engine;

pub use seatmap_core::{AreaId, Color, Error, Point, Result, ScreenPoint};
pub use seatmap_engine::{MapEngine, MapTemplate, PointerEvent, Viewport};

/// Initializes tracing for the binary: env-filtered, INFO by default.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer().with_target(true).with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    Ok(())
}
