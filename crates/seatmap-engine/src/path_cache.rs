//! Derived closed-polygon paths for rendering and hit testing.
//!
//! The cache is a read-only view keyed by area id and is never a source of
//! truth: it is rebuilt wholesale whenever the geometry model changes, not
//! patched. Rebuild cost is linear in vertex count, so an unconditional
//! rebuild per frame would also be correct; the generation check only buys
//! performance.

use tiny_skia::{Path, PathBuilder};
use tracing::{debug, warn};

use seatmap_core::{AreaId, Point};

use crate::model::MapTemplate;

/// Closed polygon geometry derived from one area.
#[derive(Debug, Clone)]
pub struct AreaPath {
    id: AreaId,
    path: Path,
    ring: Vec<Point>,
}

impl AreaPath {
    /// Owning area id.
    pub fn id(&self) -> AreaId {
        self.id
    }

    /// The closed fill/stroke path in map space.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Membership test under the nonzero winding rule, the default for
    /// canvas-style path containment. Edge-on-boundary behavior is
    /// rule-dependent and not specified further.
    pub fn contains(&self, p: Point) -> bool {
        winding_number(&self.ring, p) != 0
    }
}

/// Nonzero winding number of `p` with respect to the closed ring.
fn winding_number(ring: &[Point], p: Point) -> i32 {
    let mut wn = 0;
    for i in 0..ring.len() {
        let a = ring[i];
        let b = ring[(i + 1) % ring.len()];
        // Signed area of the triangle (a, b, p): positive when p is left
        // of the directed edge a->b.
        let cross = (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y);
        if a.y <= p.y {
            if b.y > p.y && cross > 0.0 {
                wn += 1;
            }
        } else if b.y <= p.y && cross < 0.0 {
            wn -= 1;
        }
    }
    wn
}

/// Rebuildable mapping from area id to closed polygon path, in the same
/// array order the model stores areas.
#[derive(Debug, Clone, Default)]
pub struct PathCache {
    entries: Vec<AreaPath>,
    built_generation: Option<u64>,
}

impl PathCache {
    /// Creates an empty, never-built cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the cache has not been built from this template generation.
    pub fn is_stale(&self, template: &MapTemplate) -> bool {
        self.built_generation != Some(template.generation())
    }

    /// Rebuilds the cache if the model changed since the last build.
    pub fn ensure(&mut self, template: &MapTemplate) {
        if self.is_stale(template) {
            self.rebuild(template);
        }
    }

    /// Rebuilds the cache unconditionally from the template's area list.
    ///
    /// Areas with fewer than 3 vertices are excluded; the validated
    /// constructor makes them unreachable in well-formed input, so this is
    /// a tolerance check, not an error path.
    pub fn rebuild(&mut self, template: &MapTemplate) {
        self.entries.clear();
        let mut skipped = 0usize;
        for area in template.areas() {
            match build_ring_path(area.vertices()) {
                Some(path) => self.entries.push(AreaPath {
                    id: area.id(),
                    path,
                    ring: area.vertices().to_vec(),
                }),
                None => skipped += 1,
            }
        }
        if skipped > 0 {
            warn!(skipped, "excluded degenerate polygons from path cache");
        }
        debug!(
            areas = self.entries.len(),
            generation = template.generation(),
            "rebuilt path cache"
        );
        self.built_generation = Some(template.generation());
    }

    /// Cached paths in area array order.
    pub fn entries(&self) -> &[AreaPath] {
        &self.entries
    }

    /// Looks up the cached path for an area.
    pub fn get(&self, id: AreaId) -> Option<&AreaPath> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Number of cached (renderable) areas.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no area produced a path.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn build_ring_path(vertices: &[Point]) -> Option<Path> {
    if vertices.len() < 3 {
        return None;
    }
    let mut pb = PathBuilder::new();
    pb.move_to(vertices[0].x as f32, vertices[0].y as f32);
    for v in &vertices[1..] {
        pb.line_to(v.x as f32, v.y as f32);
    }
    pb.close();
    pb.finish()
}
