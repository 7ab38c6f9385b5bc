//! Selection state and the click-resolution rules.

use seatmap_core::AreaId;

/// Tracks which area, if any, is currently selected.
///
/// Mutated only by a resolved click, never by a pan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<AreaId>,
}

impl SelectionState {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently selected area id.
    pub fn selected_id(&self) -> Option<AreaId> {
        self.selected
    }

    /// Explicitly clears the selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Applies a hit-test result and reports whether the selection changed.
    ///
    /// Clicking the selected area again clears the selection; clicking a
    /// different area replaces it; a click that hit nothing leaves the
    /// previous selection unchanged.
    pub fn apply_hit(&mut self, hit: Option<AreaId>) -> bool {
        match hit {
            None => false,
            Some(id) if self.selected == Some(id) => {
                self.selected = None;
                true
            }
            Some(id) => {
                self.selected = Some(id);
                true
            }
        }
    }
}
