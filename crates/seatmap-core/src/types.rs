//! Type aliases shared across the workspace.

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded
/// sharing. The engine is event-driven on one logical thread, so this is
/// the shape host UIs hold it in.
pub type Shared<T> = Rc<RefCell<T>>;

/// Stable identifier of an area within one map.
pub type AreaId = u64;

/// Callback invoked when a click resolves a selection change.
///
/// Receives the newly selected area id, or `None` when a toggle click
/// cleared the selection.
pub type SelectionCallback = Box<dyn FnMut(Option<AreaId>)>;
