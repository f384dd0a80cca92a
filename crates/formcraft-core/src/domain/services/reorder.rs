//! Reorder engine
//!
//! `reorder` removes the element at `from` and reinserts it at `to`, where
//! `to` indexes the sequence *after* the removal. It runs once per qualifying
//! hover crossing during a drag, so it must stay a pure function of its input.

use crate::error::{FormsError, Result};

/// Move `items[from]` to position `to` (post-removal indexing)
pub fn reorder<T: Clone>(items: &[T], from: usize, to: usize) -> Result<Vec<T>> {
    let len = items.len();
    for index in [from, to] {
        if index >= len {
            return Err(FormsError::IndexOutOfRange { index, len });
        }
    }

    let mut out = items.to_vec();
    if from != to {
        let moved = out.remove(from);
        out.insert(to, moved);
    }
    Ok(out)
}

/// Vertical extent of the element under the pointer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HoverGeometry {
    pub top: f64,
    pub bottom: f64,
}

impl HoverGeometry {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Midpoint relative to `top`
    pub fn middle(&self) -> f64 {
        (self.bottom - self.top) / 2.0
    }
}

/// Midpoint tie-break for live hover reordering
///
/// Dragging down only swaps once the pointer is below the target's midpoint,
/// dragging up only once it is above. Adjacent items of similar height would
/// otherwise swap back and forth on every pointer event.
pub fn should_reorder(
    drag_index: usize,
    hover_index: usize,
    pointer_y: f64,
    geometry: HoverGeometry,
) -> bool {
    if drag_index == hover_index {
        return false;
    }
    let hover_y = pointer_y - geometry.top;
    let middle = geometry.middle();
    if drag_index < hover_index && hover_y < middle {
        return false;
    }
    if drag_index > hover_index && hover_y > middle {
        return false;
    }
    true
}

/// Tracks where the dragged item currently sits while a drag is in progress
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragSession {
    current_index: usize,
}

impl DragSession {
    pub fn start(index: usize) -> Self {
        Self {
            current_index: index,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the `(from, to)` move to apply, if the hover qualifies
    ///
    /// Repeating a hover with an unchanged pointer position yields `None`
    /// after the first move, so no drift accumulates.
    pub fn hover(
        &mut self,
        hover_index: usize,
        pointer_y: f64,
        geometry: HoverGeometry,
    ) -> Option<(usize, usize)> {
        if !should_reorder(self.current_index, hover_index, pointer_y, geometry) {
            return None;
        }
        let from = self.current_index;
        self.current_index = hover_index;
        Some((from, hover_index))
    }
}
