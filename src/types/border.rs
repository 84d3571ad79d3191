//! Draggable border lines separating adjacent rows or columns.

use crate::geometry::Rect;

use super::CellId;

/// Border orientation. A vertical border separates two columns and is
/// dragged along the x axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Thickness of the border line in pixels.
///
/// Fixed hit-test affordance for drag resizing, independent of the
/// grid's cell spacing.
pub const BORDER_THICKNESS: f32 = 3.0;

/// A movable separator line.
///
/// The normalized offset of the leading edge (a fraction of the
/// container extent perpendicular to the orientation) is the single
/// source of truth; the absolute rect is re-derived from it on every
/// layout pass. Borders of one orientation form an ordered chain: the
/// border at chain position `k` (1-indexed) separates column/row `k-1`
/// from `k`.
#[derive(Debug, Clone)]
pub struct Border {
    orientation: Orientation,
    offset: f32,
    rect: Rect,
    prev_cells: Vec<CellId>,
    next_cells: Vec<CellId>,
}

impl Border {
    pub(crate) fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            offset: 0.0,
            rect: Rect::default(),
            prev_cells: Vec::new(),
            next_cells: Vec::new(),
        }
    }

    /// Orientation of this border
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Normalized (0..1) offset of the leading edge along the drag axis
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub(crate) fn set_offset(&mut self, offset: f32) {
        self.offset = offset.clamp(0.0, 1.0);
    }

    /// Derived absolute bounds in container-local coordinates
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub(crate) fn rect_mut(&mut self) -> &mut Rect {
        &mut self.rect
    }

    /// Center of the separator line along its drag axis
    pub fn center(&self) -> f32 {
        match self.orientation {
            Orientation::Vertical => self.rect.x + BORDER_THICKNESS / 2.0,
            Orientation::Horizontal => self.rect.y + BORDER_THICKNESS / 2.0,
        }
    }

    /// Cells adjacent on the leading side (left of a vertical border,
    /// above a horizontal one)
    pub fn prev_cells(&self) -> &[CellId] {
        &self.prev_cells
    }

    /// Cells adjacent on the trailing side
    pub fn next_cells(&self) -> &[CellId] {
        &self.next_cells
    }

    pub(crate) fn clear_links(&mut self) {
        self.prev_cells.clear();
        self.next_cells.clear();
    }

    pub(crate) fn link(&mut self, prev: CellId, next: CellId) {
        self.prev_cells.push(prev);
        self.next_cells.push(next);
    }
}
