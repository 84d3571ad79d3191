//! Bounds-checked 2D cell container.
//!
//! Centralizes the row-major index arithmetic shared by initialization,
//! border linking and structural mutation. Storage stays row-major: the
//! cell at (row `r`, col `c`) lives at linear slot `r * cols + c`, and
//! appended rows/columns remap the slots without touching the cells
//! themselves, so handles and occupants stay valid.

use super::{Cell, CellId};

/// Row-major grid of cells with `(row, col)` addressed access.
#[derive(Debug, Default)]
pub struct GridIndex {
    rows: u32,
    cols: u32,
    slots: Vec<Cell>,
}

impl GridIndex {
    /// Build a `rows x cols` grid from pre-created cells.
    ///
    /// `cells` must be row-major and of length `rows * cols`; the caller
    /// (the engine) creates them in that order.
    pub(crate) fn from_cells(rows: u32, cols: u32, cells: Vec<Cell>) -> Self {
        Self {
            rows,
            cols,
            slots: cells,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.rows = 0;
        self.cols = 0;
        self.slots.clear();
    }

    /// Number of rows
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total cell count
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when the grid holds no cells
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True when the slot count matches the grid shape.
    ///
    /// False only for partially constructed state; link/layout passes
    /// bail out on it instead of reading misaligned slots.
    pub fn is_consistent(&self) -> bool {
        self.slots.len() == (self.rows as usize) * (self.cols as usize)
    }

    fn slot_index(&self, row: u32, col: u32) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some((row as usize) * (self.cols as usize) + (col as usize))
    }

    /// Cell at (row, col), bounds-checked
    pub fn get(&self, row: u32, col: u32) -> Option<&Cell> {
        self.slot_index(row, col).and_then(|i| self.slots.get(i))
    }

    pub(crate) fn get_mut(&mut self, row: u32, col: u32) -> Option<&mut Cell> {
        self.slot_index(row, col)
            .and_then(|i| self.slots.get_mut(i))
    }

    /// Resolve a cell handle
    pub fn by_id(&self, id: CellId) -> Option<&Cell> {
        self.slots.iter().find(|cell| cell.id() == id)
    }

    pub(crate) fn by_id_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.slots.iter_mut().find(|cell| cell.id() == id)
    }

    /// Grid position of a cell handle
    pub fn position_of(&self, id: CellId) -> Option<(u32, u32)> {
        let index = self.slots.iter().position(|cell| cell.id() == id)?;
        if self.cols == 0 {
            return None;
        }
        let cols = self.cols as usize;
        u32::try_from(index / cols)
            .ok()
            .zip(u32::try_from(index % cols).ok())
    }

    /// Iterate cells in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.slots.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.slots.iter_mut()
    }

    /// Remap to `cols + 1` columns.
    ///
    /// Existing cell (r, c) stays at (r, c) for every `c < cols`; the
    /// cells of `new_column` (one per row, top to bottom) fill the new
    /// last column.
    pub(crate) fn append_column(&mut self, new_column: Vec<Cell>) {
        let old_cols = self.cols as usize;
        let mut slots = Vec::with_capacity(self.slots.len() + new_column.len());
        let mut old = std::mem::take(&mut self.slots).into_iter();
        for appended in new_column {
            slots.extend(old.by_ref().take(old_cols));
            slots.push(appended);
        }
        self.slots = slots;
        self.cols += 1;
    }

    /// Append one row at the bottom.
    ///
    /// Rows are contiguous at the end of the row-major storage, so this
    /// is a plain extend with no remapping.
    pub(crate) fn append_row(&mut self, new_row: Vec<Cell>) {
        self.slots.extend(new_row);
        self.rows += 1;
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]
mod tests {
    use super::*;

    fn grid(rows: u32, cols: u32) -> GridIndex {
        let count = (rows * cols) as usize;
        let cells = (0..count)
            .map(|i| Cell::new(CellId(u32::try_from(i).unwrap())))
            .collect();
        GridIndex::from_cells(rows, cols, cells)
    }

    #[test]
    fn test_row_major_slots() {
        let g = grid(2, 3);
        assert_eq!(g.get(0, 0).unwrap().id(), CellId(0));
        assert_eq!(g.get(0, 2).unwrap().id(), CellId(2));
        assert_eq!(g.get(1, 0).unwrap().id(), CellId(3));
        assert_eq!(g.get(1, 2).unwrap().id(), CellId(5));
        assert!(g.get(2, 0).is_none());
        assert!(g.get(0, 3).is_none());
    }

    #[test]
    fn test_position_of() {
        let g = grid(3, 2);
        assert_eq!(g.position_of(CellId(0)), Some((0, 0)));
        assert_eq!(g.position_of(CellId(3)), Some((1, 1)));
        assert_eq!(g.position_of(CellId(4)), Some((2, 0)));
        assert_eq!(g.position_of(CellId(99)), None);
    }

    #[test]
    fn test_append_column_remaps_old_cells() {
        let mut g = grid(2, 2);
        g.append_column(vec![Cell::new(CellId(100)), Cell::new(CellId(101))]);

        assert_eq!(g.cols(), 3);
        assert_eq!(g.rows(), 2);
        assert!(g.is_consistent());
        // Old cells keep their (row, col) positions
        assert_eq!(g.get(0, 0).unwrap().id(), CellId(0));
        assert_eq!(g.get(0, 1).unwrap().id(), CellId(1));
        assert_eq!(g.get(1, 0).unwrap().id(), CellId(2));
        assert_eq!(g.get(1, 1).unwrap().id(), CellId(3));
        // New cells only in the appended column
        assert_eq!(g.get(0, 2).unwrap().id(), CellId(100));
        assert_eq!(g.get(1, 2).unwrap().id(), CellId(101));
    }

    #[test]
    fn test_append_row_is_flat_extend() {
        let mut g = grid(2, 2);
        g.append_row(vec![Cell::new(CellId(100)), Cell::new(CellId(101))]);

        assert_eq!(g.rows(), 3);
        assert!(g.is_consistent());
        assert_eq!(g.get(1, 1).unwrap().id(), CellId(3));
        assert_eq!(g.get(2, 0).unwrap().id(), CellId(100));
        assert_eq!(g.get(2, 1).unwrap().id(), CellId(101));
    }

    #[test]
    fn test_clear() {
        let mut g = grid(2, 2);
        g.clear();
        assert!(g.is_empty());
        assert!(g.is_consistent());
        assert_eq!(g.rows(), 0);
    }
}
