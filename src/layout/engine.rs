//! The table layout engine: border/cell ownership, adjacency linking and
//! the two geometry passes.
//!
//! Geometry flows one way: normalized border offsets are the source of
//! truth, absolute border rects are projected from them against the
//! current container extent, and cell bounds are derived from the
//! adjacent borders. Initialization deliberately computes no pixel
//! geometry at all, so restoring a persisted layout never triggers
//! spurious intermediate passes.

use tracing::{debug, warn};

use crate::error::{Result, TableError};
use crate::geometry::Size;
use crate::host::SceneHost;
use crate::types::{Border, Cell, CellId, GridIndex, GroupId, Orientation, BORDER_THICKNESS};

/// Parameters of the owning table group.
///
/// The engine reads the grid shape and metrics from here and writes the
/// shape back after structural mutation.
#[derive(Debug, Clone)]
pub struct TableGroup {
    pub(crate) id: GroupId,
    pub(crate) rows: u32,
    pub(crate) cols: u32,
    pub(crate) cell_spacing: f32,
    pub(crate) table_padding: f32,
    pub(crate) cell_min_size: f32,
}

impl TableGroup {
    /// Create group parameters with default metrics.
    pub fn new(id: GroupId, rows: u32, cols: u32) -> Self {
        Self {
            id,
            rows,
            cols,
            cell_spacing: 5.0,
            table_padding: 2.0,
            cell_min_size: 10.0,
        }
    }

    /// Identity carried by table-modified notifications
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Row count
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Column count
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Gap between adjacent cells, in pixels
    pub fn cell_spacing(&self) -> f32 {
        self.cell_spacing
    }

    /// Gap between the container edges and the outer cells, in pixels
    pub fn table_padding(&self) -> f32 {
        self.table_padding
    }

    /// Minimum cell extent enforced while dragging borders
    pub fn cell_min_size(&self) -> f32 {
        self.cell_min_size
    }
}

/// Whether a layout pass runs interactively or during bulk state
/// restoration.
///
/// Resize notifications arriving mid-restore must not cascade partial
/// layouts; the restoring caller passes `Restoring` and follows up with
/// one authoritative interactive pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayoutContext {
    #[default]
    Interactive,
    Restoring,
}

/// Owns the border and cell collections of one table group and keeps
/// their geometry consistent with the container extent.
pub struct TableLayoutEngine {
    pub(crate) group: TableGroup,
    pub(crate) cells: GridIndex,
    pub(crate) vertical_borders: Vec<Border>,
    pub(crate) horizontal_borders: Vec<Border>,
    pub(crate) next_cell_id: u32,
}

impl TableLayoutEngine {
    /// Create an engine for `group`. No cells or borders exist until
    /// [`initialize`](Self::initialize).
    pub fn new(group: TableGroup) -> Self {
        Self {
            group,
            cells: GridIndex::default(),
            vertical_borders: Vec::new(),
            horizontal_borders: Vec::new(),
            next_cell_id: 0,
        }
    }

    /// Owning-group parameters
    pub fn group(&self) -> &TableGroup {
        &self.group
    }

    /// Row count
    pub fn rows(&self) -> u32 {
        self.group.rows
    }

    /// Column count
    pub fn cols(&self) -> u32 {
        self.group.cols
    }

    /// Iterate cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Resolve a cell handle
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.by_id(id)
    }

    pub(crate) fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.cells.by_id_mut(id)
    }

    /// Cell at (row, col), bounds-checked
    pub fn cell_at(&self, row: u32, col: u32) -> Option<&Cell> {
        self.cells.get(row, col)
    }

    /// The 2D cell index
    pub fn grid(&self) -> &GridIndex {
        &self.cells
    }

    /// Vertical borders in chain order (left to right)
    pub fn vertical_borders(&self) -> &[Border] {
        &self.vertical_borders
    }

    /// Horizontal borders in chain order (top to bottom)
    pub fn horizontal_borders(&self) -> &[Border] {
        &self.horizontal_borders
    }

    fn borders(&self, orientation: Orientation) -> &[Border] {
        match orientation {
            Orientation::Vertical => &self.vertical_borders,
            Orientation::Horizontal => &self.horizontal_borders,
        }
    }

    /* Borders and cells management */

    /// Build a `rows x cols` grid: `rows * cols` cells, `cols - 1`
    /// vertical and `rows - 1` horizontal borders (exterior edges have
    /// no borders), chained in creation order and linked to their
    /// neighboring cells.
    ///
    /// Best-effort: invalid dimensions or an unavailable host leave the
    /// previous layout intact. Pixel geometry is not computed here; call
    /// [`initialize_table_layout`](Self::initialize_table_layout) (or
    /// restore persisted offsets) afterwards.
    pub fn initialize(&mut self, rows: u32, cols: u32, host: &mut dyn SceneHost) {
        if let Err(err) = self.try_initialize(rows, cols, host) {
            warn!(%err, rows, cols, "table initialization failed");
        }
    }

    pub(crate) fn try_initialize(
        &mut self,
        rows: u32,
        cols: u32,
        host: &mut dyn SceneHost,
    ) -> Result<()> {
        if rows == 0 || cols == 0 {
            return Err(TableError::InvalidDimensions { rows, cols });
        }
        if !host.is_ready() {
            return Err(TableError::HostUnavailable);
        }
        self.clear_layout();
        self.group.rows = rows;
        self.group.cols = cols;

        let count = rows.saturating_mul(cols);
        let cells = self.create_cells(count, host);
        self.cells = GridIndex::from_cells(rows, cols, cells);

        for index in 0..cols.saturating_sub(1) as usize {
            self.vertical_borders.push(Border::new(Orientation::Vertical));
            host.realize_border(Orientation::Vertical, index);
        }
        for index in 0..rows.saturating_sub(1) as usize {
            self.horizontal_borders
                .push(Border::new(Orientation::Horizontal));
            host.realize_border(Orientation::Horizontal, index);
        }

        self.link_borders_to_cells();
        Ok(())
    }

    /// Release every border and cell. Safe to call repeatedly, including
    /// before the first initialization.
    pub fn clear_layout(&mut self) {
        self.vertical_borders.clear();
        self.horizontal_borders.clear();
        self.cells.clear();
    }

    pub(crate) fn create_cells(&mut self, count: u32, host: &mut dyn SceneHost) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let id = CellId(self.next_cell_id);
            self.next_cell_id += 1;
            host.realize_cell(id);
            cells.push(Cell::new(id));
        }
        cells
    }

    /// Rebuild border-to-cell adjacency.
    ///
    /// The vertical border at chain position `k` (1-indexed) is linked
    /// with prev cell `(r, k-1)` and next cell `(r, k)` for every row
    /// `r`; horizontal borders analogously across columns. Re-run after
    /// every operation that changes the shape of either collection.
    /// Silently skips partially constructed state where the cell count
    /// does not match `rows * cols`.
    pub(crate) fn link_borders_to_cells(&mut self) {
        if !self.cells.is_consistent() {
            debug!(
                cells = self.cells.len(),
                rows = self.group.rows,
                cols = self.group.cols,
                "skipping border linking on inconsistent cell collection"
            );
            return;
        }
        let rows = self.cells.rows();
        let cols = self.cells.cols();

        for k in 1..cols {
            let Some(border) = self.vertical_borders.get_mut((k - 1) as usize) else {
                continue;
            };
            border.clear_links();
            for r in 0..rows {
                let prev = self.cells.get(r, k - 1).map(Cell::id);
                let next = self.cells.get(r, k).map(Cell::id);
                if let (Some(prev), Some(next)) = (prev, next) {
                    border.link(prev, next);
                }
            }
        }
        for k in 1..rows {
            let Some(border) = self.horizontal_borders.get_mut((k - 1) as usize) else {
                continue;
            };
            border.clear_links();
            for c in 0..cols {
                let prev = self.cells.get(k - 1, c).map(Cell::id);
                let next = self.cells.get(k, c).map(Cell::id);
                if let (Some(prev), Some(next)) = (prev, next) {
                    border.link(prev, next);
                }
            }
        }
    }

    /* Geometric layout */

    /// Full layout pass: distribute the container extent into uniform
    /// cells and seed every border's normalized offset from it.
    ///
    /// This is the single place offsets are assigned outside restore and
    /// drag; every subsequent resize only re-projects them. Ends with
    /// one interactive [`layout_table`](Self::layout_table) pass.
    pub fn initialize_table_layout(&mut self, host: &mut dyn SceneHost) {
        if let Err(err) = self.try_initialize_table_layout(host) {
            warn!(%err, "full table layout failed");
        }
    }

    fn try_initialize_table_layout(&mut self, host: &mut dyn SceneHost) -> Result<()> {
        let size = host.container_size().ok_or(TableError::NoContainer)?;
        if size.is_empty() {
            return Err(TableError::EmptyContainer);
        }
        let rows = self.group.rows;
        let cols = self.group.cols;
        if rows == 0 || cols == 0 {
            return Err(TableError::InvalidDimensions { rows, cols });
        }
        let spacing = self.group.cell_spacing;
        let padding = self.group.table_padding;
        if spacing < 0.0 || padding < 0.0 {
            return Err(TableError::InvalidMetrics(
                "spacing and padding can't be negative".into(),
            ));
        }

        let cols_f = cols as f32;
        let rows_f = rows as f32;
        let cell_width = (size.width - 2.0 * padding - (cols_f - 1.0) * spacing) / cols_f;
        let cell_height = (size.height - 2.0 * padding - (rows_f - 1.0) * spacing) / rows_f;
        if cell_width < 0.0 || cell_height < 0.0 {
            return Err(TableError::InvalidMetrics(format!(
                "container {}x{} too small for padding {padding} and spacing {spacing}",
                size.width, size.height
            )));
        }

        // Vertical borders:
        // | padding |   cell   |  border  |   cell   |  border  |   cell   | padding |
        //                       <-spacing->           <-spacing->
        // Border c (1-indexed) is centered half a spacing past the
        // trailing edge of cell column c-1.
        let half = BORDER_THICKNESS / 2.0;
        if self.vertical_borders.len() == cols.saturating_sub(1) as usize {
            for c in 1..cols {
                let Some(border) = self.vertical_borders.get_mut((c - 1) as usize) else {
                    continue;
                };
                let c_f = c as f32;
                let center = padding + (c_f - 1.0) * spacing + c_f * cell_width + spacing / 2.0;
                border.set_offset((center - half) / size.width);
            }
        } else {
            warn!(
                borders = self.vertical_borders.len(),
                cols, "invalid vertical border count"
            );
        }

        if self.horizontal_borders.len() == rows.saturating_sub(1) as usize {
            for r in 1..rows {
                let Some(border) = self.horizontal_borders.get_mut((r - 1) as usize) else {
                    continue;
                };
                let r_f = r as f32;
                let center = padding + (r_f - 1.0) * spacing + r_f * cell_height + spacing / 2.0;
                border.set_offset((center - half) / size.height);
            }
        } else {
            warn!(
                borders = self.horizontal_borders.len(),
                rows, "invalid horizontal border count"
            );
        }

        self.layout_table(LayoutContext::Interactive, &*host);
        Ok(())
    }

    /// Resize pass: project every border's stored normalized offset back
    /// to absolute pixels, stretch it across the perpendicular extent,
    /// then re-derive cell bounds.
    ///
    /// Idempotent: re-running with an unchanged container reproduces
    /// identical geometry. No-op while the container extent is empty or
    /// in [`LayoutContext::Restoring`].
    pub fn layout_table(&mut self, ctx: LayoutContext, host: &dyn SceneHost) {
        if ctx == LayoutContext::Restoring {
            return;
        }
        let Some(size) = host.container_size() else {
            return;
        };
        if size.is_empty() {
            return;
        }

        for border in &mut self.vertical_borders {
            let x = border.offset() * size.width;
            let rect = border.rect_mut();
            rect.x = x;
            rect.y = 0.0;
            rect.width = BORDER_THICKNESS;
            rect.height = size.height;
        }
        for border in &mut self.horizontal_borders {
            let y = border.offset() * size.height;
            let rect = border.rect_mut();
            rect.x = 0.0;
            rect.y = y;
            rect.width = size.width;
            rect.height = BORDER_THICKNESS;
        }

        self.layout_cells(size);
    }

    /// Derive cell bounds from the positioned borders.
    ///
    /// Each border bounds its prev cells' trailing edge at
    /// `center - spacing/2` and its next cells' leading edge at
    /// `center + spacing/2`; the first and last row/column are bounded
    /// by the container padding instead of a border.
    pub(crate) fn layout_cells(&mut self, size: Size) {
        let spacing2 = self.group.cell_spacing / 2.0;
        let padding = self.group.table_padding;

        for i in 0..self.vertical_borders.len() {
            let Some(border) = self.vertical_borders.get(i) else {
                continue;
            };
            let center = border.center();
            let prev_center = i
                .checked_sub(1)
                .and_then(|j| self.vertical_borders.get(j))
                .map(Border::center);
            let next_center = self.vertical_borders.get(i + 1).map(Border::center);
            let leading = prev_center.map_or(padding, |c| c + spacing2);
            let trailing = next_center.map_or(size.width - padding, |c| c - spacing2);

            for id in border.prev_cells() {
                if let Some(cell) = self.cells.by_id_mut(*id) {
                    let rect = cell.rect_mut();
                    rect.x = leading;
                    rect.width = (center - spacing2) - leading;
                }
            }
            for id in border.next_cells() {
                if let Some(cell) = self.cells.by_id_mut(*id) {
                    let rect = cell.rect_mut();
                    rect.x = center + spacing2;
                    rect.width = trailing - (center + spacing2);
                }
            }
        }

        for i in 0..self.horizontal_borders.len() {
            let Some(border) = self.horizontal_borders.get(i) else {
                continue;
            };
            let center = border.center();
            let prev_center = i
                .checked_sub(1)
                .and_then(|j| self.horizontal_borders.get(j))
                .map(Border::center);
            let next_center = self.horizontal_borders.get(i + 1).map(Border::center);
            let leading = prev_center.map_or(padding, |c| c + spacing2);
            let trailing = next_center.map_or(size.height - padding, |c| c - spacing2);

            for id in border.prev_cells() {
                if let Some(cell) = self.cells.by_id_mut(*id) {
                    let rect = cell.rect_mut();
                    rect.y = leading;
                    rect.height = (center - spacing2) - leading;
                }
            }
            for id in border.next_cells() {
                if let Some(cell) = self.cells.by_id_mut(*id) {
                    let rect = cell.rect_mut();
                    rect.y = center + spacing2;
                    rect.height = trailing - (center + spacing2);
                }
            }
        }

        // Single-column / single-row grids have no movable border to lay
        // them out; bound the cells by the container directly.
        let padding2 = padding * 2.0;
        if self.group.cols == 1 {
            for cell in self.cells.iter_mut() {
                let rect = cell.rect_mut();
                rect.x = padding;
                rect.width = size.width - padding2;
            }
        }
        if self.group.rows == 1 {
            for cell in self.cells.iter_mut() {
                let rect = cell.rect_mut();
                rect.y = padding;
                rect.height = size.height - padding2;
            }
        }
    }

    /* Owning-group parameter changes */

    /// Change the cell spacing; triggers a cell re-layout.
    pub fn set_cell_spacing(&mut self, spacing: f32, host: &dyn SceneHost) {
        if spacing < 0.0 {
            warn!(spacing, "ignoring negative cell spacing");
            return;
        }
        self.group.cell_spacing = spacing;
        self.relayout_cells(host);
    }

    /// Change the table padding; triggers a cell re-layout.
    pub fn set_table_padding(&mut self, padding: f32, host: &dyn SceneHost) {
        if padding < 0.0 {
            warn!(padding, "ignoring negative table padding");
            return;
        }
        self.group.table_padding = padding;
        self.relayout_cells(host);
    }

    /// Change the minimum cell extent enforced during border drags.
    pub fn set_cell_min_size(&mut self, min_size: f32) {
        if min_size < 0.0 {
            warn!(min_size, "ignoring negative cell minimum size");
            return;
        }
        self.group.cell_min_size = min_size;
    }

    fn relayout_cells(&mut self, host: &dyn SceneHost) {
        if let Some(size) = host.container_size() {
            if !size.is_empty() {
                self.layout_cells(size);
            }
        }
    }

    /* Border dragging */

    /// Drag the border at `index` in its orientation chain to a sampled
    /// absolute `position` (the desired separator center).
    ///
    /// The position is clamped so the cells on both sides keep the
    /// group's minimum cell size; adjacent cells are re-laid out and a
    /// table-modified notification is emitted.
    pub fn move_border(
        &mut self,
        orientation: Orientation,
        index: usize,
        position: f32,
        host: &mut dyn SceneHost,
    ) {
        if let Err(err) = self.try_move_border(orientation, index, position, host) {
            warn!(%err, ?orientation, index, "border move failed");
        }
    }

    fn try_move_border(
        &mut self,
        orientation: Orientation,
        index: usize,
        position: f32,
        host: &mut dyn SceneHost,
    ) -> Result<()> {
        let size = host.container_size().ok_or(TableError::NoContainer)?;
        if size.is_empty() {
            return Err(TableError::EmptyContainer);
        }
        let extent = match orientation {
            Orientation::Vertical => size.width,
            Orientation::Horizontal => size.height,
        };

        let chain = self.borders(orientation);
        if index >= chain.len() {
            return Err(TableError::UnknownBorder { orientation, index });
        }
        let min_gap = self.group.cell_min_size + self.group.cell_spacing;
        let lower = index
            .checked_sub(1)
            .and_then(|j| chain.get(j))
            .map_or(self.group.table_padding, Border::center)
            + min_gap;
        let upper = chain
            .get(index + 1)
            .map_or(extent - self.group.table_padding, Border::center)
            - min_gap;
        if upper < lower {
            return Err(TableError::InvalidMetrics(format!(
                "no room to move border within [{lower}, {upper}]"
            )));
        }
        let center = position.clamp(lower, upper);
        let leading = center - BORDER_THICKNESS / 2.0;

        let chain = match orientation {
            Orientation::Vertical => &mut self.vertical_borders,
            Orientation::Horizontal => &mut self.horizontal_borders,
        };
        let border = chain
            .get_mut(index)
            .ok_or(TableError::UnknownBorder { orientation, index })?;
        border.set_offset(leading / extent);
        match orientation {
            Orientation::Vertical => border.rect_mut().x = leading,
            Orientation::Horizontal => border.rect_mut().y = leading,
        }

        self.layout_cells(size);
        host.table_modified(self.group.id);
        Ok(())
    }
}
