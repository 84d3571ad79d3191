//! Structural mutation: appending rows and columns.
//!
//! Both operations preserve existing cell contents and neighbor
//! relationships. The cell array is remapped, never rebuilt, so cell
//! handles and occupants stay valid; only the adjacency links and the
//! derived geometry are refreshed afterwards.

use tracing::warn;

use crate::error::{Result, TableError};
use crate::host::SceneHost;
use crate::types::{Border, Orientation, BORDER_THICKNESS};

use super::engine::TableLayoutEngine;

impl TableLayoutEngine {
    /// Append one column on the right.
    ///
    /// The new vertical border is chained after the current last one and
    /// placed at the absolute midpoint between it and the container's
    /// right edge; its normalized offset is derived from that position.
    /// Best-effort: without a container or an existing border to chain
    /// from, the grid is left untouched.
    pub fn insert_column(&mut self, host: &mut dyn SceneHost) {
        if let Err(err) = self.try_insert_column(host) {
            warn!(%err, "insert_column failed");
        }
    }

    fn try_insert_column(&mut self, host: &mut dyn SceneHost) -> Result<()> {
        let size = host.container_size().ok_or(TableError::NoContainer)?;
        let last = self
            .vertical_borders
            .last()
            .ok_or(TableError::NoBorderToChainFrom("vertical"))?;

        // Midpoint between the last border and the right edge, using the
        // current absolute positions (not the normalized-recomputed ones).
        let last_x = last.rect().x;
        let height = last.rect().height;
        let x = last_x + (size.width - last_x) / 2.0;

        let mut border = Border::new(Orientation::Vertical);
        if size.width > 0.0 {
            border.set_offset(x / size.width);
        }
        {
            let rect = border.rect_mut();
            rect.x = x;
            rect.y = 0.0;
            rect.width = BORDER_THICKNESS;
            rect.height = height;
        }
        self.vertical_borders.push(border);
        host.realize_border(Orientation::Vertical, self.vertical_borders.len() - 1);

        // Two phases: remap old cells into the widened layout, then
        // create the cells of the new last column.
        let rows = self.group.rows;
        let new_column = self.create_cells(rows, host);
        self.cells.append_column(new_column);
        self.group.cols += 1;

        self.link_borders_to_cells();
        self.layout_cells(size);
        host.table_modified(self.group.id);
        Ok(())
    }

    /// Append one row at the bottom.
    ///
    /// Symmetric to [`insert_column`](Self::insert_column); the cell
    /// remap is a plain flat copy since rows are contiguous at the end
    /// of the row-major storage.
    pub fn insert_row(&mut self, host: &mut dyn SceneHost) {
        if let Err(err) = self.try_insert_row(host) {
            warn!(%err, "insert_row failed");
        }
    }

    fn try_insert_row(&mut self, host: &mut dyn SceneHost) -> Result<()> {
        let size = host.container_size().ok_or(TableError::NoContainer)?;
        let last = self
            .horizontal_borders
            .last()
            .ok_or(TableError::NoBorderToChainFrom("horizontal"))?;

        let last_y = last.rect().y;
        let width = last.rect().width;
        let y = last_y + (size.height - last_y) / 2.0;

        let mut border = Border::new(Orientation::Horizontal);
        if size.height > 0.0 {
            border.set_offset(y / size.height);
        }
        {
            let rect = border.rect_mut();
            rect.x = 0.0;
            rect.y = y;
            rect.width = width;
            rect.height = BORDER_THICKNESS;
        }
        self.horizontal_borders.push(border);
        host.realize_border(Orientation::Horizontal, self.horizontal_borders.len() - 1);

        let cols = self.group.cols;
        let new_row = self.create_cells(cols, host);
        self.cells.append_row(new_row);
        self.group.rows += 1;

        self.link_borders_to_cells();
        self.layout_cells(size);
        host.table_modified(self.group.id);
        Ok(())
    }
}
