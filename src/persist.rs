//! Round-trip persistence surface.
//!
//! Only the normalized layout is persisted: grid shape, group metrics,
//! per-border normalized offsets and per-cell occupants. Absolute
//! geometry is never stored; it is re-derived by one authoritative
//! layout pass after restore.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, TableError};
use crate::host::SceneHost;
use crate::layout::TableLayoutEngine;
use crate::types::NodeId;

/// Serialized layout of one table group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableSnapshot {
    pub rows: u32,
    pub cols: u32,
    pub cell_spacing: f32,
    pub table_padding: f32,
    /// Normalized offsets of the vertical borders, in chain order
    pub vertical_offsets: Vec<f32>,
    /// Normalized offsets of the horizontal borders, in chain order
    pub horizontal_offsets: Vec<f32>,
    /// Row-major occupant per cell
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub occupants: Vec<Option<NodeId>>,
}

impl TableLayoutEngine {
    /// Capture the persisted layout surface.
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot {
            rows: self.group.rows,
            cols: self.group.cols,
            cell_spacing: self.group.cell_spacing,
            table_padding: self.group.table_padding,
            vertical_offsets: self.vertical_borders.iter().map(|b| b.offset()).collect(),
            horizontal_offsets: self.horizontal_borders.iter().map(|b| b.offset()).collect(),
            occupants: self.cells.iter().map(|cell| cell.occupant()).collect(),
        }
    }

    /// Rebuild the table from a snapshot.
    ///
    /// Runs no pixel pass at all: follow up with one authoritative
    /// [`initialize_table_layout`](Self::initialize_table_layout) or
    /// [`layout_table`](Self::layout_table) in interactive context, and
    /// rebind any [`DropRouter`](crate::DropRouter). Best-effort: an
    /// inconsistent snapshot leaves the previous layout intact.
    pub fn restore(&mut self, snapshot: &TableSnapshot, host: &mut dyn SceneHost) {
        if let Err(err) = self.try_restore(snapshot, host) {
            warn!(%err, "snapshot restore failed");
        }
    }

    fn try_restore(&mut self, snapshot: &TableSnapshot, host: &mut dyn SceneHost) -> Result<()> {
        if snapshot.cell_spacing < 0.0 || snapshot.table_padding < 0.0 {
            return Err(TableError::InvalidMetrics(
                "snapshot spacing and padding can't be negative".into(),
            ));
        }
        let vertical = snapshot.cols.saturating_sub(1) as usize;
        let horizontal = snapshot.rows.saturating_sub(1) as usize;
        if snapshot.vertical_offsets.len() != vertical
            || snapshot.horizontal_offsets.len() != horizontal
        {
            return Err(TableError::InvalidMetrics(format!(
                "snapshot offset counts {}/{} do not match a {}x{} grid",
                snapshot.vertical_offsets.len(),
                snapshot.horizontal_offsets.len(),
                snapshot.rows,
                snapshot.cols,
            )));
        }
        let cell_count = (snapshot.rows as usize) * (snapshot.cols as usize);
        if !snapshot.occupants.is_empty() && snapshot.occupants.len() != cell_count {
            return Err(TableError::ShapeMismatch {
                cells: snapshot.occupants.len(),
                rows: snapshot.rows,
                cols: snapshot.cols,
            });
        }

        self.try_initialize(snapshot.rows, snapshot.cols, host)?;
        self.group.cell_spacing = snapshot.cell_spacing;
        self.group.table_padding = snapshot.table_padding;

        for (border, offset) in self
            .vertical_borders
            .iter_mut()
            .zip(&snapshot.vertical_offsets)
        {
            border.set_offset(*offset);
        }
        for (border, offset) in self
            .horizontal_borders
            .iter_mut()
            .zip(&snapshot.horizontal_offsets)
        {
            border.set_offset(*offset);
        }
        if !snapshot.occupants.is_empty() {
            for (cell, occupant) in self.cells.iter_mut().zip(&snapshot.occupants) {
                cell.set_occupant(*occupant);
            }
        }
        Ok(())
    }
}
