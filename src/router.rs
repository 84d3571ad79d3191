//! Drop routing: resolving a drop point to a target cell and grouping /
//! ungrouping nodes.
//!
//! The router owns the node-side back-references (node -> cell) as plain
//! handles; cell and node lifetimes are governed by the engine and the
//! hosting editor respectively, never by the router.

use std::collections::HashMap;

use tracing::warn;

use crate::geometry::Point;
use crate::host::SceneHost;
use crate::layout::TableLayoutEngine;
use crate::types::{Cell, CellId, NodeId};

/// Visual nudge applied to a node when it leaves its cell.
pub const UNGROUP_OFFSET: Point = Point { x: 10.0, y: 10.0 };

/// Routes node drops to cells and maintains the node -> cell
/// back-references.
#[derive(Debug, Default)]
pub struct DropRouter {
    node_cells: HashMap<NodeId, CellId>,
}

impl DropRouter {
    /// Create an empty router
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell currently hosting `node`, if any
    pub fn cell_of(&self, node: NodeId) -> Option<CellId> {
        self.node_cells.get(&node).copied()
    }

    /// True when `node` is grouped into some cell
    pub fn is_grouped(&self, node: NodeId) -> bool {
        self.node_cells.contains_key(&node)
    }

    /// Attach `node` to `target`, or resolve the target by hit-testing
    /// the node's drop position against the cell bounds in sequence
    /// order when no target is given.
    ///
    /// An explicit target that is not part of the engine's cell
    /// collection is an internal-consistency error: logged, not
    /// propagated. A hit-test miss leaves the node ungrouped silently.
    pub fn attach(
        &mut self,
        engine: &mut TableLayoutEngine,
        host: &mut dyn SceneHost,
        node: NodeId,
        target: Option<CellId>,
    ) {
        let cell_id = match target {
            Some(id) => {
                if engine.cell(id).is_none() {
                    warn!(?id, ?node, "drop target cell is not part of this table");
                    return;
                }
                id
            }
            None => {
                let Some(pos) = host.node_drop_position(node) else {
                    return;
                };
                let Some(id) = engine
                    .cells()
                    .find(|cell| cell.rect().contains(pos))
                    .map(Cell::id)
                else {
                    // Outside every cell: the node stays ungrouped.
                    return;
                };
                id
            }
        };

        let Some(rect) = engine.cell(cell_id).map(Cell::rect) else {
            return;
        };
        let cached_size = host.node_size(node);
        if let Some(cell) = engine.cell_mut(cell_id) {
            if let Some(size) = cached_size {
                cell.cache_node_size(size);
            }
            cell.set_occupant(Some(node));
        }
        self.node_cells.insert(node, cell_id);

        host.place_node(node, cell_id, rect);
        host.reroute_connectors(node);
        host.table_modified(engine.group().id());
    }

    /// Detach `node` from its cell: restore the cached pre-group size,
    /// clear the occupancy relation on both sides and hand the node back
    /// to the top-level canvas.
    ///
    /// With `transform` the node is offset by [`UNGROUP_OFFSET`] to
    /// visualize the ungroup. No-op for ungrouped nodes.
    pub fn detach(
        &mut self,
        engine: &mut TableLayoutEngine,
        host: &mut dyn SceneHost,
        node: NodeId,
        transform: bool,
    ) {
        let Some(cell_id) = self.node_cells.remove(&node) else {
            return;
        };
        if let Some(cell) = engine.cell_mut(cell_id) {
            if let Some(size) = cell.take_cached_node_size() {
                host.set_node_size(node, size);
            }
            cell.set_occupant(None);
        }
        host.reparent_to_canvas(node);
        if transform {
            host.offset_node(node, UNGROUP_OFFSET);
        }
        host.raise_above_group(node);
    }

    /// Rebuild the back-references from cell occupancy.
    ///
    /// Call after restoring a persisted layout, where occupants come
    /// from the snapshot instead of attach operations.
    pub fn rebind(&mut self, engine: &TableLayoutEngine) {
        self.node_cells.clear();
        for cell in engine.cells() {
            if let Some(node) = cell.occupant() {
                self.node_cells.insert(node, cell.id());
            }
        }
    }
}
