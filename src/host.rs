//! Hosting-environment contract.
//!
//! The engine and drop router never talk to a concrete scene graph; they
//! only see this trait, injected by the embedding editor. The host
//! provides the container extent, realizes visual entities for borders
//! and cells on demand, and applies node-side effects (reparenting,
//! geometry, connector re-routing).

use crate::geometry::{Point, Rect, Size};
use crate::types::{CellId, GroupId, NodeId, Orientation};

/// Facade over the hosting scene graph.
///
/// Only a handful of methods are required; notification hooks default to
/// no-ops so headless hosts (tests, persistence tooling) stay small.
pub trait SceneHost {
    /// True once the host can instantiate visual entities.
    ///
    /// Grid initialization is refused while this is false.
    fn is_ready(&self) -> bool {
        true
    }

    /// Extent of the table container, if one is configured.
    fn container_size(&self) -> Option<Size>;

    /// A border entity was created at `index` in its orientation chain;
    /// the host may instantiate and parent its visual now.
    fn realize_border(&mut self, orientation: Orientation, index: usize) {
        let _ = (orientation, index);
    }

    /// A cell entity was created.
    fn realize_cell(&mut self, cell: CellId) {
        let _ = cell;
    }

    /// Drop position of a node, translated to container-local
    /// coordinates. `None` when the node has no sampled position.
    fn node_drop_position(&self, node: NodeId) -> Option<Point>;

    /// Current node size, sampled right before grouping so it can be
    /// restored on ungroup.
    fn node_size(&self, node: NodeId) -> Option<Size> {
        let _ = node;
        None
    }

    /// Restore a node size cached before grouping.
    fn set_node_size(&mut self, node: NodeId, size: Size) {
        let _ = (node, size);
    }

    /// Fit a grouped node into its cell's bounds.
    fn place_node(&mut self, node: NodeId, cell: CellId, rect: Rect);

    /// Reparent an ungrouped node back to the top-level canvas.
    fn reparent_to_canvas(&mut self, node: NodeId);

    /// Nudge an ungrouped node by `delta` to visually signal the
    /// separation from its former cell.
    fn offset_node(&mut self, node: NodeId, delta: Point) {
        let _ = (node, delta);
    }

    /// Raise the node's draw order above the owning group.
    fn raise_above_group(&mut self, node: NodeId) {
        let _ = node;
    }

    /// Connectors adjacent to the node must be re-routed.
    fn reroute_connectors(&mut self, node: NodeId) {
        let _ = node;
    }

    /// The table layout or grouping changed; external observers
    /// (persistence, connector routing) react to this.
    fn table_modified(&mut self, group: GroupId) {
        let _ = group;
    }
}
