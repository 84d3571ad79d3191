//! Cell entities and the opaque handles shared with the hosting scene.

use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, Size};

/// Stable handle of a cell, allocated by the layout engine.
///
/// Handles survive row/column remaps, so external components (drop
/// router, hosted nodes) can keep them as weak references and resolve
/// them through the engine. A handle from one engine is meaningless in
/// another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellId(pub(crate) u32);

/// Identity of a graph node, owned by the hosting editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u64);

/// Identity of the owning table group, carried by outbound
/// table-modified notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupId(pub u64);

/// One grid slot; holds at most one hosted node.
///
/// Cell geometry is derived, not authoritative: the bounding borders
/// (or the container edges for the first/last row/column) write it on
/// every layout pass.
#[derive(Debug, Clone)]
pub struct Cell {
    id: CellId,
    rect: Rect,
    occupant: Option<NodeId>,
    /// Node size captured when the node was grouped, restored on ungroup.
    cached_node_size: Option<Size>,
}

impl Cell {
    pub(crate) fn new(id: CellId) -> Self {
        Self {
            id,
            rect: Rect::default(),
            occupant: None,
            cached_node_size: None,
        }
    }

    /// Stable handle of this cell
    pub fn id(&self) -> CellId {
        self.id
    }

    /// Current bounds in container-local coordinates
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub(crate) fn rect_mut(&mut self) -> &mut Rect {
        &mut self.rect
    }

    /// Node currently hosted by this cell, if any
    pub fn occupant(&self) -> Option<NodeId> {
        self.occupant
    }

    /// True when a node is grouped into this cell
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    pub(crate) fn set_occupant(&mut self, node: Option<NodeId>) {
        self.occupant = node;
    }

    pub(crate) fn cache_node_size(&mut self, size: Size) {
        self.cached_node_size = Some(size);
    }

    pub(crate) fn take_cached_node_size(&mut self) -> Option<Size> {
        self.cached_node_size.take()
    }
}
