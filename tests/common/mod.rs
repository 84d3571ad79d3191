//! Common test utilities: a recording mock scene host and engine
//! fixtures shared by the integration tests.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use std::collections::HashMap;

use tablegrid::{
    CellId, GroupId, NodeId, Orientation, Point, Rect, SceneHost, Size, TableGroup,
    TableLayoutEngine,
};

/// Everything the engine/router asked the host to do, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    RealizeBorder(Orientation, usize),
    RealizeCell(CellId),
    PlaceNode(NodeId, CellId, Rect),
    SetNodeSize(NodeId, Size),
    ReparentToCanvas(NodeId),
    OffsetNode(NodeId, Point),
    RaiseAboveGroup(NodeId),
    RerouteConnectors(NodeId),
    TableModified(GroupId),
}

/// Recording scene host with a configurable container and node state.
pub struct MockHost {
    pub ready: bool,
    pub container: Option<Size>,
    pub drop_positions: HashMap<NodeId, Point>,
    pub node_sizes: HashMap<NodeId, Size>,
    pub events: Vec<HostEvent>,
}

impl MockHost {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            ready: true,
            container: Some(Size::new(width, height)),
            drop_positions: HashMap::new(),
            node_sizes: HashMap::new(),
            events: Vec::new(),
        }
    }

    pub fn without_container() -> Self {
        Self {
            ready: true,
            container: None,
            drop_positions: HashMap::new(),
            node_sizes: HashMap::new(),
            events: Vec::new(),
        }
    }

    pub fn not_ready(width: f32, height: f32) -> Self {
        let mut host = Self::new(width, height);
        host.ready = false;
        host
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.container = Some(Size::new(width, height));
    }

    pub fn set_drop_position(&mut self, node: NodeId, x: f32, y: f32) {
        self.drop_positions.insert(node, Point::new(x, y));
    }

    pub fn set_node_size(&mut self, node: NodeId, width: f32, height: f32) {
        self.node_sizes.insert(node, Size::new(width, height));
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }

    pub fn modified_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, HostEvent::TableModified(_)))
            .count()
    }
}

impl SceneHost for MockHost {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn container_size(&self) -> Option<Size> {
        self.container
    }

    fn realize_border(&mut self, orientation: Orientation, index: usize) {
        self.events.push(HostEvent::RealizeBorder(orientation, index));
    }

    fn realize_cell(&mut self, cell: CellId) {
        self.events.push(HostEvent::RealizeCell(cell));
    }

    fn node_drop_position(&self, node: NodeId) -> Option<Point> {
        self.drop_positions.get(&node).copied()
    }

    fn node_size(&self, node: NodeId) -> Option<Size> {
        self.node_sizes.get(&node).copied()
    }

    fn set_node_size(&mut self, node: NodeId, size: Size) {
        self.events.push(HostEvent::SetNodeSize(node, size));
    }

    fn place_node(&mut self, node: NodeId, cell: CellId, rect: Rect) {
        self.events.push(HostEvent::PlaceNode(node, cell, rect));
    }

    fn reparent_to_canvas(&mut self, node: NodeId) {
        self.events.push(HostEvent::ReparentToCanvas(node));
    }

    fn offset_node(&mut self, node: NodeId, delta: Point) {
        self.events.push(HostEvent::OffsetNode(node, delta));
    }

    fn raise_above_group(&mut self, node: NodeId) {
        self.events.push(HostEvent::RaiseAboveGroup(node));
    }

    fn reroute_connectors(&mut self, node: NodeId) {
        self.events.push(HostEvent::RerouteConnectors(node));
    }

    fn table_modified(&mut self, group: GroupId) {
        self.events.push(HostEvent::TableModified(group));
    }
}

/// Engine with a built grid but no layout pass yet.
pub fn engine(rows: u32, cols: u32, host: &mut MockHost) -> TableLayoutEngine {
    let mut engine = TableLayoutEngine::new(TableGroup::new(GroupId(7), rows, cols));
    engine.initialize(rows, cols, host);
    engine
}

/// Engine with a built grid and an initial full layout pass.
pub fn engine_with_layout(rows: u32, cols: u32, host: &mut MockHost) -> TableLayoutEngine {
    let mut engine = engine(rows, cols, host);
    engine.initialize_table_layout(host);
    engine
}

/// All border and cell rects, in a stable order, for geometry
/// comparisons.
pub fn geometry_of(engine: &TableLayoutEngine) -> Vec<Rect> {
    engine
        .vertical_borders()
        .iter()
        .map(|b| b.rect())
        .chain(engine.horizontal_borders().iter().map(|b| b.rect()))
        .chain(engine.cells().map(|c| c.rect()))
        .collect()
}
