//! tablegrid - incremental table-grid layout for node-link diagram editors
//!
//! Computes and maintains the geometry of a table-structured grouping
//! container: a rectangular grid of resizable cells separated by
//! draggable borders, into which graph nodes can be dropped and grouped.
//!
//! - Border positions live in normalized (0..1) table-relative
//!   coordinates; absolute geometry is re-derived on every resize
//! - Rows and columns can be appended in place, preserving existing
//!   cell contents and neighbor links
//! - Drop routing hit-tests a container-local point against cell bounds
//! - The hosting scene graph stays behind the [`SceneHost`] trait;
//!   rendering and event plumbing are the embedder's business
//!
//! # Usage
//!
//! ```
//! use tablegrid::{
//!     CellId, GroupId, NodeId, Point, Rect, SceneHost, Size, TableGroup, TableLayoutEngine,
//! };
//!
//! struct Host {
//!     container: Size,
//! }
//!
//! impl SceneHost for Host {
//!     fn container_size(&self) -> Option<Size> {
//!         Some(self.container)
//!     }
//!     fn node_drop_position(&self, _node: NodeId) -> Option<Point> {
//!         None
//!     }
//!     fn place_node(&mut self, _node: NodeId, _cell: CellId, _rect: Rect) {}
//!     fn reparent_to_canvas(&mut self, _node: NodeId) {}
//! }
//!
//! let mut host = Host { container: Size::new(300.0, 200.0) };
//! let mut engine = TableLayoutEngine::new(TableGroup::new(GroupId(1), 2, 3));
//! engine.initialize(2, 3, &mut host);
//! engine.initialize_table_layout(&mut host);
//!
//! assert_eq!(engine.cells().count(), 6);
//! assert_eq!(engine.vertical_borders().len(), 2);
//! assert_eq!(engine.horizontal_borders().len(), 1);
//! ```

pub mod error;
pub mod geometry;
pub mod host;
pub mod layout;
pub mod persist;
pub mod router;
pub mod types;

pub use error::{Result, TableError};
pub use geometry::{Point, Rect, Size};
pub use host::SceneHost;
pub use layout::{LayoutContext, TableGroup, TableLayoutEngine};
pub use persist::TableSnapshot;
pub use router::{DropRouter, UNGROUP_OFFSET};
pub use types::{Border, Cell, CellId, GridIndex, GroupId, NodeId, Orientation, BORDER_THICKNESS};

/// Get the library version
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
