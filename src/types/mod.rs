//! Core entities of the table grid.

mod border;
mod cell;
mod grid;

pub use border::{Border, Orientation, BORDER_THICKNESS};
pub use cell::{Cell, CellId, GroupId, NodeId};
pub use grid::GridIndex;
