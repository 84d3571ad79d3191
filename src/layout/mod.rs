//! Table layout engine and structural mutation.
//!
//! This module handles:
//! - Building the border/cell collections and their adjacency links
//! - The uniform full layout pass that seeds normalized border offsets
//! - The cheap resize pass that re-projects offsets to pixels
//! - Appending rows and columns without rebuilding the grid

mod engine;
mod mutation;

pub use engine::{LayoutContext, TableGroup, TableLayoutEngine};
