//! # figure-rects
//!
//! Decompose ASCII box-drawing figures into their elementary rectangles.
//!
//! A figure is a multi-line string drawn with `+`, `-`, `|`, and spaces,
//! representing one or more axis-aligned rectangles sharing edges. The
//! crate recovers the original rectangles the figure is made of and renders
//! each one as its own ASCII block:
//!
//! ```text
//! +-------+
//! |       |          +-------+   +-------+
//! +-------+    =>    |       | , |       |
//! |       |          +-------+   +-------+
//! +-------+
//! ```
//!
//! ## Pipeline
//!
//! The decomposition runs as a linear pipeline of independently testable
//! stages connected by plain data values:
//!
//! ```text
//! text → Grid → Regions (flood fill) → BoundingBox (validated) → RenderedRectangle
//! ```
//!
//! Figures that are not a clean partition of closed rectangles (ragged
//! rows, foreign characters, unenclosed blank runs, gaps in a border,
//! L-shaped interiors) fail deterministically with a [`FigureError`]
//! naming the offending coordinate.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Cell, Coord, BoundingBox, FigureError)
//! - [`grid`] - Figure parsing and immutable 2D storage
//! - [`regions`] - Blank-region discovery via iterative flood fill
//! - [`bounds`] - Border-ring resolution and closure validation
//! - [`render`] - Rectangle rendering back to ASCII lines
//! - [`decompose`] - The pipeline driver and lazy rectangle iterator

pub mod bounds;
pub mod decompose;
pub mod grid;
pub mod regions;
pub mod render;
pub mod types;

// Re-export the public surface
pub use types::{BoundingBox, Cell, Coord, FigureError};

pub use bounds::resolve_bounds;
pub use decompose::{Rectangles, decompose, decompose_all};
pub use grid::Grid;
pub use regions::{Region, find_regions};
pub use render::{RenderedRectangle, render};
