//! Decomposition pipeline: parse → find regions → resolve → render.
//!
//! [`decompose`] runs the eager stages (parsing and region discovery) up
//! front, so malformed text fails before any rectangle is produced, and
//! hands back a lazy [`Rectangles`] iterator that resolves and renders one
//! region per step. The iterator is fused on failure: after yielding an
//! `Err` it yields nothing more, because a single broken invariant means
//! the figure is not a clean partition and no further output can be
//! trusted.

use std::iter::FusedIterator;

use log::debug;

use crate::bounds::resolve_bounds;
use crate::grid::Grid;
use crate::regions::{Region, find_regions};
use crate::render::{RenderedRectangle, render};
use crate::types::FigureError;

/// Decompose a figure into its elementary rectangles.
///
/// Returns an error immediately if the text is not a well-formed figure.
/// Otherwise returns a lazy sequence of rectangles in region-discovery
/// order; the order is deterministic but callers must not attach meaning
/// to it. Each item is consumed once; materialize into a collection for
/// repeated access.
///
/// # Example
///
/// ```
/// use figure_rects::decompose;
///
/// let figure = "+--+--+\n|  |  |\n+--+--+\n";
/// let rects: Result<Vec<_>, _> = decompose(figure)?.collect();
/// assert_eq!(rects?.len(), 2);
/// # Ok::<(), figure_rects::FigureError>(())
/// ```
pub fn decompose(figure: &str) -> Result<Rectangles, FigureError> {
    let grid = Grid::parse(figure)?;
    let regions = find_regions(&grid);
    debug!(
        "decomposing {}x{} figure with {} region(s)",
        grid.width(),
        grid.height(),
        regions.len()
    );
    Ok(Rectangles {
        grid,
        regions: regions.into_iter(),
        failed: false,
    })
}

/// Decompose a figure and materialize every rectangle, or return the first
/// error encountered.
pub fn decompose_all(figure: &str) -> Result<Vec<RenderedRectangle>, FigureError> {
    decompose(figure)?.collect()
}

/// Lazy sequence of rendered rectangles.
///
/// Yielded in region-discovery order. Fused: once an error has been
/// yielded, or the regions are exhausted, every further `next()` is `None`.
#[derive(Debug)]
pub struct Rectangles {
    grid: Grid,
    regions: std::vec::IntoIter<Region>,
    failed: bool,
}

impl Iterator for Rectangles {
    type Item = Result<RenderedRectangle, FigureError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let region = self.regions.next()?;
        match resolve_bounds(&self.grid, &region) {
            Ok(bbox) => Some(Ok(render(&self.grid, bbox))),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            // Any remaining region may fail and cut the sequence short.
            (0, Some(self.regions.len()))
        }
    }
}

impl FusedIterator for Rectangles {}

// =============================================================================
// Tests
// =============================================================================
