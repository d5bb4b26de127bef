//! Bounds resolution: from a blank region to a validated border ring.
//!
//! This stage decides whether a region really is the interior of one
//! elementary rectangle. Three things can disqualify it:
//!
//! 1. The region touches the figure's outer edge: there is no room for a
//!    border ring around it.
//! 2. The ring exists but is not fully drawn (`+` at the four corners,
//!    `-`/`+` along the horizontal runs, `|`/`+` along the vertical runs).
//! 3. The ring is drawn but the inside is not uniformly this region's
//!    blanks, i.e. an L-shaped region whose bounding box overshoots into
//!    neighboring material.
//!
//! Check 3 is what distinguishes a true elementary rectangle from an
//! accidental bounding-box overshoot.

use std::collections::HashSet;

use log::trace;

use crate::grid::Grid;
use crate::regions::Region;
use crate::types::{BoundingBox, Cell, Coord, FigureError};

/// Compute and validate the border ring around one blank region.
pub fn resolve_bounds(grid: &Grid, region: &Region) -> Result<BoundingBox, FigureError> {
    let (tight_top, tight_left, tight_bottom, tight_right) = tight_box(region);

    // The ring lives one cell beyond the interior on every side. A tight
    // box already flush with the grid edge means the region is unenclosed.
    if tight_top == 0
        || tight_left == 0
        || tight_bottom + 1 == grid.height()
        || tight_right + 1 == grid.width()
    {
        return Err(FigureError::UnenclosedRegion {
            at: edge_cell(region, grid, tight_top, tight_left, tight_bottom, tight_right),
        });
    }

    let bbox = BoundingBox {
        top: tight_top - 1,
        left: tight_left - 1,
        bottom: tight_bottom + 1,
        right: tight_right + 1,
    };

    validate_perimeter(grid, bbox)?;
    validate_interior(grid, region, bbox)?;

    trace!(
        "resolved rectangle: rows {}..={}, cols {}..={}",
        bbox.top, bbox.bottom, bbox.left, bbox.right
    );
    Ok(bbox)
}

/// Tightest `(top, left, bottom, right)` box containing the region.
fn tight_box(region: &Region) -> (usize, usize, usize, usize) {
    let mut top = usize::MAX;
    let mut left = usize::MAX;
    let mut bottom = 0;
    let mut right = 0;
    for at in region.cells() {
        top = top.min(at.row);
        left = left.min(at.col);
        bottom = bottom.max(at.row);
        right = right.max(at.col);
    }
    (top, left, bottom, right)
}

/// First region cell sitting on whichever grid edge the region touches.
fn edge_cell(
    region: &Region,
    grid: &Grid,
    top: usize,
    left: usize,
    bottom: usize,
    right: usize,
) -> Coord {
    let on_edge = |at: &&Coord| {
        (top == 0 && at.row == 0)
            || (left == 0 && at.col == 0)
            || (bottom + 1 == grid.height() && at.row == bottom)
            || (right + 1 == grid.width() && at.col == right)
    };
    // At least one cell sits on the extreme row/col, so find always hits.
    region
        .cells()
        .iter()
        .find(on_edge)
        .copied()
        .unwrap_or(region.cells()[0])
}

/// Check the border ring: corners at the four extremal points, horizontal
/// runs of `-`/`+`, vertical runs of `|`/`+`.
fn validate_perimeter(grid: &Grid, bbox: BoundingBox) -> Result<(), FigureError> {
    let expect = |at: Coord, ok: fn(Cell) -> bool| -> Result<(), FigureError> {
        let found = grid.cell(at);
        if ok(found) {
            Ok(())
        } else {
            Err(FigureError::UnclosedBorder { at, found })
        }
    };
    let corner = |cell: Cell| matches!(cell, Cell::Corner);
    let horizontal = |cell: Cell| matches!(cell, Cell::HorizontalEdge | Cell::Corner);
    let vertical = |cell: Cell| matches!(cell, Cell::VerticalEdge | Cell::Corner);

    for row in [bbox.top, bbox.bottom] {
        expect(Coord::new(row, bbox.left), corner)?;
        for col in bbox.left + 1..bbox.right {
            expect(Coord::new(row, col), horizontal)?;
        }
        expect(Coord::new(row, bbox.right), corner)?;
    }
    for col in [bbox.left, bbox.right] {
        for row in bbox.top + 1..bbox.bottom {
            expect(Coord::new(row, col), vertical)?;
        }
    }
    Ok(())
}

/// Check that everything strictly inside the ring is this region's blanks.
fn validate_interior(grid: &Grid, region: &Region, bbox: BoundingBox) -> Result<(), FigureError> {
    let members: HashSet<Coord> = region.cells().iter().copied().collect();

    for row in bbox.top + 1..bbox.bottom {
        for col in bbox.left + 1..bbox.right {
            let at = Coord::new(row, col);
            if !grid.cell(at).is_blank() || !members.contains(&at) {
                return Err(FigureError::IrregularRegion { at });
            }
        }
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
