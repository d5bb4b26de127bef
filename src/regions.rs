//! Interior region discovery via flood fill.
//!
//! A region is a maximal 4-connected run of blank cells. Regions partition
//! the blank cells of the grid: every blank cell belongs to exactly one.
//! Discovery order (row-major order of each region's first cell) fixes the
//! deterministic order in which rectangles are later emitted.
//!
//! The fill is iterative over an explicit stack. Recursion depth would be
//! proportional to region area, which overflows on large figures.

use log::debug;

use crate::grid::Grid;
use crate::types::Coord;

/// One maximal 4-connected set of blank coordinates, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    cells: Vec<Coord>,
}

impl Region {
    /// Coordinates of the region, in the order the fill visited them.
    #[inline]
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Number of blank cells in the region.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Find every blank region of the grid, in row-major discovery order.
///
/// A grid with no blank cells yields an empty vec. Blank cells on the
/// grid's outer edge are collected like any other; they fail later, at
/// bounds resolution, with a precise coordinate.
pub fn find_regions(grid: &Grid) -> Vec<Region> {
    let width = grid.width();
    let mut visited = vec![false; width * grid.height()];
    let mut regions = Vec::new();

    for (start, cell) in grid.iter() {
        if !cell.is_blank() || visited[start.row * width + start.col] {
            continue;
        }
        regions.push(flood_fill(grid, start, &mut visited));
    }

    debug!("discovered {} blank region(s)", regions.len());
    regions
}

/// Collect the maximal blank region containing `start`.
///
/// Cells are marked visited when pushed, not when popped, so no cell is
/// ever enqueued twice and the fill terminates after at most
/// `width * height` pushes.
fn flood_fill(grid: &Grid, start: Coord, visited: &mut [bool]) -> Region {
    let width = grid.width();
    let mut cells = Vec::new();
    let mut stack = vec![start];
    visited[start.row * width + start.col] = true;

    while let Some(at) = stack.pop() {
        cells.push(at);

        for (row, col) in neighbors(at) {
            let Some(cell) = grid.get(row, col) else {
                continue;
            };
            if cell.is_blank() && !visited[row * width + col] {
                visited[row * width + col] = true;
                stack.push(Coord::new(row, col));
            }
        }
    }

    Region { cells }
}

/// The 4 orthogonal neighbors, with underflow clipped via wrapping to an
/// out-of-bounds value the grid lookup rejects.
fn neighbors(at: Coord) -> [(usize, usize); 4] {
    [
        (at.row.wrapping_sub(1), at.col),
        (at.row + 1, at.col),
        (at.row, at.col.wrapping_sub(1)),
        (at.row, at.col + 1),
    ]
}

// =============================================================================
// Tests
// =============================================================================
