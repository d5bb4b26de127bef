//! Figure grid: parsing and immutable 2D storage.
//!
//! The Grid is a rectangular matrix of Cells parsed from the input text.
//! All later stages read it; nothing ever writes it after construction.
//!
//! # Design Decisions
//!
//! - **Flat storage**: `Vec<Cell>` with row-major indexing for cache
//!   efficiency (`index = row * width + col`).
//! - **Validate once**: ragged rows and foreign characters are rejected
//!   here, so downstream code never handles a malformed matrix.

use log::debug;

use crate::types::{Cell, Coord, FigureError};

/// An immutable rectangular matrix of figure cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Parse a figure from text.
    ///
    /// Rows are separated by `\n`; a single trailing empty row produced by a
    /// final newline is discarded. Every row must be exactly as long as the
    /// first, and every character must be one of `+ - |` or space.
    pub fn parse(figure: &str) -> Result<Self, FigureError> {
        let mut rows: Vec<&str> = figure.split('\n').collect();
        if rows.last() == Some(&"") {
            rows.pop();
        }

        // An empty figure has no row to take a width from; report it the
        // same way as a ragged row 0.
        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 {
            return Err(FigureError::RaggedRow {
                row: 0,
                found: 0,
                expected: 1,
            });
        }

        let mut cells = Vec::with_capacity(rows.len() * width);
        for (row, line) in rows.iter().enumerate() {
            let mut count = 0;
            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::from_char(ch).ok_or(FigureError::BadCharacter {
                    ch,
                    at: Coord::new(row, col),
                })?;
                cells.push(cell);
                count += 1;
            }
            if count != width {
                return Err(FigureError::RaggedRow {
                    row,
                    found: count,
                    expected: width,
                });
            }
        }

        let height = rows.len();
        debug!("parsed figure: {width}x{height} cells");

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Grid width in columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Convert (row, col) to flat index.
    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Check if a coordinate is in bounds.
    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.height && col < self.width
    }

    /// Get a cell (returns None if out of bounds).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if self.in_bounds(row, col) {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Get a cell that the caller has already bounds-checked.
    ///
    /// Panics in debug builds if the coordinate is outside the grid.
    #[inline]
    pub fn cell(&self, at: Coord) -> Cell {
        debug_assert!(self.in_bounds(at.row, at.col));
        self.cells[self.index(at.row, at.col)]
    }

    /// Iterate over cells with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let row = i / self.width;
            let col = i % self.width;
            (Coord::new(row, col), *cell)
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
