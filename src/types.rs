//! Core types for figure-rects.
//!
//! These types define the foundation that everything builds on.
//! They flow through the decomposition pipeline and define what the
//! renderer understands.

use std::fmt;

use thiserror::Error;

// =============================================================================
// Cell
// =============================================================================

/// One cell of a parsed figure.
///
/// The figure alphabet is exactly four characters; anything else is rejected
/// at parse time, so the rest of the pipeline never sees an unknown cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// `+`, a corner or junction point.
    Corner,
    /// `-`, a horizontal border segment.
    HorizontalEdge,
    /// `|`, a vertical border segment.
    VerticalEdge,
    /// ` `, interior background.
    Blank,
}

impl Cell {
    /// Classify a character, or `None` if it is outside the figure alphabet.
    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Corner),
            '-' => Some(Self::HorizontalEdge),
            '|' => Some(Self::VerticalEdge),
            ' ' => Some(Self::Blank),
            _ => None,
        }
    }

    /// The character this cell renders as.
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Self::Corner => '+',
            Self::HorizontalEdge => '-',
            Self::VerticalEdge => '|',
            Self::Blank => ' ',
        }
    }

    /// Check if this cell is background.
    #[inline]
    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }
}

// =============================================================================
// Coord
// =============================================================================

/// A grid position: row 0 is the topmost line, col 0 the leftmost column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, col {}", self.row, self.col)
    }
}

// =============================================================================
// BoundingBox
// =============================================================================

/// The border ring of one elementary rectangle, corners inclusive.
///
/// `top..=bottom` × `left..=right` covers the drawn `+ - |` frame; the blank
/// interior is the strictly-inside range. Produced only by bounds resolution,
/// which guarantees the ring is fully drawn and the interior is uniformly
/// blank, so downstream code can rely on both without re-checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

impl BoundingBox {
    /// Width of the blank interior (excluding the two `|` columns).
    #[inline]
    pub const fn interior_width(&self) -> usize {
        self.right - self.left - 1
    }

    /// Height of the blank interior (excluding the two border rows).
    #[inline]
    pub const fn interior_height(&self) -> usize {
        self.bottom - self.top - 1
    }
}

// =============================================================================
// Errors
// =============================================================================

/// Everything that can go wrong while decomposing a figure.
///
/// All failures are deterministic properties of the input text: re-running
/// the same figure produces the same error at the same coordinate. The
/// pipeline never recovers internally; the first error aborts the whole
/// decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FigureError {
    /// A row's length differs from the first row's, or the figure is empty.
    #[error("row {row} is {found} columns wide, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    /// A character outside `{+, -, |, space}` appeared in the figure.
    #[error("unsupported character {ch:?} at {at}")]
    BadCharacter { ch: char, at: Coord },

    /// A blank region reaches the outer edge of the figure, so no enclosing
    /// border ring exists.
    #[error("blank region at {at} touches the figure edge and is not enclosed")]
    UnenclosedRegion { at: Coord },

    /// A cell on a candidate border ring is not the drawn character the ring
    /// requires at that position.
    #[error("border is not closed at {at}: found {found:?}")]
    UnclosedBorder { at: Coord, found: Cell },

    /// A cell strictly inside a candidate box is not blank interior of the
    /// same region, i.e. the region is not itself a rectangle.
    #[error("interior is not rectangular at {at}")]
    IrregularRegion { at: Coord },
}

// =============================================================================
// Tests
// =============================================================================
