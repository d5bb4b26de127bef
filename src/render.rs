//! Rectangle rendering: from a validated bounding box back to ASCII lines.
//!
//! The interior is copied from the grid verbatim (blanks are part of the
//! rectangle and are never trimmed). The border ring is synthesized rather
//! than sliced: a wall shared with an abutting rectangle carries `+`
//! junction characters that belong to the neighbor, and the rectangle's own
//! border shows a plain `-`/`|` there. A free-standing rectangle renders
//! identically either way.

use std::fmt;

use crate::grid::Grid;
use crate::types::BoundingBox;

/// The ASCII lines of one elementary rectangle, border included.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RenderedRectangle {
    lines: Vec<String>,
}

impl RenderedRectangle {
    /// The rectangle's lines, top to bottom, without separators.
    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Serialize to text with every line newline-terminated, matching the
    /// input figure's row convention.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.lines.len() * (self.lines[0].len() + 1));
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}

impl fmt::Display for RenderedRectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Render the rectangle delimited by a validated bounding box.
pub fn render(grid: &Grid, bbox: BoundingBox) -> RenderedRectangle {
    let width = bbox.interior_width();
    let mut lines = Vec::with_capacity(bbox.interior_height() + 2);

    let horizontal = format!("+{}+", "-".repeat(width));
    lines.push(horizontal.clone());

    for row in bbox.top + 1..bbox.bottom {
        let mut line = String::with_capacity(width + 2);
        line.push('|');
        for col in bbox.left + 1..bbox.right {
            // Bounds resolution proved this blank, but copy rather than
            // assume so the renderer stays a pure slicing stage.
            line.push(grid.get(row, col).map_or(' ', |cell| cell.as_char()));
        }
        line.push('|');
        lines.push(line);
    }

    lines.push(horizontal);
    RenderedRectangle { lines }
}

// =============================================================================
// Tests
// =============================================================================
