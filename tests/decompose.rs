//! End-to-end decomposition scenarios and properties.

use std::collections::HashSet;

use figure_rects::{
    Coord, FigureError, Grid, decompose, decompose_all, find_regions, resolve_bounds,
};

/// The documented 8-line figure: one big rectangle over two smaller ones.
const BIG_OVER_TWO: &str = "\
+------------+
|            |
|            |
|            |
+------+-----+
|      |     |
|      |     |
+------+-----+
";

fn texts(figure: &str) -> Vec<String> {
    decompose_all(figure)
        .unwrap()
        .iter()
        .map(|rect| rect.to_text())
        .collect()
}

#[test]
fn single_rectangle_round_trips() {
    let figure = "+--+\n|  |\n+--+\n";
    assert_eq!(texts(figure), vec![figure.to_string()]);
}

#[test]
fn big_over_two_yields_three_blocks() {
    let mut found = texts(BIG_OVER_TWO);
    found.sort();

    let big = "\
+------------+
|            |
|            |
|            |
+------------+
";
    let mut expected = vec![
        big.to_string(),
        "+------+\n|      |\n|      |\n+------+\n".to_string(),
        "+-----+\n|     |\n|     |\n+-----+\n".to_string(),
    ];
    expected.sort();

    assert_eq!(found, expected);
}

#[test]
fn ragged_row_is_rejected_with_no_output() {
    let figure = "+--+\n|  |\n+-+\n";
    assert!(matches!(
        decompose(figure),
        Err(FigureError::RaggedRow { row: 2, .. })
    ));
}

#[test]
fn padded_figure_is_not_enclosed() {
    // Exterior blanks around the top box touch the figure edge.
    let figure = "   +-----+     
   |     |     
+--+-----+----+
|             |
|             |
+-------------+
";
    let err = decompose_all(figure).unwrap_err();
    assert!(matches!(err, FigureError::UnenclosedRegion { .. }));
}

#[test]
fn zero_height_interior_yields_nothing() {
    assert_eq!(texts("+--+\n+--+\n"), Vec::<String>::new());
}

#[test]
fn three_by_two_lattice() {
    let figure = "\
+---+-+--+
|   | |  |
+---+-+--+
|   | |  |
|   | |  |
+---+-+--+
";
    let rects = decompose_all(figure).unwrap();
    assert_eq!(rects.len(), 6);
    for rect in &rects {
        // Every block is a closed free-standing rectangle of its own.
        let lines = rect.lines();
        let width = lines[0].len();
        assert!(lines.iter().all(|line| line.len() == width));
        assert_eq!(lines[0], lines[lines.len() - 1]);
        assert!(lines[0].starts_with('+') && lines[0].ends_with('+'));
    }
}

// =============================================================================
// Properties
// =============================================================================

/// Union of rendered interiors = set of blank cells; nothing doubled,
/// nothing missed.
#[test]
fn interiors_cover_blanks_exactly() {
    let grid = Grid::parse(BIG_OVER_TWO).unwrap();

    let mut covered = HashSet::new();
    for region in find_regions(&grid) {
        let bbox = resolve_bounds(&grid, &region).unwrap();
        for row in bbox.top + 1..bbox.bottom {
            for col in bbox.left + 1..bbox.right {
                assert!(
                    covered.insert(Coord::new(row, col)),
                    "cell covered twice: row {row}, col {col}"
                );
            }
        }
    }

    let blanks: HashSet<Coord> = grid
        .iter()
        .filter(|(_, cell)| cell.is_blank())
        .map(|(at, _)| at)
        .collect();
    assert_eq!(covered, blanks);
}

/// Every rendered rectangle reparses as exactly one rectangle: itself.
#[test]
fn rendered_rectangles_are_closed_and_minimal() {
    for text in texts(BIG_OVER_TWO) {
        let again = texts(&text);
        assert_eq!(again, vec![text]);
    }
}

/// Same input, same multiset of rectangle strings, every run.
#[test]
fn decomposition_is_deterministic() {
    let first = texts(BIG_OVER_TWO);
    for _ in 0..3 {
        assert_eq!(texts(BIG_OVER_TWO), first);
    }
}

/// The lazy sequence stops at the first invariant violation and stays
/// stopped.
#[test]
fn sequence_fuses_on_first_failure() {
    let figure = "\
+--+
|  |
+--+
|  |
";
    let mut rects = decompose(figure).unwrap();
    assert!(rects.next().unwrap().is_ok());
    assert!(rects.next().unwrap().is_err());
    assert!(rects.next().is_none());
}
