use crate::puzzle::grid::{GRID_COLS, GRID_ROWS};

/// A single grid cell address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Cell { row, col }
    }
}

/// Expand a drag's start/end pair into the ordered run of cells it denotes,
/// inclusive of both endpoints.
///
/// Exact horizontal, vertical and 45° drags walk their true line. Anything
/// else snaps to the dominant axis (rows win ties) and the lesser-axis drift
/// is discarded, so a free-form drag always reads as a straight run. Cells
/// outside the grid are silently dropped, which keeps the result clipped to
/// at most one full row, column or diagonal.
pub fn line(start: Cell, end: Cell) -> Vec<Cell> {
    let d_row = end.row as i32 - start.row as i32;
    let d_col = end.col as i32 - start.col as i32;
    if d_row == 0 && d_col == 0 {
        return vec![start];
    }

    let (step_row, step_col, span) = if d_row == 0 {
        (0, d_col.signum(), d_col.abs())
    } else if d_col == 0 {
        (d_row.signum(), 0, d_row.abs())
    } else if d_row.abs() == d_col.abs() {
        (d_row.signum(), d_col.signum(), d_row.abs())
    } else if d_row.abs() >= d_col.abs() {
        (d_row.signum(), 0, d_row.abs())
    } else {
        (0, d_col.signum(), d_col.abs())
    };

    let mut cells = Vec::with_capacity(span as usize + 1);
    for i in 0..=span {
        let row = start.row as i32 + i * step_row;
        let col = start.col as i32 + i * step_col;
        if (0..GRID_ROWS as i32).contains(&row) && (0..GRID_COLS as i32).contains(&col) {
            cells.push(Cell::new(row as usize, col as usize));
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(pairs: &[(usize, usize)]) -> Vec<Cell> {
        pairs.iter().map(|&(r, c)| Cell::new(r, c)).collect()
    }

    #[test]
    fn single_cell() {
        assert_eq!(line(Cell::new(2, 2), Cell::new(2, 2)), cells(&[(2, 2)]));
    }

    #[test]
    fn horizontal_run() {
        assert_eq!(
            line(Cell::new(0, 0), Cell::new(0, 3)),
            cells(&[(0, 0), (0, 1), (0, 2), (0, 3)])
        );
    }

    #[test]
    fn horizontal_reversed() {
        assert_eq!(
            line(Cell::new(4, 5), Cell::new(4, 2)),
            cells(&[(4, 5), (4, 4), (4, 3), (4, 2)])
        );
    }

    #[test]
    fn vertical_run() {
        assert_eq!(
            line(Cell::new(1, 7), Cell::new(4, 7)),
            cells(&[(1, 7), (2, 7), (3, 7), (4, 7)])
        );
    }

    #[test]
    fn diagonal_run() {
        assert_eq!(
            line(Cell::new(0, 0), Cell::new(3, 3)),
            cells(&[(0, 0), (1, 1), (2, 2), (3, 3)])
        );
    }

    #[test]
    fn anti_diagonal_run() {
        assert_eq!(
            line(Cell::new(3, 0), Cell::new(0, 3)),
            cells(&[(3, 0), (2, 1), (1, 2), (0, 3)])
        );
    }

    #[test]
    fn off_axis_snaps_to_columns() {
        // |d_col| > |d_row|: the single row of drift is discarded.
        assert_eq!(
            line(Cell::new(0, 0), Cell::new(1, 5)),
            cells(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5)])
        );
    }

    #[test]
    fn off_axis_snaps_to_rows_on_tie_break() {
        // |d_row| >= |d_col|: rows dominate, column drift is discarded.
        assert_eq!(
            line(Cell::new(0, 0), Cell::new(5, 2)),
            cells(&[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)])
        );
    }

    #[test]
    fn clips_to_grid_bounds() {
        // An endpoint past the edge yields a clipped run, not an error.
        assert_eq!(
            line(Cell::new(0, 6), Cell::new(0, 12)),
            cells(&[(0, 6), (0, 7), (0, 8), (0, 9)])
        );
    }
}
