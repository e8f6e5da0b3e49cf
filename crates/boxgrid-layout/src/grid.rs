//! Sparse occupancy grid with first-fit placement.
//!
//! The grid is bounded in width and unbounded downward. Cells that have
//! never been touched are implicitly free, so a span may extend past the
//! allocated range. The grid is rebuilt from empty at the start of every
//! layout pass; within a pass, occupied cells are never cleared.

/// Boolean occupancy map keyed by linear cell index `row * columns + col`.
#[derive(Debug, Clone, Default)]
pub struct OccupancyGrid {
    cells: Vec<bool>,
}

impl OccupancyGrid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Addressable range: highest marked linear index + 1.
    ///
    /// This drives row aggregation, so an empty grid reports 0 and a grid
    /// whose last marked cell sits mid-row still counts that row.
    pub fn cell_len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the cell at `(x, y)` is occupied. Cells beyond the touched
    /// range are free.
    pub fn is_occupied(&self, columns: u32, x: u32, y: u32) -> bool {
        let idx = y as usize * columns as usize + x as usize;
        self.cells.get(idx).copied().unwrap_or(false)
    }

    /// Whether a `col_span x row_span` rectangle anchored at `(x, y)` fits:
    /// it must not overflow the row width and must not cover any occupied
    /// cell.
    pub fn has_empty_span(
        &self,
        columns: u32,
        x: u32,
        y: u32,
        col_span: u32,
        row_span: u32,
    ) -> bool {
        if x as u64 + col_span as u64 > columns as u64 {
            return false;
        }
        for r in 0..row_span {
            for c in 0..col_span {
                if self.is_occupied(columns, x + c, y + r) {
                    return false;
                }
            }
        }
        true
    }

    /// Mark every cell of the rectangle occupied, growing the addressable
    /// range as needed. A zero-area rectangle marks nothing.
    pub fn set_span(&mut self, columns: u32, x: u32, y: u32, col_span: u32, row_span: u32) {
        if col_span == 0 || row_span == 0 {
            return;
        }
        let last =
            (y + row_span - 1) as usize * columns as usize + (x + col_span - 1) as usize;
        if last >= self.cells.len() {
            self.cells.resize(last + 1, false);
        }
        for r in 0..row_span {
            for c in 0..col_span {
                self.cells[(y + r) as usize * columns as usize + (x + c) as usize] = true;
            }
        }
    }

    /// First-fit placement: scan linear indices `0, 1, 2, ...` in row-major
    /// order, claim the first cell whose full span is free, and return it.
    ///
    /// The policy is first-fit, not best-fit: a wide box can leave a gap
    /// that a later narrower box backfills, and a gap with no later narrow
    /// box simply stays empty. The caller must have clamped `col_span` to
    /// at most `columns`, or no candidate cell can ever fit.
    pub fn place(&mut self, columns: u32, col_span: u32, row_span: u32) -> (u32, u32) {
        debug_assert!(columns > 0);
        debug_assert!((1..=columns).contains(&col_span));
        debug_assert!(row_span >= 1);

        let mut i = 0u64;
        loop {
            let x = (i % columns as u64) as u32;
            let y = (i / columns as u64) as u32;
            if self.has_empty_span(columns, x, y, col_span, row_span) {
                self.set_span(columns, x, y, col_span, row_span);
                return (x, y);
            }
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_cells_are_free() {
        let grid = OccupancyGrid::new();
        assert!(!grid.is_occupied(3, 0, 0));
        assert!(!grid.is_occupied(3, 2, 100));
        assert!(grid.has_empty_span(3, 0, 50, 3, 4));
    }

    #[test]
    fn test_span_overflowing_row_width_never_fits() {
        let grid = OccupancyGrid::new();
        assert!(!grid.has_empty_span(3, 2, 0, 2, 1));
        assert!(!grid.has_empty_span(3, 0, 0, 4, 1));
    }

    #[test]
    fn test_set_span_grows_addressable_range() {
        let mut grid = OccupancyGrid::new();
        assert_eq!(grid.cell_len(), 0);
        grid.set_span(3, 1, 1, 2, 1);
        // Last marked cell is (2, 1) = linear index 5.
        assert_eq!(grid.cell_len(), 6);
        assert!(grid.is_occupied(3, 1, 1));
        assert!(grid.is_occupied(3, 2, 1));
        assert!(!grid.is_occupied(3, 0, 1));
    }

    #[test]
    fn test_zero_span_marks_nothing() {
        let mut grid = OccupancyGrid::new();
        grid.set_span(3, 0, 0, 0, 1);
        grid.set_span(3, 0, 0, 1, 0);
        assert_eq!(grid.cell_len(), 0);
    }

    #[test]
    fn test_first_fit_scan_order() {
        let mut grid = OccupancyGrid::new();
        assert_eq!(grid.place(3, 1, 1), (0, 0));
        assert_eq!(grid.place(3, 2, 1), (1, 0));
        // Row 0 is now full; the next unit box starts row 1.
        assert_eq!(grid.place(3, 1, 1), (0, 1));
    }

    #[test]
    fn test_wide_box_skips_to_next_row() {
        let mut grid = OccupancyGrid::new();
        assert_eq!(grid.place(2, 1, 1), (0, 0));
        // A two-wide box cannot start at (1, 0) without overflowing, so it
        // drops to the next row, leaving (1, 0) open.
        assert_eq!(grid.place(2, 2, 1), (0, 1));
        // A later narrow box backfills the gap.
        assert_eq!(grid.place(2, 1, 1), (1, 0));
    }

    #[test]
    fn test_gap_without_backfill_stays_empty() {
        let mut grid = OccupancyGrid::new();
        grid.place(3, 2, 1);
        grid.place(3, 3, 1);
        // (2, 0) was skipped by the full-width box and nothing reclaimed it.
        assert!(!grid.is_occupied(3, 2, 0));
        assert_eq!(grid.cell_len(), 6);
    }

    #[test]
    fn test_tall_spans_block_later_rows() {
        let mut grid = OccupancyGrid::new();
        assert_eq!(grid.place(2, 1, 3), (0, 0));
        assert_eq!(grid.place(2, 1, 1), (1, 0));
        assert_eq!(grid.place(2, 2, 1), (0, 3));
        assert_eq!(grid.place(2, 1, 2), (1, 1));
    }

    #[test]
    fn test_single_column_stacks_vertically() {
        let mut grid = OccupancyGrid::new();
        assert_eq!(grid.place(1, 1, 2), (0, 0));
        assert_eq!(grid.place(1, 1, 1), (0, 2));
    }
}
