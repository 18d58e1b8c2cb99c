// Copyright (C) 2020-2026 Andy Kurnia.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

impl Dim {
    #[inline(always)]
    pub fn num_cells(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    #[inline(always)]
    pub fn contains(&self, row: i8, col: i8) -> bool {
        row >= 0 && row < self.rows && col >= 0 && col < self.cols
    }

    #[inline(always)]
    pub fn at_row_col(&self, row: i8, col: i8) -> usize {
        (((row as isize) * (self.cols as isize)) + (col as isize)) as usize
    }

    // number of cells along one lane.
    // across lanes are rows (length cols), down lanes are columns (length rows).
    #[inline(always)]
    pub fn lane_len(&self, down: bool) -> i8 {
        if down { self.rows } else { self.cols }
    }

    // maps (lane, idx) to (row, col).
    #[inline(always)]
    pub fn row_col(&self, down: bool, lane: i8, idx: i8) -> (i8, i8) {
        if down { (idx, lane) } else { (lane, idx) }
    }

    // the opposite of row_col: (row, col) to (lane, idx).
    #[inline(always)]
    pub fn lane_idx(&self, down: bool, row: i8, col: i8) -> (i8, i8) {
        if down { (col, row) } else { (row, col) }
    }
}
