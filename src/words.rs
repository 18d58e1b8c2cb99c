// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, error, tile};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    // lower case.
    pub text: String,
    pub down: bool,
    pub cells: Vec<(i8, i8)>,
}

impl Word {
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    // (axis, lane, start). a word is scored once per key.
    #[inline(always)]
    pub fn line_key(&self) -> (bool, i8, i8) {
        let (row, col) = self.cells[0];
        if self.down {
            (true, col, row)
        } else {
            (false, row, col)
        }
    }
}

// The maximal run of occupied cells through (row, col) along one axis.
// Runs shorter than 2 are not words.
pub fn word_through(
    board: &board::Board,
    row: i8,
    col: i8,
    down: bool,
) -> Result<Option<Word>, error::InvariantViolation> {
    let (dr, dc) = if down { (1, 0) } else { (0, 1) };
    let (mut r, mut c) = (row, col);
    while board.is_occupied(r - dr, c - dc) {
        r -= dr;
        c -= dc;
    }
    let mut text = String::new();
    let mut cells = Vec::new();
    while let Some(board_tile) = board.get(r, c) {
        let Some(letter) = board_tile.tile.face() else {
            return Err(error::InvariantViolation::UnassignedBlank { row: r, col: c });
        };
        text.push(tile::lower(letter));
        cells.push((r, c));
        r += dr;
        c += dc;
    }
    if cells.len() < 2 {
        return Ok(None);
    }
    Ok(Some(Word { text, down, cells }))
}
