// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, error, lexicon, words};

// Checks the word through each new cell perpendicular to the play. The word
// along the play itself is the caller's business.
pub fn check_cross_words<L: lexicon::Lexicon + ?Sized>(
    board: &board::Board,
    lexicon: &L,
    new_cells: &[(i8, i8)],
    down: bool,
) -> Result<(), error::PlayError> {
    for &(row, col) in new_cells {
        if let Some(word) = words::word_through(board, row, col, !down)? {
            if !lexicon.is_valid(&word.text) {
                return Err(error::Rejection::InvalidCrossWord(word.text).into());
            }
        }
    }
    Ok(())
}
