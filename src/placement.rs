// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, error, tile};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    pub row: i8,
    pub col: i8,
    // blanks carry their assigned letter.
    pub tile: tile::Tile,
    // which rack tile this came from.
    pub rack_index: usize,
}

// Lays letters (upper case) along a lane starting at idx. Occupied cells must
// already show the right letter, empty cells take a matching rack tile, else a
// blank. Returns only the newly covered cells.
pub fn attempt_placement(
    board: &board::Board,
    letters: &[char],
    down: bool,
    lane: i8,
    idx: i8,
    rack: &[tile::Tile],
) -> Result<Vec<Placement>, error::PlayError> {
    let dim = board.dim();
    let mut used = vec![false; rack.len()];
    let mut placements = Vec::with_capacity(letters.len());
    for (i, &letter) in (idx..).zip(letters.iter()) {
        let (row, col) = dim.row_col(down, lane, i);
        if !dim.contains(row, col) {
            return Err(error::InvariantViolation::OutOfBounds { row, col }.into());
        }
        if let Some(existing) = board.get(row, col) {
            let Some(found) = existing.tile.face() else {
                return Err(error::InvariantViolation::UnassignedBlank { row, col }.into());
            };
            if tile::upper(found) != letter {
                return Err(error::Rejection::LetterConflict {
                    row,
                    col,
                    expected: letter,
                    found,
                }
                .into());
            }
            continue;
        }
        let picked = (0..rack.len())
            .find(|&j| {
                !used[j] && matches!(rack[j], tile::Tile::Letter { letter: l, .. } if l == letter)
            })
            .or_else(|| (0..rack.len()).find(|&j| !used[j] && rack[j].is_blank()));
        let Some(rack_index) = picked else {
            return Err(error::Rejection::InsufficientTiles { letter }.into());
        };
        used[rack_index] = true;
        placements.push(Placement {
            row,
            col,
            tile: rack[rack_index].assigned(letter),
            rack_index,
        });
    }
    if placements.is_empty() {
        return Err(error::Rejection::NothingPlaced.into());
    }
    Ok(placements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{alphabet, matrix};

    fn letters(s: &str) -> Vec<char> {
        s.chars().map(tile::upper).collect()
    }

    fn board_of(rows: &[&str]) -> board::Board {
        board::Board::from_rows(
            &alphabet::FINNISH_ALPHABET,
            matrix::Dim { rows: 5, cols: 5 },
            rows,
        )
        .unwrap()
    }

    #[test]
    fn reuses_board_letters_and_prefers_real_tiles() {
        let board = board_of(&[".....", ".....", ".T...", ".....", "....."]);
        let rack = alphabet::FINNISH_ALPHABET.parse_rack("?ALO").unwrap();
        let placements = attempt_placement(&board, &letters("talo"), false, 2, 1, &rack).unwrap();
        assert_eq!(
            placements
                .iter()
                .map(|p| (p.row, p.col, p.rack_index))
                .collect::<Vec<_>>(),
            vec![(2, 2, 1), (2, 3, 2), (2, 4, 3)]
        );
        assert!(placements.iter().all(|p| !p.tile.is_blank()));
    }

    #[test]
    fn blank_fills_the_gap() {
        let board = board_of(&[".....", ".....", ".T...", ".....", "....."]);
        let rack = alphabet::FINNISH_ALPHABET.parse_rack("O?A").unwrap();
        let placements = attempt_placement(&board, &letters("talo"), false, 2, 1, &rack).unwrap();
        assert_eq!(placements.len(), 3);
        assert_eq!(placements[1].rack_index, 1);
        assert_eq!(
            placements[1].tile,
            tile::Tile::Blank {
                assigned: Some('L'),
                points: 0
            }
        );
    }

    #[test]
    fn down_placement_through_a_letter() {
        let board = board_of(&[".....", "..O..", ".....", ".....", "....."]);
        let rack = alphabet::FINNISH_ALPHABET.parse_rack("TN").unwrap();
        let placements = attempt_placement(&board, &letters("ton"), true, 2, 0, &rack).unwrap();
        assert_eq!(
            placements
                .iter()
                .map(|p| (p.row, p.col, p.tile.face()))
                .collect::<Vec<_>>(),
            vec![(0, 2, Some('T')), (2, 2, Some('N'))]
        );
    }

    #[test]
    fn rejections() {
        let board = board_of(&[".....", ".....", ".TA..", ".....", "....."]);
        let rack = alphabet::FINNISH_ALPHABET.parse_rack("KLO").unwrap();
        assert_eq!(
            attempt_placement(&board, &letters("kalo"), false, 2, 1, &rack),
            Err(error::PlayError::Rejected(error::Rejection::LetterConflict {
                row: 2,
                col: 1,
                expected: 'K',
                found: 'T',
            }))
        );
        let rack = alphabet::FINNISH_ALPHABET.parse_rack("L").unwrap();
        assert_eq!(
            attempt_placement(&board, &letters("talo"), false, 2, 1, &rack),
            Err(error::PlayError::Rejected(
                error::Rejection::InsufficientTiles { letter: 'O' }
            ))
        );
        assert_eq!(
            attempt_placement(&board, &letters("ta"), false, 2, 1, &rack),
            Err(error::PlayError::Rejected(error::Rejection::NothingPlaced))
        );
    }
}
