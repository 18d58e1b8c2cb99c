// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, matrix, tile};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    dim: matrix::Dim,
    cells: Box<[Option<tile::BoardTile>]>,
}

impl Board {
    pub fn new(dim: matrix::Dim) -> Self {
        Self {
            dim,
            cells: vec![None; dim.num_cells()].into_boxed_slice(),
        }
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        self.dim
    }

    // None when empty or off the board.
    #[inline(always)]
    pub fn get(&self, row: i8, col: i8) -> Option<&tile::BoardTile> {
        if self.dim.contains(row, col) {
            self.cells[self.dim.at_row_col(row, col)].as_ref()
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        self.get(row, col).is_some()
    }

    #[inline(always)]
    pub fn is_fixed(&self, row: i8, col: i8) -> bool {
        self.get(row, col).is_some_and(|x| x.fixed)
    }

    pub fn set(
        &mut self,
        row: i8,
        col: i8,
        board_tile: tile::BoardTile,
    ) -> Result<(), error::InvariantViolation> {
        if !self.dim.contains(row, col) {
            return Err(error::InvariantViolation::OutOfBounds { row, col });
        }
        let cell = &mut self.cells[self.dim.at_row_col(row, col)];
        if cell.is_some() {
            return Err(error::InvariantViolation::CellOccupied { row, col });
        }
        *cell = Some(board_tile);
        Ok(())
    }

    pub fn take(&mut self, row: i8, col: i8) -> Option<tile::BoardTile> {
        if self.dim.contains(row, col) {
            self.cells[self.dim.at_row_col(row, col)].take()
        } else {
            None
        }
    }

    pub fn has_fixed_tiles(&self) -> bool {
        self.cells.iter().flatten().any(|x| x.fixed)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|x| x.is_none())
    }

    // row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (i8, i8, &tile::BoardTile)> + '_ {
        let cols = self.dim.cols;
        (0..self.cells.len()).filter_map(move |i| {
            self.cells[i]
                .as_ref()
                .map(|x| ((i / cols as usize) as i8, (i % cols as usize) as i8, x))
        })
    }

    pub fn pending_cells(&self) -> Vec<(i8, i8)> {
        self.tiles()
            .filter(|(_, _, x)| !x.fixed)
            .map(|(row, col, _)| (row, col))
            .collect()
    }

    pub fn fix_pending(&mut self) {
        self.cells
            .iter_mut()
            .flatten()
            .for_each(|x| x.fixed = true);
    }

    // removes every pending tile, blanks lose their letter.
    pub fn recall_pending(&mut self) -> Vec<tile::Tile> {
        let mut recalled = Vec::new();
        for cell in self.cells.iter_mut() {
            if cell.is_some_and(|x| !x.fixed) {
                if let Some(x) = cell.take() {
                    recalled.push(x.tile.unassigned());
                }
            }
        }
        recalled
    }

    // one string per row, '.' for empty, upper case letters, lower case blanks.
    pub fn from_rows(
        alphabet: &super::alphabet::Alphabet<'_>,
        dim: matrix::Dim,
        rows: &[&str],
    ) -> error::Returns<Self> {
        if rows.len() != dim.rows as usize {
            return_error!(format!(
                "board: need {} rows, found {} rows",
                dim.rows,
                rows.len()
            ));
        }
        let mut board = Self::new(dim);
        for (row, s) in (0i8..).zip(rows.iter()) {
            let chars = s.chars().collect::<Vec<_>>();
            if chars.len() != dim.cols as usize {
                return_error!(format!(
                    "board row {} (0-based): need {} cols, found {} cols",
                    row,
                    dim.cols,
                    chars.len()
                ));
            }
            for (col, &c) in (0i8..).zip(chars.iter()) {
                if c == '.' {
                    continue;
                }
                let Some(idx) = alphabet.index_of(c) else {
                    return_error!(format!(
                        "board row {} col {} (0-based): invalid tile {:?}",
                        row, col, c
                    ));
                };
                let placed = if c.is_lowercase() {
                    alphabet.make_tile(0).assigned(c)
                } else {
                    alphabet.make_tile(idx)
                };
                board.set(row, col, tile::BoardTile::fixed(placed))?;
            }
        }
        Ok(board)
    }

    pub fn to_rows(&self) -> Vec<String> {
        (0..self.dim.rows)
            .map(|row| {
                (0..self.dim.cols)
                    .map(|col| self.get(row, col).map_or('.', |x| x.tile.label()))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet;

    #[test]
    fn one_tile_per_cell() {
        let mut board = Board::new(matrix::Dim { rows: 15, cols: 15 });
        let t = tile::BoardTile::pending(tile::Tile::letter('A', 1));
        assert_eq!(board.set(7, 7, t), Ok(()));
        assert_eq!(
            board.set(7, 7, t),
            Err(error::InvariantViolation::CellOccupied { row: 7, col: 7 })
        );
        assert_eq!(
            board.set(15, 0, t),
            Err(error::InvariantViolation::OutOfBounds { row: 15, col: 0 })
        );
        assert!(!board.has_fixed_tiles());
        assert_eq!(board.pending_cells(), vec![(7, 7)]);
        board.fix_pending();
        assert!(board.has_fixed_tiles());
        assert!(board.recall_pending().is_empty());
    }

    #[test]
    fn recall_returns_bare_blanks() {
        let mut board = Board::new(matrix::Dim { rows: 15, cols: 15 });
        board
            .set(
                3,
                4,
                tile::BoardTile::pending(tile::Tile::blank(0).assigned('k')),
            )
            .unwrap();
        assert_eq!(board.recall_pending(), vec![tile::Tile::blank(0)]);
        assert!(board.is_empty());
    }

    #[test]
    fn rows_round_trip() {
        let dim = matrix::Dim { rows: 3, cols: 4 };
        let board = Board::from_rows(&alphabet::FINNISH_ALPHABET, dim, &["....", ".Kä.", "...."])
            .unwrap();
        assert_eq!(board.get(1, 1).map(|x| x.tile.points()), Some(3));
        assert_eq!(board.get(1, 2).map(|x| x.tile.points()), Some(0));
        assert_eq!(board.to_rows(), vec!["....", ".Kä.", "...."]);
        assert!(Board::from_rows(&alphabet::FINNISH_ALPHABET, dim, &["....", "...."]).is_err());
    }
}
