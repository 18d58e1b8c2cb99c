// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, board_layout};

pub struct Anchors {
    pub cells: Vec<(i8, i8)>,
    // row -> anchor cols, for across plays.
    pub by_row: std::collections::BTreeMap<i8, Vec<i8>>,
    // col -> anchor rows, for down plays.
    pub by_col: std::collections::BTreeMap<i8, Vec<i8>>,
}

impl Anchors {
    // lane -> anchor indexes along that lane.
    #[inline(always)]
    pub fn lanes(&self, down: bool) -> &std::collections::BTreeMap<i8, Vec<i8>> {
        if down { &self.by_col } else { &self.by_row }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

// Empty cells touching a fixed tile, or the star on a board with no fixed tile.
pub fn find_anchors(board: &board::Board, board_layout: &board_layout::BoardLayout) -> Anchors {
    let mut anchors = Anchors {
        cells: Vec::new(),
        by_row: Default::default(),
        by_col: Default::default(),
    };
    let mut add = |row: i8, col: i8| {
        anchors.cells.push((row, col));
        anchors.by_row.entry(row).or_default().push(col);
        anchors.by_col.entry(col).or_default().push(row);
    };
    if !board.has_fixed_tiles() {
        add(board_layout.star_row(), board_layout.star_col());
        return anchors;
    }
    let dim = board.dim();
    for row in 0..dim.rows {
        for col in 0..dim.cols {
            if board.is_occupied(row, col) {
                continue;
            }
            if board.is_fixed(row - 1, col)
                || board.is_fixed(row + 1, col)
                || board.is_fixed(row, col - 1)
                || board.is_fixed(row, col + 1)
            {
                add(row, col);
            }
        }
    }
    anchors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{alphabet, matrix, tile};

    #[test]
    fn empty_board_anchors_at_star() {
        let layout = board_layout::make_finnish_board_layout();
        let board = board::Board::new(layout.dim());
        let anchors = find_anchors(&board, &layout);
        assert_eq!(anchors.cells, vec![(7, 7)]);
        assert_eq!(anchors.by_row[&7], vec![7]);
        assert_eq!(anchors.by_col[&7], vec![7]);
    }

    #[test]
    fn pending_tiles_do_not_anchor() {
        let layout = board_layout::make_finnish_board_layout();
        let mut board = board::Board::new(layout.dim());
        board
            .set(0, 0, tile::BoardTile::pending(tile::Tile::letter('A', 1)))
            .unwrap();
        assert_eq!(find_anchors(&board, &layout).cells, vec![(7, 7)]);
    }

    #[test]
    fn neighbours_of_fixed_tiles() {
        let layout = board_layout::make_plain_board_layout();
        let mut rows = vec!["..............."; 15];
        rows[0] = "ON.............";
        let board = board::Board::from_rows(
            &alphabet::FINNISH_ALPHABET,
            matrix::Dim { rows: 15, cols: 15 },
            &rows,
        )
        .unwrap();
        let anchors = find_anchors(&board, &layout);
        assert_eq!(anchors.cells, vec![(0, 2), (1, 0), (1, 1)]);
        assert_eq!(anchors.by_row[&1], vec![0, 1]);
        assert_eq!(anchors.by_col[&2], vec![0]);
        assert_eq!(anchors.lanes(true).len(), 3);
    }
}
