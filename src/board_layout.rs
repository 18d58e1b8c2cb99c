// Copyright (C) 2020-2026 Andy Kurnia.

use super::matrix;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Premium {
    pub word_multiplier: i8,
    pub tile_multiplier: i8,
}

static TWS: Premium = Premium {
    word_multiplier: 3,
    tile_multiplier: 1,
};
static DWS: Premium = Premium {
    word_multiplier: 2,
    tile_multiplier: 1,
};
static TLS: Premium = Premium {
    word_multiplier: 1,
    tile_multiplier: 3,
};
static DLS: Premium = Premium {
    word_multiplier: 1,
    tile_multiplier: 2,
};
static FVS: Premium = Premium {
    word_multiplier: 1,
    tile_multiplier: 1,
};

impl Premium {
    #[inline(always)]
    pub fn is_plain(&self) -> bool {
        self.word_multiplier == 1 && self.tile_multiplier == 1
    }
}

pub struct StaticBoardLayout {
    premiums: Box<[Premium]>,
    dim: matrix::Dim,
    star_row: i8,
    star_col: i8,
}

pub enum BoardLayout {
    Static(StaticBoardLayout),
}

impl BoardLayout {
    #[inline(always)]
    pub fn premiums(&self) -> &[Premium] {
        match self {
            BoardLayout::Static(x) => &x.premiums,
        }
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        match self {
            BoardLayout::Static(x) => x.dim,
        }
    }

    // the star only marks where the opening move goes. it does not multiply.
    #[inline(always)]
    pub fn star_row(&self) -> i8 {
        match self {
            BoardLayout::Static(x) => x.star_row,
        }
    }

    #[inline(always)]
    pub fn star_col(&self) -> i8 {
        match self {
            BoardLayout::Static(x) => x.star_col,
        }
    }

    #[inline(always)]
    pub fn premium_at(&self, row: i8, col: i8) -> Premium {
        self.premiums()[self.dim().at_row_col(row, col)]
    }

    #[inline(always)]
    pub fn is_star(&self, row: i8, col: i8) -> bool {
        row == self.star_row() && col == self.star_col()
    }
}

pub fn make_finnish_board_layout() -> BoardLayout {
    BoardLayout::Static(StaticBoardLayout {
        premiums: Box::new([
            DLS, FVS, TWS, FVS, FVS, DLS, FVS, DLS, FVS, DLS, FVS, FVS, TWS, FVS, DLS, //
            FVS, DLS, DLS, FVS, DWS, FVS, DLS, DLS, DLS, FVS, DWS, FVS, DLS, DLS, FVS, //
            TWS, FVS, DLS, DLS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, FVS, TWS, //
            FVS, FVS, FVS, TLS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, //
            FVS, DWS, FVS, FVS, FVS, FVS, TLS, FVS, TLS, FVS, FVS, FVS, FVS, DWS, FVS, //
            FVS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, FVS, //
            FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, //
            FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, //
            FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, //
            FVS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, FVS, //
            FVS, DWS, FVS, FVS, FVS, FVS, TLS, FVS, TLS, FVS, FVS, FVS, FVS, DWS, FVS, //
            FVS, FVS, FVS, TLS, FVS, FVS, FVS, FVS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, //
            TWS, FVS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, DLS, DLS, FVS, TWS, //
            FVS, DLS, DLS, FVS, DWS, FVS, DLS, DLS, DLS, FVS, DWS, FVS, DLS, DLS, FVS, //
            DLS, FVS, TWS, FVS, FVS, DLS, FVS, DLS, FVS, DLS, FVS, FVS, TWS, FVS, DLS, //
        ]),
        dim: matrix::Dim { rows: 15, cols: 15 },
        star_row: 7,
        star_col: 7,
    })
}

// same size and star, no premiums at all.
pub fn make_plain_board_layout() -> BoardLayout {
    let dim = matrix::Dim { rows: 15, cols: 15 };
    BoardLayout::Static(StaticBoardLayout {
        premiums: vec![FVS; dim.num_cells()].into_boxed_slice(),
        dim,
        star_row: 7,
        star_col: 7,
    })
}
