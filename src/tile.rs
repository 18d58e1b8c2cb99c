// Copyright (C) 2020-2026 Andy Kurnia.

// letters are compared in upper case. Ä and Ö map to a single char.
#[inline(always)]
pub fn upper(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

#[inline(always)]
pub fn lower(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Letter { letter: char, points: i8 },
    // assigned is set once, when the blank is put on a cell.
    Blank { assigned: Option<char>, points: i8 },
}

impl Tile {
    #[inline(always)]
    pub fn letter(letter: char, points: i8) -> Self {
        Tile::Letter {
            letter: upper(letter),
            points,
        }
    }

    #[inline(always)]
    pub fn blank(points: i8) -> Self {
        Tile::Blank {
            assigned: None,
            points,
        }
    }

    // the letter this tile stands for on the board.
    #[inline(always)]
    pub fn face(&self) -> Option<char> {
        match self {
            Tile::Letter { letter, .. } => Some(*letter),
            Tile::Blank { assigned, .. } => *assigned,
        }
    }

    #[inline(always)]
    pub fn points(&self) -> i8 {
        match self {
            Tile::Letter { points, .. } | Tile::Blank { points, .. } => *points,
        }
    }

    #[inline(always)]
    pub fn is_blank(&self) -> bool {
        matches!(self, Tile::Blank { .. })
    }

    // letters are returned as is.
    #[inline(always)]
    pub fn assigned(self, letter: char) -> Self {
        match self {
            Tile::Blank { points, .. } => Tile::Blank {
                assigned: Some(upper(letter)),
                points,
            },
            x => x,
        }
    }

    // what goes back to the rack.
    #[inline(always)]
    pub fn unassigned(self) -> Self {
        match self {
            Tile::Blank { points, .. } => Tile::blank(points),
            x => x,
        }
    }

    // upper case for letters, lower case for blanks, '?' for a bare blank.
    pub fn label(&self) -> char {
        match self {
            Tile::Letter { letter, .. } => *letter,
            Tile::Blank {
                assigned: Some(letter),
                ..
            } => lower(*letter),
            Tile::Blank { assigned: None, .. } => '?',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoardTile {
    pub tile: Tile,
    // false while pending (placed this turn, not yet scored).
    pub fixed: bool,
}

impl BoardTile {
    #[inline(always)]
    pub fn fixed(tile: Tile) -> Self {
        Self { tile, fixed: true }
    }

    #[inline(always)]
    pub fn pending(tile: Tile) -> Self {
        Self { tile, fixed: false }
    }
}
