// Copyright (C) 2020-2026 Andy Kurnia.

use super::{error, tile};

pub struct LetterInfo {
    label: char,
    freq: u8,
    score: i8,
}

pub struct StaticAlphabet<'a> {
    // index 0 is the blank.
    tiles: &'a [LetterInfo],
}

pub enum Alphabet<'a> {
    Static(StaticAlphabet<'a>),
}

impl<'a> Alphabet<'a> {
    #[inline(always)]
    fn tiles(&self) -> &'a [LetterInfo] {
        match self {
            Alphabet::Static(x) => x.tiles,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> u8 {
        self.tiles().len() as u8
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn label(&self, idx: u8) -> char {
        self.tiles()[idx as usize].label
    }

    #[inline(always)]
    pub fn freq(&self, idx: u8) -> u8 {
        self.tiles()[idx as usize].freq
    }

    #[inline(always)]
    pub fn score(&self, idx: u8) -> i8 {
        self.tiles()[idx as usize].score
    }

    pub fn num_tiles(&self) -> u16 {
        self.tiles().iter().map(|x| x.freq as u16).sum()
    }

    // letters only, case-insensitive. the blank is not a letter.
    pub fn index_of(&self, letter: char) -> Option<u8> {
        let letter = tile::upper(letter);
        (1u8..)
            .zip(self.tiles()[1..].iter())
            .find(|(_, x)| x.label == letter)
            .map(|(idx, _)| idx)
    }

    #[inline(always)]
    pub fn score_of(&self, letter: char) -> Option<i8> {
        self.index_of(letter).map(|idx| self.score(idx))
    }

    // the physical tile for alphabet index idx, as it sits in the bag.
    #[inline(always)]
    pub fn make_tile(&self, idx: u8) -> tile::Tile {
        if idx == 0 {
            tile::Tile::blank(self.score(0))
        } else {
            tile::Tile::letter(self.label(idx), self.score(idx))
        }
    }

    // '?' for blank.
    pub fn parse_rack(&self, s: &str) -> error::Returns<Vec<tile::Tile>> {
        let mut rack = Vec::with_capacity(s.len());
        for c in s.chars() {
            if c == '?' {
                rack.push(self.make_tile(0));
            } else if let Some(idx) = self.index_of(c) {
                rack.push(self.make_tile(idx));
            } else {
                return_error!(format!("invalid tile {:?} in rack {:?}", c, s));
            }
        }
        Ok(rack)
    }

    pub fn fmt_rack(&self, rack: &[tile::Tile]) -> String {
        rack.iter().map(|t| t.label()).collect()
    }

    pub fn rack_score(&self, rack: &[tile::Tile]) -> i16 {
        rack.iter().map(|t| t.points() as i16).sum()
    }
}

pub static FINNISH_ALPHABET: Alphabet = Alphabet::Static(StaticAlphabet {
    tiles: &[
        LetterInfo {
            label: '?',
            freq: 2,
            score: 0,
        },
        LetterInfo {
            label: 'A',
            freq: 7,
            score: 1,
        },
        LetterInfo {
            label: 'B',
            freq: 1,
            score: 8,
        },
        LetterInfo {
            label: 'C',
            freq: 1,
            score: 10,
        },
        LetterInfo {
            label: 'D',
            freq: 1,
            score: 7,
        },
        LetterInfo {
            label: 'E',
            freq: 9,
            score: 1,
        },
        LetterInfo {
            label: 'F',
            freq: 1,
            score: 8,
        },
        LetterInfo {
            label: 'G',
            freq: 1,
            score: 8,
        },
        LetterInfo {
            label: 'H',
            freq: 2,
            score: 4,
        },
        LetterInfo {
            label: 'I',
            freq: 10,
            score: 1,
        },
        LetterInfo {
            label: 'J',
            freq: 2,
            score: 4,
        },
        LetterInfo {
            label: 'K',
            freq: 6,
            score: 3,
        },
        LetterInfo {
            label: 'L',
            freq: 6,
            score: 2,
        },
        LetterInfo {
            label: 'M',
            freq: 3,
            score: 3,
        },
        LetterInfo {
            label: 'N',
            freq: 9,
            score: 1,
        },
        LetterInfo {
            label: 'O',
            freq: 5,
            score: 2,
        },
        LetterInfo {
            label: 'P',
            freq: 2,
            score: 4,
        },
        LetterInfo {
            label: 'R',
            freq: 2,
            score: 4,
        },
        LetterInfo {
            label: 'S',
            freq: 7,
            score: 1,
        },
        LetterInfo {
            label: 'T',
            freq: 9,
            score: 1,
        },
        LetterInfo {
            label: 'U',
            freq: 4,
            score: 3,
        },
        LetterInfo {
            label: 'V',
            freq: 2,
            score: 4,
        },
        LetterInfo {
            label: 'W',
            freq: 1,
            score: 8,
        },
        LetterInfo {
            label: 'Y',
            freq: 2,
            score: 4,
        },
        LetterInfo {
            label: 'Ä',
            freq: 5,
            score: 2,
        },
        LetterInfo {
            label: 'Ö',
            freq: 2,
            score: 7,
        },
    ],
});
