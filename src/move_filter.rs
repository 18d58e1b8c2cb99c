// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, fash, tile};

// Letters a play could draw on: the rack plus every fixed letter on the board,
// regardless of where those letters sit.
pub struct LetterPool {
    counts: fash::MyHashMap<char, u16>,
    num_blanks: u16,
}

impl LetterPool {
    pub fn new(rack: &[tile::Tile], board: &board::Board) -> Self {
        let mut counts = fash::MyHashMap::<char, u16>::default();
        let mut num_blanks = 0;
        for t in rack {
            match t {
                tile::Tile::Letter { letter, .. } => *counts.entry(*letter).or_default() += 1,
                tile::Tile::Blank { .. } => num_blanks += 1,
            }
        }
        for (_, _, board_tile) in board.tiles() {
            if board_tile.fixed {
                if let Some(letter) = board_tile.tile.face() {
                    *counts.entry(letter).or_default() += 1;
                }
            }
        }
        Self { counts, num_blanks }
    }

    #[inline(always)]
    pub fn num_blanks(&self) -> u16 {
        self.num_blanks
    }

    // Necessary, not sufficient: a word failing this can never be placed,
    // a word passing it may still not fit anywhere.
    pub fn may_form(&self, word: &str, word_tally: &mut fash::MyHashMap<char, u16>) -> bool {
        word_tally.clear();
        for c in word.chars() {
            *word_tally.entry(tile::upper(c)).or_default() += 1;
        }
        let mut need = 0;
        for (letter, &n) in word_tally.iter() {
            let have = self.counts.get(letter).copied().unwrap_or(0);
            if have < n {
                need += n - have;
                if need > self.num_blanks {
                    return false;
                }
            }
        }
        true
    }
}

// keeps the order of words.
pub fn filter_candidates<'w>(words: &'w [String], pool: &LetterPool) -> Vec<&'w str> {
    let mut word_tally = fash::MyHashMap::default();
    words
        .iter()
        .filter(|word| pool.may_form(word, &mut word_tally))
        .map(|word| word.as_str())
        .collect()
}
