// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, error, fash, game_config, words};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordScore {
    pub word: words::Word,
    pub score: i16,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoredPlay {
    // ordered by line, so the same play always lists the same words.
    pub words: Vec<WordScore>,
    pub num_played: usize,
    pub score: i16,
}

// The one scoring routine. Both the computer's search and the human's preview
// go through here.
pub struct PlayScorer {
    seen_lines: fash::MyHashSet<(bool, i8, i8)>,
}

impl PlayScorer {
    pub fn new() -> Self {
        Self {
            seen_lines: fash::MyHashSet::default(),
        }
    }

    // new_cells are this turn's tiles, already on the board.
    // Premiums only count under new cells.
    pub fn score_play(
        &mut self,
        board: &board::Board,
        game_config: &game_config::GameConfig<'_>,
        new_cells: &[(i8, i8)],
    ) -> Result<ScoredPlay, error::InvariantViolation> {
        let board_layout = game_config.board_layout();
        self.seen_lines.clear();
        let mut scored_words = Vec::new();
        for &(row, col) in new_cells {
            for down in [false, true] {
                let Some(word) = words::word_through(board, row, col, down)? else {
                    continue;
                };
                if !self.seen_lines.insert(word.line_key()) {
                    continue;
                }
                let mut word_multiplier = 1i16;
                let mut word_score = 0i16;
                for &(r, c) in &word.cells {
                    let Some(board_tile) = board.get(r, c) else {
                        continue;
                    };
                    let mut tile_score = board_tile.tile.points() as i16;
                    if new_cells.contains(&(r, c)) {
                        let premium = board_layout.premium_at(r, c);
                        tile_score *= premium.tile_multiplier as i16;
                        word_multiplier *= premium.word_multiplier as i16;
                    }
                    word_score += tile_score;
                }
                let score = word_score * word_multiplier
                    + game_config.long_word_bonus(word.text.chars().count());
                scored_words.push(WordScore { word, score });
            }
        }
        scored_words.sort_by_key(|x| x.word.line_key());
        let num_played = new_cells.len();
        let score = scored_words.iter().map(|x| x.score).sum::<i16>()
            + game_config.num_played_bonus(num_played);
        Ok(ScoredPlay {
            words: scored_words,
            num_played,
            score,
        })
    }
}

impl Default for PlayScorer {
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
