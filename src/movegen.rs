// Copyright (C) 2020-2026 Andy Kurnia.

use super::{
    anchors, board, cross_check, error, game_config, lexicon, move_filter, move_picker, placement,
    play_scorer, tile, words,
};
use rand::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub down: bool,
    pub lane: i8,
    pub idx: i8,
    // lower case, as listed in the lexicon.
    pub word: String,
    // new tiles only.
    pub placements: Vec<placement::Placement>,
    // every word the play forms, as scored.
    pub words: Vec<play_scorer::WordScore>,
    pub score: i16,
}

impl Move {
    pub fn new_cells(&self) -> Vec<(i8, i8)> {
        self.placements.iter().map(|p| (p.row, p.col)).collect()
    }
}

// "8D KISSA 7" across from row 8 col D, "D8 ..." down. Letters from blanks are
// shown in lower case.
impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (row, col) = if self.down {
            (self.idx, self.lane)
        } else {
            (self.lane, self.idx)
        };
        let col_label = (b'A' + col as u8) as char;
        if self.down {
            write!(f, "{}{} ", col_label, row + 1)?;
        } else {
            write!(f, "{}{} ", row + 1, col_label)?;
        }
        for (i, c) in (self.idx..).zip(self.word.chars()) {
            let (r, c2) = if self.down {
                (i, self.lane)
            } else {
                (self.lane, i)
            };
            let from_blank = self
                .placements
                .iter()
                .any(|p| p.row == r && p.col == c2 && p.tile.is_blank());
            if from_blank {
                write!(f, "{}", tile::lower(c))?;
            } else {
                write!(f, "{}", tile::upper(c))?;
            }
        }
        write!(f, " {}", self.score)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

pub struct Deadline {
    t0: std::time::Instant,
    budget: std::time::Duration,
    max_checks: Option<usize>,
    num_checks: usize,
}

impl Deadline {
    pub fn new(budget: std::time::Duration) -> Self {
        Self {
            t0: std::time::Instant::now(),
            budget,
            max_checks: None,
            num_checks: 0,
        }
    }

    // also stops once max_checks checks have passed.
    pub fn with_max_checks(budget: std::time::Duration, max_checks: usize) -> Self {
        Self {
            max_checks: Some(max_checks),
            ..Self::new(budget)
        }
    }

    // a zero budget stops at the first check.
    #[inline(always)]
    pub fn check(&mut self) -> Flow {
        if self.max_checks.is_some_and(|n| self.num_checks >= n)
            || self.t0.elapsed() >= self.budget
        {
            Flow::Stop
        } else {
            self.num_checks += 1;
            Flow::Continue
        }
    }
}

// Where a candidate word is laid: lane and start index along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Window {
    down: bool,
    lane: i8,
    idx: i8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchParams {
    pub time_budget: std::time::Duration,
    pub ascending: bool,
    pub policy: move_picker::PickPolicy,
}

impl SearchParams {
    pub fn for_difficulty(
        game_config: &game_config::GameConfig<'_>,
        difficulty: game_config::Difficulty,
    ) -> Self {
        Self {
            time_budget: game_config.time_budget(difficulty),
            ascending: game_config.shortest_words_first(difficulty),
            policy: match difficulty {
                game_config::Difficulty::Easy => move_picker::PickPolicy::RandomTop(3),
                game_config::Difficulty::Medium | game_config::Difficulty::Hard => {
                    move_picker::PickPolicy::Best
                }
            },
        }
    }
}

// Tiles put down for one evaluation. Dropping this takes them off again, on
// every path out.
pub struct TrialPlacement<'b> {
    board: &'b mut board::Board,
    cells: Vec<(i8, i8)>,
}

impl<'b> TrialPlacement<'b> {
    pub fn new(
        board: &'b mut board::Board,
        placements: &[placement::Placement],
    ) -> Result<Self, error::InvariantViolation> {
        let mut trial = Self {
            board,
            cells: Vec::with_capacity(placements.len()),
        };
        for p in placements {
            trial
                .board
                .set(p.row, p.col, tile::BoardTile::pending(p.tile))?;
            trial.cells.push((p.row, p.col));
        }
        Ok(trial)
    }

    #[inline(always)]
    pub fn board(&self) -> &board::Board {
        self.board
    }

    #[inline(always)]
    pub fn cells(&self) -> &[(i8, i8)] {
        &self.cells
    }
}

impl Drop for TrialPlacement<'_> {
    fn drop(&mut self) {
        for &(row, col) in &self.cells {
            self.board.take(row, col);
        }
    }
}

pub struct MoveGenerator<'a, L: lexicon::Lexicon + ?Sized> {
    game_config: &'a game_config::GameConfig<'a>,
    lexicon: &'a L,
    play_scorer: play_scorer::PlayScorer,
}

impl<'a, L: lexicon::Lexicon + ?Sized> MoveGenerator<'a, L> {
    pub fn new(game_config: &'a game_config::GameConfig<'a>, lexicon: &'a L) -> Self {
        Self {
            game_config,
            lexicon,
            play_scorer: play_scorer::PlayScorer::new(),
        }
    }

    // The caller's board and rack are left as they were. Ok(None) means there
    // is no legal move (or none was found in time).
    pub fn find_best_move(
        &mut self,
        board: &board::Board,
        rack: &[tile::Tile],
        difficulty: game_config::Difficulty,
        rng: &mut dyn RngCore,
    ) -> Result<Option<Move>, error::InvariantViolation> {
        let params = SearchParams::for_difficulty(self.game_config, difficulty);
        self.find_best_move_with(board, rack, &params, rng)
    }

    pub fn find_best_move_with(
        &mut self,
        board: &board::Board,
        rack: &[tile::Tile],
        params: &SearchParams,
        rng: &mut dyn RngCore,
    ) -> Result<Option<Move>, error::InvariantViolation> {
        let deadline = Deadline::new(params.time_budget);
        self.find_best_move_within(board, rack, params, deadline, rng)
    }

    // params.time_budget is ignored here, the deadline decides when to stop.
    // Moves found before it hits are kept.
    pub fn find_best_move_within(
        &mut self,
        board: &board::Board,
        rack: &[tile::Tile],
        params: &SearchParams,
        mut deadline: Deadline,
        rng: &mut dyn RngCore,
    ) -> Result<Option<Move>, error::InvariantViolation> {
        self.validate_rack(rack)?;
        let game_config = self.game_config;
        let lexicon = self.lexicon;
        let t0 = std::time::Instant::now();
        let alphabet = game_config.alphabet();

        // pending tiles are not part of the position.
        let mut working_board = board.clone();
        working_board.recall_pending();
        let dim = working_board.dim();
        let anchors = anchors::find_anchors(&working_board, game_config.board_layout());
        let pool = move_filter::LetterPool::new(rack, &working_board);
        let candidates =
            move_filter::filter_candidates(lexicon.words_by_length(params.ascending), &pool);

        let mut picker = move_picker::MovePicker::new(params.policy);
        let mut letters = Vec::new();
        let mut num_words_tried = 0usize;
        let mut num_attempts = 0usize;
        let mut num_found = 0usize;
        let mut stopped_early = false;
        for &word in &candidates {
            if deadline.check() == Flow::Stop {
                stopped_early = true;
                break;
            }
            num_words_tried += 1;
            letters.clear();
            letters.extend(word.chars().map(tile::upper));
            if letters.iter().any(|&c| alphabet.index_of(c).is_none()) {
                continue;
            }
            for down in [false, true] {
                let lane_len = dim.lane_len(down);
                if letters.len() > lane_len as usize {
                    continue;
                }
                let len = letters.len() as i8;
                for (&lane, anchor_idxs) in anchors.lanes(down) {
                    for idx in 0..=lane_len - len {
                        let end = idx + len - 1;
                        if !anchor_idxs.iter().any(|&a| a >= idx && a <= end) {
                            continue;
                        }
                        // must not run into a tile just outside the window.
                        let (before_row, before_col) = dim.row_col(down, lane, idx - 1);
                        let (after_row, after_col) = dim.row_col(down, lane, end + 1);
                        if working_board.is_occupied(before_row, before_col)
                            || working_board.is_occupied(after_row, after_col)
                        {
                            continue;
                        }
                        num_attempts += 1;
                        let window = Window { down, lane, idx };
                        match self.try_candidate(&mut working_board, word, &letters, window, rack)
                        {
                            // a play must score to count as a move.
                            Ok(found) if found.score <= 0 => {}
                            Ok(found) => {
                                num_found += 1;
                                picker.offer(found);
                            }
                            Err(error::PlayError::Rejected(_)) => {}
                            Err(error::PlayError::Invariant(violation)) => return Err(violation),
                        }
                    }
                }
            }
        }
        if stopped_early {
            log::debug!(
                "deadline reached after {} of {} candidate words",
                num_words_tried,
                candidates.len()
            );
        }
        log::debug!(
            "{} anchors, {} candidate words, {} attempts, {} scoring moves in {:?}",
            anchors.cells.len(),
            candidates.len(),
            num_attempts,
            num_found,
            t0.elapsed()
        );
        Ok(picker.pick(rng))
    }

    fn validate_rack(&self, rack: &[tile::Tile]) -> Result<(), error::InvariantViolation> {
        let max = self.game_config.rack_size() as usize;
        if rack.len() > max {
            return Err(error::InvariantViolation::RackTooLarge {
                len: rack.len(),
                max,
            });
        }
        if let Some(index) = rack
            .iter()
            .position(|t| matches!(t, tile::Tile::Blank { assigned: Some(_), .. }))
        {
            return Err(error::InvariantViolation::AssignedBlankOnRack { index });
        }
        Ok(())
    }

    fn try_candidate(
        &mut self,
        board: &mut board::Board,
        word: &str,
        letters: &[char],
        window: Window,
        rack: &[tile::Tile],
    ) -> Result<Move, error::PlayError> {
        let Window { down, lane, idx } = window;
        let placements = placement::attempt_placement(board, letters, down, lane, idx, rack)?;
        let trial = TrialPlacement::new(board, &placements)?;
        cross_check::check_cross_words(trial.board(), self.lexicon, trial.cells(), down)?;
        let (row, col) = trial.cells()[0];
        let Some(primary) = words::word_through(trial.board(), row, col, down)? else {
            return Err(error::Rejection::NoPrimaryWord.into());
        };
        if !self.lexicon.is_valid(&primary.text) {
            return Err(error::Rejection::InvalidPrimaryWord(primary.text).into());
        }
        let scored = self
            .play_scorer
            .score_play(trial.board(), self.game_config, trial.cells())?;
        Ok(Move {
            down,
            lane,
            idx,
            word: word.to_string(),
            placements,
            words: scored.words,
            score: scored.score,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{alphabet, matrix};

    #[test]
    fn trial_is_undone_on_every_path() {
        let mut board = board::Board::from_rows(
            &alphabet::FINNISH_ALPHABET,
            matrix::Dim { rows: 3, cols: 3 },
            &["...", ".A.", "..."],
        )
        .unwrap();
        let before = board.clone();
        let k = tile::Tile::letter('K', 3);
        let placements = [
            placement::Placement {
                row: 1,
                col: 0,
                tile: k,
                rack_index: 0,
            },
            placement::Placement {
                row: 1,
                col: 2,
                tile: k,
                rack_index: 1,
            },
        ];
        {
            let trial = TrialPlacement::new(&mut board, &placements).unwrap();
            assert_eq!(trial.cells(), &[(1, 0), (1, 2)]);
            assert!(trial.board().is_occupied(1, 2));
        }
        assert_eq!(board, before);

        // the second tile lands on the A, the first must still come off.
        let clashing = [
            placements[0],
            placement::Placement {
                row: 1,
                col: 1,
                tile: k,
                rack_index: 1,
            },
        ];
        assert_eq!(
            TrialPlacement::new(&mut board, &clashing).err(),
            Some(error::InvariantViolation::CellOccupied { row: 1, col: 1 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn zero_budget_stops_at_once() {
        assert_eq!(Deadline::new(std::time::Duration::ZERO).check(), Flow::Stop);
        assert_eq!(
            Deadline::new(std::time::Duration::from_secs(60)).check(),
            Flow::Continue
        );
    }

    #[test]
    fn max_checks_stops_later_checks() {
        let mut deadline = Deadline::with_max_checks(std::time::Duration::from_secs(60), 2);
        assert_eq!(deadline.check(), Flow::Continue);
        assert_eq!(deadline.check(), Flow::Continue);
        assert_eq!(deadline.check(), Flow::Stop);
        assert_eq!(deadline.check(), Flow::Stop);
        let mut deadline = Deadline::with_max_checks(std::time::Duration::ZERO, 5);
        assert_eq!(deadline.check(), Flow::Stop);
    }

    #[test]
    fn difficulty_params() {
        let game_config = game_config::make_finnish_game_config();
        let easy = SearchParams::for_difficulty(&game_config, game_config::Difficulty::Easy);
        assert!(easy.ascending);
        assert_eq!(easy.policy, move_picker::PickPolicy::RandomTop(3));
        assert_eq!(easy.time_budget, std::time::Duration::from_millis(800));
        let hard = SearchParams::for_difficulty(&game_config, game_config::Difficulty::Hard);
        assert!(!hard.ascending);
        assert_eq!(hard.policy, move_picker::PickPolicy::Best);
    }

    #[test]
    fn display_marks_blanks() {
        let found = Move {
            down: true,
            lane: 7,
            idx: 3,
            word: "talo".into(),
            placements: vec![placement::Placement {
                row: 4,
                col: 7,
                tile: tile::Tile::blank(0).assigned('A'),
                rack_index: 0,
            }],
            words: Vec::new(),
            score: 4,
        };
        assert_eq!(found.to_string(), "H4 TaLO 4");
    }
}
