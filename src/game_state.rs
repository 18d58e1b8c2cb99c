// Copyright (C) 2020-2026 Andy Kurnia.

use super::{
    bag, board, error, game_config, lexicon, movegen, play_checker, play_scorer, rating, tile,
};
use rand::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GamePlayer {
    pub name: String,
    pub is_human: bool,
    pub score: i16,
    pub rating: i32,
    pub rack: Vec<tile::Tile>,
}

impl GamePlayer {
    pub fn new(name: &str, is_human: bool, rating: i32) -> Self {
        Self {
            name: name.to_string(),
            is_human,
            score: 0,
            rating,
            rack: Vec::new(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Winner(u8),
    Draw,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Played { description: String, score: i16 },
    Exchanged(usize),
    Passed,
}

#[derive(Clone)]
pub struct GameState<'a> {
    pub game_config: &'a game_config::GameConfig<'a>,
    pub players: Box<[GamePlayer]>,
    pub board: board::Board,
    pub bag: bag::Bag,
    pub turn: u8,
    pub consecutive_passes: u8,
    pub result: Option<GameResult>,
}

impl<'a> GameState<'a> {
    // players[0] is the human, the rest are computers.
    pub fn new(game_config: &'a game_config::GameConfig<'a>) -> Self {
        let players = (0..game_config.num_players())
            .map(|i| {
                if i == 0 {
                    GamePlayer::new("Player 1", true, rating::INITIAL_RATING)
                } else {
                    GamePlayer::new(&format!("Computer {}", i), false, 1100)
                }
            })
            .collect();
        Self::with_players(game_config, players)
    }

    pub fn with_players(
        game_config: &'a game_config::GameConfig<'a>,
        players: Box<[GamePlayer]>,
    ) -> Self {
        Self {
            game_config,
            players,
            board: board::Board::new(game_config.board_layout().dim()),
            bag: bag::Bag::new(game_config.alphabet()),
            turn: 0,
            consecutive_passes: 0,
            result: None,
        }
    }

    // new bag, empty board, fresh racks. ratings carry over.
    pub fn reset_and_draw_tiles(&mut self, rng: &mut dyn RngCore) {
        self.board = board::Board::new(self.game_config.board_layout().dim());
        self.bag = bag::Bag::new(self.game_config.alphabet());
        self.bag.shuffle(rng);
        let rack_size = self.game_config.rack_size() as usize;
        for player in self.players.iter_mut() {
            player.score = 0;
            player.rack.clear();
            self.bag.replenish(&mut player.rack, rack_size);
        }
        self.turn = 0;
        self.consecutive_passes = 0;
        self.result = None;
    }

    #[inline(always)]
    pub fn current_player(&self) -> &GamePlayer {
        &self.players[self.turn as usize]
    }

    #[inline(always)]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    pub fn next_turn(&mut self) {
        self.turn += 1;
        if self.turn as usize >= self.players.len() {
            self.turn = 0;
        }
    }

    fn ensure_in_progress(&self) -> error::Returns<()> {
        if self.is_over() {
            return_error!("the game is over".into());
        }
        Ok(())
    }

    fn ensure_no_pending(&self) -> error::Returns<()> {
        if !self.board.pending_cells().is_empty() {
            return_error!("recall or submit the tiles on the board first".into());
        }
        Ok(())
    }

    // moves a rack tile onto the board. a blank needs its letter now.
    pub fn place_pending(
        &mut self,
        rack_index: usize,
        row: i8,
        col: i8,
        blank_letter: Option<char>,
    ) -> error::Returns<()> {
        self.ensure_in_progress()?;
        let alphabet = self.game_config.alphabet();
        let rack = &self.players[self.turn as usize].rack;
        let Some(&t) = rack.get(rack_index) else {
            return_error!(format!("no rack tile {}", rack_index + 1));
        };
        let t = match (t, blank_letter) {
            (tile::Tile::Blank { .. }, Some(letter)) => {
                if alphabet.index_of(letter).is_none() {
                    return_error!(format!("{:?} is not a letter", letter));
                }
                t.assigned(letter)
            }
            (tile::Tile::Blank { .. }, None) => {
                return_error!("say which letter the blank is".into());
            }
            (tile::Tile::Letter { .. }, _) => t,
        };
        if self.board.is_occupied(row, col) {
            return_error!(format!("row {} col {} is taken", row + 1, col + 1));
        }
        self.board.set(row, col, tile::BoardTile::pending(t))?;
        self.players[self.turn as usize].rack.remove(rack_index);
        Ok(())
    }

    pub fn recall_pending(&mut self) {
        let recalled = self.board.recall_pending();
        self.players[self.turn as usize].rack.extend(recalled);
    }

    pub fn preview<L: lexicon::Lexicon + ?Sized>(
        &self,
        lexicon: &L,
    ) -> Result<play_scorer::ScoredPlay, play_checker::PendingError> {
        play_checker::check_pending(
            &self.board,
            self.game_config,
            lexicon,
            &mut play_scorer::PlayScorer::new(),
        )
    }

    // scores and fixes the pending tiles. on error nothing changes.
    pub fn submit<L: lexicon::Lexicon + ?Sized>(
        &mut self,
        lexicon: &L,
    ) -> error::Returns<TurnOutcome> {
        self.ensure_in_progress()?;
        let scored = self.preview(lexicon)?;
        let description = play_checker::describe(self.game_config, &scored);
        self.board.fix_pending();
        self.finish_play(scored.score);
        log::info!("{} played {}", self.current_player().name, description);
        self.end_turn_after_play();
        Ok(TurnOutcome::Played {
            description,
            score: scored.score,
        })
    }

    // Puts a generated move on the board. The move must come from the current
    // rack; anything else is refused before the board is touched.
    pub fn apply_move(&mut self, found: &movegen::Move) -> Result<(), error::InvariantViolation> {
        let rack = &self.players[self.turn as usize].rack;
        let mut used = vec![false; rack.len()];
        for (i, p) in found.placements.iter().enumerate() {
            let Some(&t) = rack.get(p.rack_index) else {
                return Err(error::InvariantViolation::MissingRackTile {
                    index: p.rack_index,
                });
            };
            if used[p.rack_index] {
                return Err(error::InvariantViolation::DuplicateRackTile {
                    index: p.rack_index,
                });
            }
            used[p.rack_index] = true;
            if t != p.tile.unassigned() && t != p.tile {
                return Err(error::InvariantViolation::MissingRackTile {
                    index: p.rack_index,
                });
            }
            if p.tile.face().is_none() {
                return Err(error::InvariantViolation::UnassignedBlank {
                    row: p.row,
                    col: p.col,
                });
            }
            if !self.board.dim().contains(p.row, p.col) {
                return Err(error::InvariantViolation::OutOfBounds {
                    row: p.row,
                    col: p.col,
                });
            }
            if self.board.is_occupied(p.row, p.col)
                || found.placements[..i]
                    .iter()
                    .any(|q| q.row == p.row && q.col == p.col)
            {
                return Err(error::InvariantViolation::CellOccupied {
                    row: p.row,
                    col: p.col,
                });
            }
        }
        for p in &found.placements {
            self.board
                .set(p.row, p.col, tile::BoardTile::fixed(p.tile))?;
        }
        let rack = &mut self.players[self.turn as usize].rack;
        let mut i = 0;
        rack.retain(|_| {
            let keep = !used[i];
            i += 1;
            keep
        });
        self.finish_play(found.score);
        log::info!("{} played {}", self.current_player().name, found);
        self.end_turn_after_play();
        Ok(())
    }

    fn finish_play(&mut self, score: i16) {
        let rack_size = self.game_config.rack_size() as usize;
        let player = &mut self.players[self.turn as usize];
        player.score += score;
        self.bag.replenish(&mut player.rack, rack_size);
        self.consecutive_passes = 0;
    }

    fn end_turn_after_play(&mut self) {
        if self.players[self.turn as usize].rack.is_empty() && self.bag.is_empty() {
            self.finish();
        } else {
            self.next_turn();
        }
    }

    pub fn pass(&mut self) -> error::Returns<TurnOutcome> {
        self.ensure_in_progress()?;
        self.ensure_no_pending()?;
        self.consecutive_passes += 1;
        log::info!("{} passed", self.current_player().name);
        if self.consecutive_passes >= self.game_config.num_passes_to_end() {
            self.finish();
        } else {
            self.next_turn();
        }
        Ok(TurnOutcome::Passed)
    }

    // rack indexes, any order. only while the bag has tiles.
    pub fn exchange(
        &mut self,
        rng: &mut dyn RngCore,
        rack_indexes: &[usize],
    ) -> error::Returns<TurnOutcome> {
        self.ensure_in_progress()?;
        self.ensure_no_pending()?;
        if self.bag.is_empty() {
            return_error!("the bag is empty, nothing to exchange with".into());
        }
        if rack_indexes.is_empty() {
            return_error!("choose tiles to exchange".into());
        }
        let rack = &self.players[self.turn as usize].rack;
        let mut sorted = rack_indexes.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        if sorted.len() != rack_indexes.len() {
            return_error!("a tile was chosen twice".into());
        }
        if sorted.last().is_some_and(|&i| i >= rack.len()) {
            return_error!("no such rack tile".into());
        }
        let rack_size = self.game_config.rack_size() as usize;
        let player = &mut self.players[self.turn as usize];
        let returned = sorted
            .iter()
            .rev()
            .map(|&i| player.rack.remove(i))
            .collect::<Vec<_>>();
        self.bag.put_back(rng, &returned);
        self.bag.replenish(&mut player.rack, rack_size);
        self.consecutive_passes = 0;
        log::info!("{} exchanged {} tiles", player.name, returned.len());
        self.next_turn();
        Ok(TurnOutcome::Exchanged(returned.len()))
    }

    // Search, then play. With no move, trade in the cheaper half of the rack
    // while the bag has tiles, else pass.
    pub fn computer_turn<L: lexicon::Lexicon + ?Sized>(
        &mut self,
        move_generator: &mut movegen::MoveGenerator<'_, L>,
        difficulty: game_config::Difficulty,
        rng: &mut dyn RngCore,
    ) -> error::Returns<TurnOutcome> {
        self.ensure_in_progress()?;
        self.ensure_no_pending()?;
        let rack = self.current_player().rack.clone();
        if let Some(found) = move_generator.find_best_move(&self.board, &rack, difficulty, rng)? {
            self.apply_move(&found)?;
            return Ok(TurnOutcome::Played {
                description: found.to_string(),
                score: found.score,
            });
        }
        if self.bag.is_empty() {
            return self.pass();
        }
        let n = rack.len().div_ceil(2).min(self.bag.len());
        let mut by_points = (0..rack.len()).collect::<Vec<_>>();
        // stable, so equal points go in rack order.
        by_points.sort_by_key(|&i| rack[i].points());
        by_points.truncate(n);
        self.exchange(rng, &by_points)
    }

    // Rack penalties, then ratings.
    fn finish(&mut self) {
        let rack_sums = self
            .players
            .iter()
            .map(|p| self.game_config.alphabet().rack_score(&p.rack))
            .collect::<Vec<_>>();
        let went_out = self.players.iter().position(|p| p.rack.is_empty());
        for (i, player) in self.players.iter_mut().enumerate() {
            match went_out {
                Some(j) if i == j => {
                    player.score += (0..rack_sums.len())
                        .filter(|&k| k != j)
                        .map(|k| rack_sums[k])
                        .sum::<i16>();
                }
                _ => player.score -= rack_sums[i],
            }
        }

        let best = self.players.iter().map(|p| p.score).max().unwrap_or(0);
        let leaders = (0..self.players.len())
            .filter(|&i| self.players[i].score == best)
            .collect::<Vec<_>>();
        let result = if leaders.len() == 1 {
            let w = leaders[0];
            for l in 0..self.players.len() {
                if l != w {
                    let (new_w, new_l) =
                        rating::rate_win(self.players[w].rating, self.players[l].rating);
                    self.players[w].rating = new_w;
                    self.players[l].rating = new_l;
                }
            }
            GameResult::Winner(w as u8)
        } else {
            GameResult::Draw
        };
        match result {
            GameResult::Winner(w) => log::info!(
                "game over, {} wins: {}",
                self.players[w as usize].name,
                self.fmt_scores()
            ),
            GameResult::Draw => log::info!("game over, draw: {}", self.fmt_scores()),
        }
        self.result = Some(result);
    }

    pub fn fmt_scores(&self) -> String {
        self.players
            .iter()
            .map(|p| p.score.to_string())
            .collect::<Vec<_>>()
            .join("-")
    }
}
