// Copyright (C) 2020-2026 Andy Kurnia.

use clap::Parser;
use rand::prelude::*;
use sanakisa::{
    display, error, game_config, game_state, lexicon, logging, movegen, play_checker, rating,
    tile,
};

// Play against the computer from a line editor.
#[derive(Parser, Debug)]
#[command(version, about = "Play a game against the computer")]
struct Args {
    /// Word list, one word per line
    #[arg(short, long)]
    lexicon: String,

    /// How well the computer plays
    #[arg(short, long, default_value = "medium")]
    difficulty: game_config::Difficulty,

    /// Seed for the bag and the easy computer's choices
    #[arg(short, long)]
    seed: Option<u64>,

    /// Write logs here instead of stderr
    #[arg(long)]
    log_dir: Option<String>,
}

const HELP: &str = "\
commands:
  board                     show the board, scores and your rack
  place <n> <square> [L]    put rack tile n (1-based) on a square like 8H,
                            a blank needs its letter L
  play <start> <word>       8H is across from row 8 col H, H8 is down;
                            lower case letters are played with blanks
  recall                    take your pending tiles back
  preview                   check and score your pending tiles
  submit                    play your pending tiles
  pass
  exchange <tiles>          e.g. exchange AK? (only while the bag has tiles)
  hint                      what the computer would play for you
  new                       start over
  exit";

struct Shell<'a> {
    game_config: &'a game_config::GameConfig<'a>,
    word_list: &'a lexicon::WordList,
    move_generator: movegen::MoveGenerator<'a, lexicon::WordList>,
    game_state: game_state::GameState<'a>,
    difficulty: game_config::Difficulty,
    rng: rand_chacha::ChaCha20Rng,
}

impl Shell<'_> {
    fn human_rack_index(&self, c: char) -> Option<usize> {
        let rack = &self.game_state.current_player().rack;
        if c.is_lowercase() {
            rack.iter().position(|t| t.is_blank())
        } else {
            let c = tile::upper(c);
            rack.iter()
                .position(|t| matches!(t, tile::Tile::Letter { letter, .. } if *letter == c))
        }
    }

    fn play_word(&mut self, coord: &str, word: &str) -> error::Returns<()> {
        let Some((down, lane, idx)) = display::parse_coord(self.game_config.board_layout(), coord)
        else {
            sanakisa::return_error!(format!("bad square {:?}", coord));
        };
        let dim = self.game_config.board_layout().dim();
        for (i, c) in (idx..).zip(word.chars()) {
            let (row, col) = dim.row_col(down, lane, i);
            if !dim.contains(row, col) {
                sanakisa::return_error!(format!("{} does not fit there", word.to_uppercase()));
            }
            if let Some(board_tile) = self.game_state.board.get(row, col) {
                if board_tile.tile.face() != Some(tile::upper(c)) {
                    sanakisa::return_error!(format!("{} is not on the board there", tile::upper(c)));
                }
                continue;
            }
            let Some(rack_index) = self.human_rack_index(c) else {
                sanakisa::return_error!(format!("no {} on your rack", c));
            };
            let blank_letter = c.is_lowercase().then_some(c);
            self.game_state
                .place_pending(rack_index, row, col, blank_letter)?;
        }
        self.submit()
    }

    fn submit(&mut self) -> error::Returns<()> {
        match self.game_state.submit(self.word_list)? {
            game_state::TurnOutcome::Played { description, .. } => println!("{}", description),
            other => println!("{:?}", other),
        }
        Ok(())
    }

    fn exchange(&mut self, tiles: &str) -> error::Returns<()> {
        let rack = &self.game_state.current_player().rack;
        let mut taken = vec![false; rack.len()];
        let mut rack_indexes = Vec::new();
        for c in tiles.chars() {
            let found = (0..rack.len()).find(|&i| {
                !taken[i]
                    && if c == '?' {
                        rack[i].is_blank()
                    } else {
                        rack[i].face() == Some(tile::upper(c)) && !rack[i].is_blank()
                    }
            });
            let Some(i) = found else {
                sanakisa::return_error!(format!("no {} on your rack", c));
            };
            taken[i] = true;
            rack_indexes.push(i);
        }
        self.game_state.exchange(&mut self.rng, &rack_indexes)?;
        Ok(())
    }

    fn computer_moves(&mut self) -> error::Returns<()> {
        while !self.game_state.is_over() && !self.game_state.current_player().is_human {
            let name = self.game_state.current_player().name.clone();
            match self.game_state.computer_turn(
                &mut self.move_generator,
                self.difficulty,
                &mut self.rng,
            )? {
                game_state::TurnOutcome::Played { description, .. } => {
                    println!("{} played {}", name, description)
                }
                game_state::TurnOutcome::Exchanged(n) => println!("{} exchanged {} tiles", name, n),
                game_state::TurnOutcome::Passed => println!("{} passed", name),
            }
        }
        Ok(())
    }

    fn show(&self) {
        display::print_game_state(&self.game_state);
        match self.game_state.result {
            Some(game_state::GameResult::Winner(w)) => println!(
                "game over, {} wins {}",
                self.game_state.players[w as usize].name,
                self.game_state.fmt_scores()
            ),
            Some(game_state::GameResult::Draw) => {
                println!("game over, draw {}", self.game_state.fmt_scores())
            }
            None => {}
        }
    }

    // false to quit.
    fn run_command(&mut self, args: &[String]) -> error::Returns<bool> {
        let arg = |i: usize| args.get(i).map(String::as_str);
        match (arg(0).unwrap_or(""), arg(1), arg(2)) {
            ("help", _, _) => println!("{}", HELP),
            ("exit" | "quit", _, _) => return Ok(false),
            ("board" | "show", _, _) => self.show(),
            ("place", Some(n), Some(coord)) => {
                let Some(n) = n.parse::<usize>().ok().filter(|&n| n >= 1) else {
                    sanakisa::return_error!(format!("bad rack position {:?}", n));
                };
                let Some((down, lane, idx)) =
                    display::parse_coord(self.game_config.board_layout(), coord)
                else {
                    sanakisa::return_error!(format!("bad square {:?}", coord));
                };
                let (row, col) = self
                    .game_config
                    .board_layout()
                    .dim()
                    .row_col(down, lane, idx);
                let blank_letter = arg(3).and_then(|s| s.chars().next());
                self.game_state
                    .place_pending(n - 1, row, col, blank_letter)?;
                self.show();
            }
            ("play", Some(coord), Some(word)) => {
                if let Err(err) = self.play_word(coord, word) {
                    self.game_state.recall_pending();
                    return Err(err);
                }
                self.computer_moves()?;
                self.show();
            }
            ("recall", _, _) => {
                self.game_state.recall_pending();
                self.show();
            }
            ("preview", _, _) => {
                let scored = self.game_state.preview(self.word_list)?;
                println!(
                    "{}",
                    play_checker::describe(self.game_config, &scored)
                );
            }
            ("submit", _, _) => {
                self.submit()?;
                self.computer_moves()?;
                self.show();
            }
            ("pass", _, _) => {
                self.game_state.pass()?;
                self.computer_moves()?;
                self.show();
            }
            ("exchange", Some(tiles), _) => {
                self.exchange(tiles)?;
                self.computer_moves()?;
                self.show();
            }
            ("hint", _, _) => {
                let found = self.move_generator.find_best_move(
                    &self.game_state.board,
                    &self.game_state.current_player().rack,
                    game_config::Difficulty::Hard,
                    &mut self.rng,
                )?;
                match found {
                    Some(found) => println!("{}", found),
                    None => println!("no move found"),
                }
            }
            ("new", _, _) => {
                self.game_state.reset_and_draw_tiles(&mut self.rng);
                self.show();
            }
            ("", _, _) => {}
            (cmd, _, _) => sanakisa::return_error!(format!("bad command {:?}, try help", cmd)),
        }
        Ok(true)
    }
}

fn main() -> error::Returns<()> {
    let args = Args::parse();
    let _logger = logging::init("warn", args.log_dir.as_deref())?;
    let word_list = lexicon::WordList::read_from_file(&args.lexicon)?;
    let game_config = game_config::make_finnish_game_config();
    let rng = match args.seed {
        Some(seed) => rand_chacha::ChaCha20Rng::seed_from_u64(seed),
        None => rand_chacha::ChaCha20Rng::from_os_rng(),
    };
    let players = Box::new([
        game_state::GamePlayer::new("Player 1", true, rating::INITIAL_RATING),
        game_state::GamePlayer::new(&format!("Computer ({})", args.difficulty), false, 1100),
    ]);
    let mut shell = Shell {
        game_config: &game_config,
        word_list: &word_list,
        move_generator: movegen::MoveGenerator::new(&game_config, &word_list),
        game_state: game_state::GameState::with_players(&game_config, players),
        difficulty: args.difficulty,
        rng,
    };
    shell.game_state.reset_and_draw_tiles(&mut shell.rng);
    shell.show();

    let mut rl = rustyline::DefaultEditor::new()?;
    loop {
        let line = match rl.readline("> ") {
            Ok(line) => line,
            Err(rustyline::error::ReadlineError::Interrupted | rustyline::error::ReadlineError::Eof) => {
                break;
            }
            Err(err) => return Err(err.into()),
        };
        rl.add_history_entry(line.as_str())?;
        match shell_words::split(&line) {
            Ok(words) => match shell.run_command(&words) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => println!("{}", err),
            },
            Err(err) => println!("{}", err),
        }
    }
    Ok(())
}
