// Copyright (C) 2020-2026 Andy Kurnia.

use clap::Parser;
use rand::prelude::*;
use sanakisa::{display, error, game_config, game_state, lexicon, logging, movegen, rating};

// Computer against computer.
#[derive(Parser, Debug)]
#[command(version, about = "Let two computer players play each other")]
struct Args {
    /// Word list, one word per line
    #[arg(short, long)]
    lexicon: String,

    /// Difficulty of the first player
    #[arg(long, default_value = "hard")]
    p1: game_config::Difficulty,

    /// Difficulty of the second player
    #[arg(long, default_value = "easy")]
    p2: game_config::Difficulty,

    /// Number of games
    #[arg(short, long, default_value_t = 1)]
    games: u32,

    /// Seed for the bag and the easy player's choices
    #[arg(short, long)]
    seed: Option<u64>,

    /// Give up on a game after this many turns
    #[arg(long, default_value_t = 500)]
    max_turns: u32,

    /// Only print results
    #[arg(short, long)]
    quiet: bool,

    /// Write logs here instead of stderr
    #[arg(long)]
    log_dir: Option<String>,
}

fn main() -> error::Returns<()> {
    let args = Args::parse();
    let _logger = logging::init("info", args.log_dir.as_deref())?;
    let word_list = lexicon::WordList::read_from_file(&args.lexicon)?;
    let game_config = game_config::make_finnish_game_config();
    let mut move_generator = movegen::MoveGenerator::new(&game_config, &word_list);
    let mut rng = match args.seed {
        Some(seed) => rand_chacha::ChaCha20Rng::seed_from_u64(seed),
        None => rand_chacha::ChaCha20Rng::from_os_rng(),
    };
    let difficulties = [args.p1, args.p2];
    let mut game_state = game_state::GameState::with_players(
        &game_config,
        difficulties
            .iter()
            .enumerate()
            .map(|(i, d)| {
                game_state::GamePlayer::new(
                    &format!("p{} ({})", i + 1, d),
                    false,
                    rating::INITIAL_RATING,
                )
            })
            .collect(),
    );

    let mut wins = [0u32; 2];
    let mut draws = 0u32;
    for game_num in 1..=args.games {
        game_state.reset_and_draw_tiles(&mut rng);
        let mut num_turns = 0;
        while !game_state.is_over() {
            if num_turns >= args.max_turns {
                log::warn!("game {} stopped after {} turns", game_num, num_turns);
                break;
            }
            num_turns += 1;
            let turn = game_state.turn as usize;
            if !args.quiet {
                println!(
                    "{} rack {}",
                    game_state.current_player().name,
                    game_config.alphabet().fmt_rack(&game_state.current_player().rack)
                );
            }
            let outcome =
                game_state.computer_turn(&mut move_generator, difficulties[turn], &mut rng)?;
            if !args.quiet {
                match outcome {
                    game_state::TurnOutcome::Played { description, .. } => {
                        println!("  {}", description)
                    }
                    game_state::TurnOutcome::Exchanged(n) => println!("  exchanged {}", n),
                    game_state::TurnOutcome::Passed => println!("  passed"),
                }
            }
        }
        if !args.quiet {
            display::print_game_state(&game_state);
        }
        match game_state.result {
            Some(game_state::GameResult::Winner(w)) => wins[w as usize] += 1,
            Some(game_state::GameResult::Draw) => draws += 1,
            None => {}
        }
        println!(
            "game {}: {} (p1 {} wins, p2 {} wins, {} draws)",
            game_num,
            game_state.fmt_scores(),
            wins[0],
            wins[1],
            draws
        );
    }
    Ok(())
}
