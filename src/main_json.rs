// Copyright (C) 2020-2026 Andy Kurnia.

use clap::Parser;
use rand::prelude::*;
use sanakisa::{error, game_config, kibitzer, lexicon, logging, movegen};
use std::io::Read;

// Answers one question on stdout. See kibitzer::Question for the format.
#[derive(Parser, Debug)]
#[command(version, about = "Find the computer's move for a position given as JSON")]
struct Args {
    /// Question file, stdin if absent
    question: Option<String>,

    /// Pretty-print the answer
    #[arg(short, long)]
    pretty: bool,
}

fn main() -> error::Returns<()> {
    let args = Args::parse();
    let _logger = logging::init("warn", None)?;
    let data = match &args.question {
        Some(filename) => std::fs::read_to_string(filename)?,
        None => {
            let mut data = String::new();
            std::io::stdin().read_to_string(&mut data)?;
            data
        }
    };
    let question = serde_json::from_str::<kibitzer::Question>(&data)?;

    let game_config = game_config::make_finnish_game_config();
    let word_list = lexicon::WordList::read_from_file(&question.lexicon)?;
    let mut kibitzer = kibitzer::Kibitzer::new(&game_config);
    kibitzer.prepare(&game_config, &question.rack, &question.board)?;

    let mut rng = match question.seed {
        Some(seed) => rand_chacha::ChaCha20Rng::seed_from_u64(seed),
        None => rand_chacha::ChaCha20Rng::from_os_rng(),
    };
    let mut move_generator = movegen::MoveGenerator::new(&game_config, &word_list);
    let found = move_generator.find_best_move(
        &kibitzer.board,
        &kibitzer.rack,
        question.difficulty,
        &mut rng,
    )?;
    let answer = kibitzer::JsonPlay::from(found.as_ref());
    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&answer)?);
    } else {
        println!("{}", serde_json::to_string(&answer)?);
    }
    Ok(())
}
