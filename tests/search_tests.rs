// Copyright (C) 2020-2026 Andy Kurnia.

use rand::prelude::*;
use sanakisa::{
    alphabet, board, error, game_config, lexicon, move_picker, movegen, tile,
};

fn rack_of(s: &str) -> Vec<tile::Tile> {
    alphabet::FINNISH_ALPHABET.parse_rack(s).unwrap()
}

fn empty_board(game_config: &game_config::GameConfig<'_>) -> board::Board {
    board::Board::new(game_config.board_layout().dim())
}

fn board_with(game_config: &game_config::GameConfig<'_>, row: usize, s: &str) -> board::Board {
    let mut rows = vec![".".repeat(15); 15];
    rows[row] = s.to_string();
    let rows = rows.iter().map(String::as_str).collect::<Vec<_>>();
    board::Board::from_rows(
        game_config.alphabet(),
        game_config.board_layout().dim(),
        &rows,
    )
    .unwrap()
}

#[test]
fn opening_move_covers_the_star() {
    let game_config = game_config::make_finnish_game_config();
    let word_list = lexicon::WordList::from_words(["kissa"]);
    let mut move_generator = movegen::MoveGenerator::new(&game_config, &word_list);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(0);
    let board = empty_board(&game_config);
    let found = move_generator
        .find_best_move(
            &board,
            &rack_of("AIKSSTE"),
            game_config::Difficulty::Hard,
            &mut rng,
        )
        .unwrap()
        .unwrap();
    // ties keep the first one found, across comes before down.
    assert!(!found.down);
    assert_eq!((found.lane, found.idx), (7, 3));
    assert_eq!(found.word, "kissa");
    assert_eq!(found.score, 7);
    assert_eq!(found.placements.len(), 5);
    assert!(found.new_cells().contains(&(7, 7)));
    assert_eq!(found.to_string(), "8D KISSA 7");
}

#[test]
fn seven_tiles_earn_both_bonuses() {
    let game_config = game_config::make_plain_finnish_game_config();
    let word_list = lexicon::WordList::from_words(["kissoja", "kissa"]);
    let mut move_generator = movegen::MoveGenerator::new(&game_config, &word_list);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(0);
    let found = move_generator
        .find_best_move(
            &empty_board(&game_config),
            &rack_of("KISSOJA"),
            game_config::Difficulty::Hard,
            &mut rng,
        )
        .unwrap()
        .unwrap();
    // K3 I1 S1 S1 O2 J4 A1, +40 for seven tiles, +10 for a long word.
    assert_eq!(found.word, "kissoja");
    assert_eq!(found.score, 63);
}

#[test]
fn blank_stands_in_for_a_missing_letter() {
    let game_config = game_config::make_finnish_game_config();
    let word_list = lexicon::WordList::from_words(["kissa"]);
    let mut move_generator = movegen::MoveGenerator::new(&game_config, &word_list);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(0);
    let found = move_generator
        .find_best_move(
            &empty_board(&game_config),
            &rack_of("KISA?"),
            game_config::Difficulty::Hard,
            &mut rng,
        )
        .unwrap()
        .unwrap();
    // the blank scores nothing.
    assert_eq!(found.score, 6);
    let blanks = found
        .placements
        .iter()
        .filter(|p| p.tile.is_blank())
        .collect::<Vec<_>>();
    assert_eq!(blanks.len(), 1);
    assert_eq!(blanks[0].tile.face(), Some('S'));
}

#[test]
fn cross_words_must_be_valid() {
    let game_config = game_config::make_finnish_game_config();
    let word_list = lexicon::WordList::from_words(["on"]);
    let mut move_generator = movegen::MoveGenerator::new(&game_config, &word_list);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(0);
    // every spot next to the Ö makes a word with it.
    let board = board_with(&game_config, 7, ".......Ö.......");
    assert_eq!(
        move_generator.find_best_move(
            &board,
            &rack_of("ON"),
            game_config::Difficulty::Hard,
            &mut rng,
        ),
        Ok(None)
    );
}

#[test]
fn builds_on_board_letters() {
    let game_config = game_config::make_finnish_game_config();
    let word_list = lexicon::WordList::from_words(["talo", "ta"]);
    let mut move_generator = movegen::MoveGenerator::new(&game_config, &word_list);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(0);
    let board = board_with(&game_config, 7, "......TALO.....");
    let found = move_generator
        .find_best_move(
            &board,
            &rack_of("A"),
            game_config::Difficulty::Hard,
            &mut rng,
        )
        .unwrap()
        .unwrap();
    // the A can only go under the T.
    assert_eq!(found.word, "ta");
    assert!(found.down);
    assert_eq!((found.lane, found.idx), (6, 7));
    assert_eq!(found.new_cells(), vec![(8, 6)]);
    assert_eq!(found.score, 2);
}

#[test]
fn caller_board_is_left_alone() {
    let game_config = game_config::make_finnish_game_config();
    let word_list = lexicon::WordList::from_words(["kissa"]);
    let mut move_generator = movegen::MoveGenerator::new(&game_config, &word_list);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(0);
    let mut board = empty_board(&game_config);
    // a pending tile is not part of the position.
    board
        .set(0, 0, tile::BoardTile::pending(tile::Tile::letter('C', 10)))
        .unwrap();
    let before = board.clone();
    let found = move_generator
        .find_best_move(
            &board,
            &rack_of("AIKSSTE"),
            game_config::Difficulty::Medium,
            &mut rng,
        )
        .unwrap()
        .unwrap();
    assert_eq!(found.to_string(), "8D KISSA 7");
    assert_eq!(board, before);
}

#[test]
fn zero_budget_finds_nothing() {
    let game_config = game_config::make_finnish_game_config();
    let word_list = lexicon::WordList::from_words(["kissa"]);
    let mut move_generator = movegen::MoveGenerator::new(&game_config, &word_list);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(0);
    let params = movegen::SearchParams {
        time_budget: std::time::Duration::ZERO,
        ascending: false,
        policy: move_picker::PickPolicy::Best,
    };
    assert_eq!(
        move_generator.find_best_move_with(
            &empty_board(&game_config),
            &rack_of("KISSA"),
            &params,
            &mut rng,
        ),
        Ok(None)
    );
}

#[test]
fn easy_picks_among_the_top_three() {
    let game_config = game_config::make_finnish_game_config();
    let word_list = lexicon::WordList::from_words(["kissa"]);
    let mut move_generator = movegen::MoveGenerator::new(&game_config, &word_list);
    let board = empty_board(&game_config);
    let rack = rack_of("AIKSSTE");
    let mut seen = std::collections::BTreeSet::new();
    for seed in 0..30 {
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(seed);
        let found = move_generator
            .find_best_move(&board, &rack, game_config::Difficulty::Easy, &mut rng)
            .unwrap()
            .unwrap();
        // ten placements all worth 7, the first three found are across.
        assert_eq!(found.score, 7);
        assert!(!found.down);
        assert_eq!(found.lane, 7);
        assert!((3..=5).contains(&found.idx));
        seen.insert(found.idx);
    }
    assert!(seen.len() > 1);
}

#[test]
fn broken_racks_are_reported() {
    let game_config = game_config::make_finnish_game_config();
    let word_list = lexicon::WordList::from_words(["kissa"]);
    let mut move_generator = movegen::MoveGenerator::new(&game_config, &word_list);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(0);
    let board = empty_board(&game_config);

    let mut rack = rack_of("KISSA?");
    rack[5] = rack[5].assigned('A');
    assert_eq!(
        move_generator.find_best_move(&board, &rack, game_config::Difficulty::Hard, &mut rng),
        Err(error::InvariantViolation::AssignedBlankOnRack { index: 5 })
    );

    assert_eq!(
        move_generator.find_best_move(
            &board,
            &rack_of("KISSAKIS"),
            game_config::Difficulty::Hard,
            &mut rng,
        ),
        Err(error::InvariantViolation::RackTooLarge { len: 8, max: 7 })
    );
}

#[test]
fn empty_rack_or_lexicon_means_no_move() {
    let game_config = game_config::make_finnish_game_config();
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(0);
    let board = empty_board(&game_config);

    let word_list = lexicon::WordList::from_words(["kissa"]);
    let mut move_generator = movegen::MoveGenerator::new(&game_config, &word_list);
    assert_eq!(
        move_generator.find_best_move(&board, &[], game_config::Difficulty::Hard, &mut rng),
        Ok(None)
    );

    let no_words = lexicon::WordList::from_words(Vec::<String>::new());
    let mut move_generator = movegen::MoveGenerator::new(&game_config, &no_words);
    assert_eq!(
        move_generator.find_best_move(
            &board,
            &rack_of("KISSA"),
            game_config::Difficulty::Hard,
            &mut rng,
        ),
        Ok(None)
    );
}

#[test]
fn kissa_from_its_own_letters() {
    let game_config = game_config::make_finnish_game_config();
    let word_list = lexicon::WordList::from_words(["kissa"]);
    let mut move_generator = movegen::MoveGenerator::new(&game_config, &word_list);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(0);
    let found = move_generator
        .find_best_move(
            &empty_board(&game_config),
            &rack_of("KISSA"),
            game_config::Difficulty::Hard,
            &mut rng,
        )
        .unwrap()
        .unwrap();
    assert_eq!(found.to_string(), "8D KISSA 7");
    assert!(found.new_cells().contains(&(7, 7)));
    assert!(found.placements.iter().all(|p| !p.tile.is_blank()));
}

#[test]
fn pointless_plays_are_not_moves() {
    let game_config = game_config::make_finnish_game_config();
    let word_list = lexicon::WordList::from_words(["on"]);
    let mut move_generator = movegen::MoveGenerator::new(&game_config, &word_list);
    let board = empty_board(&game_config);
    for difficulty in [
        game_config::Difficulty::Easy,
        game_config::Difficulty::Medium,
        game_config::Difficulty::Hard,
    ] {
        let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(0);
        // two blanks can spell ON, for nothing.
        assert_eq!(
            move_generator.find_best_move(&board, &rack_of("??"), difficulty, &mut rng),
            Ok(None)
        );
    }
}

#[test]
fn deadline_keeps_what_was_found() {
    let game_config = game_config::make_finnish_game_config();
    let word_list = lexicon::WordList::from_words(["kissa", "kisa"]);
    let mut move_generator = movegen::MoveGenerator::new(&game_config, &word_list);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(0);
    let board = empty_board(&game_config);
    let rack = rack_of("KISSA");
    // shortest first, so KISA is tried before KISSA.
    let params = movegen::SearchParams {
        time_budget: std::time::Duration::from_secs(60),
        ascending: true,
        policy: move_picker::PickPolicy::Best,
    };

    let found = move_generator
        .find_best_move_with(&board, &rack, &params, &mut rng)
        .unwrap()
        .unwrap();
    assert_eq!(found.to_string(), "8D KISSA 7");

    let deadline = movegen::Deadline::with_max_checks(params.time_budget, 1);
    let found = move_generator
        .find_best_move_within(&board, &rack, &params, deadline, &mut rng)
        .unwrap()
        .unwrap();
    assert_eq!(found.to_string(), "8E KISA 6");

    let deadline = movegen::Deadline::with_max_checks(params.time_budget, 0);
    assert_eq!(
        move_generator.find_best_move_within(&board, &rack, &params, deadline, &mut rng),
        Ok(None)
    );
}
