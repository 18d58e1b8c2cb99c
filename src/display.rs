// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, board_layout, game_state};
use std::fmt::Write;

#[inline(always)]
pub fn empty_label(board_layout: &board_layout::BoardLayout, row: i8, col: i8) -> char {
    if board_layout.is_star(row, col) {
        return '*';
    }
    let premium = board_layout.premium_at(row, col);
    match (premium.word_multiplier, premium.tile_multiplier) {
        (3, _) => '=',
        (2, _) => '-',
        (_, 3) => '"',
        (_, 2) => '\'',
        _ => ' ',
    }
}

// pending tiles are followed by a '+' instead of a space.
pub fn format_board(board_layout: &board_layout::BoardLayout, board: &board::Board) -> String {
    let dim = board_layout.dim();
    let mut s = String::new();
    let col_header = |s: &mut String| {
        s.push_str("  ");
        for c in 0..dim.cols {
            s.push(' ');
            s.push((b'A' + c as u8) as char);
        }
        s.push('\n');
    };
    let border = |s: &mut String| {
        s.push_str("  +");
        for _ in 1..dim.cols {
            s.push_str("--");
        }
        s.push_str("-+\n");
    };
    col_header(&mut s);
    border(&mut s);
    for r in 0..dim.rows {
        let _ = write!(s, "{:2}|", r + 1);
        let mut gap = "";
        for c in 0..dim.cols {
            s.push_str(gap);
            match board.get(r, c) {
                Some(board_tile) => {
                    s.push(board_tile.tile.label());
                    gap = if board_tile.fixed { " " } else { "+" };
                }
                None => {
                    s.push(empty_label(board_layout, r, c));
                    gap = " ";
                }
            }
        }
        let _ = writeln!(s, "|{}", r + 1);
    }
    border(&mut s);
    col_header(&mut s);
    s
}

// "8H" is across from row 8 col H, "H8" is down. Returns (down, lane, idx).
pub fn parse_coord(board_layout: &board_layout::BoardLayout, s: &str) -> Option<(bool, i8, i8)> {
    let s = s.trim().to_ascii_uppercase();
    let first = s.chars().next()?;
    let down = first.is_ascii_uppercase();
    let (col_part, row_part) = if down {
        s.split_at(1)
    } else {
        let split = s.find(|c: char| !c.is_ascii_digit())?;
        let (row_part, col_part) = s.split_at(split);
        (col_part, row_part)
    };
    let mut col_chars = col_part.chars();
    let col_char = col_chars.next()?;
    if col_chars.next().is_some() || !col_char.is_ascii_uppercase() {
        return None;
    }
    let col = (col_char as u8 - b'A') as i8;
    let row = row_part.parse::<i8>().ok()?.checked_sub(1)?;
    if !board_layout.dim().contains(row, col) {
        return None;
    }
    Some(if down { (true, col, row) } else { (false, row, col) })
}

pub fn print_board(board_layout: &board_layout::BoardLayout, board: &board::Board) {
    print!("{}", format_board(board_layout, board));
}

pub fn print_game_state(game_state: &game_state::GameState<'_>) {
    let alphabet = game_state.game_config.alphabet();
    print_board(game_state.game_config.board_layout(), &game_state.board);
    for (i, player) in game_state.players.iter().enumerate() {
        println!(
            "{} {:<14} {:>4}  rating {:<5} {}",
            if i == game_state.turn as usize { '>' } else { ' ' },
            player.name,
            player.score,
            player.rating,
            if player.is_human {
                alphabet.fmt_rack(&player.rack)
            } else {
                "-".repeat(player.rack.len())
            }
        );
    }
    println!("bag: {} tiles", game_state.bag.len());
}
