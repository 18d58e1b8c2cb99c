// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod alphabet;
pub mod anchors;
pub mod bag;
pub mod board;
pub mod board_layout;
pub mod cross_check;
pub mod display;
pub mod fash;
pub mod game_config;
pub mod game_state;
pub mod kibitzer;
pub mod lexicon;
pub mod logging;
pub mod matrix;
pub mod move_filter;
pub mod move_picker;
pub mod movegen;
pub mod placement;
pub mod play_checker;
pub mod play_scorer;
pub mod rating;
pub mod tile;
pub mod words;
