// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("invalid difficulty {:?} (easy, medium, hard)", s)),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

pub struct StaticGameConfig<'a> {
    alphabet: &'a alphabet::Alphabet<'a>,
    board_layout: board_layout::BoardLayout,
    rack_size: i8,
    num_players: u8,
    num_passes_to_end: u8,
    bingo_bonus: i16,
    long_word_bonus: i16,
    long_word_min_len: usize,
    time_budgets_ms: [u64; 3], // easy, medium, hard
}

pub enum GameConfig<'a> {
    Static(StaticGameConfig<'a>),
}

impl<'a> GameConfig<'a> {
    #[inline(always)]
    pub fn alphabet(&self) -> &alphabet::Alphabet<'a> {
        match self {
            GameConfig::Static(x) => x.alphabet,
        }
    }

    #[inline(always)]
    pub fn board_layout(&self) -> &board_layout::BoardLayout {
        match self {
            GameConfig::Static(x) => &x.board_layout,
        }
    }

    #[inline(always)]
    pub fn rack_size(&self) -> i8 {
        match self {
            GameConfig::Static(x) => x.rack_size,
        }
    }

    #[inline(always)]
    pub fn num_players(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.num_players,
        }
    }

    #[inline(always)]
    pub fn num_passes_to_end(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.num_passes_to_end,
        }
    }

    // added once per play, not per word.
    #[inline(always)]
    pub fn num_played_bonus(&self, num_played: usize) -> i16 {
        match self {
            GameConfig::Static(x) => {
                if num_played >= x.rack_size as usize {
                    x.bingo_bonus
                } else {
                    0
                }
            }
        }
    }

    // added to each word, after its multiplier.
    #[inline(always)]
    pub fn long_word_bonus(&self, num_letters: usize) -> i16 {
        match self {
            GameConfig::Static(x) => {
                if num_letters >= x.long_word_min_len {
                    x.long_word_bonus
                } else {
                    0
                }
            }
        }
    }

    #[inline(always)]
    pub fn time_budget(&self, difficulty: Difficulty) -> std::time::Duration {
        match self {
            GameConfig::Static(x) => std::time::Duration::from_millis(
                x.time_budgets_ms[match difficulty {
                    Difficulty::Easy => 0,
                    Difficulty::Medium => 1,
                    Difficulty::Hard => 2,
                }],
            ),
        }
    }

    // weaker play tries short words first.
    #[inline(always)]
    pub fn shortest_words_first(&self, difficulty: Difficulty) -> bool {
        difficulty == Difficulty::Easy
    }
}

pub fn make_finnish_game_config() -> GameConfig<'static> {
    GameConfig::Static(StaticGameConfig {
        alphabet: &alphabet::FINNISH_ALPHABET,
        board_layout: board_layout::make_finnish_board_layout(),
        rack_size: 7,
        num_players: 2,
        num_passes_to_end: 4,
        bingo_bonus: 40,
        long_word_bonus: 10,
        long_word_min_len: 7,
        time_budgets_ms: [800, 2000, 4000],
    })
}

// no premium squares. handy when only the base scoring matters.
pub fn make_plain_finnish_game_config() -> GameConfig<'static> {
    GameConfig::Static(StaticGameConfig {
        alphabet: &alphabet::FINNISH_ALPHABET,
        board_layout: board_layout::make_plain_board_layout(),
        rack_size: 7,
        num_players: 2,
        num_passes_to_end: 4,
        bingo_bonus: 40,
        long_word_bonus: 10,
        long_word_min_len: 7,
        time_budgets_ms: [800, 2000, 4000],
    })
}
