// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, board_layout, error, game_config, lexicon, play_scorer, tile};

// Why the tiles a player has put down cannot be submitted yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingError {
    NothingPlaced,
    NotInLine,
    Gap,
    MissesCenter,
    NotConnected,
    NoWords,
    // lower case, in board order.
    InvalidWords(Vec<String>),
    Invariant(error::InvariantViolation),
}

impl From<error::InvariantViolation> for PendingError {
    #[inline(always)]
    fn from(violation: error::InvariantViolation) -> Self {
        PendingError::Invariant(violation)
    }
}

impl std::fmt::Display for PendingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PendingError::NothingPlaced => write!(f, "place some tiles first"),
            PendingError::NotInLine => write!(f, "tiles must share one row or one column"),
            PendingError::Gap => write!(f, "tiles must form one unbroken line"),
            PendingError::MissesCenter => write!(f, "the first word must cover the center square"),
            PendingError::NotConnected => write!(f, "the word must touch tiles already played"),
            PendingError::NoWords => write!(f, "no word formed"),
            PendingError::InvalidWords(words) => {
                write!(f, "invalid word")?;
                if words.len() > 1 {
                    write!(f, "s")?;
                }
                for (i, word) in words.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { ", " };
                    write!(f, "{}{}", sep, word.to_uppercase())?;
                }
                Ok(())
            }
            PendingError::Invariant(x) => x.fmt(f),
        }
    }
}

impl std::error::Error for PendingError {}

// Placement rules for the pending tiles, before any word is looked up.
// Returns the pending cells in board order.
pub fn check_layout(
    board: &board::Board,
    board_layout: &board_layout::BoardLayout,
) -> Result<Vec<(i8, i8)>, PendingError> {
    let pending = board.pending_cells();
    let Some(&(first_row, first_col)) = pending.first() else {
        return Err(PendingError::NothingPlaced);
    };
    let same_row = pending.iter().all(|&(row, _)| row == first_row);
    let same_col = pending.iter().all(|&(_, col)| col == first_col);
    if !same_row && !same_col {
        return Err(PendingError::NotInLine);
    }
    // board order is row-major, so the ends are the first and last cells.
    let &(last_row, last_col) = pending.last().unwrap_or(&(first_row, first_col));
    if same_row {
        if (first_col..=last_col).any(|col| !board.is_occupied(first_row, col)) {
            return Err(PendingError::Gap);
        }
    } else if (first_row..=last_row).any(|row| !board.is_occupied(row, first_col)) {
        return Err(PendingError::Gap);
    }
    if !board.has_fixed_tiles() {
        if !pending
            .iter()
            .any(|&(row, col)| board_layout.is_star(row, col))
        {
            return Err(PendingError::MissesCenter);
        }
    } else if !pending.iter().any(|&(row, col)| {
        board.is_fixed(row - 1, col)
            || board.is_fixed(row + 1, col)
            || board.is_fixed(row, col - 1)
            || board.is_fixed(row, col + 1)
    }) {
        return Err(PendingError::NotConnected);
    }
    Ok(pending)
}

// Full check of the pending tiles, scored the same way the computer's moves
// are. Nothing on the board changes.
pub fn check_pending<L: lexicon::Lexicon + ?Sized>(
    board: &board::Board,
    game_config: &game_config::GameConfig<'_>,
    lexicon: &L,
    play_scorer: &mut play_scorer::PlayScorer,
) -> Result<play_scorer::ScoredPlay, PendingError> {
    let pending = check_layout(board, game_config.board_layout())?;
    let scored = play_scorer.score_play(board, game_config, &pending)?;
    if scored.words.is_empty() {
        return Err(PendingError::NoWords);
    }
    let invalid_words = scored
        .words
        .iter()
        .filter(|x| !lexicon.is_valid(&x.word.text))
        .map(|x| x.word.text.clone())
        .collect::<Vec<_>>();
    if !invalid_words.is_empty() {
        return Err(PendingError::InvalidWords(invalid_words));
    }
    Ok(scored)
}

// "KISSA (7p)  +40 bingo!" style summary.
pub fn describe(game_config: &game_config::GameConfig<'_>, scored: &play_scorer::ScoredPlay) -> String {
    let mut parts = scored
        .words
        .iter()
        .map(|x| {
            format!(
                "{} ({}p)",
                x.word.text.chars().map(tile::upper).collect::<String>(),
                x.score
            )
        })
        .collect::<Vec<_>>();
    let bonus = game_config.num_played_bonus(scored.num_played);
    if bonus != 0 {
        parts.push(format!("+{} bingo!", bonus));
    }
    format!("{} = {}", parts.join("  "), scored.score)
}
