// Copyright (C) 2020-2026 Andy Kurnia.

pub const INITIAL_RATING: i32 = 1200;
pub const K_FACTOR: f64 = 32.0;
pub const RATING_SCALE: f64 = 400.0;
pub const RATING_FLOOR: i32 = 800;

// chance that a player rated `rating` beats one rated `opponent`.
#[inline(always)]
pub fn expected_score(rating: i32, opponent: i32) -> f64 {
    1.0 / (1.0 + 10f64.powf((opponent - rating) as f64 / RATING_SCALE))
}

// returns the new (winner, loser) ratings. neither drops below the floor.
pub fn rate_win(winner: i32, loser: i32) -> (i32, i32) {
    let delta = (K_FACTOR * (1.0 - expected_score(winner, loser))).round() as i32;
    (
        (winner + delta).max(RATING_FLOOR),
        (loser - delta).max(RATING_FLOOR),
    )
}
