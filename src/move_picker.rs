// Copyright (C) 2020-2026 Andy Kurnia.

use super::movegen;
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PickPolicy {
    // highest score, first found wins ties.
    Best,
    // uniformly among the n highest scores.
    RandomTop(usize),
}

pub enum MovePicker {
    Best(Option<movegen::Move>),
    RandomTop {
        top: usize,
        moves: Vec<movegen::Move>,
    },
}

impl MovePicker {
    pub fn new(policy: PickPolicy) -> Self {
        match policy {
            PickPolicy::Best => MovePicker::Best(None),
            PickPolicy::RandomTop(top) => MovePicker::RandomTop {
                top: top.max(1),
                moves: Vec::new(),
            },
        }
    }

    #[inline(always)]
    pub fn offer(&mut self, candidate: movegen::Move) {
        match self {
            MovePicker::Best(best) => {
                if best.as_ref().is_none_or(|x| candidate.score > x.score) {
                    *best = Some(candidate);
                }
            }
            MovePicker::RandomTop { moves, .. } => moves.push(candidate),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            MovePicker::Best(best) => best.is_none(),
            MovePicker::RandomTop { moves, .. } => moves.is_empty(),
        }
    }

    pub fn pick(self, rng: &mut dyn RngCore) -> Option<movegen::Move> {
        match self {
            MovePicker::Best(best) => best,
            MovePicker::RandomTop { top, mut moves } => {
                if moves.is_empty() {
                    return None;
                }
                // stable, so equal scores stay in the order they were found.
                moves.sort_by(|a, b| b.score.cmp(&a.score));
                let n = top.min(moves.len());
                let chosen = rng.random_range(0..n);
                Some(moves.swap_remove(chosen))
            }
        }
    }
}
