// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, tile};
use rand::prelude::*;

// tiles are drawn from the end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bag(pub Vec<tile::Tile>);

impl Bag {
    pub fn new(alphabet: &alphabet::Alphabet<'_>) -> Bag {
        let mut bag = Vec::with_capacity(alphabet.num_tiles() as usize);
        for idx in 0..alphabet.len() {
            for _ in 0..alphabet.freq(idx) {
                bag.push(alphabet.make_tile(idx));
            }
        }
        Bag(bag)
    }

    pub fn shuffle(&mut self, mut rng: &mut dyn RngCore) {
        self.0.shuffle(&mut rng);
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn pop(&mut self) -> Option<tile::Tile> {
        self.0.pop()
    }

    // tops the rack up to rack_size, or as far as the bag allows.
    pub fn replenish(&mut self, rack: &mut Vec<tile::Tile>, rack_size: usize) {
        while rack.len() < rack_size {
            match self.pop() {
                Some(t) => rack.push(t),
                None => break,
            }
        }
    }

    // each tile goes back at a random position. blanks lose their letter.
    pub fn put_back(&mut self, rng: &mut dyn RngCore, tiles: &[tile::Tile]) {
        self.0.reserve(tiles.len());
        for &t in tiles {
            let pos = rng.random_range(0..=self.0.len());
            self.0.insert(pos, t.unassigned());
        }
    }
}
