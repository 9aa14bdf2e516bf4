// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, rack};
use rand::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Bag(pub Vec<char>);

impl Bag {
    // freq copies of every letter, blanks included. unshuffled.
    pub fn new(letters: &alphabet::LetterTable) -> Bag {
        let mut bag = Vec::with_capacity(letters.num_tiles());
        for (letter, value) in letters.iter() {
            for _ in 0..value.freq {
                bag.push(letter);
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

    // Tops the rack up to rack_size, or until the bag runs out. Returns the tiles drawn.
    pub fn replenish(&mut self, rack: &mut rack::Rack, rack_size: usize) -> Vec<char> {
        let num_to_draw = std::cmp::min(rack_size.saturating_sub(rack.len()), self.0.len());
        let drawn = self.0.split_off(self.0.len() - num_to_draw);
        for &tile in drawn.iter() {
            rack.put_back(tile);
        }
        drawn
    }
}
