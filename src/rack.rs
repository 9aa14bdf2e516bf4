// Copyright (C) 2020-2026 Andy Kurnia.

use super::alphabet::WILDCARD;
use std::collections::BTreeMap;

// Multiset of tiles. Entries that drop to zero are kept so keys stay stable.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rack {
    counts: BTreeMap<char, u8>,
}

// One tile taken out of a rack. Dropping it puts the tile back.
pub struct Held<'a> {
    rack: &'a mut Rack,
    letter: char,
}

impl std::ops::Deref for Held<'_> {
    type Target = Rack;

    #[inline(always)]
    fn deref(&self) -> &Rack {
        self.rack
    }
}

impl std::ops::DerefMut for Held<'_> {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut Rack {
        self.rack
    }
}

impl Drop for Held<'_> {
    #[inline(always)]
    fn drop(&mut self) {
        self.rack.put_back(self.letter);
    }
}

impl Rack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn count(&self, letter: char) -> u8 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    #[inline(always)]
    pub fn put_back(&mut self, letter: char) {
        *self.counts.entry(letter).or_insert(0) += 1;
    }

    // false (and no change) if the letter is not available.
    #[inline(always)]
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    // take() scoped to the lifetime of the returned guard.
    #[inline(always)]
    pub fn hold(&mut self, letter: char) -> Option<Held<'_>> {
        if self.take(letter) {
            Some(Held { rack: self, letter })
        } else {
            None
        }
    }

    // every letter ever seen, including those currently at zero.
    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.counts.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.counts.values().map(|&c| c as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.values().all(|&c| c == 0)
    }

    pub fn tiles(&self) -> Vec<char> {
        self.counts
            .iter()
            .flat_map(|(&letter, &count)| std::iter::repeat_n(letter, count as usize))
            .collect()
    }

    // this rack plus extra letters, e.g. the ones already on the board along a lane.
    pub fn merged<I: IntoIterator<Item = char>>(&self, extra: I) -> Self {
        let mut ret = self.clone();
        extra.into_iter().for_each(|letter| ret.put_back(letter));
        ret
    }

    // Tiles that would pay for the letters: the letter itself if held, else a blank.
    // None if the rack cannot pay for all of them.
    pub fn tiles_for(&self, letters: &[char]) -> Option<Vec<char>> {
        let mut scratch = self.clone();
        letters
            .iter()
            .map(|&letter| {
                if scratch.take(letter) {
                    Some(letter)
                } else if scratch.take(WILDCARD) {
                    Some(WILDCARD)
                } else {
                    None
                }
            })
            .collect()
    }

    // Removes the tiles paying for the letters. On failure the rack is unchanged.
    pub fn remove_played(&mut self, letters: &[char]) -> Option<Vec<char>> {
        let tiles = self.tiles_for(letters)?;
        for &tile in tiles.iter() {
            self.take(tile);
        }
        Some(tiles)
    }
}

impl FromIterator<char> for Rack {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::new().merged(iter)
    }
}

impl std::str::FromStr for Rack {
    type Err = String;

    // "tes*" or "TES?". '?' is accepted for the blank.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                '?' | WILDCARD => Ok(WILDCARD),
                c if c.is_alphabetic() => Ok(c.to_lowercase().next().unwrap_or(c)),
                c => Err(format!("invalid tile {c:?} in {s:?}")),
            })
            .collect()
    }
}

impl std::fmt::Display for Rack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for tile in self.tiles() {
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}
