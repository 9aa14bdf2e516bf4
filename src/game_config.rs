// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout};

pub struct StaticGameConfig {
    letters: alphabet::LetterTable,
    premiums: board_layout::PremiumBoard,
    rack_size: u8,
    bingo_bonus: i32,
    num_players: u8,
    num_zeros_to_end: u8,
    max_word_len: usize,
}

pub enum GameConfig {
    Static(StaticGameConfig),
}

impl GameConfig {
    #[inline(always)]
    pub fn letters(&self) -> &alphabet::LetterTable {
        match self {
            GameConfig::Static(x) => &x.letters,
        }
    }

    // template only. each game clones its own.
    #[inline(always)]
    pub fn premiums(&self) -> &board_layout::PremiumBoard {
        match self {
            GameConfig::Static(x) => &x.premiums,
        }
    }

    #[inline(always)]
    pub fn rack_size(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.rack_size,
        }
    }

    #[inline(always)]
    pub fn bingo_bonus(&self) -> i32 {
        match self {
            GameConfig::Static(x) => x.bingo_bonus,
        }
    }

    #[inline(always)]
    pub fn num_players(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.num_players,
        }
    }

    #[inline(always)]
    pub fn num_zeros_to_end(&self) -> u8 {
        match self {
            GameConfig::Static(x) => x.num_zeros_to_end,
        }
    }

    #[inline(always)]
    pub fn max_word_len(&self) -> usize {
        match self {
            GameConfig::Static(x) => x.max_word_len,
        }
    }

    #[inline(always)]
    pub fn num_played_bonus(&self, num_played: usize) -> i32 {
        if num_played == self.rack_size() as usize {
            self.bingo_bonus()
        } else {
            0
        }
    }
}

pub fn make_game_config(letters: alphabet::LetterTable, num_players: u8) -> GameConfig {
    GameConfig::Static(StaticGameConfig {
        letters,
        premiums: board_layout::PremiumBoard::standard(),
        rack_size: 7,
        bingo_bonus: 50,
        num_players: num_players.max(1),
        num_zeros_to_end: 6,
        max_word_len: board_layout::DIM.cols as usize,
    })
}

pub fn make_french_game_config() -> GameConfig {
    make_game_config(alphabet::LetterTable::french(), 2)
}
