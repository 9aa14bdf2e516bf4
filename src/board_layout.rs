// Copyright (C) 2020-2026 Andy Kurnia.

use super::matrix;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Premium {
    Empty,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
    // the centre. doubles the word until a committed play consumes it.
    Start,
}

impl Premium {
    #[inline(always)]
    pub fn letter_multiplier(self) -> i32 {
        match self {
            Premium::DoubleLetter => 2,
            Premium::TripleLetter => 3,
            _ => 1,
        }
    }

    #[inline(always)]
    pub fn word_multiplier(self) -> i32 {
        match self {
            Premium::DoubleWord | Premium::Start => 2,
            Premium::TripleWord => 3,
            _ => 1,
        }
    }
}

pub const DIM: matrix::Dim = matrix::Dim { rows: 15, cols: 15 };
pub const CENTRE: matrix::Coord = matrix::Coord { row: 7, col: 7 };

use self::Premium::{
    DoubleLetter as DLS, DoubleWord as DWS, Empty as FVS, Start as STA, TripleLetter as TLS,
    TripleWord as TWS,
};

pub static STANDARD_LAYOUT: [Premium; 225] = [
    TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
    FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, //
    FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
    DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, //
    FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, //
    FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
    FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS, //
    TWS, FVS, FVS, DLS, FVS, FVS, FVS, STA, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
    FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS, //
    FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
    FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, //
    DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, //
    FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
    FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, //
    TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
];

// Per-game copy of the premium layer. Only the centre ever changes.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PremiumBoard {
    premiums: Box<[Premium]>,
}

impl Default for PremiumBoard {
    fn default() -> Self {
        Self::standard()
    }
}

impl PremiumBoard {
    pub fn standard() -> Self {
        Self {
            premiums: STANDARD_LAYOUT[..].into(),
        }
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        DIM
    }

    #[inline(always)]
    pub fn premium_at(&self, row: i8, col: i8) -> Premium {
        self.premiums[DIM.at_row_col(row, col)]
    }

    pub fn start_available(&self) -> bool {
        self.premium_at(CENTRE.row, CENTRE.col) == Premium::Start
    }

    // Degrades every Start cell covered by the word to Empty.
    // Returns whether anything was consumed.
    pub fn consume(
        &mut self,
        word_len: usize,
        start: matrix::Coord,
        direction: matrix::Direction,
    ) -> bool {
        let mut consumed = false;
        for i in 0..word_len as i8 {
            let coord = start.offset(direction, i);
            if !DIM.contains(coord) {
                break;
            }
            let premium = &mut self.premiums[DIM.at(coord)];
            if *premium == Premium::Start {
                *premium = Premium::Empty;
                consumed = true;
            }
        }
        consumed
    }
}
