// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board_layout, matrix};
use std::collections::BTreeMap;

// Letters on the table. Indices are trusted; out-of-range access panics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    tiles: Box<[Option<char>]>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            tiles: vec![None; board_layout::DIM.num_cells()].into_boxed_slice(),
        }
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        board_layout::DIM
    }

    #[inline(always)]
    pub fn get(&self, row: i8, col: i8) -> Option<char> {
        assert!(self.dim().contains(matrix::Coord::new(row, col)));
        self.tiles[self.dim().at_row_col(row, col)]
    }

    #[inline(always)]
    pub fn set(&mut self, row: i8, col: i8, letter: char) {
        assert!(self.dim().contains(matrix::Coord::new(row, col)));
        self.tiles[self.dim().at_row_col(row, col)] = Some(letter);
    }

    #[inline(always)]
    pub fn at(&self, coord: matrix::Coord) -> Option<char> {
        self.get(coord.row, coord.col)
    }

    // None for off-board cells, so walks can stop at the edge without a separate check.
    #[inline(always)]
    pub fn occupied_at(&self, coord: matrix::Coord) -> Option<char> {
        if self.dim().contains(coord) {
            self.tiles[self.dim().at(coord)]
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn tiles(&self) -> &[Option<char>] {
        &self.tiles
    }

    // Pure write. Legality is the validator's job.
    pub fn place_word(&mut self, word: &str, start: matrix::Coord, direction: matrix::Direction) {
        for (i, letter) in (0..).zip(word.chars()) {
            let coord = start.offset(direction, i);
            self.set(coord.row, coord.col, letter);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.iter().all(|tile| tile.is_none())
    }

    pub fn is_full(&self) -> bool {
        self.tiles.iter().all(|tile| tile.is_some())
    }

    pub fn num_tiles(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_some()).count()
    }

    // occupied cells from start (inclusive) to the edge, keyed by offset from start.
    pub fn letters_along(
        &self,
        start: matrix::Coord,
        direction: matrix::Direction,
    ) -> BTreeMap<usize, char> {
        let strider = self.dim().lane(direction, start);
        let idx = start.idx(direction);
        (idx..strider.len())
            .filter_map(|i| self.tiles[strider.at(i)].map(|c| ((i - idx) as usize, c)))
            .collect()
    }
}

impl serde::Serialize for Board {
    // {"grid": [[...15 strings...] x 15], "shape": [15, 15]}, empty cells as "".
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let dim = self.dim();
        let grid = (0..dim.rows)
            .map(|r| {
                (0..dim.cols)
                    .map(|c| self.get(r, c).map(String::from).unwrap_or_default())
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();
        let mut state = serializer.serialize_struct("Board", 2)?;
        state.serialize_field("grid", &grid)?;
        state.serialize_field("shape", &[dim.rows, dim.cols])?;
        state.end()
    }
}
