// Copyright (C) 2020-2026 Andy Kurnia.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    pub const BOTH: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];

    #[inline(always)]
    pub fn flip(self) -> Self {
        match self {
            Direction::Horizontal => Direction::Vertical,
            Direction::Vertical => Direction::Horizontal,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Direction::Horizontal => "H",
            Direction::Vertical => "V",
        })
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "h" | "horizontal" | "across" => Ok(Direction::Horizontal),
            "v" | "vertical" | "down" => Ok(Direction::Vertical),
            _ => Err(format!("invalid direction {s:?}")),
        }
    }
}

// 0-based, row first.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Coord {
    pub row: i8,
    pub col: i8,
}

impl Coord {
    #[inline(always)]
    pub fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    // may leave the board, check with Dim::contains.
    #[inline(always)]
    pub fn offset(self, direction: Direction, by: i8) -> Self {
        match direction {
            Direction::Horizontal => Self::new(self.row, self.col + by),
            Direction::Vertical => Self::new(self.row + by, self.col),
        }
    }

    // index of this cell along a lane running in the given direction.
    #[inline(always)]
    pub fn idx(self, direction: Direction) -> i8 {
        match direction {
            Direction::Horizontal => self.col,
            Direction::Vertical => self.row,
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone)]
pub struct Strider {
    base: i16,
    step: i8,
    len: i8,
}

impl Strider {
    #[inline(always)]
    pub fn len(&self) -> i8 {
        self.len
    }

    #[inline(always)]
    pub fn at(&self, idx: i8) -> usize {
        ((self.base as isize) + (idx as isize) * (self.step as isize)) as usize
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

impl Dim {
    #[inline(always)]
    pub fn across(&self, row: i8) -> Strider {
        Strider {
            base: (row as i16) * (self.cols as i16),
            step: 1,
            len: self.cols,
        }
    }

    #[inline(always)]
    pub fn down(&self, col: i8) -> Strider {
        Strider {
            base: col as i16,
            step: self.cols,
            len: self.rows,
        }
    }

    // the lane through coord running in direction. index it with coord.idx(direction).
    #[inline(always)]
    pub fn lane(&self, direction: Direction, coord: Coord) -> Strider {
        match direction {
            Direction::Horizontal => self.across(coord.row),
            Direction::Vertical => self.down(coord.col),
        }
    }

    #[inline(always)]
    pub fn len_along(&self, direction: Direction) -> i8 {
        match direction {
            Direction::Horizontal => self.cols,
            Direction::Vertical => self.rows,
        }
    }

    #[inline(always)]
    pub fn num_cells(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    #[inline(always)]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row >= 0 && coord.row < self.rows && coord.col >= 0 && coord.col < self.cols
    }

    #[inline(always)]
    pub fn at_row_col(&self, row: i8, col: i8) -> usize {
        (((row as isize) * (self.cols as isize)) + (col as isize)) as usize
    }

    #[inline(always)]
    pub fn at(&self, coord: Coord) -> usize {
        self.at_row_col(coord.row, coord.col)
    }

    // every cell, row-major.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (rows, cols) = (self.rows, self.cols);
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Coord::new(row, col)))
    }
}
