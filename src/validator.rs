// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, board_layout, lexicon, matrix};
use matrix::{Coord, Direction};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    pub word: String,
    pub start: Coord,
    pub direction: Direction,
}

impl Placement {
    pub fn new(word: &str, start: Coord, direction: Direction) -> Self {
        Self {
            word: word.to_string(),
            start,
            direction,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    // (coord, letter) for each letter of the word.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        (0..)
            .zip(self.word.chars())
            .map(|(i, letter)| (self.start.offset(self.direction, i), letter))
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.word, self.start, self.direction)
    }
}

// A legal placement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placed {
    // the word as it will read on the board, after absorbing touching letters.
    pub placement: Placement,
    // offsets into placement.word whose letters are already on the board.
    pub already_placed: BTreeMap<usize, char>,
    pub cross_words: Vec<Placement>,
}

impl Placed {
    // letters that must come from the rack, in word order.
    pub fn letters_used(&self) -> Vec<char> {
        (0..)
            .zip(self.placement.word.chars())
            .filter(|(i, _)| !self.already_placed.contains_key(i))
            .map(|(_, letter)| letter)
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("word does not fit on the board")]
    DoesNotFit,
    #[error("word {0:?} is not valid")]
    NotAWord(String),
    #[error("first word must pass through the centre cell")]
    MissesCentre,
    #[error("looking to place letter {expected} at {at} but found {found}")]
    Conflict {
        at: Coord,
        expected: char,
        found: char,
    },
    #[error("word already placed")]
    AlreadyPlaced,
    #[error("word does not touch any letter on the board")]
    NotAdjacent,
    #[error("rack does not hold the letters for {0}")]
    MissingTiles(String),
}

// Decides whether a word may go on the board. Never mutates anything.
pub struct Validator<'a> {
    board: &'a board::Board,
    lexicon: &'a lexicon::Lexicon,
}

impl<'a> Validator<'a> {
    pub fn new(board: &'a board::Board, lexicon: &'a lexicon::Lexicon) -> Self {
        Self { board, lexicon }
    }

    #[inline(always)]
    fn fits(&self, len: usize, start: Coord, direction: Direction) -> bool {
        let dim = self.board.dim();
        let lane_len = dim.len_along(direction) as usize;
        dim.contains(start) && len <= lane_len && start.idx(direction) as usize + len <= lane_len
    }

    // contiguous letters before `at` (exclusive), in board order, and where they start.
    fn run_before(&self, at: Coord, direction: Direction) -> (String, Coord) {
        let mut letters = Vec::new();
        let mut start = at;
        while let Some(letter) = self.board.occupied_at(start.offset(direction, -1)) {
            letters.push(letter);
            start = start.offset(direction, -1);
        }
        (letters.into_iter().rev().collect(), start)
    }

    // contiguous letters from `at` (inclusive) onwards.
    fn run_from(&self, mut at: Coord, direction: Direction) -> String {
        let mut letters = String::new();
        while let Some(letter) = self.board.occupied_at(at) {
            letters.push(letter);
            at = at.offset(direction, 1);
        }
        letters
    }

    // The word extended by the letters already touching either end of it.
    // The word itself must fit on the board.
    pub fn full_word(&self, word: &str, start: Coord, direction: Direction) -> Placement {
        let (prefix, full_start) = self.run_before(start, direction);
        let suffix = self.run_from(
            start.offset(direction, word.chars().count() as i8),
            direction,
        );
        Placement {
            word: format!("{}{}{}", prefix, word, suffix),
            start: full_start,
            direction,
        }
    }

    // The perpendicular word formed by writing letter at an empty cell, if any.
    pub fn cross_word(
        &self,
        at: Coord,
        letter: char,
        direction: Direction,
    ) -> Result<Option<Placement>, Rejection> {
        let perpendicular = direction.flip();
        if self.board.occupied_at(at.offset(perpendicular, -1)).is_none()
            && self.board.occupied_at(at.offset(perpendicular, 1)).is_none()
        {
            return Ok(None);
        }
        let (prefix, start) = self.run_before(at, perpendicular);
        let suffix = self.run_from(at.offset(perpendicular, 1), perpendicular);
        let word = format!("{}{}{}", prefix, letter, suffix);
        tracing::debug!("checking cross word {} at {} {}", word, start, perpendicular);
        if !self.lexicon.is_word(&word) {
            return Err(Rejection::NotAWord(word));
        }
        Ok(Some(Placement {
            word,
            start,
            direction: perpendicular,
        }))
    }

    pub fn check(&self, word: &str, start: Coord, direction: Direction) -> Result<Placed, Rejection> {
        let word = word.to_lowercase();
        if word.is_empty() {
            return Err(Rejection::NotAWord(word));
        }
        if !self.fits(word.chars().count(), start, direction) {
            return Err(Rejection::DoesNotFit);
        }
        let placement = self.full_word(&word, start, direction);
        if !self.fits(placement.len(), placement.start, direction) {
            return Err(Rejection::DoesNotFit);
        }
        if !self.lexicon.is_word(&placement.word) {
            return Err(Rejection::NotAWord(placement.word));
        }
        if self.board.is_empty() {
            self.check_first(placement)
        } else {
            self.check_against_board(placement)
        }
    }

    fn check_first(&self, placement: Placement) -> Result<Placed, Rejection> {
        let centre = board_layout::CENTRE;
        let (lane, idx, centre_lane, centre_idx) = match placement.direction {
            Direction::Horizontal => (
                placement.start.row,
                placement.start.col,
                centre.row,
                centre.col,
            ),
            Direction::Vertical => (
                placement.start.col,
                placement.start.row,
                centre.col,
                centre.row,
            ),
        };
        if lane != centre_lane || idx > centre_idx || idx + (placement.len() as i8) <= centre_idx {
            return Err(Rejection::MissesCentre);
        }
        Ok(Placed {
            placement,
            already_placed: BTreeMap::new(),
            cross_words: Vec::new(),
        })
    }

    fn check_against_board(&self, placement: Placement) -> Result<Placed, Rejection> {
        let mut already_placed = BTreeMap::new();
        let mut cross_words = Vec::new();
        let mut is_touching = false;
        for (i, (at, letter)) in placement.cells().enumerate() {
            match self.board.at(at) {
                Some(found) => {
                    if found != letter {
                        return Err(Rejection::Conflict {
                            at,
                            expected: letter,
                            found,
                        });
                    }
                    already_placed.insert(i, letter);
                    is_touching = true;
                }
                None => {
                    if let Some(cross_word) = self.cross_word(at, letter, placement.direction)? {
                        cross_words.push(cross_word);
                        is_touching = true;
                    }
                }
            }
        }
        if already_placed.len() == placement.len() {
            return Err(Rejection::AlreadyPlaced);
        }
        if !is_touching {
            return Err(Rejection::NotAdjacent);
        }
        Ok(Placed {
            placement,
            already_placed,
            cross_words,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> lexicon::Lexicon {
        ["test", "tout", "atout", "soir", "rat", "ta", "or", "toute", "tester"]
            .into_iter()
            .collect()
    }

    #[test]
    fn full_word_absorbs_touching_letters() {
        let lex = lexicon();
        let mut board = board::Board::new();
        board.place_word("te", Coord::new(7, 5), Direction::Horizontal);
        board.place_word("r", Coord::new(7, 9), Direction::Horizontal);
        let validator = Validator::new(&board, &lex);
        let full = validator.full_word("st", Coord::new(7, 7), Direction::Horizontal);
        assert_eq!(full, Placement::new("testr", Coord::new(7, 5), Direction::Horizontal));
        let alone = validator.full_word("or", Coord::new(0, 0), Direction::Vertical);
        assert_eq!(alone, Placement::new("or", Coord::new(0, 0), Direction::Vertical));
    }

    #[test]
    fn cross_words() {
        let lex = lexicon();
        let mut board = board::Board::new();
        board.place_word("tou", Coord::new(7, 7), Direction::Horizontal);
        let validator = Validator::new(&board, &lex);
        assert_eq!(validator.cross_word(Coord::new(8, 7), 'a', Direction::Vertical), Ok(None));
        assert_eq!(validator.cross_word(Coord::new(6, 8), 'x', Direction::Vertical), Ok(None));
        assert_eq!(
            validator.cross_word(Coord::new(7, 10), 't', Direction::Vertical),
            Ok(Some(Placement::new("tout", Coord::new(7, 7), Direction::Horizontal)))
        );
        assert_eq!(
            validator.cross_word(Coord::new(7, 10), 'x', Direction::Vertical),
            Err(Rejection::NotAWord("toux".into()))
        );
        assert_eq!(
            validator.cross_word(Coord::new(7, 6), 'a', Direction::Vertical),
            Err(Rejection::NotAWord("atou".into()))
        );
    }

    #[test]
    fn bounds() {
        let lex = lexicon();
        let board = board::Board::new();
        let validator = Validator::new(&board, &lex);
        assert_eq!(
            validator.check(&"a".repeat(16), Coord::new(7, 0), Direction::Horizontal),
            Err(Rejection::DoesNotFit)
        );
        assert_eq!(
            validator.check("test", Coord::new(7, 12), Direction::Horizontal),
            Err(Rejection::DoesNotFit)
        );
        assert_eq!(
            validator.check("test", Coord::new(12, 7), Direction::Vertical),
            Err(Rejection::DoesNotFit)
        );
        assert_eq!(
            validator.check("test", Coord::new(-1, 7), Direction::Vertical),
            Err(Rejection::DoesNotFit)
        );
        assert_eq!(
            validator.check("", Coord::new(7, 7), Direction::Vertical),
            Err(Rejection::NotAWord(String::new()))
        );
    }

    #[test]
    fn last_column_is_usable() {
        let lex = lexicon();
        let mut board = board::Board::new();
        board.place_word("or", Coord::new(7, 13), Direction::Horizontal);
        let validator = Validator::new(&board, &lex);
        let placed = validator
            .check("soir", Coord::new(4, 14), Direction::Vertical)
            .unwrap();
        assert_eq!(placed.already_placed, BTreeMap::from([(3, 'r')]));
        assert!(placed.cross_words.is_empty());
        assert_eq!(placed.letters_used(), vec!['s', 'o', 'i']);
    }

    #[test]
    fn letters_used_skip_board_letters() {
        let lex = lexicon();
        let mut board = board::Board::new();
        board.place_word("test", Coord::new(7, 7), Direction::Horizontal);
        let validator = Validator::new(&board, &lex);
        let placed = validator
            .check("er", Coord::new(7, 11), Direction::Horizontal)
            .unwrap();
        assert_eq!(
            placed.placement,
            Placement::new("tester", Coord::new(7, 7), Direction::Horizontal)
        );
        assert_eq!(placed.letters_used(), vec!['e', 'r']);
        assert_eq!(placed.already_placed.len(), 4);
    }
}
