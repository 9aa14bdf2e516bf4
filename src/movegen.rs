// Copyright (C) 2020-2026 Andy Kurnia.

use super::{
    board, board_layout, game_config, lexicon, matrix, play_scorer, rack, validator,
};
use matrix::{Coord, Direction};
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Policy {
    // every word the rack spells, tried at every cell.
    Blind,
    // per cell, words that fit around the letters already on that line.
    Anchored,
}

impl std::str::FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "blind" | "unconstrained" => Ok(Policy::Blind),
            "anchored" | "constrained" => Ok(Policy::Anchored),
            _ => Err(format!("unknown policy {s:?} (expected blind or anchored)")),
        }
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Policy::Blind => "blind",
            Policy::Anchored => "anchored",
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Move {
    // as proposed.
    pub placement: validator::Placement,
    // as it reads on the board once played.
    pub full: validator::Placement,
    // letters that come off the rack, in board order.
    pub letters_used: Vec<char>,
    pub score: i32,
}

impl Move {
    // no legal move. also what a skipped turn records.
    pub fn none() -> Self {
        let placement = validator::Placement::new("", Coord::new(0, 0), Direction::Horizontal);
        Self {
            full: placement.clone(),
            placement,
            letters_used: Vec::new(),
            score: 0,
        }
    }

    #[inline(always)]
    pub fn is_none(&self) -> bool {
        self.placement.is_empty()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            return f.write_str("(none)");
        }
        write!(f, "{} {}", self.full, self.score)?;
        if self.full != self.placement {
            write!(f, " (played {})", self.placement.word)?;
        }
        Ok(())
    }
}

pub struct MoveSearch<'a> {
    pub board: &'a board::Board,
    pub premiums: &'a board_layout::PremiumBoard,
    pub lexicon: &'a lexicon::Lexicon,
    pub game_config: &'a game_config::GameConfig,
}

impl<'a> MoveSearch<'a> {
    pub fn new(
        board: &'a board::Board,
        premiums: &'a board_layout::PremiumBoard,
        lexicon: &'a lexicon::Lexicon,
        game_config: &'a game_config::GameConfig,
    ) -> Self {
        Self {
            board,
            premiums,
            lexicon,
            game_config,
        }
    }

    // Builds the move if word at start is legal and the rack can pay for it.
    pub fn evaluate(
        &self,
        rack: &rack::Rack,
        word: &str,
        start: Coord,
        direction: Direction,
    ) -> Result<Move, validator::Rejection> {
        let placed = validator::Validator::new(self.board, self.lexicon).check(word, start, direction)?;
        let letters_used = placed.letters_used();
        if rack.tiles_for(&letters_used).is_none() {
            return Err(validator::Rejection::MissingTiles(placed.placement.word));
        }
        let score = play_scorer::score_placed(&placed, self.premiums, self.game_config);
        Ok(Move {
            placement: validator::Placement::new(&word.to_lowercase(), start, direction),
            full: placed.placement,
            letters_used,
            score,
        })
    }

    // Calls f with every legal move, in enumeration order.
    pub fn for_each_move<F: FnMut(Move)>(&self, rack: &rack::Rack, policy: Policy, mut f: F) {
        if rack.is_empty() || self.board.is_full() {
            return;
        }
        let dim = self.board.dim();
        match policy {
            Policy::Blind => {
                let mut seen = HashSet::new();
                for word in self.lexicon.search(rack, None) {
                    if word.chars().count() > self.game_config.max_word_len() || !seen.insert(word.clone()) {
                        continue;
                    }
                    for direction in Direction::BOTH {
                        for coord in dim.coords() {
                            if let Ok(m) = self.evaluate(rack, &word, coord, direction) {
                                f(m);
                            }
                        }
                    }
                }
            }
            Policy::Anchored => {
                // lanes with nothing on them ahead of the cell all share this.
                let mut free_words = None;
                for direction in Direction::BOTH {
                    for coord in dim.coords() {
                        let constraint = self.board.letters_along(coord, direction);
                        let constrained_words;
                        let words: &Vec<String> = if constraint.is_empty() {
                            free_words.get_or_insert_with(|| {
                                let mut seen = HashSet::new();
                                let mut words = self.lexicon.search(rack, None);
                                words.retain(|word| seen.insert(word.clone()));
                                words
                            })
                        } else {
                            let merged = rack.merged(constraint.values().copied());
                            let mut seen = HashSet::new();
                            constrained_words = self
                                .lexicon
                                .search(&merged, Some(&constraint))
                                .into_iter()
                                .filter(|word| seen.insert(word.clone()))
                                .collect::<Vec<_>>();
                            &constrained_words
                        };
                        for word in words.iter() {
                            if let Ok(m) = self.evaluate(rack, word, coord, direction) {
                                f(m);
                            }
                        }
                    }
                }
            }
        }
    }

    pub fn find_all_moves(&self, rack: &rack::Rack, policy: Policy) -> Vec<Move> {
        let mut moves = Vec::new();
        self.for_each_move(rack, policy, |m| moves.push(m));
        moves
    }

    // Highest score. The first one found wins ties. Move::none() if nothing is legal.
    pub fn find_best_move(&self, rack: &rack::Rack, policy: Policy) -> Move {
        let mut best = Move::none();
        self.for_each_move(rack, policy, |m| {
            if best.is_none() || m.score > best.score {
                tracing::info!("new best {} with {}", m, rack);
                best = m;
            }
        });
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> lexicon::Lexicon {
        ["test", "tester", "tes", "set", "est", "et", "te", "atout", "tout"]
            .into_iter()
            .collect()
    }

    fn rack(s: &str) -> rack::Rack {
        s.parse().unwrap()
    }

    #[test]
    fn policies_parse() {
        assert_eq!("blind".parse::<Policy>(), Ok(Policy::Blind));
        assert_eq!("Anchored".parse::<Policy>(), Ok(Policy::Anchored));
        assert!("greedy".parse::<Policy>().is_err());
        assert_eq!(Policy::Anchored.to_string(), "anchored");
    }

    #[test]
    fn nothing_to_play() {
        let lex = lexicon();
        let board = board::Board::new();
        let premiums = board_layout::PremiumBoard::standard();
        let config = game_config::make_french_game_config();
        let search = MoveSearch::new(&board, &premiums, &lex, &config);
        for policy in [Policy::Blind, Policy::Anchored] {
            assert!(search.find_best_move(&rack::Rack::new(), policy).is_none());
            assert!(search.find_best_move(&rack("xyz"), policy).is_none());
        }
        assert_eq!(Move::none().score, 0);
    }

    #[test]
    fn proposals_are_recorded_in_lowercase() {
        let lex = lexicon();
        let board = board::Board::new();
        let premiums = board_layout::PremiumBoard::standard();
        let config = game_config::make_french_game_config();
        let search = MoveSearch::new(&board, &premiums, &lex, &config);
        let m = search
            .evaluate(&rack("tes*"), "TEST", Coord::new(7, 7), Direction::Horizontal)
            .unwrap();
        assert_eq!(m.placement.word, "test");
        assert_eq!(m.placement, m.full);
        assert_eq!(m.to_string(), "test (7, 7) H 8");
    }

    #[test]
    fn opening_move_goes_through_the_centre() {
        let lex = lexicon();
        let board = board::Board::new();
        let premiums = board_layout::PremiumBoard::standard();
        let config = game_config::make_french_game_config();
        let search = MoveSearch::new(&board, &premiums, &lex, &config);
        for policy in [Policy::Blind, Policy::Anchored] {
            let best = search.find_best_move(&rack("tes*"), policy);
            assert_eq!(best.score, 8, "{policy}");
            assert_eq!(best.full.len(), 4);
            assert!(best.full.cells().any(|(coord, _)| coord == board_layout::CENTRE));
            assert!(rack("tes*").tiles_for(&best.letters_used).is_some());
        }
    }

    #[test]
    fn anchored_extends_board_words() {
        let lex = lexicon();
        let mut board = board::Board::new();
        board.place_word("test", Coord::new(7, 7), Direction::Horizontal);
        let mut premiums = board_layout::PremiumBoard::standard();
        premiums.consume(4, Coord::new(7, 7), Direction::Horizontal);
        let config = game_config::make_french_game_config();
        let search = MoveSearch::new(&board, &premiums, &lex, &config);
        // "er" alone is no word, so nothing suggests trying it.
        assert!(search.find_best_move(&rack("er"), Policy::Blind).is_none());
        let best = search.find_best_move(&rack("er"), Policy::Anchored);
        assert_eq!(best.full, validator::Placement::new("tester", Coord::new(7, 7), Direction::Horizontal));
        assert_eq!(best.letters_used, vec!['e', 'r']);
        assert_eq!(best.score, 7);
    }

    #[test]
    fn every_move_is_payable_and_legal() {
        let lex = lexicon();
        let mut board = board::Board::new();
        board.place_word("tout", Coord::new(7, 7), Direction::Vertical);
        let premiums = board_layout::PremiumBoard::standard();
        let config = game_config::make_french_game_config();
        let search = MoveSearch::new(&board, &premiums, &lex, &config);
        let r = rack("stea");
        let moves = search.find_all_moves(&r, Policy::Anchored);
        assert!(!moves.is_empty());
        let validator = validator::Validator::new(&board, &lex);
        for m in moves.iter() {
            assert!(r.tiles_for(&m.letters_used).is_some(), "{m}");
            let placed = validator.check(&m.full.word, m.full.start, m.full.direction).unwrap();
            // rack letters plus board letters make up the word.
            let mut letters = m.letters_used.clone();
            letters.extend(placed.already_placed.values());
            letters.sort();
            let mut word = m.full.word.chars().collect::<Vec<_>>();
            word.sort();
            assert_eq!(letters, word);
        }
        let best = search.find_best_move(&r, Policy::Anchored);
        assert_eq!(best.score, moves.iter().map(|m| m.score).max().unwrap());
        assert_eq!(&best, moves.iter().find(|m| m.score == best.score).unwrap());
    }
}
