// Copyright (C) 2020-2026 Andy Kurnia.

use wordplacer::{
    board, board_layout, game_config,
    lexicon::{Constraint, Lexicon},
    matrix::{Coord, Direction},
    movegen::{Move, MoveSearch, Policy},
    play_scorer,
    rack::Rack,
    validator::{Placement, Validator},
};

fn lexicon() -> Lexicon {
    [
        "test", "tests", "tester", "tes", "set", "est", "et", "te", "atout", "tout", "toute",
        "or", "rat", "ta", "a", "retenir",
    ]
    .into_iter()
    .collect()
}

fn rack(s: &str) -> Rack {
    s.parse().unwrap()
}

#[test]
fn membership_is_exact() {
    let lex = lexicon();
    assert!(lex.is_word("tester"));
    assert!(!lex.is_word("teste"));
    assert!(!lex.is_word("testers"));
    assert!(!lex.is_word("tou"));
    assert!(!lex.is_word(""));
}

#[test]
fn constraint_letters_must_be_available() {
    let lex = lexicon();
    assert!(lex.search(&rack("tout"), Some(&Constraint::from([(0, 'a')]))).is_empty());
    let empty = Constraint::new();
    let mut with_empty = lex.search(&rack("test*"), Some(&empty));
    let mut without = lex.search(&rack("test*"), None);
    with_empty.sort();
    without.sort();
    assert_eq!(with_empty, without);
}

#[test]
fn end_to_end_first_move() {
    let lex = lexicon();
    let config = game_config::make_french_game_config();
    let mut board = board::Board::new();
    let mut premiums = board_layout::PremiumBoard::standard();
    let r = rack("tes*");

    let play = MoveSearch::new(&board, &premiums, &lex, &config)
        .evaluate(&r, "test", Coord::new(7, 7), Direction::Horizontal)
        .unwrap();
    assert_eq!(play.score, 8);
    assert_eq!(play.letters_used, vec!['t', 'e', 's', 't']);
    assert_eq!(r.tiles_for(&play.letters_used), Some(vec!['t', 'e', 's', '*']));

    let full = &play.full;
    board.place_word(&full.word, full.start, full.direction);
    premiums.consume(full.len(), full.start, full.direction);
    for (col, letter) in (7..).zip("test".chars()) {
        assert_eq!(board.get(7, col), Some(letter));
    }
    assert_eq!(board.get(7, 11), None);
    assert!(!premiums.start_available());
}

#[test]
fn centre_only_doubles_the_first_play() {
    let lex = lexicon();
    let config = game_config::make_french_game_config();
    let mut board = board::Board::new();
    let mut premiums = board_layout::PremiumBoard::standard();
    let first = Placement::new("tout", Coord::new(7, 7), Direction::Horizontal);
    assert_eq!(play_scorer::score_word(&first, &premiums, config.letters()), 8);
    board.place_word(&first.word, first.start, first.direction);
    premiums.consume(first.len(), first.start, first.direction);

    // "atout" down through the same centre t.
    let placed = Validator::new(&board, &lex)
        .check("atout", Coord::new(6, 7), Direction::Vertical)
        .unwrap();
    // a, t, o, u plain; t at (10,7) plain as well.
    assert_eq!(play_scorer::score_placed(&placed, &premiums, &config), 5);
}

#[test]
fn seven_fresh_tiles_earn_the_bonus() {
    let lex = lexicon();
    let config = game_config::make_french_game_config();
    let board = board::Board::new();
    let premiums = board_layout::PremiumBoard::standard();
    let search = MoveSearch::new(&board, &premiums, &lex, &config);

    // centre doubles the word, n sits on the double letter at (7,11).
    let play = search
        .evaluate(&rack("retenir"), "retenir", Coord::new(7, 7), Direction::Horizontal)
        .unwrap();
    assert_eq!(play.letters_used.len(), 7);
    assert_eq!(play.score, (1 + 1 + 1 + 1 + 2 + 1 + 1) * 2 + 50);

    // a blank standing in for i still counts as a tile played.
    let play = search
        .evaluate(&rack("reten*r"), "retenir", Coord::new(7, 7), Direction::Horizontal)
        .unwrap();
    assert_eq!(play.score, 66);
    assert_eq!(search.find_best_move(&rack("retenir"), Policy::Anchored).score, 66);
}

#[test]
fn seven_letters_through_a_board_letter_earn_no_bonus() {
    let lex = lexicon();
    let config = game_config::make_french_game_config();
    let mut board = board::Board::new();
    board.place_word("tout", Coord::new(7, 7), Direction::Horizontal);
    let mut premiums = board_layout::PremiumBoard::standard();
    premiums.consume(4, Coord::new(7, 7), Direction::Horizontal);
    let search = MoveSearch::new(&board, &premiums, &lex, &config);

    // "retenir" down through the t of "tout", only six tiles off the rack.
    let play = search
        .evaluate(&rack("reenirs"), "retenir", Coord::new(5, 7), Direction::Vertical)
        .unwrap();
    assert_eq!(play.letters_used, vec!['r', 'e', 'e', 'n', 'i', 'r']);
    // last r on the double letter at (11,7).
    assert_eq!(play.score, 1 + 1 + 1 + 1 + 1 + 1 + 2);

    let placed = Validator::new(&board, &lex)
        .check("retenir", Coord::new(5, 7), Direction::Vertical)
        .unwrap();
    assert_eq!(placed.already_placed.len(), 1);
    assert_eq!(play_scorer::score_placed(&placed, &premiums, &config), play.score);
}

#[test]
fn both_policies_agree_on_an_open_board() {
    let lex = lexicon();
    let config = game_config::make_french_game_config();
    let board = board::Board::new();
    let premiums = board_layout::PremiumBoard::standard();
    let search = MoveSearch::new(&board, &premiums, &lex, &config);
    let blind = search.find_best_move(&rack("atoute"), Policy::Blind);
    let anchored = search.find_best_move(&rack("atoute"), Policy::Anchored);
    assert!(!blind.is_none());
    assert_eq!(blind.score, anchored.score);
    assert_eq!(blind.full.len(), anchored.full.len());
}

#[test]
fn anchored_finds_hooks_blind_cannot() {
    let lex = lexicon();
    let config = game_config::make_french_game_config();
    let mut board = board::Board::new();
    board.place_word("tout", Coord::new(7, 7), Direction::Horizontal);
    let mut premiums = board_layout::PremiumBoard::standard();
    premiums.consume(4, Coord::new(7, 7), Direction::Horizontal);
    let search = MoveSearch::new(&board, &premiums, &lex, &config);

    assert_eq!(search.find_best_move(&rack("e"), Policy::Blind), Move::none());
    let best = search.find_best_move(&rack("e"), Policy::Anchored);
    assert_eq!(best.letters_used, vec!['e']);
    // toute across, e on (7,11) doubles.
    assert_eq!(best.full, Placement::new("toute", Coord::new(7, 7), Direction::Horizontal));
    assert_eq!(best.score, 6);
}

#[test]
fn full_board_has_no_moves() {
    let lex = lexicon();
    let config = game_config::make_french_game_config();
    let mut board = board::Board::new();
    for row in 0..15 {
        for col in 0..15 {
            board.set(row, col, 'a');
        }
    }
    assert!(board.is_full());
    let premiums = board_layout::PremiumBoard::standard();
    let search = MoveSearch::new(&board, &premiums, &lex, &config);
    assert!(search.find_best_move(&rack("test"), Policy::Anchored).is_none());
    assert!(search.find_best_move(&rack("test"), Policy::Blind).is_none());
}
