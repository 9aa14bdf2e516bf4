// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, board_layout, game_state};
use std::fmt::Write;

#[inline(always)]
pub fn empty_label(premiums: &board_layout::PremiumBoard, row: i8, col: i8) -> char {
    match premiums.premium_at(row, col) {
        board_layout::Premium::Start => '*',
        board_layout::Premium::TripleWord => '=',
        board_layout::Premium::DoubleWord => '-',
        board_layout::Premium::TripleLetter => '"',
        board_layout::Premium::DoubleLetter => '\'',
        board_layout::Premium::Empty => ' ',
    }
}

#[inline(always)]
pub fn board_label(
    board: &board::Board,
    premiums: &board_layout::PremiumBoard,
    row: i8,
    col: i8,
) -> char {
    board
        .get(row, col)
        .map(|letter| letter.to_uppercase().next().unwrap_or(letter))
        .unwrap_or_else(|| empty_label(premiums, row, col))
}

fn column_header(s: &mut String, cols: i8) {
    s.push_str("  ");
    for c in 0..cols {
        let _ = write!(s, " {:x}", c);
    }
    s.push('\n');
}

fn horizontal_edge(s: &mut String, cols: i8) {
    s.push_str("  +");
    for _ in 1..cols {
        s.push_str("--");
    }
    s.push_str("-+\n");
}

// Rows and columns are labelled 0-based in hex, the way moves are entered.
pub fn render_board(board: &board::Board, premiums: &board_layout::PremiumBoard) -> String {
    let dim = board.dim();
    let mut s = String::new();
    column_header(&mut s, dim.cols);
    horizontal_edge(&mut s, dim.cols);
    for r in 0..dim.rows {
        let _ = write!(s, "{:2x}|", r);
        for c in 0..dim.cols {
            if c > 0 {
                s.push(' ');
            }
            s.push(board_label(board, premiums, r, c));
        }
        let _ = writeln!(s, "|{:x}", r);
    }
    horizontal_edge(&mut s, dim.cols);
    column_header(&mut s, dim.cols);
    s
}

pub fn print_board(board: &board::Board, premiums: &board_layout::PremiumBoard) {
    print!("{}", render_board(board, premiums));
}

pub fn print_game_state(game_state: &game_state::GameState) {
    print_board(&game_state.board, &game_state.premiums);
    println!("pool {:2}", game_state.bag.len());
    for (i, player) in (1..).zip(game_state.players.iter()) {
        println!(
            "{}player {}: {:4} {}",
            if i == game_state.turn as usize + 1 { ">" } else { " " },
            i,
            player.score,
            player.rack
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::matrix::{Coord, Direction};

    #[test]
    fn renders_letters_over_premiums() {
        let mut board = board::Board::new();
        let premiums = board_layout::PremiumBoard::standard();
        let before = render_board(&board, &premiums);
        let centre_row = before.lines().nth(9).unwrap();
        assert_eq!(centre_row, " 7|=     '       *       '     =|7");
        board.place_word("test", Coord::new(7, 7), Direction::Horizontal);
        let after = render_board(&board, &premiums);
        assert_eq!(after.lines().nth(9).unwrap(), " 7|=     '       T E S T '     =|7");
        assert_eq!(after.lines().count(), 19);
    }

    #[test]
    fn consumed_centre_is_blank() {
        let mut premiums = board_layout::PremiumBoard::standard();
        premiums.consume(1, board_layout::CENTRE, Direction::Vertical);
        assert_eq!(empty_label(&premiums, 7, 7), ' ');
        assert_eq!(empty_label(&premiums, 0, 0), '=');
        assert_eq!(empty_label(&premiums, 1, 5), '"');
    }
}
