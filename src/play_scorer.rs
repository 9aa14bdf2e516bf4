// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout, game_config, validator};

// Letter premiums multiply the letter, word premiums multiply the total.
// Every cell the word covers counts, including letters already on the board.
// Blanks are scored as the letter they stand for.
pub fn score_word(
    placement: &validator::Placement,
    premiums: &board_layout::PremiumBoard,
    letters: &alphabet::LetterTable,
) -> i32 {
    let mut word_multiplier = 1;
    let mut word_score = 0;
    for (coord, letter) in placement.cells() {
        let premium = premiums.premium_at(coord.row, coord.col);
        word_score += letters.score(letter) * premium.letter_multiplier();
        word_multiplier *= premium.word_multiplier();
    }
    word_score * word_multiplier
}

// Main word plus every cross word, plus the bonus for playing a whole rack.
pub fn score_total_placement(
    main: &validator::Placement,
    cross_words: &[validator::Placement],
    num_preexisting: usize,
    premiums: &board_layout::PremiumBoard,
    game_config: &game_config::GameConfig,
) -> i32 {
    let letters = game_config.letters();
    let num_played = main.len().saturating_sub(num_preexisting);
    score_word(main, premiums, letters)
        + cross_words
            .iter()
            .map(|cross_word| score_word(cross_word, premiums, letters))
            .sum::<i32>()
        + game_config.num_played_bonus(num_played)
}

#[inline(always)]
pub fn score_placed(
    placed: &validator::Placed,
    premiums: &board_layout::PremiumBoard,
    game_config: &game_config::GameConfig,
) -> i32 {
    score_total_placement(
        &placed.placement,
        &placed.cross_words,
        placed.already_placed.len(),
        premiums,
        game_config,
    )
}

// For a word that is being played for real: the centre only doubles once.
pub fn score_word_and_consume(
    placement: &validator::Placement,
    premiums: &mut board_layout::PremiumBoard,
    letters: &alphabet::LetterTable,
) -> i32 {
    let score = score_word(placement, premiums, letters);
    premiums.consume(placement.len(), placement.start, placement.direction);
    score
}
