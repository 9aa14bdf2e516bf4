// Copyright (C) 2020-2026 Andy Kurnia.

use super::{
    bag, board, board_layout, error, game_config, lexicon, movegen, player, rack,
};
use rand::prelude::*;

#[derive(Clone, Debug, Default, serde::Serialize)]
pub struct GamePlayer {
    pub score: i32,
    pub rack: rack::Rack,
}

// One entry per turn, skips included.
#[derive(Clone, Debug, serde::Serialize)]
pub struct Turn {
    pub player: u8,
    pub rack: String,
    pub play: movegen::Move,
    pub drawn: Vec<char>,
    pub cumulative: i32,
}

#[derive(Clone, serde::Serialize)]
pub struct GameState<'a> {
    #[serde(skip)]
    pub game_config: &'a game_config::GameConfig,
    pub board: board::Board,
    pub premiums: board_layout::PremiumBoard,
    pub players: Box<[GamePlayer]>,
    pub bag: bag::Bag,
    pub turn: u8,
    // consecutive turns that scored nothing.
    pub num_zeros: u8,
    pub history: Vec<Turn>,
}

impl<'a> GameState<'a> {
    // Fresh board, fresh premiums, shuffled bag, empty racks.
    pub fn new(game_config: &'a game_config::GameConfig, rng: &mut dyn RngCore) -> Self {
        let mut bag = bag::Bag::new(game_config.letters());
        bag.shuffle(rng);
        Self {
            game_config,
            board: board::Board::new(),
            premiums: game_config.premiums().clone(),
            players: (0..game_config.num_players())
                .map(|_| GamePlayer::default())
                .collect(),
            bag,
            turn: 0,
            num_zeros: 0,
            history: Vec::new(),
        }
    }

    pub fn deal(&mut self) {
        let rack_size = self.game_config.rack_size() as usize;
        for player in self.players.iter_mut() {
            self.bag.replenish(&mut player.rack, rack_size);
        }
    }

    #[inline(always)]
    pub fn current_player(&self) -> &GamePlayer {
        &self.players[self.turn as usize]
    }

    pub fn move_search<'b>(&'b self, lexicon: &'b lexicon::Lexicon) -> movegen::MoveSearch<'b> {
        movegen::MoveSearch::new(&self.board, &self.premiums, lexicon, self.game_config)
    }

    // Commits a move for the current player. Move::none() is a skip.
    // Fails without changing anything if the rack cannot pay for the letters.
    pub fn apply(&mut self, play: &movegen::Move) -> error::Returns<()> {
        let rack_size = self.game_config.rack_size() as usize;
        let player = &mut self.players[self.turn as usize];
        let rack_before = player.rack.to_string();
        let mut drawn = Vec::new();
        if play.is_none() {
            tracing::warn!("player {} skips with {}", self.turn + 1, rack_before);
        } else {
            if player.rack.remove_played(&play.letters_used).is_none() {
                return_error!(format!(
                    "rack {} cannot pay for {:?}",
                    rack_before, play.letters_used
                ));
            }
            let full = &play.full;
            self.board.place_word(&full.word, full.start, full.direction);
            self.premiums.consume(full.len(), full.start, full.direction);
            player.score += play.score;
            drawn = self.bag.replenish(&mut player.rack, rack_size);
        }
        if play.score == 0 {
            self.num_zeros += 1;
        } else {
            self.num_zeros = 0;
        }
        self.history.push(Turn {
            player: self.turn,
            rack: rack_before,
            play: play.clone(),
            drawn,
            cumulative: player.score,
        });
        Ok(())
    }

    pub fn is_over(&self) -> bool {
        (self.bag.is_empty() && self.players.iter().any(|player| player.rack.is_empty()))
            || self.num_zeros >= self.game_config.num_zeros_to_end()
    }

    pub fn next_turn(&mut self) {
        let num_players = self.players.len() as u8;
        self.turn += 1;
        self.turn -= num_players & -((self.turn >= num_players) as i8) as u8;
    }

    // seats holding the top score.
    pub fn leaders(&self) -> Vec<usize> {
        let best = self.players.iter().map(|player| player.score).max();
        (0..self.players.len())
            .filter(|&i| Some(self.players[i].score) == best)
            .collect()
    }

    // Picks and commits one move for the current player.
    // None if a human declined to move at all.
    pub fn play_turn(
        &mut self,
        controller: player::Controller,
        lexicon: &lexicon::Lexicon,
        ask_human: &mut dyn FnMut(&GameState) -> Option<movegen::Move>,
    ) -> error::Returns<Option<movegen::Move>> {
        let play = match controller {
            player::Controller::Computer(policy) => self
                .move_search(lexicon)
                .find_best_move(&self.current_player().rack, policy),
            player::Controller::Human => match ask_human(self) {
                Some(play) => play,
                None => return Ok(None),
            },
        };
        self.apply(&play)?;
        Ok(Some(play))
    }
}

// Runs turns until the game ends. Returns false if a human walked away.
pub fn play_game(
    game_state: &mut GameState,
    controllers: &[player::Controller],
    lexicon: &lexicon::Lexicon,
    ask_human: &mut dyn FnMut(&GameState) -> Option<movegen::Move>,
) -> error::Returns<bool> {
    if controllers.len() != game_state.players.len() {
        return_error!(format!(
            "{} controllers for {} players",
            controllers.len(),
            game_state.players.len()
        ));
    }
    while !game_state.is_over() {
        let controller = controllers[game_state.turn as usize];
        if game_state.play_turn(controller, lexicon, ask_human)?.is_none() {
            return Ok(false);
        }
        game_state.next_turn();
    }
    tracing::info!(
        "game over after {} turns: {:?}",
        game_state.history.len(),
        game_state
            .players
            .iter()
            .map(|player| player.score)
            .collect::<Vec<_>>()
    );
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::matrix::{Coord, Direction};

    fn rng() -> rand_chacha::ChaCha20Rng {
        rand_chacha::ChaCha20Rng::seed_from_u64(7)
    }

    #[test]
    fn deal_fills_every_rack() {
        let config = game_config::make_french_game_config();
        let mut game_state = GameState::new(&config, &mut rng());
        game_state.deal();
        assert!(game_state.players.iter().all(|player| player.rack.len() == 7));
        assert_eq!(game_state.bag.len(), 102 - 14);
        assert!(!game_state.is_over());
    }

    #[test]
    fn turns_rotate() {
        let config = game_config::make_game_config(super::super::alphabet::LetterTable::french(), 3);
        let mut game_state = GameState::new(&config, &mut rng());
        let seen = (0..4)
            .map(|_| {
                let turn = game_state.turn;
                game_state.next_turn();
                turn
            })
            .collect::<Vec<_>>();
        assert_eq!(seen, vec![0, 1, 2, 0]);
    }

    #[test]
    fn applying_a_move_commits_everything() {
        let config = game_config::make_french_game_config();
        let lexicon = ["test"].into_iter().collect::<lexicon::Lexicon>();
        let mut game_state = GameState::new(&config, &mut rng());
        game_state.players[0].rack = "tes*".parse().unwrap();
        let play = game_state
            .move_search(&lexicon)
            .evaluate(&game_state.players[0].rack, "test", Coord::new(7, 7), Direction::Horizontal)
            .unwrap();
        assert_eq!(play.score, 8);
        game_state.apply(&play).unwrap();
        assert_eq!(game_state.board.get(7, 10), Some('t'));
        assert!(!game_state.premiums.start_available());
        assert_eq!(game_state.players[0].score, 8);
        assert_eq!(game_state.players[0].rack.len(), 7);
        assert_eq!(game_state.bag.len(), 102 - 7);
        assert_eq!(game_state.history.len(), 1);
        assert_eq!(game_state.history[0].rack, "*est");
        assert_eq!(game_state.num_zeros, 0);
    }

    #[test]
    fn unpayable_moves_change_nothing() {
        let config = game_config::make_french_game_config();
        let lexicon = ["test"].into_iter().collect::<lexicon::Lexicon>();
        let mut game_state = GameState::new(&config, &mut rng());
        game_state.players[0].rack = "tes*".parse().unwrap();
        let mut play = game_state
            .move_search(&lexicon)
            .evaluate(&game_state.players[0].rack, "test", Coord::new(7, 7), Direction::Horizontal)
            .unwrap();
        play.letters_used = vec!['x', 'x'];
        assert!(game_state.apply(&play).is_err());
        assert!(game_state.board.is_empty());
        assert!(game_state.history.is_empty());
    }

    #[test]
    fn scoreless_turns_end_the_game() {
        let config = game_config::make_french_game_config();
        let mut game_state = GameState::new(&config, &mut rng());
        game_state.deal();
        for _ in 0..6 {
            assert!(!game_state.is_over());
            game_state.apply(&movegen::Move::none()).unwrap();
            game_state.next_turn();
        }
        assert!(game_state.is_over());
        assert_eq!(game_state.history.len(), 6);
        assert_eq!(game_state.leaders(), vec![0, 1]);
    }

    #[test]
    fn humans_can_walk_away() {
        let config = game_config::make_french_game_config();
        let lexicon = lexicon::Lexicon::new();
        let mut game_state = GameState::new(&config, &mut rng());
        game_state.deal();
        let controllers = [player::Controller::Human, player::Controller::Human];
        assert!(!play_game(&mut game_state, &controllers, &lexicon, &mut |_| None).unwrap());
        assert!(play_game(&mut game_state, &controllers[..1], &lexicon, &mut |_| None).is_err());
    }

    #[test]
    fn snapshot_serializes() {
        let config = game_config::make_french_game_config();
        let game_state = GameState::new(&config, &mut rng());
        let json = serde_json::to_value(&game_state).unwrap();
        assert_eq!(json["turn"], 0);
        assert_eq!(json["board"]["shape"], serde_json::json!([15, 15]));
        assert_eq!(json["bag"].as_array().unwrap().len(), 102);
    }
}
