// Copyright (C) 2020-2026 Andy Kurnia.

use clap::Parser;
use rand::prelude::*;
use wordplacer::{
    alphabet, display, error, game_config, game_state, lexicon, movegen, player,
};

/// Computer plays itself, printing the board every turn.
#[derive(Parser, Debug)]
#[command(name = "auto", long_about = None)]
struct Args {
    /// Word list, one word per line
    #[arg(long, short)]
    lexicon: std::path::PathBuf,

    /// Letter table, `<letter> <count> <value>` per line (defaults to French)
    #[arg(long)]
    letters: Option<std::path::PathBuf>,

    /// Search policy for each seat, comma-separated
    #[arg(long, value_delimiter = ',', default_values_t = [movegen::Policy::Anchored, movegen::Policy::Blind])]
    policies: Vec<movegen::Policy>,

    /// Random seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Dump the final game state as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> error::Returns<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
    let args = Args::parse();

    let letters = match &args.letters {
        Some(path) => alphabet::LetterTable::from_path(path)?,
        None => alphabet::LetterTable::french(),
    };
    let game_config = game_config::make_game_config(letters, args.policies.len() as u8);
    let lexicon = lexicon::Lexicon::from_path(&args.lexicon, Some(game_config.max_word_len()))?;
    let controllers = args
        .policies
        .iter()
        .map(|&policy| player::Controller::Computer(policy))
        .collect::<Vec<_>>();
    let mut rng = match args.seed {
        Some(seed) => rand_chacha::ChaCha20Rng::seed_from_u64(seed),
        None => rand_chacha::ChaCha20Rng::from_os_rng(),
    };

    let mut game_state = game_state::GameState::new(&game_config, &mut rng);
    game_state.deal();
    println!("\nplaying self");
    while !game_state.is_over() {
        display::print_game_state(&game_state);
        let turn = game_state.turn;
        let controller = controllers[turn as usize];
        // computers never ask.
        if let Some(play) = game_state.play_turn(controller, &lexicon, &mut |_| None)? {
            println!("player {} ({}) plays {}", turn + 1, controller, play);
        }
        game_state.next_turn();
    }

    display::print_game_state(&game_state);
    println!("final scores:");
    for (i, player) in (1..).zip(game_state.players.iter()) {
        println!("player {}: {}", i, player.score);
    }
    let leaders = game_state.leaders();
    if leaders.len() == 1 {
        println!("player {} wins", leaders[0] + 1);
    } else {
        println!("tie between players {:?}", leaders.iter().map(|i| i + 1).collect::<Vec<_>>());
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&game_state)?);
    }

    Ok(())
}
