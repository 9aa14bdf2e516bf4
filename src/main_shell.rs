// Copyright (C) 2020-2026 Andy Kurnia.

use clap::Parser;
use rand::prelude::*;
use wordplacer::{
    alphabet, display, error, game_config, game_state, lexicon, matrix, movegen, player,
};

/// Human against the computer.
#[derive(Parser, Debug)]
#[command(name = "shell", long_about = None)]
struct Args {
    /// Word list, one word per line
    #[arg(long, short)]
    lexicon: std::path::PathBuf,

    /// Letter table, `<letter> <count> <value>` per line (defaults to French)
    #[arg(long)]
    letters: Option<std::path::PathBuf>,

    /// How the computer searches
    #[arg(long, default_value_t = movegen::Policy::Anchored)]
    policy: movegen::Policy,

    /// Let the computer move first
    #[arg(long)]
    second: bool,

    /// Random seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

static HELP: &str = "\
play WORD ROW COL H|V   place WORD starting at ROW COL (0-14, or the board's hex labels)
skip                    pass the turn
board                   show the board and scores
rack                    show your rack
hint                    show the best move for your rack
source FILE             run commands from FILE
help                    this
exit                    leave the game";

// "10" or "a" both mean 10.
fn parse_index(s: &str) -> Option<i8> {
    let v = if s.len() == 1 {
        i8::from_str_radix(s, 16).ok()?
    } else {
        s.parse::<i8>().ok()?
    };
    (0..15).contains(&v).then_some(v)
}

fn parse_play(
    game_state: &game_state::GameState,
    lexicon: &lexicon::Lexicon,
    strings: &[String],
) -> Result<movegen::Move, String> {
    if strings.len() != 5 {
        return Err("usage: play WORD ROW COL H|V".into());
    }
    let row = parse_index(&strings[2]).ok_or_else(|| format!("bad row {:?}", strings[2]))?;
    let col = parse_index(&strings[3]).ok_or_else(|| format!("bad column {:?}", strings[3]))?;
    let direction = strings[4].parse::<matrix::Direction>()?;
    game_state
        .move_search(lexicon)
        .evaluate(
            &game_state.current_player().rack,
            &strings[1],
            matrix::Coord::new(row, col),
            direction,
        )
        .map_err(|rejection| rejection.to_string())
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
    let game_config = game_config::make_game_config(letters, 2);
    let lexicon = lexicon::Lexicon::from_path(&args.lexicon, Some(game_config.max_word_len()))?;
    let mut controllers = [
        player::Controller::Human,
        player::Controller::Computer(args.policy),
    ];
    if args.second {
        controllers.reverse();
    }
    let mut rng = match args.seed {
        Some(seed) => rand_chacha::ChaCha20Rng::seed_from_u64(seed),
        None => rand_chacha::ChaCha20Rng::from_os_rng(),
    };

    let mut rl = rustyline::DefaultEditor::new()?;
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    let mut ask_human = |game_state: &game_state::GameState| -> Option<movegen::Move> {
        display::print_game_state(game_state);
        loop {
            let Some((line, source)) = cmd_stack.pop() else {
                match rl.readline(">> ") {
                    Ok(line) => {
                        let _ = rl.add_history_entry(line.as_str());
                        cmd_stack.push((line, None));
                    }
                    Err(rustyline::error::ReadlineError::Interrupted) => {
                        println!("CTRL-C");
                        return None;
                    }
                    Err(rustyline::error::ReadlineError::Eof) => {
                        println!("CTRL-D");
                        return None;
                    }
                    Err(err) => {
                        println!("Error: {:?}", err);
                        return None;
                    }
                }
                continue;
            };
            if let Some((filename, line_num)) = source {
                println!("{}:{}> {}", filename, line_num, line);
            }
            let strings = match shell_words::split(&line) {
                Ok(strings) => strings,
                Err(err) => {
                    println!("Bad quoting: {:?}", err);
                    continue;
                }
            };
            if strings.is_empty() {
                continue;
            }
            match strings[0].as_str() {
                "help" => println!("{}", HELP),
                "exit" => return None,
                "board" => display::print_game_state(game_state),
                "rack" => println!("{}", game_state.current_player().rack),
                "skip" => return Some(movegen::Move::none()),
                "hint" => {
                    let best = game_state
                        .move_search(&lexicon)
                        .find_best_move(&game_state.current_player().rack, args.policy);
                    println!("{}", best);
                }
                "play" => match parse_play(game_state, &lexicon, &strings) {
                    Ok(play) => return Some(play),
                    Err(err) => println!("{}", err),
                },
                "source" => {
                    if strings.len() > 1 {
                        match std::fs::read_to_string(&strings[1]) {
                            Ok(whole_file) => {
                                let v = cmd_stack.len();
                                for (line_num, line) in whole_file.lines().enumerate() {
                                    cmd_stack.push((
                                        line.to_string(),
                                        Some((strings[1].clone(), line_num + 1)),
                                    ));
                                }
                                cmd_stack[v..].reverse();
                            }
                            Err(err) => println!("cannot open file: {:?}", err),
                        }
                    } else {
                        println!("need another arg");
                    }
                }
                _ => println!("invalid input, help for help"),
            }
        }
    };

    let mut game_state = game_state::GameState::new(&game_config, &mut rng);
    game_state.deal();
    while !game_state.is_over() {
        let turn = game_state.turn;
        let controller = controllers[turn as usize];
        match game_state.play_turn(controller, &lexicon, &mut ask_human)? {
            Some(play) => println!("player {} ({}) plays {}", turn + 1, controller, play),
            None => {
                println!("bye");
                return Ok(());
            }
        }
        game_state.next_turn();
    }

    display::print_game_state(&game_state);
    let leaders = game_state.leaders();
    if leaders.len() == 1 {
        println!("player {} ({}) wins", leaders[0] + 1, controllers[leaders[0]]);
    } else {
        println!("tie");
    }

    Ok(())
}
