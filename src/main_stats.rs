// Copyright (C) 2020-2026 Andy Kurnia.

use clap::Parser;
use rand::prelude::*;
use wordplacer::{alphabet, error, game_config, game_state, lexicon, movegen, player, stats};

/// Plays many computer games in parallel and logs every move.
#[derive(Parser, Debug)]
#[command(name = "stats", long_about = None)]
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

    /// Number of games
    #[arg(long, short, default_value_t = 100)]
    games: usize,

    /// Worker threads (defaults to the number of cpus)
    #[arg(long)]
    threads: Option<usize>,

    /// Game n is seeded with seed + n (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Per-move csv log. Per-game results go to `games-<log>`.
    #[arg(long)]
    log: Option<String>,
}

enum CSVRow<T1, T2> {
    Log(T1),
    Game(T2),
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
    let game_config = std::sync::Arc::new(game_config::make_game_config(
        letters,
        args.policies.len() as u8,
    ));
    let lexicon = std::sync::Arc::new(lexicon::Lexicon::from_path(
        &args.lexicon,
        Some(game_config.max_word_len()),
    )?);
    let controllers = std::sync::Arc::new(
        args.policies
            .iter()
            .map(|&policy| player::Controller::Computer(policy))
            .collect::<Vec<_>>(),
    );
    let num_players = controllers.len();
    let num_threads = args.threads.unwrap_or_else(num_cpus::get).max(1);
    let num_games = args.games;
    let seed = args.seed;
    let num_started_games = std::sync::Arc::new(std::sync::atomic::AtomicUsize::new(0));
    let mut threads = vec![];
    let (tx, rx) = std::sync::mpsc::channel();
    for _ in 0..num_threads {
        let tx = tx.clone();
        let game_config = std::sync::Arc::clone(&game_config);
        let lexicon = std::sync::Arc::clone(&lexicon);
        let controllers = std::sync::Arc::clone(&controllers);
        let num_started_games = std::sync::Arc::clone(&num_started_games);
        threads.push(std::thread::spawn(move || -> Result<(), String> {
            loop {
                let game_num =
                    num_started_games.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
                if game_num >= num_games {
                    break;
                }
                let mut rng = match seed {
                    Some(seed) => rand_chacha::ChaCha20Rng::seed_from_u64(seed + game_num as u64),
                    None => rand_chacha::ChaCha20Rng::from_os_rng(),
                };
                let mut game_state = game_state::GameState::new(&game_config, &mut rng);
                game_state.deal();
                game_state::play_game(&mut game_state, &controllers, &lexicon, &mut |_| None)
                    .map_err(|e| e.to_string())?;

                let game_id = format!("g{:06}", game_num);
                let mut num_bingos = vec![0; num_players];
                for (turn_num, turn) in (1..).zip(game_state.history.iter()) {
                    let play = &turn.play;
                    let tiles_played = play.letters_used.len();
                    if tiles_played == game_config.rack_size() as usize {
                        num_bingos[turn.player as usize] += 1;
                    }
                    let play_fmt = if play.is_none() {
                        "(Pass)".to_string()
                    } else {
                        play.full.to_string()
                    };
                    tx.send(CSVRow::Log((
                        format!("p{}", turn.player + 1),
                        game_id.clone(),
                        turn_num,
                        turn.rack.clone(),
                        play_fmt,
                        play.score,
                        turn.cumulative,
                        tiles_played,
                        turn.drawn.iter().collect::<String>(),
                    )))
                    .map_err(|e| e.to_string())?;
                }
                tx.send(CSVRow::Game((
                    game_id,
                    game_state
                        .players
                        .iter()
                        .map(|player| player.score)
                        .collect::<Vec<_>>(),
                    num_bingos,
                    game_state.history.len(),
                )))
                .map_err(|e| e.to_string())?;
            }
            Ok(())
        }));
    }
    drop(tx);

    let run_identifier = match args.log {
        Some(log) => log,
        None => format!(
            "log-{:08x}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)?
                .as_secs()
        ),
    };
    println!("logging to {}", run_identifier);
    let mut csv_log = csv::Writer::from_path(&run_identifier)?;
    let mut csv_game = csv::Writer::from_path(format!("games-{}", run_identifier))?;
    csv_log.serialize((
        "playerID",
        "gameID",
        "turn",
        "rack",
        "play",
        "score",
        "totalscore",
        "tilesplayed",
        "drawn",
    ))?;
    csv_game.serialize((
        "gameID",
        (1..=num_players)
            .map(|x| format!("p{}_score", x))
            .collect::<Vec<_>>(),
        (1..=num_players)
            .map(|x| format!("p{}_bingos", x))
            .collect::<Vec<_>>(),
        "turns",
    ))?;

    let mut per_seat = vec![stats::Stats::new(); num_players];
    let mut totals = stats::Stats::new();
    let mut move_scores = stats::Stats::new();
    let mut num_wins = vec![0usize; num_players];
    let t0 = std::time::Instant::now();
    for row in rx.iter() {
        match row {
            CSVRow::Log(r) => {
                if r.4 != "(Pass)" {
                    move_scores.update(r.5 as f64);
                }
                csv_log.serialize(r)?;
            }
            CSVRow::Game(r) => {
                let scores = &r.1;
                for (seat, &score) in scores.iter().enumerate() {
                    per_seat[seat].update(score as f64);
                    totals.update(score as f64);
                }
                if let Some(&best) = scores.iter().max() {
                    let leaders = (0..num_players).filter(|&i| scores[i] == best).collect::<Vec<_>>();
                    if leaders.len() == 1 {
                        num_wins[leaders[0]] += 1;
                    }
                }
                csv_game.serialize(r)?;
                if totals.count() as usize % (100 * num_players) == 0 {
                    println!(
                        "After {} seconds, have logged {} games into {}",
                        t0.elapsed().as_secs(),
                        totals.count() as usize / num_players,
                        run_identifier
                    );
                }
            }
        }
    }
    csv_log.flush()?;
    csv_game.flush()?;

    for thread in threads {
        match thread.join() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => println!("worker failed: {}", e),
            Err(e) => println!("{:?}", e),
        }
    }

    println!(
        "After {} seconds, have logged {} games into {}",
        t0.elapsed().as_secs(),
        totals.count() as usize / num_players,
        run_identifier
    );
    for (i, seat) in per_seat.iter().enumerate() {
        println!(
            "p{} ({}): {} wins, game totals {}",
            i + 1,
            controllers[i],
            num_wins[i],
            seat
        );
    }
    println!("all game totals: {}", totals);
    println!("move scores: {}", move_scores);
    println!("{}", serde_json::to_string(&totals.summary())?);

    Ok(())
}
