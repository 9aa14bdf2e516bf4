// Copyright (C) 2020-2026 Andy Kurnia.

use clap::{Parser, Subcommand};
use wordplacer::{error, lexicon, rack, return_error};

/// Word list queries.
#[derive(Parser, Debug)]
#[command(name = "lex", long_about = None)]
struct Args {
    /// Word list, one word per line
    #[arg(long, short)]
    lexicon: std::path::PathBuf,

    /// Skip words longer than this
    #[arg(long, default_value_t = 15)]
    max_len: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Say whether each word is in the list
    Check { words: Vec<String> },
    /// Words the rack spells, longest first. `*` or `?` is a blank.
    /// Letters already on the board are given as OFFSET=LETTER.
    Anagram {
        rack: String,
        fixed: Vec<String>,
    },
}

fn parse_fixed(fixed: &[String]) -> error::Returns<lexicon::Constraint> {
    let mut constraint = lexicon::Constraint::new();
    for s in fixed {
        let Some((offset, letter)) = s.split_once('=') else {
            return_error!(format!("expected OFFSET=LETTER, got {:?}", s));
        };
        let offset = offset.parse::<usize>()?;
        let mut letters = letter.chars().flat_map(char::to_lowercase);
        match (letters.next(), letters.next()) {
            (Some(letter), None) => {
                constraint.insert(offset, letter);
            }
            _ => {
                return_error!(format!("expected one letter in {:?}", s));
            }
        }
    }
    Ok(constraint)
}

fn main() -> error::Returns<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
    let args = Args::parse();
    let lexicon = lexicon::Lexicon::from_path(&args.lexicon, Some(args.max_len))?;

    match &args.command {
        Command::Check { words } => {
            for word in words {
                println!(
                    "{}: {}",
                    word,
                    if lexicon.is_word(word) { "valid" } else { "invalid" }
                );
            }
        }
        Command::Anagram { rack, fixed } => {
            let constraint = parse_fixed(fixed)?;
            let rack = rack.parse::<rack::Rack>()?.merged(constraint.values().copied());
            let mut seen = std::collections::HashSet::new();
            let found = lexicon.search_longest_first(
                &rack,
                if constraint.is_empty() { None } else { Some(&constraint) },
            );
            for word in found {
                if seen.insert(word.clone()) {
                    println!("{}", word);
                }
            }
            println!("({} words)", seen.len());
        }
    }

    Ok(())
}
