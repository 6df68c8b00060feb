//! Strictly Noughts - terminal front end.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_noughts::{GameConfig, GameSession, GameStatus, Position, simulate};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            seed,
            delay_ms,
        } => {
            let mut game_config = match config {
                Some(path) => GameConfig::from_file(path)?,
                None => GameConfig::default(),
            };
            if seed.is_some() {
                game_config = game_config.with_seed(seed);
            }
            if let Some(delay_ms) = delay_ms {
                game_config = game_config.with_opponent_delay_ms(delay_ms);
            }
            run_play(game_config).await
        }
        Command::Simulate { games, seed, json } => run_simulate(games, seed, json),
    }
}

/// Interactive game on stdin/stdout.
#[instrument(skip(config))]
async fn run_play(config: GameConfig) -> Result<()> {
    info!(?config, "Starting interactive game");
    let mut session = GameSession::new(&config);
    session.settle().await;

    println!(
        "You are {}. Enter 1-9 to move, 'r' to reset, 'j' for JSON, 'q' to quit.",
        session.human_side()
    );
    print_state(&session).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        match input {
            "q" | "quit" => break,
            "r" | "reset" => session.reset().await,
            "j" | "json" => {
                println!("{}", serde_json::to_string_pretty(&session.snapshot().await)?);
                continue;
            }
            _ => {
                let Some(position) = Position::parse(input) else {
                    println!("Unknown input: {input}");
                    continue;
                };
                if let Err(err) = session.submit_human_move(position).await {
                    println!("{err}");
                    continue;
                }
                if session.reply_pending() {
                    print_state(&session).await;
                    println!("Opponent is thinking...");
                }
            }
        }
        session.settle().await;
        print_state(&session).await;
    }

    debug!("Input closed");
    Ok(())
}

async fn print_state(session: &GameSession) {
    let snapshot = session.snapshot().await;
    println!("\n{}\n", session.board_display().await);
    println!(
        "X: {}  O: {}",
        snapshot.scores.first, snapshot.scores.second
    );
    match snapshot.status {
        GameStatus::InProgress => println!("{} to move", snapshot.current_side),
        status => {
            if !snapshot.highlighted.is_empty() {
                let lines: Vec<_> = snapshot.highlighted.iter().map(ToString::to_string).collect();
                println!("Completed: {}", lines.join(", "));
            }
            println!("{}", status.message());
        }
    }
}

/// Self-play run.
#[instrument]
fn run_simulate(games: u32, seed: u64, json: bool) -> Result<()> {
    let report = simulate(games, seed)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} games: X won {}, O won {}, {} drawn",
            report.games, report.first_wins, report.second_wins, report.draws
        );
    }
    Ok(())
}
