//! Twenty48 console driver.
//!
//! Plays bot-driven games against the engine, logs every turn at debug
//! level, and reports the highest tile reached when each game ends.

use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use twenty48_core::{Bot, GameSummary, Session, TurnOutcome};

mod config;

use config::Config;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::parse();
    info!(
        "Playing {} game(s) with the {} strategy",
        config.games, config.strategy
    );

    let mut best = 0;
    for index in 0..config.games {
        let summary = play_game(&config, index);
        best = best.max(summary.max_tile);

        if config.json {
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            println!(
                "game {}: max tile {} after {} turns",
                index + 1,
                summary.max_tile,
                summary.turns
            );
        }
        if config.show_board {
            println!("-------\n{}-------", summary.board);
        }
    }

    info!("Best tile across {} game(s): {}", config.games, best);
    Ok(())
}

/// Play one game to the end
fn play_game(config: &Config, index: u32) -> GameSummary {
    let (mut session, mut bot) = match config.game_seed(index) {
        Some(seed) => (
            Session::with_seed(seed),
            Bot::with_seed(config.strategy, seed),
        ),
        None => (Session::new(), Bot::new(config.strategy)),
    };

    let summary = bot.play_out_with(&mut session, |dir, outcome, board| match outcome {
        TurnOutcome::Moved { spawned } => {
            debug!("{} spawned {}\n{}", dir, spawned, board);
        }
        TurnOutcome::Ignored => {
            debug!("{} ignored, nothing moved", dir);
        }
    });

    info!(
        game = index + 1,
        turns = summary.turns,
        ignored = summary.ignored,
        max_tile = summary.max_tile,
        "Game over"
    );
    summary
}
