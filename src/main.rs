//! `tetris-env` binary.
//!
//! - `tetris-env [rollout] [--episodes N] [--max-steps N] [--seed S] [--rule uniform|bag7]`
//!   plays random-policy episodes and logs a summary per episode.
//! - `tetris-env serve [--host H] [--port P] [--seed S] ...` exposes the engine
//!   to an external policy over TCP.
//!
//! Log level comes from `TETRIS_ENV_LOG` (error, warn, info, debug, trace).

use anyhow::Result;
use tracing::{info, Level};
use tracing_subscriber::prelude::*;

use tetris_env::adapter::serve_blocking;
use tetris_env::cli::{parse_args, Command};
use tetris_env::rollout::run_rollout;

fn init_logging() {
    let level = std::env::var("TETRIS_ENV_LOG")
        .ok()
        .and_then(|s| s.trim().parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(tracing_subscriber::filter::LevelFilter::from_level(level))
        .init();
}

fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_args(&args)? {
        Command::Rollout(config) => {
            let summaries = run_rollout(&config)?;
            let best = summaries.iter().map(|s| s.score).max().unwrap_or(0);
            info!(episodes = summaries.len(), best_score = best, "rollout complete");
            Ok(())
        }
        Command::Serve(config) => serve_blocking(config),
    }
}
