//! Command line parsing for the `tetris-env` binary.

use anyhow::{anyhow, Result};

use crate::adapter::ServerConfig;
use crate::core::{EnvConfig, PieceRule};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolloutConfig {
    pub episodes: u32,
    /// Upper bound on ticks per episode
    pub max_steps: u32,
    pub env: EnvConfig,
}

impl Default for RolloutConfig {
    fn default() -> Self {
        Self {
            episodes: 1,
            max_steps: 10_000,
            env: EnvConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Command {
    Rollout(RolloutConfig),
    Serve(ServerConfig),
}

/// Parse process arguments (without the program name)
///
/// No subcommand means `rollout`. Engine settings start from
/// [`EnvConfig::from_env`] and flags override them.
pub fn parse_args(args: &[String]) -> Result<Command> {
    match args.first().map(String::as_str) {
        None => Ok(Command::Rollout(RolloutConfig {
            env: EnvConfig::from_env(),
            ..RolloutConfig::default()
        })),
        Some("rollout") => {
            parse_rollout_args(&args[1..], EnvConfig::from_env()).map(Command::Rollout)
        }
        Some("serve") => {
            parse_serve_args(&args[1..], ServerConfig::from_env()).map(Command::Serve)
        }
        Some(other) => Err(anyhow!(
            "unknown command: {} (expected rollout or serve)",
            other
        )),
    }
}

fn value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a String> {
    args.get(i)
        .ok_or_else(|| anyhow!("missing value for {}", flag))
}

fn parse_number<T: std::str::FromStr>(v: &str, flag: &str) -> Result<T> {
    v.parse::<T>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))
}

/// Apply an engine flag to `env`; returns false if `flag` is not an engine flag
fn apply_env_flag(env: &mut EnvConfig, flag: &str, v: &str) -> Result<bool> {
    match flag {
        "--seed" => env.seed = Some(parse_number(v, flag)?),
        "--width" => env.width = parse_number(v, flag)?,
        "--height" => env.height = parse_number(v, flag)?,
        "--rule" => {
            env.piece_rule =
                PieceRule::from_str(v).ok_or_else(|| anyhow!("invalid --rule value: {}", v))?
        }
        _ => return Ok(false),
    }
    Ok(true)
}

pub fn parse_rollout_args(args: &[String], env: EnvConfig) -> Result<RolloutConfig> {
    let mut config = RolloutConfig {
        env,
        ..RolloutConfig::default()
    };

    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        i += 1;
        let v = value(args, i, flag)?;
        match flag {
            "--episodes" => config.episodes = parse_number(v, flag)?,
            "--max-steps" => config.max_steps = parse_number(v, flag)?,
            _ => {
                if !apply_env_flag(&mut config.env, flag, v)? {
                    return Err(anyhow!("rollout: unknown argument: {}", flag));
                }
            }
        }
        i += 1;
    }

    config.env.validate()?;
    Ok(config)
}

pub fn parse_serve_args(args: &[String], mut config: ServerConfig) -> Result<ServerConfig> {
    let mut i = 0usize;
    while i < args.len() {
        let flag = args[i].as_str();
        i += 1;
        let v = value(args, i, flag)?;
        match flag {
            "--host" => config.host = v.clone(),
            "--port" => config.port = parse_number(v, flag)?,
            _ => {
                if !apply_env_flag(&mut config.env, flag, v)? {
                    return Err(anyhow!("serve: unknown argument: {}", flag));
                }
            }
        }
        i += 1;
    }

    config.env.validate()?;
    Ok(config)
}
