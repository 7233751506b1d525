//! Random-policy rollout driver
//!
//! Plays whole episodes choosing every action uniformly at random. The policy
//! RNG is derived from the environment seed, so a seeded rollout is
//! reproducible end to end.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::cli::RolloutConfig;
use crate::core::TetrisEnv;
use crate::types::Action;

/// Mixed into the environment seed so policy and piece streams differ
const POLICY_SEED_SALT: u64 = 0x9e37_79b9_7f4a_7c15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeSummary {
    pub episode_id: u32,
    pub steps: u32,
    pub score: u32,
    pub lines: u32,
    pub total_reward: i64,
    /// False when the episode hit `max_steps` before game over
    pub done: bool,
}

pub fn run_rollout(config: &RolloutConfig) -> Result<Vec<EpisodeSummary>> {
    let mut env = TetrisEnv::new(config.env.clone())?;
    let mut policy = StdRng::seed_from_u64(env.seed() ^ POLICY_SEED_SALT);
    let actions = TetrisEnv::action_space();

    info!(
        seed = env.seed(),
        rule = env.piece_rule().as_str(),
        episodes = config.episodes,
        "rollout started"
    );

    let mut summaries = Vec::with_capacity(config.episodes as usize);
    for episode in 0..config.episodes {
        // `TetrisEnv::new` already started the first episode.
        if episode > 0 {
            env.reset();
        }
        let mut total_reward = 0i64;
        let mut steps = 0u32;
        let mut done = false;

        while !done && steps < config.max_steps {
            let action: Action = actions[policy.random_range(0..actions.len())];
            let step = env.step(action);
            total_reward += step.reward as i64;
            done = step.done;
            steps += 1;
        }

        let summary = EpisodeSummary {
            episode_id: env.episode_id(),
            steps,
            score: env.game().score(),
            lines: env.game().lines_cleared(),
            total_reward,
            done,
        };
        info!(
            episode = summary.episode_id,
            steps = summary.steps,
            score = summary.score,
            lines = summary.lines,
            reward = summary.total_reward,
            done = summary.done,
            "episode finished"
        );
        summaries.push(summary);
    }

    Ok(summaries)
}
