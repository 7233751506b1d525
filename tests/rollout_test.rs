use tetris_env::cli::{parse_args, Command, RolloutConfig};
use tetris_env::core::EnvConfig;
use tetris_env::rollout::run_rollout;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn seeded_rollout_is_reproducible() {
    let config = RolloutConfig {
        episodes: 3,
        max_steps: 2_000,
        env: EnvConfig::seeded(99),
    };
    let first = run_rollout(&config).unwrap();
    let second = run_rollout(&config).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn episode_ids_start_at_one_and_count_up() {
    let config = RolloutConfig {
        episodes: 3,
        max_steps: 10,
        env: EnvConfig::seeded(21),
    };
    let ids: Vec<u32> = run_rollout(&config)
        .unwrap()
        .iter()
        .map(|s| s.episode_id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn rollout_respects_step_limit() {
    let config = RolloutConfig {
        episodes: 2,
        max_steps: 25,
        env: EnvConfig::seeded(3),
    };
    for summary in run_rollout(&config).unwrap() {
        assert!(summary.steps <= 25);
        assert_eq!(summary.score, summary.lines * 100);
        if !summary.done {
            assert_eq!(summary.steps, 25);
        }
    }
}

#[test]
fn finished_episodes_include_game_over_penalty() {
    let config = RolloutConfig {
        episodes: 2,
        max_steps: 100_000,
        env: EnvConfig::seeded(1234),
    };
    for summary in run_rollout(&config).unwrap() {
        assert!(summary.done);
        assert_eq!(
            summary.total_reward,
            summary.lines as i64 * 10 - 100,
            "{:?}",
            summary
        );
    }
}

#[test]
fn cli_parses_into_rollout_config() {
    let parsed = parse_args(&args(&[
        "rollout",
        "--episodes",
        "4",
        "--seed",
        "5",
        "--rule",
        "bag7",
    ]))
    .unwrap();
    match parsed {
        Command::Rollout(config) => {
            assert_eq!(config.episodes, 4);
            assert_eq!(config.env.seed, Some(5));
        }
        other => panic!("unexpected command: {:?}", other),
    }
    assert!(parse_args(&args(&["fly"])).is_err());
}
