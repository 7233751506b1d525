//! Falling-block simulation environment (workspace facade crate).
//!
//! The engine lives in dedicated crates under `crates/`; this package
//! re-exports them as `tetris_env::{types, core, adapter}` and hosts the
//! command line driver.

pub mod cli;
pub mod rollout;

pub use tetris_env_adapter as adapter;
pub use tetris_env_core as core;
pub use tetris_env_types as types;
