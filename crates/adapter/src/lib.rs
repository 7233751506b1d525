//! Adapter module - drive an environment over TCP with a JSON protocol
//!
//! This crate lets an out-of-process decision maker (typically a training
//! loop in another language) call `reset` / `step` / `state` on an engine
//! instance. It adds no game rules of its own.
//!
//! # Protocol Overview
//!
//! Line-delimited JSON over TCP (default: 127.0.0.1:7878). Every request gets
//! exactly one response line echoing its `seq`.
//!
//! ## Client → Server
//!
//! - **reset**: `{"type":"reset","seq":1}` or with `"seed":123` to replay
//! - **step**: `{"type":"step","seq":2,"action":0}`; `action` is an index
//!   (0 left, 1 right, 2 down, 3 rotate) or the lowercase name
//! - **state**: `{"type":"state","seq":3}` reads without advancing
//!
//! ## Server → Client
//!
//! - **observation**: overlay `grid`, `reward`, `done`, `score`, `lines`,
//!   `episode_id` and an empty `info` object
//! - **error**: `code` (`invalid_action` or `invalid_json`) and `message`;
//!   the connection stays open
//!
//! # Environment Variables
//!
//! - `TETRIS_ENV_HOST`: Bind address (default: "127.0.0.1")
//! - `TETRIS_ENV_PORT`: Port number (default: 7878)
//! - plus the `TETRIS_ENV_*` engine settings read by `EnvConfig::from_env`
//!
//! # Testing
//!
//! ```bash
//! nc 127.0.0.1 7878
//! {"type":"reset","seq":1,"seed":42}
//! {"type":"step","seq":2,"action":"left"}
//! ```

pub mod protocol;
pub mod runtime;
pub mod server;

pub use tetris_env_core as core;
pub use tetris_env_types as types;

// Re-export protocol types for convenience
pub use protocol::*;
pub use runtime::serve_blocking;
pub use server::{run_server, ServerConfig, Session};
