//! Protocol module - JSON message types for the step adapter
//!
//! One JSON object per line in each direction. Every request carries a `seq`
//! that the matching response echoes back.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::{EnvSnapshot, Step};
use crate::types::{Action, Cell};

// ============== Client -> Server Messages ==============

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Request {
    /// Start a new episode, optionally restarting the piece stream from `seed`
    Reset {
        seq: u64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
    },
    /// Advance one tick
    Step { seq: u64, action: ActionValue },
    /// Read the current overlay without advancing
    State { seq: u64 },
}

impl Request {
    pub fn seq(&self) -> u64 {
        match self {
            Request::Reset { seq, .. } | Request::Step { seq, .. } | Request::State { seq } => {
                *seq
            }
        }
    }
}

/// Action as sent on the wire: an index (0..=3) or a name ("left", ...)
///
/// Any other JSON value (floats, integers beyond `i64`, objects) still parses
/// as [`ActionValue::Other`] so it is reported as an invalid action rather
/// than a malformed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionValue {
    Index(i64),
    Name(String),
    Other(serde_json::Value),
}

impl ActionValue {
    pub fn resolve(&self) -> Option<Action> {
        match self {
            ActionValue::Index(i) => Action::from_index(*i),
            ActionValue::Name(s) => Action::from_str(s),
            ActionValue::Other(_) => None,
        }
    }
}

impl From<Action> for ActionValue {
    fn from(value: Action) -> Self {
        ActionValue::Name(value.as_str().to_string())
    }
}

// ============== Server -> Client Messages ==============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Response {
    Observation(ObservationMessage),
    Error(ErrorMessage),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationMessage {
    pub seq: u64,
    pub episode_id: u32,
    /// Overlay rows, top first
    pub grid: Vec<Vec<Cell>>,
    pub reward: i32,
    pub done: bool,
    pub score: u32,
    pub lines: u32,
    pub info: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidAction,
    InvalidJson,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// Echoed when it could be recovered from the request
    pub seq: Option<u64>,
    pub code: ErrorCode,
    pub message: String,
}

/// Observation for a snapshot, with the reward of the tick that produced it
pub fn create_observation(seq: u64, snapshot: &EnvSnapshot, reward: i32) -> ObservationMessage {
    ObservationMessage {
        seq,
        episode_id: snapshot.episode_id,
        grid: snapshot.board.to_rows(),
        reward,
        done: snapshot.game_over,
        score: snapshot.score,
        lines: snapshot.lines,
        info: BTreeMap::new(),
    }
}

/// Observation for a completed step
pub fn create_step_observation(seq: u64, snapshot: &EnvSnapshot, step: Step) -> ObservationMessage {
    ObservationMessage {
        seq,
        episode_id: snapshot.episode_id,
        grid: step.observation.to_rows(),
        reward: step.reward,
        done: step.done,
        score: snapshot.score,
        lines: snapshot.lines,
        info: step.info,
    }
}

pub fn create_error(seq: Option<u64>, code: ErrorCode, message: impl Into<String>) -> ErrorMessage {
    ErrorMessage {
        seq,
        code,
        message: message.into(),
    }
}

/// Best-effort `seq` recovery from a line that failed to parse as a request
pub fn extract_seq_best_effort(line: &str) -> Option<u64> {
    let value: serde_json::Value = serde_json::from_str(line).ok()?;
    value.get("seq")?.as_u64()
}
