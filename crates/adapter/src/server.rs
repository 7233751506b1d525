//! TCP server for the step adapter
//!
//! Handles incoming connections and manages client lifecycle. Each client
//! gets its own [`Session`] and therefore its own environment, so no game
//! state is ever shared between connections.

use std::net::SocketAddr;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::oneshot;
use tracing::{error, info, warn};

use crate::protocol::*;
use crate::core::{EnvConfig, EnvError, TetrisEnv};

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub env: EnvConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7878,
            env: EnvConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Create from environment variables
    ///
    /// `TETRIS_ENV_HOST` / `TETRIS_ENV_PORT` for the listener, plus everything
    /// [`EnvConfig::from_env`] reads for the per-client environments.
    pub fn from_env() -> Self {
        use std::env;

        let host = env::var("TETRIS_ENV_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("TETRIS_ENV_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(7878);

        Self {
            host,
            port,
            env: EnvConfig::from_env(),
        }
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// One client's environment plus request dispatch
#[derive(Debug)]
pub struct Session {
    env: TetrisEnv,
}

impl Session {
    pub fn new(config: EnvConfig) -> Result<Self, EnvError> {
        Ok(Self {
            env: TetrisEnv::new(config)?,
        })
    }

    pub fn env(&self) -> &TetrisEnv {
        &self.env
    }

    /// Parse and answer one request line
    pub fn handle_line(&mut self, line: &str) -> Response {
        match serde_json::from_str::<Request>(line) {
            Ok(req) => self.handle(req),
            Err(e) => {
                warn!(error = %e, "malformed request");
                Response::Error(create_error(
                    extract_seq_best_effort(line),
                    ErrorCode::InvalidJson,
                    format!("invalid request: {}", e),
                ))
            }
        }
    }

    pub fn handle(&mut self, req: Request) -> Response {
        match req {
            Request::Reset { seq, seed } => {
                match seed {
                    Some(seed) => self.env.reset_with_seed(seed),
                    None => self.env.reset(),
                };
                Response::Observation(create_observation(seq, &self.env.snapshot(), 0))
            }
            Request::Step { seq, action } => {
                let Some(action) = action.resolve() else {
                    let message = match &action {
                        ActionValue::Index(i) => EnvError::InvalidAction(*i).to_string(),
                        ActionValue::Name(s) => format!("invalid action {:?}", s),
                        ActionValue::Other(v) => format!("invalid action {}", v),
                    };
                    return Response::Error(create_error(
                        Some(seq),
                        ErrorCode::InvalidAction,
                        message,
                    ));
                };
                let step = self.env.step(action);
                let snapshot = self.env.snapshot();
                Response::Observation(create_step_observation(seq, &snapshot, step))
            }
            Request::State { seq } => {
                Response::Observation(create_observation(seq, &self.env.snapshot(), 0))
            }
        }
    }
}

/// Start the TCP server
///
/// Runs until the listener fails. When `ready_tx` is given it receives the
/// bound address once the server is accepting (useful with `port: 0`).
pub async fn run_server(
    config: ServerConfig,
    ready_tx: Option<oneshot::Sender<SocketAddr>>,
) -> anyhow::Result<()> {
    config.env.validate()?;

    let listener = TcpListener::bind(config.socket_addr()).await?;
    let bound = listener.local_addr()?;
    info!(addr = %bound, "step adapter listening");
    if let Some(tx) = ready_tx {
        let _ = tx.send(bound);
    }

    let mut client_id_counter = 0usize;

    // Accept incoming connections
    loop {
        let (socket, addr) = listener.accept().await?;
        client_id_counter += 1;
        let client_id = client_id_counter;

        info!(client_id, %addr, "client connected");

        let env_config = config.env.clone();

        // Spawn task to handle this client
        tokio::spawn(async move {
            if let Err(e) = handle_client(socket, client_id, env_config).await {
                error!(client_id, error = %e, "client error");
            }
            info!(client_id, "client disconnected");
        });
    }
}

/// Handle a single client connection
async fn handle_client(
    socket: TcpStream,
    client_id: usize,
    env_config: EnvConfig,
) -> anyhow::Result<()> {
    let mut session = Session::new(env_config)?;
    info!(client_id, seed = session.env().seed(), "session started");

    let (reader, mut writer) = socket.into_split();
    let mut lines = BufReader::new(reader).lines();
    let mut buf: Vec<u8> = Vec::with_capacity(4096);

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = session.handle_line(line);

        buf.clear();
        serde_json::to_writer(&mut buf, &response)?;
        buf.push(b'\n');
        writer.write_all(&buf).await?;
        writer.flush().await?;
    }

    Ok(())
}
