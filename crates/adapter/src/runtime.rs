//! Adapter runtime integration.
//!
//! Lets a synchronous binary host the async server.

use tokio::runtime::Builder;

use crate::server::{run_server, ServerConfig};

/// Run the step adapter on a fresh multi-threaded runtime until it fails
pub fn serve_blocking(config: ServerConfig) -> anyhow::Result<()> {
    let rt = Builder::new_multi_thread().enable_all().build()?;
    rt.block_on(run_server(config, None))
}
