//! # Castlehunt
//!
//! A treasure hunt through a castle of connected rooms.
//!
//! The engine (room graph, pathfinding, game rules) lives in the
//! sub-crates; this crate wires it to two front-ends:
//!
//! - an HTTP server answering JSON requests ([`CastleHuntServer`])
//! - an interactive console game ([`ConsoleGame`])
//!
//! Both drive the same [`GameSession`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use castlehunt::prelude::*;
//!
//! # async fn start() -> Result<(), HuntError> {
//! let server = CastleHuntServer::builder()
//!     .bind("0.0.0.0:8080")
//!     .build()
//!     .await?;
//! server.run_until(async { let _ = tokio::signal::ctrl_c().await; }).await;
//! # Ok(())
//! # }
//! ```

mod config;
mod console;
mod error;
mod handler;
mod router;
mod server;

pub use config::{load_layout, parse_layout};
pub use console::ConsoleGame;
pub use error::HuntError;
pub use router::Router;
pub use server::{CastleHuntServer, CastleHuntServerBuilder, DEFAULT_READ_TIMEOUT};

pub use castlehunt_castle::{CastleError, CastleLayout, RoomGraph, shortest_path};
pub use castlehunt_protocol::{HttpResponse, ProtocolError, Route};
pub use castlehunt_session::{
    GameSession, GameState, SessionConfig, SessionError, Snapshot,
};
pub use castlehunt_transport::TransportError;

/// Installs a `tracing` subscriber on stderr that reads its filter from
/// `RUST_LOG`, falling back to `default_filter` (e.g. `"info"`).
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Everything needed to run a game, in one import.
pub mod prelude {
    pub use crate::{
        CastleHuntServer, CastleHuntServerBuilder, CastleLayout, ConsoleGame,
        GameSession, GameState, HuntError, Router, SessionConfig,
        init_logging, load_layout,
    };
}
