//! `CastleHuntServer` builder and server loop.
//!
//! Ties the layers together: transport → protocol → session.

use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;

use castlehunt_castle::CastleLayout;
use castlehunt_session::{GameSession, SessionConfig};
use castlehunt_transport::{TcpTransport, Transport};

use crate::handler::handle_connection;
use crate::{HuntError, Router};

/// How long a client gets to send its request.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(5);

/// Builder for configuring and starting a Castlehunt server.
///
/// # Example
///
/// ```rust,no_run
/// use castlehunt::prelude::*;
///
/// # async fn start() -> Result<(), HuntError> {
/// let server = CastleHuntServer::builder()
///     .bind("127.0.0.1:8080")
///     .seed(42)
///     .build()
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct CastleHuntServerBuilder {
    bind_addr: String,
    layout: CastleLayout,
    session_config: SessionConfig,
    seed: Option<u64>,
    read_timeout: Duration,
}

impl CastleHuntServerBuilder {
    /// Creates a new builder: the reference castle, default rules,
    /// clock-seeded treasure placement.
    pub fn new() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            layout: CastleLayout::default(),
            session_config: SessionConfig::default(),
            seed: None,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }

    /// Sets the address to bind the server to.
    pub fn bind(mut self, addr: &str) -> Self {
        self.bind_addr = addr.to_string();
        self
    }

    /// Sets the castle to play in.
    pub fn layout(mut self, layout: CastleLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Sets the game rules.
    pub fn session_config(mut self, config: SessionConfig) -> Self {
        self.session_config = config;
        self
    }

    /// Fixes the random seed, making treasure placement reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Builds the castle, starts the first game and binds the listener.
    ///
    /// # Errors
    /// [`HuntError::Castle`] for a bad layout or rules that don't fit it,
    /// [`HuntError::Transport`] if the address can't be bound.
    pub async fn build(self) -> Result<CastleHuntServer, HuntError> {
        let graph = self.layout.build()?;
        let session = match self.seed {
            Some(seed) => GameSession::with_seed(graph, self.session_config, seed)?,
            None => GameSession::new(graph, self.session_config)?,
        };
        let transport = TcpTransport::bind(&self.bind_addr)
            .await?
            .with_read_timeout(self.read_timeout);

        Ok(CastleHuntServer {
            transport,
            router: Router::new(session),
        })
    }
}

impl Default for CastleHuntServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A Castlehunt game server.
///
/// Call [`run()`](Self::run) to start accepting connections.
pub struct CastleHuntServer {
    transport: TcpTransport,
    router: Router,
}

impl CastleHuntServer {
    /// Creates a new builder.
    pub fn builder() -> CastleHuntServerBuilder {
        CastleHuntServerBuilder::new()
    }

    /// Returns the local address the server is bound to.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.transport.local_addr()
    }

    /// The game being served.
    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Runs the server accept loop until the process is terminated.
    ///
    /// Connections are served one at a time, in accept order: the next
    /// one is accepted only after the previous response is written and
    /// the connection closed.
    pub async fn run(self) -> Router {
        self.run_until(std::future::pending::<()>()).await
    }

    /// Like [`run`](Self::run), but stops accepting once `shutdown`
    /// completes and hands back the router with the final game state.
    ///
    /// A request already being served is finished first.
    pub async fn run_until(
        mut self,
        shutdown: impl Future<Output = ()>,
    ) -> Router {
        tracing::info!(addr = ?self.local_addr().ok(), "castle hunt server running");
        tokio::pin!(shutdown);

        loop {
            let accepted = tokio::select! {
                () = &mut shutdown => break,
                accepted = self.transport.accept() => accepted,
            };

            match accepted {
                Ok(conn) => {
                    if let Err(e) = handle_connection(conn, &mut self.router).await {
                        tracing::warn!(error = %e, "connection ended with error");
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "accept failed");
                }
            }
        }

        tracing::info!("castle hunt server stopped");
        self.router
    }
}
