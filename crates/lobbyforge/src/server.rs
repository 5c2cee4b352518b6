//! `LobbyforgeServer` builder and serve loop.
//!
//! This is the entry point for running a Lobbyforge server. It ties the
//! layers together: store → session cache → room manager → services →
//! HTTP router.

use std::net::SocketAddr;
use std::sync::Arc;

use lobbyforge_room::RoomConfig;
use lobbyforge_session::SessionCache;
use lobbyforge_store::Store;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::{LobbyforgeError, ServerConfig, Services, http};

/// Builder for configuring and starting a Lobbyforge server.
///
/// # Example
///
/// ```rust,no_run
/// use lobbyforge::prelude::*;
///
/// # async fn start() -> Result<(), LobbyforgeError> {
/// let server = LobbyforgeServer::builder()
///     .bind("127.0.0.1:8080")
///     .build()
///     .await?;
/// server.run().await
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct LobbyforgeServerBuilder {
    config: ServerConfig,
    room_config: RoomConfig,
}

impl LobbyforgeServerBuilder {
    /// Creates a builder with [`ServerConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the address to bind to. Overrides `config.bind_addr`.
    pub fn bind(mut self, addr: &str) -> Self {
        self.config.bind_addr = addr.to_string();
        self
    }

    /// Replaces the whole server configuration.
    pub fn config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the matchmaking room configuration.
    pub fn room_config(mut self, config: RoomConfig) -> Self {
        self.room_config = config;
        self
    }

    /// Binds the listener and wires up every service.
    ///
    /// Starts the session sweeper when `sweep_interval` is set, so this
    /// must run inside a Tokio runtime.
    pub async fn build(self) -> Result<LobbyforgeServer, LobbyforgeError> {
        let listener = TcpListener::bind(&self.config.bind_addr).await?;

        let store = if self.config.seed_demo_data {
            Store::seeded()
        } else {
            Store::new()
        };
        let cache_config = self.config.cache_config();
        let sessions = Arc::new(SessionCache::new());
        let sweeper = cache_config
            .sweep_interval
            .map(|every| sessions.spawn_sweeper(every));

        let services = Arc::new(Services::new(
            Arc::new(store),
            sessions,
            &cache_config,
            self.room_config,
        ));

        Ok(LobbyforgeServer {
            listener,
            services,
            sweeper,
            config: self.config,
        })
    }
}

/// A bound Lobbyforge server.
///
/// Call [`run()`](Self::run) to start serving requests.
#[derive(Debug)]
pub struct LobbyforgeServer {
    listener: TcpListener,
    services: Arc<Services>,
    sweeper: Option<JoinHandle<()>>,
    config: ServerConfig,
}

impl LobbyforgeServer {
    /// Creates a new builder.
    pub fn builder() -> LobbyforgeServerBuilder {
        LobbyforgeServerBuilder::new()
    }

    /// Returns the local address the server is bound to.
    ///
    /// Useful when binding to port 0.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// The services behind the router, for in-process callers.
    pub fn services(&self) -> &Arc<Services> {
        &self.services
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Serves HTTP until the process is terminated or the listener fails.
    pub async fn run(self) -> Result<(), LobbyforgeError> {
        tracing::info!(
            addr = %self.local_addr()?,
            environment = %self.config.environment,
            "Lobbyforge server running"
        );

        let app = http::router(Arc::clone(&self.services));
        let result = axum::serve(self.listener, app).await;

        if let Some(sweeper) = self.sweeper {
            sweeper.abort();
        }
        result?;
        Ok(())
    }
}
