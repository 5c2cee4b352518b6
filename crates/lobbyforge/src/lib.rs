//! # Lobbyforge
//!
//! In-memory backend for multiplayer game lobbies.
//!
//! Lobbyforge keeps every durable record in one lock-guarded [`Store`],
//! login sessions in an expiring [`SessionCache`], and rooms under a small
//! state machine ([`RoomManager`]). Domain services sit on top and an axum
//! router exposes them over HTTP.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lobbyforge::prelude::*;
//!
//! # async fn start() -> Result<(), LobbyforgeError> {
//! let config = ServerConfig::from_env()?;
//! lobbyforge::logging::init(&config.environment);
//!
//! let server = LobbyforgeServer::builder().config(config).build().await?;
//! server.run().await
//! # }
//! ```
//!
//! Services can also be used without the HTTP layer:
//!
//! ```rust
//! use lobbyforge::prelude::*;
//!
//! let services = Services::in_memory(Store::seeded());
//! let token = services.account.login("demo", "password").unwrap();
//! assert_eq!(token, "demo-token");
//! ```

mod config;
mod error;
pub mod http;
pub mod logging;
mod server;
pub mod services;

pub use config::ServerConfig;
pub use error::{ConfigError, LobbyforgeError, ServiceError};
pub use server::{LobbyforgeServer, LobbyforgeServerBuilder};
pub use services::Services;

pub use lobbyforge_model as model;
pub use lobbyforge_room::{RoomConfig, RoomError, RoomManager};
pub use lobbyforge_session::{CacheConfig, SessionCache};
pub use lobbyforge_store::{Store, World};

/// Convenience re-exports for building and running a server.
pub mod prelude {
    pub use crate::{
        CacheConfig, LobbyforgeError, LobbyforgeServer, RoomConfig,
        ServerConfig, ServiceError, Services, SessionCache, Store,
    };
    pub use lobbyforge_model::{PlayerId, Room, RoomId, RoomStatus};
}
