//! Runs a Lobbyforge server configured from `LOBBYFORGE_*` variables.
//!
//! ```text
//! LOBBYFORGE_BIND=127.0.0.1:8080 cargo run -p lobby-server
//! curl -X POST localhost:8080/api/account/login \
//!      -d '{"username":"demo","password":"password"}'
//! ```

use lobbyforge::prelude::*;

#[tokio::main]
async fn main() -> Result<(), LobbyforgeError> {
    let config = ServerConfig::from_env()?;
    lobbyforge::logging::init(&config.environment);

    let server = LobbyforgeServer::builder().config(config).build().await?;
    tracing::info!(addr = %server.local_addr()?, "listening");

    server.run().await
}
