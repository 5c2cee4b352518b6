//! Tracing subscriber setup.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default filter for an environment name: `debug` in development,
/// `info` everywhere else.
pub fn default_level(environment: &str) -> &'static str {
    if environment == "development" {
        "debug"
    } else {
        "info"
    }
}

/// Installs the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over the environment default. Calling this
/// more than once is harmless: later calls leave the first subscriber in
/// place.
pub fn init(environment: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(environment)));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init();

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level("development"), "debug");
        assert_eq!(default_level("production"), "info");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init("development");
        init("production");
    }
}
