//! Server configuration.

use std::time::Duration;

use lobbyforge_session::CacheConfig;

use crate::ConfigError;

const ENV_BIND: &str = "LOBBYFORGE_BIND";
const ENV_ENVIRONMENT: &str = "LOBBYFORGE_ENV";
const ENV_SESSION_TTL: &str = "LOBBYFORGE_SESSION_TTL_SECS";
const ENV_SWEEP: &str = "LOBBYFORGE_SWEEP_SECS";
const ENV_SEED: &str = "LOBBYFORGE_SEED";

/// Top-level settings for a Lobbyforge server.
///
/// ```rust
/// use lobbyforge::ServerConfig;
///
/// let config = ServerConfig {
///     bind_addr: "127.0.0.1:0".into(),
///     seed_demo_data: false,
///     ..ServerConfig::default()
/// };
/// assert!(config.is_development());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Default: `0.0.0.0:8080`.
    pub bind_addr: String,

    /// Deployment name. `development` turns on debug logging.
    ///
    /// Default: `development`.
    pub environment: String,

    /// Lifetime of a login session in the cache.
    ///
    /// Default: 30 minutes.
    pub session_ttl: Duration,

    /// Period of the expired-session sweep. `None` disables it.
    ///
    /// Default: 60 seconds.
    pub sweep_interval: Option<Duration>,

    /// Start from the demo data set instead of an empty store.
    ///
    /// Default: `true`.
    pub seed_demo_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let cache = CacheConfig::default();
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            environment: "development".to_string(),
            session_ttl: cache.session_ttl,
            sweep_interval: cache.sweep_interval,
            seed_demo_data: true,
        }
    }
}

impl ServerConfig {
    /// Reads overrides from `LOBBYFORGE_*` environment variables.
    ///
    /// Unset variables keep their defaults. `LOBBYFORGE_SWEEP_SECS=0`
    /// disables the sweeper.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Like [`from_env`](Self::from_env) but reads through `lookup`.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(bind) = lookup(ENV_BIND) {
            config.bind_addr = bind;
        }
        if let Some(environment) = lookup(ENV_ENVIRONMENT) {
            config.environment = environment;
        }
        if let Some(value) = lookup(ENV_SESSION_TTL) {
            config.session_ttl = Duration::from_secs(parse_secs(ENV_SESSION_TTL, value)?);
        }
        if let Some(value) = lookup(ENV_SWEEP) {
            config.sweep_interval = match parse_secs(ENV_SWEEP, value)? {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            };
        }
        if let Some(value) = lookup(ENV_SEED) {
            config.seed_demo_data = parse_bool(ENV_SEED, value)?;
        }

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// The session-cache slice of this configuration.
    pub fn cache_config(&self) -> CacheConfig {
        CacheConfig {
            session_ttl: self.session_ttl,
            sweep_interval: self.sweep_interval,
        }
    }
}

fn parse_secs(var: &'static str, value: String) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|source| ConfigError::InvalidSeconds { var, value, source })
}

fn parse_bool(var: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| vars.get(var).cloned()
    }

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.session_ttl, Duration::from_secs(1800));
        assert_eq!(config.sweep_interval, Some(Duration::from_secs(60)));
        assert!(config.seed_demo_data);
        assert!(config.is_development());
    }

    #[test]
    fn test_from_lookup_no_vars_is_default() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("LOBBYFORGE_BIND", "127.0.0.1:9000"),
            ("LOBBYFORGE_ENV", "production"),
            ("LOBBYFORGE_SESSION_TTL_SECS", "90"),
            ("LOBBYFORGE_SWEEP_SECS", "0"),
            ("LOBBYFORGE_SEED", "false"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:9000");
        assert!(!config.is_development());
        assert_eq!(config.session_ttl, Duration::from_secs(90));
        assert_eq!(config.sweep_interval, None);
        assert!(!config.seed_demo_data);
    }

    #[test]
    fn test_from_lookup_bad_number_is_error() {
        let err = ServerConfig::from_lookup(lookup(&[(
            "LOBBYFORGE_SESSION_TTL_SECS",
            "soon",
        )]))
        .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::InvalidSeconds { var: "LOBBYFORGE_SESSION_TTL_SECS", .. }
        ));
    }

    #[test]
    fn test_from_lookup_bad_bool_is_error() {
        let err =
            ServerConfig::from_lookup(lookup(&[("LOBBYFORGE_SEED", "maybe")]))
                .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBool { .. }));
    }

    #[test]
    fn test_cache_config_slice() {
        let config = ServerConfig {
            session_ttl: Duration::from_secs(5),
            sweep_interval: None,
            ..ServerConfig::default()
        };
        let cache = config.cache_config();
        assert_eq!(cache.session_ttl, Duration::from_secs(5));
        assert_eq!(cache.sweep_interval, None);
    }
}
