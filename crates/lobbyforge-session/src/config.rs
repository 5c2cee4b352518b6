//! Cache configuration.

use std::time::Duration;

/// Configuration for session caching.
///
/// Sensible defaults are provided; override only the fields you need:
///
/// ```rust
/// use std::time::Duration;
/// use lobbyforge_session::CacheConfig;
///
/// let config = CacheConfig {
///     session_ttl: Duration::from_secs(300),
///     ..CacheConfig::default()
/// };
/// assert_eq!(config.sweep_interval, Some(Duration::from_secs(60)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// How long a login session stays valid.
    ///
    /// Default: 30 minutes.
    pub session_ttl: Duration,

    /// How often the background sweeper purges expired entries.
    ///
    /// Default: 60 seconds. `None` disables the sweeper; expired entries
    /// then stay in memory until overwritten or removed, which is still
    /// correct because reads check expiry.
    pub sweep_interval: Option<Duration>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            session_ttl: Duration::from_secs(30 * 60),
            sweep_interval: Some(Duration::from_secs(60)),
        }
    }
}
