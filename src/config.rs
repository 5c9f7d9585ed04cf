//! Server configuration read from the environment.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `PORT` | 3000 | HTTP listen port |
//! | `SCENARIOS_PATH` | unset | JSON catalog file; built-in set when unset |
//! | `CACHE_TTL_SECS` | 300 | Gallery result cache TTL |
//! | `CACHE_CAPACITY` | 10000 | Gallery result cache entries |

use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub scenarios_path: Option<String>,
    pub cache_ttl: Duration,
    pub cache_capacity: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            scenarios_path: None,
            cache_ttl: Duration::from_secs(300),
            cache_capacity: 10_000,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup (the environment, or a map in tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: parse_or("PORT", lookup("PORT"), defaults.port),
            scenarios_path: lookup("SCENARIOS_PATH").filter(|p| !p.trim().is_empty()),
            cache_ttl: Duration::from_secs(parse_or(
                "CACHE_TTL_SECS",
                lookup("CACHE_TTL_SECS"),
                defaults.cache_ttl.as_secs(),
            )),
            cache_capacity: parse_or("CACHE_CAPACITY", lookup("CACHE_CAPACITY"), defaults.cache_capacity),
        }
    }

    pub fn log_summary(&self) {
        tracing::info!("Configuration:");
        tracing::info!("  PORT: {}", self.port);
        tracing::info!(
            "  SCENARIOS_PATH: {}",
            self.scenarios_path.as_deref().unwrap_or("<built-in>")
        );
        tracing::info!("  CACHE_TTL_SECS: {}", self.cache_ttl.as_secs());
        tracing::info!("  CACHE_CAPACITY: {}", self.cache_capacity);
    }
}

fn parse_or<T: FromStr + Copy>(key: &str, raw: Option<String>, default: T) -> T {
    match raw {
        None => default,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}, using default", key, value);
            default
        }),
    }
}
