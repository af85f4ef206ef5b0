use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Location of the SQLite database file.
    pub path: PathBuf,
    /// Upper bound on simultaneously open connections.
    pub pool_size: usize,
    pub busy_timeout_ms: u64,
    /// How long a request waits for a free pooled connection.
    pub connection_timeout_ms: u64,
}

impl DatabaseConfig {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    #[must_use]
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_millis(self.connection_timeout_ms)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./gsos_clients.db"),
            pool_size: 5,
            busy_timeout_ms: 5000,
            connection_timeout_ms: 30_000,
        }
    }
}
