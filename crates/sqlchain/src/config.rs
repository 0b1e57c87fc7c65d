use crate::dialect::Dialect;
use serde::Deserialize;

/// Configuration for [`QueryBuilder`](crate::QueryBuilder).
///
/// Deserializable so it can be embedded in an application's config file:
///
/// ```toml
/// [sql]
/// dialect = "mssql"
/// log_sql = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Dialect used for paging clauses.
    pub dialect: Dialect,
    /// Whether `render` emits a debug event (requires the `tracing` feature).
    pub log_sql: bool,
    /// Truncate logged SQL (in bytes). `None` means no truncation.
    pub max_log_sql_length: Option<usize>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            dialect: Dialect::Postgres,
            log_sql: false,
            max_log_sql_length: Some(200),
        }
    }
}

impl BuilderConfig {
    /// Create a new configuration with defaults (Postgres, logging off).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dialect.
    pub fn dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    /// Enable SQL logging on render.
    pub fn enable_logging(mut self) -> Self {
        self.log_sql = true;
        self
    }

    /// Disable SQL logging on render.
    pub fn disable_logging(mut self) -> Self {
        self.log_sql = false;
        self
    }

    /// Set maximum logged SQL length.
    pub fn max_log_sql_length(mut self, len: usize) -> Self {
        self.max_log_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation in logs.
    pub fn no_truncate(mut self) -> Self {
        self.max_log_sql_length = None;
        self
    }
}
