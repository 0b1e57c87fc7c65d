//! Dialect paging policies.
//!
//! Both dialects share one rendering engine. They only differ in how
//! `OFFSET`/`LIMIT` are written and which offsets are accepted.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// SQL dialect a [`QueryBuilder`](crate::QueryBuilder) renders for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Generic / PostgreSQL style: `OFFSET ? LIMIT ?`.
    #[default]
    #[serde(alias = "postgresql", alias = "pg", alias = "generic")]
    Postgres,
    /// Row-paging / SQL Server style: `OFFSET ? ROWS FETCH NEXT ? ROWS ONLY`.
    #[serde(alias = "sql_server", alias = "mssql")]
    SqlServer,
}

impl Dialect {
    /// Returns the name of the dialect.
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Postgres => "postgres",
            Dialect::SqlServer => "sqlserver",
        }
    }

    /// Offset clause text, rendered when an offset is set.
    pub fn offset_clause(self) -> &'static str {
        match self {
            Dialect::Postgres => "OFFSET ?",
            Dialect::SqlServer => "OFFSET ? ROWS",
        }
    }

    /// Limit clause text, rendered when a limit is set.
    pub fn limit_clause(self) -> &'static str {
        match self {
            Dialect::Postgres => "LIMIT ?",
            Dialect::SqlServer => "FETCH NEXT ? ROWS ONLY",
        }
    }

    /// Whether `offset` is stored by [`QueryBuilder::offset`](crate::QueryBuilder::offset).
    ///
    /// Postgres ignores `0` (it is the default anyway); SQL Server keeps it
    /// because `FETCH NEXT` is only valid after an `OFFSET ... ROWS`.
    pub fn accepts_offset(self, offset: i64) -> bool {
        match self {
            Dialect::Postgres => offset > 0,
            Dialect::SqlServer => offset >= 0,
        }
    }

    /// Whether `limit` is stored. Same rule for every dialect.
    pub fn accepts_limit(self, limit: i64) -> bool {
        limit > 0
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" | "generic" => Ok(Dialect::Postgres),
            "sqlserver" | "sql_server" | "mssql" => Ok(Dialect::SqlServer),
            _ => Err(Error::UnknownDialect(s.to_string())),
        }
    }
}
