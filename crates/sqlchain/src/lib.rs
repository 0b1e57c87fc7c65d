//! # sqlchain
//!
//! A fluent assembler for INSERT, UPDATE and SELECT statements.
//!
//! ## Features
//!
//! - **Gated fragments**: optional filters and fields are skipped when their
//!   value is zero, empty, `false` or `None`, with no `if` at the call site
//! - **Positional parameters**: every fragment and its bound values are recorded
//!   together, so `?` placeholders and parameters always line up
//! - **Two paging dialects**: `OFFSET ? LIMIT ?` (Postgres / generic) and
//!   `OFFSET ? ROWS FETCH NEXT ? ROWS ONLY` (SQL Server)
//! - **SQL stays opaque**: fragments are concatenated, never parsed or validated
//! - **tokio-postgres adapter** (feature `postgres`): `$n` numbering and `ToSql`
//!   for [`Value`]
//!
//! ## Example
//!
//! ```
//! use sqlchain::{QueryBuilder, Value};
//!
//! let (sql, params) = QueryBuilder::sql_server()
//!     .raw("SELECT * FROM tbl tb")
//!     .begin_where()
//!     .and("tb.id = ?", 2)
//!     .and_in("tb.group_id IN ?", vec![1, 2, 3])
//!     .and_like("tb.last_name LIKE ?", "Boneto")
//!     .order_by("tb.id", "asc")
//!     .offset(10)
//!     .limit(20)
//!     .build();
//!
//! assert_eq!(
//!     sql,
//!     "SELECT * FROM tbl tb WHERE 1 = 1 AND tb.id = ? AND tb.group_id IN ? \
//!      AND tb.last_name LIKE ? ORDER BY tb.id asc OFFSET ? ROWS FETCH NEXT ? ROWS ONLY"
//! );
//! assert_eq!(params[2], Value::from("%Boneto%"));
//! assert_eq!(params.len(), 5);
//! ```

pub mod builder;
pub mod config;
pub mod dialect;
pub mod error;
pub mod value;

#[cfg(feature = "postgres")]
pub mod pg;

pub use builder::{QueryBuilder, WHERE_TAUTOLOGY};
pub use config::BuilderConfig;
pub use dialect::Dialect;
pub use error::{Error, Result};
pub use value::Value;

/// Start a statement using the generic / PostgreSQL paging style.
pub fn postgres() -> QueryBuilder {
    QueryBuilder::postgres()
}

/// Start a statement using the SQL Server paging style.
pub fn sql_server() -> QueryBuilder {
    QueryBuilder::sql_server()
}
