//! Fluent statement builder.
//!
//! `QueryBuilder` accumulates SQL fragments and their bound values side by side.
//! Most methods are gated: when the supplied value is zero, empty, `false` or
//! `None`, neither the fragment nor the value is recorded, so optional filters
//! can be chained without `if` branches at the call site.
//!
//! # Example
//!
//! ```
//! use sqlchain::QueryBuilder;
//!
//! let name = "";
//! let (sql, params) = QueryBuilder::postgres()
//!     .raw("SELECT * FROM users u")
//!     .begin_where()
//!     .and("u.id = ?", 7)
//!     .and("u.name = ?", name)
//!     .order_by("u.id", "DESC")
//!     .limit(10)
//!     .build();
//!
//! assert_eq!(sql, "SELECT * FROM users u WHERE 1 = 1 AND u.id = ? ORDER BY u.id DESC LIMIT ?");
//! assert_eq!(params.len(), 2);
//! ```

mod render;


use crate::config::BuilderConfig;
use crate::dialect::Dialect;
use crate::value::Value;

/// Literal clause emitted by [`QueryBuilder::begin_where`].
pub const WHERE_TAUTOLOGY: &str = "WHERE 1 = 1";

/// An INSERT / UPDATE / SELECT assembler with positional `?` placeholders.
///
/// Fragments are opaque: the builder never parses the SQL it concatenates, and
/// it never reports errors. Callers are responsible for valid combinations
/// (e.g. calling [`begin_where`](Self::begin_where) before any `and*` call).
#[must_use]
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    config: BuilderConfig,
    /// Main statement body
    raw: String,
    /// Substitutions for `%s` markers in `raw`
    sub_raws: Vec<String>,
    /// INSERT column names
    insert_fields: Vec<String>,
    /// UPDATE assignment expressions
    update_fields: Vec<String>,
    /// Verbatim text after INSERT/UPDATE (e.g. `RETURNING id`)
    tail: String,
    /// WHERE fragments, joined by ` AND `
    where_fields: Vec<String>,
    /// Bound values in placeholder order
    params: Vec<Value>,
    limit: Option<i64>,
    offset: Option<i64>,
    /// `ORDER BY ...`, empty if unset
    order_by: String,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::from_config(&BuilderConfig::default())
    }
}

impl QueryBuilder {
    /// Create an empty builder for `dialect`.
    pub fn new(dialect: Dialect) -> Self {
        Self::from_config(&BuilderConfig::new().dialect(dialect))
    }

    /// Create an empty builder using the generic / PostgreSQL paging style.
    pub fn postgres() -> Self {
        Self::new(Dialect::Postgres)
    }

    /// Create an empty builder using the SQL Server paging style.
    pub fn sql_server() -> Self {
        Self::new(Dialect::SqlServer)
    }

    /// Create an empty builder from a [`BuilderConfig`].
    pub fn from_config(config: &BuilderConfig) -> Self {
        Self {
            config: config.clone(),
            raw: String::new(),
            sub_raws: Vec::new(),
            insert_fields: Vec::new(),
            update_fields: Vec::new(),
            tail: String::new(),
            where_fields: Vec::new(),
            params: Vec::new(),
            limit: None,
            offset: None,
            order_by: String::new(),
        }
    }

    /// Dialect this builder renders for.
    pub fn dialect(&self) -> Dialect {
        self.config.dialect
    }

    /// Bound values accumulated so far.
    pub fn params(&self) -> &[Value] {
        &self.params
    }

    // ==================== Statement body ====================

    /// Set the main statement text (last call wins).
    ///
    /// The text may contain `%s` markers filled by [`sub_raw`](Self::sub_raw).
    pub fn raw(mut self, sql: impl Into<String>) -> Self {
        self.raw = sql.into();
        self
    }

    /// Append a substitution for the next `%s` marker in the main text.
    ///
    /// The number of substitutions should match the number of markers. Extra
    /// substitutions are dropped and unfilled markers are left verbatim.
    pub fn sub_raw(mut self, sql: impl Into<String>) -> Self {
        self.sub_raws.push(sql.into());
        self
    }

    /// Set verbatim text rendered after the INSERT/UPDATE sections
    /// (e.g. `RETURNING id`). Last call wins.
    pub fn tail(mut self, sql: impl Into<String>) -> Self {
        self.tail = sql.into();
        self
    }

    // ==================== INSERT ====================

    /// Add an INSERT column if `value` is meaningful (see [`Value::is_meaningful`]).
    pub fn insert_value(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        if !value.is_meaningful() {
            return self;
        }
        self.insert_value_always(field, value)
    }

    /// Add an INSERT column unconditionally, even for zero/empty values.
    pub fn insert_value_always(
        mut self,
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.insert_fields.push(field.into());
        self.params.push(value.into());
        self
    }

    // ==================== UPDATE ====================

    /// Add a `SET` assignment (e.g. `"name = ?"`) if `value` is meaningful.
    pub fn update_set(self, assignment: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        if !value.is_meaningful() {
            return self;
        }
        self.update_set_always(assignment, value)
    }

    /// Add a `SET` assignment unconditionally, even for zero/empty values.
    pub fn update_set_always(
        mut self,
        assignment: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.update_fields.push(assignment.into());
        self.params.push(value.into());
        self
    }

    // ==================== WHERE ====================

    /// Start the WHERE section with `WHERE 1 = 1`.
    ///
    /// Not idempotent: each call appends another tautology fragment.
    pub fn begin_where(mut self) -> Self {
        self.where_fields.push(WHERE_TAUTOLOGY.to_string());
        self
    }

    /// Add a WHERE fragment with no bound value.
    pub fn and_raw(mut self, sql: impl Into<String>) -> Self {
        self.where_fields.push(sql.into());
        self
    }

    /// Add a WHERE fragment with no bound value, only if `condition` is true.
    pub fn and_raw_if(self, sql: impl Into<String>, condition: bool) -> Self {
        if condition { self.and_raw(sql) } else { self }
    }

    /// Add a WHERE fragment (e.g. `"u.id = ?"`) if `value` is meaningful.
    pub fn and(mut self, sql: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        if value.is_meaningful() {
            self.where_fields.push(sql.into());
            self.params.push(value);
        }
        self
    }

    /// Add a LIKE fragment if `text` is non-empty, binding `%text%`.
    ///
    /// Pass the bare search text; the wildcards are added here.
    pub fn and_like(mut self, sql: impl Into<String>, text: impl AsRef<str>) -> Self {
        let text = text.as_ref();
        if !text.is_empty() {
            self.where_fields.push(sql.into());
            self.params.push(Value::Text(format!("%{text}%")));
        }
        self
    }

    /// Add a two-value fragment (e.g. `"age BETWEEN ? AND ?"`) if both bounds
    /// are meaningful. If either bound fails, nothing is recorded.
    pub fn and_between(
        mut self,
        sql: impl Into<String>,
        low: impl Into<Value>,
        high: impl Into<Value>,
    ) -> Self {
        let (low, high) = (low.into(), high.into());
        if low.is_meaningful() && high.is_meaningful() {
            self.where_fields.push(sql.into());
            self.params.push(low);
            self.params.push(high);
        }
        self
    }

    /// Add a membership fragment (e.g. `"id IN ?"`) if `values` is a non-empty
    /// collection. The whole collection is bound as a single value; expanding
    /// it is up to the driver.
    pub fn and_in(mut self, sql: impl Into<String>, values: impl Into<Value>) -> Self {
        let values = values.into();
        if values.is_non_empty_list() {
            self.where_fields.push(sql.into());
            self.params.push(values);
        }
        self
    }

    // ==================== ORDER / paging ====================

    /// Set `ORDER BY <column> <direction>` if `column` is non-empty.
    ///
    /// `direction` is passed through verbatim and may be empty.
    pub fn order_by(mut self, column: &str, direction: &str) -> Self {
        if !column.is_empty() {
            self.order_by = format!("ORDER BY {column} {direction}");
        }
        self
    }

    /// Set `ORDER BY <expr>` from a pre-composed expression
    /// (e.g. `"created_at DESC, id"`) if it is non-empty.
    pub fn order_by_expr(self, expr: &str) -> Self {
        self.order_by(expr, "")
    }

    /// Set the row limit. Ignored unless `n > 0`.
    pub fn limit(mut self, n: i64) -> Self {
        if self.config.dialect.accepts_limit(n) {
            self.limit = Some(n);
        }
        self
    }

    /// Set the row offset. Ignored unless the dialect accepts it
    /// (`n > 0` for Postgres, `n >= 0` for SQL Server).
    pub fn offset(mut self, n: i64) -> Self {
        if self.config.dialect.accepts_offset(n) {
            self.offset = Some(n);
        }
        self
    }
}
