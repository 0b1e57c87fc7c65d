use super::QueryBuilder;
use crate::value::Value;
use std::borrow::Cow;

impl QueryBuilder {
    /// Render the statement with `?` placeholders and return it with the bound
    /// values in placeholder order.
    ///
    /// Paging values are appended to the builder's own values as part of
    /// rendering (offset first, then limit), so calling this twice on the same
    /// builder binds them twice. Prefer [`build`](Self::build).
    ///
    /// Pieces are concatenated in a fixed order: main text, `SET`, insert
    /// columns, `VALUES`, tail, WHERE fragments, `ORDER BY`, offset, limit.
    /// The `VALUES (...)` list gets one `?` per bound value accumulated at this
    /// point, so it is only correct when insert columns are the sole bound
    /// values on the builder.
    pub fn render(&mut self) -> (String, Vec<Value>) {
        let dialect = self.config.dialect;
        let mut offset_sql = "";
        let mut limit_sql = "";

        if let Some(offset) = self.offset {
            self.params.push(Value::Int(offset));
            offset_sql = dialect.offset_clause();
        }

        if let Some(limit) = self.limit {
            self.params.push(Value::Int(limit));
            limit_sql = dialect.limit_clause();
        }

        let main_sql = if self.sub_raws.is_empty() {
            Cow::Borrowed(self.raw.as_str())
        } else {
            Cow::Owned(substitute(&self.raw, &self.sub_raws))
        };

        let (insert_fields_sql, insert_values_sql) = if self.insert_fields.is_empty() {
            (String::new(), String::new())
        } else {
            let placeholders = vec!["?"; self.params.len()].join(", ");
            (
                format!("({})", self.insert_fields.join(", ")),
                format!("VALUES ({placeholders})"),
            )
        };

        let update_sql = if self.update_fields.is_empty() {
            String::new()
        } else {
            format!("SET {}", self.update_fields.join(", "))
        };

        let where_sql = self.where_fields.join(" AND ");

        let sql = join_collapsed(&[
            main_sql.as_ref(),
            update_sql.as_str(),
            insert_fields_sql.as_str(),
            insert_values_sql.as_str(),
            self.tail.as_str(),
            where_sql.as_str(),
            self.order_by.as_str(),
            offset_sql,
            limit_sql,
        ]);

        #[cfg(feature = "tracing")]
        self.trace_render(&sql);

        (sql, self.params.clone())
    }

    /// Render and consume the builder.
    pub fn build(mut self) -> (String, Vec<Value>) {
        let (sql, _) = self.render();
        (sql, self.params)
    }

    #[cfg(feature = "tracing")]
    fn trace_render(&self, sql: &str) {
        if !self.config.log_sql {
            return;
        }
        let sql = match self.config.max_log_sql_length {
            Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
            _ => sql.to_string(),
        };
        tracing::debug!(
            target: "sqlchain.render",
            dialect = %self.config.dialect,
            param_count = self.params.len(),
            sql = %sql,
        );
    }
}

/// Fill `%s` markers (also `%v`, `%d`) in `template` with `subs`, left to right.
///
/// `%%` renders a single `%`. Markers beyond the supplied substitutions are
/// kept verbatim; surplus substitutions are dropped.
pub(crate) fn substitute(template: &str, subs: &[String]) -> String {
    let extra: usize = subs.iter().map(String::len).sum();
    let mut out = String::with_capacity(template.len() + extra);
    let mut subs = subs.iter();
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(verb @ ('s' | 'v' | 'd')) => {
                chars.next();
                match subs.next() {
                    Some(sub) => out.push_str(sub),
                    None => {
                        out.push('%');
                        out.push(verb);
                    }
                }
            }
            _ => out.push('%'),
        }
    }
    out
}

/// Join `pieces` with single spaces, collapsing every ASCII whitespace run and
/// dropping leading/trailing whitespace. Non-ASCII spaces (e.g. U+00A0) are
/// kept, since they may sit inside string literals.
pub(crate) fn join_collapsed(pieces: &[&str]) -> String {
    let cap = pieces.iter().map(|p| p.len() + 1).sum();
    let mut out = String::with_capacity(cap);
    for word in pieces.iter().flat_map(|p| p.split_ascii_whitespace()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}
