//! `tokio-postgres` adapter.
//!
//! [`QueryBuilder`] renders driver-agnostic `?` placeholders. This module turns
//! that output into something `tokio_postgres::Client::query` accepts: `$1, $2,
//! ...` placeholders and `&(dyn ToSql + Sync)` parameters.
//!
//! # Example
//!
//! ```ignore
//! let (sql, params) = sqlchain::postgres()
//!     .raw("SELECT id, name FROM users")
//!     .begin_where()
//!     .and("status = ?", status)
//!     .and_in("id = ANY(?)", ids)
//!     .build_pg();
//!
//! let rows = client.query(&sql, &sqlchain::pg::params_ref(&params)).await?;
//! ```

use crate::builder::QueryBuilder;
use crate::error::Error;
use crate::value::Value;
use bytes::BytesMut;
use std::error::Error as StdError;
use tokio_postgres::types::{IsNull, Kind, ToSql, Type};

type BoxError = Box<dyn StdError + Sync + Send>;

impl QueryBuilder {
    /// Render and consume the builder, numbering placeholders as `$1, $2, ...`.
    pub fn build_pg(self) -> (String, Vec<Value>) {
        let (sql, params) = self.build();
        (number_placeholders(&sql), params)
    }
}

/// Rewrite `?` placeholders to `$1, $2, ...`, left to right.
///
/// `?` inside single-quoted literals or double-quoted identifiers is left
/// alone, and `??` renders a literal `?` (for operators such as `?|`).
/// In `E'...'` escape strings a backslash escapes the next character.
pub fn number_placeholders(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len() + 8);
    let mut idx: usize = 0;
    // (closing quote, backslash escapes)
    let mut quote: Option<(char, bool)> = None;
    let mut prev: [Option<char>; 2] = [None, None];
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        if let Some((q, backslash)) = quote {
            out.push(c);
            if backslash && c == '\\' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            } else if c == q {
                quote = None;
            }
            continue;
        }
        let escape_prefix = matches!(prev[1], Some('E' | 'e'))
            && !prev[0].is_some_and(|p| p.is_alphanumeric() || p == '_');
        prev = [prev[1], Some(c)];
        match c {
            '\'' => {
                quote = Some((c, escape_prefix));
                out.push(c);
            }
            '"' => {
                quote = Some((c, false));
                out.push(c);
            }
            '?' if chars.peek() == Some(&'?') => {
                chars.next();
                out.push('?');
            }
            '?' => {
                idx += 1;
                out.push('$');
                push_usize(&mut out, idx);
            }
            _ => out.push(c),
        }
    }
    out
}

// Write a usize as decimal digits into `out` without going through fmt.
#[inline]
fn push_usize(out: &mut String, mut n: usize) {
    if n < 10 {
        out.push(char::from(b'0' + n as u8));
        return;
    }
    let mut buf = [0u8; 20];
    let mut pos = buf.len();
    while n > 0 {
        pos -= 1;
        buf[pos] = b'0' + (n % 10) as u8;
        n /= 10;
    }
    for &b in &buf[pos..] {
        out.push(char::from(b));
    }
}

/// Parameter refs compatible with `tokio-postgres`.
pub fn params_ref(params: &[Value]) -> Vec<&(dyn ToSql + Sync)> {
    params.iter().map(|p| p as &(dyn ToSql + Sync)).collect()
}

fn mismatch(value: &Value, ty: &Type) -> BoxError {
    Error::type_mismatch(value.kind(), ty.name()).into()
}

fn encode_as<T: ToSql>(
    inner: &T,
    value: &Value,
    ty: &Type,
    out: &mut BytesMut,
) -> Result<IsNull, BoxError> {
    if T::accepts(ty) {
        inner.to_sql(ty, out)
    } else {
        Err(mismatch(value, ty))
    }
}

fn encode_int(v: i64, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError> {
    let out_of_range = || -> BoxError {
        Error::IntOutOfRange {
            value: v,
            ty: ty.name().to_string(),
        }
        .into()
    };
    match *ty {
        Type::INT2 => i16::try_from(v).map_err(|_| out_of_range())?.to_sql(ty, out),
        Type::INT4 => i32::try_from(v).map_err(|_| out_of_range())?.to_sql(ty, out),
        Type::INT8 => v.to_sql(ty, out),
        _ => Err(mismatch(&Value::Int(v), ty)),
    }
}

// Rounds to the nearest f32; only finite values that overflow to infinity fail.
fn encode_float4(v: f64, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError> {
    let narrowed = v as f32;
    if v.is_finite() && narrowed.is_infinite() {
        return Err(Error::FloatOutOfRange {
            value: v,
            ty: ty.name().to_string(),
        }
        .into());
    }
    narrowed.to_sql(ty, out)
}

impl ToSql for Value {
    fn to_sql(&self, ty: &Type, out: &mut BytesMut) -> Result<IsNull, BoxError> {
        match self {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(v) => encode_as(v, self, ty, out),
            Value::Int(v) => encode_int(*v, ty, out),
            Value::Float(v) => match *ty {
                Type::FLOAT4 => encode_float4(*v, ty, out),
                Type::FLOAT8 => v.to_sql(ty, out),
                _ => Err(mismatch(self, ty)),
            },
            Value::Text(v) => encode_as(v, self, ty, out),
            Value::Bytes(v) => encode_as(v, self, ty, out),
            Value::Uuid(v) => encode_as(v, self, ty, out),
            Value::Timestamp(v) => encode_as(v, self, ty, out),
            Value::Date(v) => encode_as(v, self, ty, out),
            Value::Json(v) => encode_as(v, self, ty, out),
            Value::List(items) => match ty.kind() {
                Kind::Array(_) => items.to_sql(ty, out),
                _ => Err(mismatch(self, ty)),
            },
        }
    }

    // Kind/type compatibility is checked per variant in `to_sql`.
    fn accepts(_ty: &Type) -> bool {
        true
    }

    tokio_postgres::types::to_sql_checked!();
}
