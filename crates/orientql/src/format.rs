//! Literal formatting for values.
//!
//! Stateless helpers turning a [`Value`] into its dialect literal:
//!
//! | value       | literal                      |
//! |-------------|------------------------------|
//! | string      | `'text'`                     |
//! | integer     | `12345`                      |
//! | float       | `1.5`                        |
//! | boolean     | `true` / `false`             |
//! | null        | `NULL`                       |
//! | link        | `#8:0`                       |
//! | document    | `(name = 'johny', age = 31)` |
//! | list        | `[1, 'a', NULL]`             |

use crate::config::{QuoteEscape, RenderConfig};
use crate::error::{OqlError, OqlResult};
use crate::value::Value;
use std::fmt::Write;

/// Format a value with the default [`RenderConfig`].
pub fn format_value(value: &Value) -> OqlResult<String> {
    format_value_with(value, &RenderConfig::default())
}

/// Format a value with an explicit configuration.
pub fn format_value_with(value: &Value, config: &RenderConfig) -> OqlResult<String> {
    let mut out = String::new();
    write_value(&mut out, value, config)?;
    Ok(out)
}

/// Format a string as a single-quoted literal.
pub fn quote_str(s: &str, escape: QuoteEscape) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    write_quoted(&mut out, s, escape);
    out
}

pub(crate) fn write_value(out: &mut String, value: &Value, config: &RenderConfig) -> OqlResult<()> {
    match value {
        Value::Null => out.push_str("NULL"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Integer(i) => {
            let _ = write!(out, "{i}");
        }
        Value::Unsigned(u) => {
            let _ = write!(out, "{u}");
        }
        Value::Float(f) => {
            if !f.is_finite() {
                return Err(OqlError::unsupported(format!(
                    "non-finite float {f} has no literal form"
                )));
            }
            let _ = write!(out, "{f}");
        }
        Value::String(s) => write_quoted(out, s, config.quote_escape),
        Value::Link(rid) => {
            let _ = write!(out, "{rid}");
        }
        Value::Document(doc) => {
            out.push('(');
            for (i, (name, v)) in doc.fields().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_assignment(out, name, v, config)?;
            }
            out.push(')');
        }
        Value::List(items) => {
            out.push('[');
            for (i, v) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, v, config)?;
            }
            out.push(']');
        }
    }
    Ok(())
}

/// Write `<field> = <literal>`.
pub(crate) fn write_assignment(
    out: &mut String,
    field: &str,
    value: &Value,
    config: &RenderConfig,
) -> OqlResult<()> {
    if field.is_empty() {
        return Err(OqlError::invalid_identifier("field name cannot be empty"));
    }
    out.push_str(field);
    out.push_str(" = ");
    write_value(out, value, config)
}

fn write_quoted(out: &mut String, s: &str, escape: QuoteEscape) {
    out.push('\'');
    match escape {
        QuoteEscape::Verbatim => out.push_str(s),
        QuoteEscape::Backslash => {
            for c in s.chars() {
                if c == '\'' || c == '\\' {
                    out.push('\\');
                }
                out.push(c);
            }
        }
    }
    out.push('\'');
}
