//! `tracing` output for rendered statements.
//!
//! Events are emitted on the `orientql.sql` target. Without the `tracing`
//! feature every function here is a no-op.

use crate::config::RenderConfig;

/// Tracing target used for all events.
pub const SQL_TARGET: &str = "orientql.sql";

/// Truncate to at most `max_bytes`, backing off to a char boundary.
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

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn truncate_sql(sql: &str, config: &RenderConfig) -> String {
    match config.max_log_length {
        Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
        _ => sql.to_string(),
    }
}

#[cfg(feature = "tracing")]
pub(crate) fn rendered(kind: &'static str, target: &str, sql: &str, config: &RenderConfig) {
    if tracing::enabled!(target: SQL_TARGET, tracing::Level::DEBUG) {
        let sql = truncate_sql(sql, config);
        tracing::debug!(
            target: SQL_TARGET,
            kind,
            statement_target = %target,
            sql = %sql,
            "rendered statement"
        );
    }
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn rendered(_kind: &'static str, _target: &str, _sql: &str, _config: &RenderConfig) {}

#[cfg(feature = "tracing")]
pub(crate) fn empty_update(target: &str) {
    tracing::warn!(
        target: SQL_TARGET,
        statement_target = %target,
        "UPDATE has no SET, ADD, REMOVE or WHERE clause"
    );
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn empty_update(_target: &str) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_sql_bytes("UPDATE #8:0", 6), "UPDATE");
        assert_eq!(truncate_sql_bytes("short", 100), "short");
    }

    #[test]
    fn test_truncate_char_boundary() {
        // 'é' is two bytes; cutting inside it backs off.
        assert_eq!(truncate_sql_bytes("aé", 2), "a");
    }

    #[test]
    fn test_truncate_with_config() {
        let config = RenderConfig::new().with_max_log_length(4);
        assert_eq!(truncate_sql("UPDATE", &config), "UPDA...");
        assert_eq!(truncate_sql("UPDATE", &config.no_log_truncate()), "UPDATE");
    }
}
