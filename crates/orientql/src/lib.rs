//! # orientql
//!
//! Render OrientDB SQL UPDATE statements from a fluent builder.
//!
//! ## Features
//!
//! - **Exact text**: output matches the dialect's grammar and token spacing
//!   character for character
//! - **Ordered documents**: fields render in the order they were set
//! - **Typestate conditions**: `and` / `or` before `where_` do not compile
//! - **No I/O**: building and rendering are pure; the string is handed to
//!   whatever transport you use
//! - **Logging**: rendered statements are emitted via `tracing` (feature `tracing`)
//!
//! ## Example
//!
//! ```ignore
//! use orientql::qb::{self, SqlQb};
//! use orientql::{Document, RecordId};
//!
//! let doc = Document::new()
//!     .with_rid(RecordId::new(8, 0))
//!     .field("foo", "foo string value")
//!     .field("bar", 12345);
//!
//! let sql = qb::update()
//!     .document(doc)
//!     .where_("foo").eq("whoa")
//!     .or("tags").contains_field("name", "johny")
//!     .build()?;
//!
//! assert_eq!(
//!     sql,
//!     "UPDATE #8:0 SET foo = 'foo string value', bar = 12345 \
//!      WHERE foo = 'whoa' OR tags CONTAINS (name = 'johny')"
//! );
//! # Ok::<(), orientql::OqlError>(())
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod prelude;
pub mod qb;
pub mod rid;
pub mod trace;
pub mod value;

pub use config::{QuoteEscape, RenderConfig};
pub use document::Document;
pub use error::{OqlError, OqlResult};
pub use format::{format_value, format_value_with};
pub use rid::RecordId;
pub use value::Value;

// Re-export qb module for easy access
pub use qb::{
    Combinator, Condition, Op, Operand, PendingCondition, SqlQb, Target, UpdateQb, WhereChain,
    update,
};
