//! Query builders for the OrientDB SQL dialect.
//!
//! Every builder is a by-value fluent chain that ends in [`SqlQb::build`],
//! which returns the final statement text. Values are inlined as literals;
//! there are no placeholders.
//!
//! # Usage
//!
//! ```ignore
//! use orientql::qb::{self, SqlQb};
//! use orientql::{Document, RecordId};
//!
//! // SET from a document, target taken from its class
//! let doc = Document::new()
//!     .with_class("TestVertexClass")
//!     .field("foo", "foo string value")
//!     .field("bar", 12345);
//! let sql = qb::update().document(doc).build()?;
//! assert_eq!(sql, "UPDATE TestVertexClass SET foo = 'foo string value', bar = 12345");
//!
//! // Collection edits on a single record
//! let sql = qb::update()
//!     .record(RecordId::new(8, 0))
//!     .add("tags", "new")
//!     .remove_value("tags", "old")
//!     .build()?;
//! assert_eq!(sql, "UPDATE #8:0 ADD tags = 'new' REMOVE tags = 'old'");
//! # Ok::<(), orientql::OqlError>(())
//! ```

mod expr;
mod traits;
mod update;

pub use expr::{Combinator, Condition, Op, Operand, WhereChain};
pub use traits::SqlQb;
pub use update::{HasWhere, NoWhere, PendingCondition, Target, UpdateQb};

/// Create an empty UPDATE builder.
///
/// # Example
/// ```ignore
/// let qb = orientql::qb::update().class("Person").set("active", false);
/// ```
pub fn update() -> UpdateQb {
    UpdateQb::new()
}

#[cfg(test)]
mod tests;
