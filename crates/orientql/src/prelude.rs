//! Convenient imports for typical `orientql` usage.
//!
//! ```ignore
//! use orientql::prelude::*;
//! ```

pub use crate::{
    Document, Op, OqlError, OqlResult, RecordId, RenderConfig, SqlQb, UpdateQb, Value, WhereChain,
    update,
};
