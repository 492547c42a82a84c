//! Trait definitions for query builders.

use crate::config::RenderConfig;
use crate::error::OqlResult;

/// Base trait for statement builders.
///
/// Rendering never mutates the builder, so it is idempotent and a finished
/// builder can be rendered from several threads at once.
pub trait SqlQb {
    /// Render the statement with an explicit configuration.
    fn build_with(&self, config: &RenderConfig) -> OqlResult<String>;

    /// Render the statement with the default configuration.
    fn build(&self) -> OqlResult<String> {
        self.build_with(&RenderConfig::default())
    }

    /// Alias for [`SqlQb::build`].
    fn to_sql(&self) -> OqlResult<String> {
        self.build()
    }

    /// Validate builder state without rendering literals.
    fn validate(&self) -> OqlResult<()> {
        Ok(())
    }
}
