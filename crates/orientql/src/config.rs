/// How single quotes inside string literals are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuoteEscape {
    /// Emit the string content unchanged (default).
    #[default]
    Verbatim,
    /// Prefix `\` and `'` with a backslash.
    Backslash,
}

/// Default truncation for logged SQL, in bytes.
pub const DEFAULT_MAX_LOG_LENGTH: usize = 200;

/// Configuration for statement rendering.
///
/// The default renders string content verbatim and truncates logged SQL
/// to [`DEFAULT_MAX_LOG_LENGTH`] bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Quote handling for string literals.
    pub quote_escape: QuoteEscape,
    /// Truncate logged SQL (in bytes). `None` means no truncation.
    pub max_log_length: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            quote_escape: QuoteEscape::Verbatim,
            max_log_length: Some(DEFAULT_MAX_LOG_LENGTH),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quote handling for string literals.
    pub fn with_quote_escape(mut self, quote_escape: QuoteEscape) -> Self {
        self.quote_escape = quote_escape;
        self
    }

    /// Set maximum logged SQL length.
    pub fn with_max_log_length(mut self, len: usize) -> Self {
        self.max_log_length = Some(len);
        self
    }

    /// Disable log truncation.
    pub fn no_log_truncate(mut self) -> Self {
        self.max_log_length = None;
        self
    }
}
