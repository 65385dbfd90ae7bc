//! Configuration for the serializer and the parser.
//!
//! - [`FormatOptions`]: compact or pretty output, indent width
//! - [`ParserOptions`]: per-document size window and nesting limit
//!
//! ## Examples
//!
//! ```rust
//! use json_tree::{json, to_string_with_options, FormatOptions};
//!
//! let value = json!({"a": [1, 2]});
//!
//! let options = FormatOptions::pretty().with_indent(2);
//! let text = to_string_with_options(&value, &options);
//! assert_eq!(text, "{\n  \"a\" : [\n    1,\n    2\n  ]\n}");
//! ```

/// Output layout for the [`Serializer`](crate::Serializer).
///
/// # Examples
///
/// ```rust
/// use json_tree::FormatOptions;
///
/// // Compact: no insignificant whitespace
/// let options = FormatOptions::new();
/// assert!(!options.pretty);
///
/// // Pretty-printed with the default 4-space indentation
/// let options = FormatOptions::pretty();
/// assert_eq!(options.indent, 4);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatOptions {
    pub pretty: bool,
    pub indent: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            pretty: false,
            indent: 4,
        }
    }
}

impl FormatOptions {
    /// Creates compact options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for one-member-per-line output with `" : "` separators.
    #[must_use]
    pub fn pretty() -> Self {
        FormatOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the number of spaces per nesting level. Only affects pretty output.
    ///
    /// ```rust
    /// use json_tree::FormatOptions;
    ///
    /// let options = FormatOptions::pretty().with_indent(2);
    /// assert_eq!(options.indent, 2);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}

/// Default byte window granted to each top-level document.
pub const DEFAULT_MAX_DOCUMENT_SIZE: usize = 8096;

/// Default number of nested arrays/objects accepted.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Limits applied by the [`Deserializer`](crate::Deserializer).
///
/// Each top-level document may span at most `max_document_size` bytes,
/// counted from its first byte; a document still open at the end of its
/// window fails with [`SizeLimitExceeded`](crate::ErrorCode::SizeLimitExceeded).
/// Arrays and objects nested more than `max_depth` levels fail with
/// [`NestingTooDeep`](crate::ErrorCode::NestingTooDeep).
///
/// ```rust
/// use json_tree::{Deserializer, ErrorCode, ParserOptions};
///
/// let options = ParserOptions::new().with_max_depth(2);
/// let mut de = Deserializer::with_options(options);
/// de.feed("[[[]]]");
/// assert_eq!(de.error().map(|e| e.code), Some(ErrorCode::NestingTooDeep));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParserOptions {
    pub max_document_size: usize,
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        ParserOptions {
            max_document_size: DEFAULT_MAX_DOCUMENT_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Lifts the size window entirely; depth stays bounded so deeply nested
    /// input cannot exhaust the stack.
    #[must_use]
    pub fn unlimited() -> Self {
        ParserOptions {
            max_document_size: usize::MAX,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_max_document_size(mut self, max_document_size: usize) -> Self {
        self.max_document_size = max_document_size;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
