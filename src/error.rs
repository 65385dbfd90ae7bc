//! Error types for JSON parsing, serialization and typed value access.
//!
//! Two families of failures are reported here:
//!
//! - **Syntax errors** come out of the [`Deserializer`](crate::Deserializer) as a
//!   [`ParseError`]: a symbolic [`ErrorCode`] plus the 1-based line and column and
//!   the byte offset of the earliest failure.
//! - **Access errors** come out of the strict accessors on [`Value`](crate::Value):
//!   asking for a string view of a number, looking up a missing key, and so on.
//!
//! ## Examples
//!
//! ```rust
//! use json_tree::{from_str, Error, ErrorCode};
//!
//! let err = from_str(r#"{"a":}"#).unwrap_err();
//! match err {
//!     Error::Syntax(parse) => {
//!         assert_eq!(parse.code, ErrorCode::MissValue);
//!         assert_eq!(parse.offset, 5);
//!     }
//!     other => panic!("unexpected error: {other}"),
//! }
//! ```

use crate::value::ValueType;
use std::fmt;
use thiserror::Error;

/// Symbolic parse failure codes.
///
/// Every primitive read in the parser maps onto exactly one of these codes.
/// [`ErrorCode::message`] decodes a code to a human-readable sentence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    EndOfFile,
    MissQuote,
    MissComma,
    MissColon,
    /// Never produced: the parser only enters an object on its `{` byte.
    MissCurlyOpen,
    MissCurlyClose,
    /// Never produced: the parser only enters an array on its `[` byte.
    MissSquareOpen,
    MissSquareClose,
    NotMatchNull,
    NotMatchTrue,
    NotMatchFalse,
    MissValue,
    InvalidEscape,
    InvalidUnicode,
    InvalidNumberInteger,
    InvalidNumberFraction,
    /// Also raised at the number's first byte when its value does not fit a
    /// finite `f64`.
    InvalidNumberExponent,
    /// A single top-level document ran past [`ParserOptions::max_document_size`](crate::ParserOptions).
    SizeLimitExceeded,
    /// Arrays/objects nested deeper than [`ParserOptions::max_depth`](crate::ParserOptions).
    NestingTooDeep,
    /// Raised by [`from_str`](crate::from_str) when more than one document is present.
    TrailingCharacters,
}

impl ErrorCode {
    /// Returns the human-readable description of this code.
    ///
    /// ```rust
    /// use json_tree::ErrorCode;
    ///
    /// assert_eq!(ErrorCode::MissColon.message(), "Missing colon ':' in member pair");
    /// ```
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            ErrorCode::EndOfFile => "End of file reached",
            ErrorCode::MissQuote => "Missing quote '\"' for string",
            ErrorCode::MissComma => "Missing comma ',' in array/members",
            ErrorCode::MissColon => "Missing colon ':' in member pair",
            ErrorCode::MissCurlyOpen => "Missing curly '{' for object",
            ErrorCode::MissCurlyClose => "Missing curly '}' for object",
            ErrorCode::MissSquareOpen => "Missing square '[' for array",
            ErrorCode::MissSquareClose => "Missing square ']' for array",
            ErrorCode::NotMatchNull => "Did you mean 'null'?",
            ErrorCode::NotMatchTrue => "Did you mean 'true'?",
            ErrorCode::NotMatchFalse => "Did you mean 'false'?",
            ErrorCode::MissValue => "Missing value in array/member",
            ErrorCode::InvalidEscape => "Invalid escape character",
            ErrorCode::InvalidUnicode => "Invalid unicode",
            ErrorCode::InvalidNumberInteger => "Invalid number integer part",
            ErrorCode::InvalidNumberFraction => "Invalid number fractional part",
            ErrorCode::InvalidNumberExponent => "Invalid number exponent part",
            ErrorCode::SizeLimitExceeded => "Document exceeds the configured size limit",
            ErrorCode::NestingTooDeep => "Nesting exceeds the configured depth limit",
            ErrorCode::TrailingCharacters => "Unexpected data after the document",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Location and cause of the first failure in a parsed buffer.
///
/// `line` and `column` are 1-based; `offset` is the byte offset from the start
/// of the buffer and `size` is the number of bytes the parser was allowed to
/// look at when it failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("{code} at line {line}, column {column} (offset {offset})")]
pub struct ParseError {
    pub code: ErrorCode,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
    pub size: usize,
}

impl ParseError {
    /// Builds an error record by scanning `input` up to `offset`.
    pub(crate) fn locate(input: &str, code: ErrorCode, offset: usize, size: usize) -> Self {
        let mut line = 1;
        let mut column = 1;
        for byte in input.as_bytes().iter().take(offset) {
            if *byte == b'\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        ParseError {
            code,
            line,
            column,
            offset,
            size,
        }
    }

    /// Human-readable description of [`ParseError::code`].
    #[must_use]
    pub const fn message(&self) -> &'static str {
        self.code.message()
    }
}

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Malformed JSON text
    #[error("Syntax error: {0}")]
    Syntax(ParseError),

    /// Typed access on a value holding a different type
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: ValueType,
        found: ValueType,
    },

    /// Strict lookup of a key that is not present
    #[error("Key not found: {0:?}")]
    KeyNotFound(String),

    /// Strict lookup of a position past the end
    #[error("Index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Data that has no JSON representation
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a type mismatch error.
    ///
    /// ```rust
    /// use json_tree::{Error, ValueType};
    ///
    /// let err = Error::type_mismatch(ValueType::String, ValueType::Number);
    /// assert_eq!(err.to_string(), "Type mismatch: expected string, found number");
    /// ```
    #[must_use]
    pub fn type_mismatch(expected: ValueType, found: ValueType) -> Self {
        Error::TypeMismatch { expected, found }
    }

    /// Creates a missing-key error.
    #[must_use]
    pub fn key_not_found(key: &str) -> Self {
        Error::KeyNotFound(key.to_string())
    }

    /// Creates an out-of-range error.
    #[must_use]
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        Error::IndexOutOfRange { index, len }
    }

    /// Creates an unsupported type error for data that cannot become JSON.
    #[must_use]
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    #[must_use]
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the parse record if this is a syntax error.
    #[must_use]
    pub const fn as_parse_error(&self) -> Option<&ParseError> {
        match self {
            Error::Syntax(parse) => Some(parse),
            _ => None,
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Syntax(err)
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
