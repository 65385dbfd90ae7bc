//! JSON deserialization.
//!
//! This module provides the [`Deserializer`], a recursive descent parser that
//! turns a text buffer into zero or more root [`Value`]s.
//!
//! ## Overview
//!
//! - **Multiple documents**: a buffer may hold any number of whitespace
//!   separated top-level values; each becomes one root, in order.
//! - **First failure wins**: parsing stops at the earliest error, which is
//!   kept with its line, column and byte offset. Roots completed before the
//!   failure stay available.
//! - **Bounded work**: each document gets a byte window of
//!   [`ParserOptions::max_document_size`] and a nesting limit of
//!   [`ParserOptions::max_depth`].
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use json_tree::from_str;
//!
//! let value = from_str(r#"{"name": "Alice", "age": 30}"#).unwrap();
//! assert_eq!(value["age"], 30u32);
//! ```
//!
//! The [`Deserializer`] itself handles concatenated documents:
//!
//! ```rust
//! use json_tree::{Deserializer, ErrorCode};
//!
//! let mut de = Deserializer::new();
//! de.feed("1 [2] {\"three\": 3} [4,");
//! assert_eq!(de.len(), 3);
//! assert_eq!(de.error().map(|e| e.code), Some(ErrorCode::EndOfFile));
//! ```

use crate::options::ParserOptions;
use crate::{Error, ErrorCode, Map, Number, ParseError, Result, Value};
use std::collections::{vec_deque, VecDeque};
use tracing::{debug, trace};

#[derive(Clone, Copy, Debug)]
struct Fail {
    code: ErrorCode,
    offset: usize,
}

type Step<T> = std::result::Result<T, Fail>;

/// Cursor over one input buffer.
///
/// `end` is the boundary of the current document's window, never past the
/// end of `input`.
struct Reader<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    end: usize,
    depth: usize,
    options: &'a ParserOptions,
}

impl<'a> Reader<'a> {
    fn new(input: &'a str, options: &'a ParserOptions) -> Self {
        Reader {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            end: input.len(),
            depth: 0,
            options,
        }
    }

    /// Skips whitespace between documents. Returns `false` once the buffer
    /// is exhausted.
    fn next_document(&mut self) -> bool {
        self.end = self.bytes.len();
        self.skip_whitespace();
        self.pos < self.end
    }

    fn read_document(&mut self) -> Step<Value> {
        self.end = self
            .pos
            .saturating_add(self.options.max_document_size)
            .min(self.bytes.len());
        self.depth = 0;
        self.read_value()
    }

    fn locate(&self, fail: Fail) -> ParseError {
        ParseError::locate(self.input, fail.code, fail.offset, self.end)
    }

    fn fail(&self, code: ErrorCode) -> Fail {
        Fail {
            code,
            offset: self.pos,
        }
    }

    /// Running out of input inside the window is a size-limit error; at
    /// the real end of the buffer it is a plain end of file.
    fn eof(&self) -> Fail {
        if self.end < self.bytes.len() {
            self.fail(ErrorCode::SizeLimitExceeded)
        } else {
            self.fail(ErrorCode::EndOfFile)
        }
    }

    fn peek(&self) -> Option<u8> {
        if self.pos < self.end {
            Some(self.bytes[self.pos])
        } else {
            None
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n') = self.peek() {
            self.pos += 1;
        }
    }

    fn next_token(&mut self) -> Step<u8> {
        self.skip_whitespace();
        self.peek().ok_or_else(|| self.eof())
    }

    fn read_value(&mut self) -> Step<Value> {
        match self.next_token()? {
            b'"' => self.read_string().map(Value::String),
            b'{' => self.read_object(),
            b'[' => self.read_array(),
            b't' => self
                .read_literal(b"true", ErrorCode::NotMatchTrue)
                .map(|()| Value::Bool(true)),
            b'f' => self
                .read_literal(b"false", ErrorCode::NotMatchFalse)
                .map(|()| Value::Bool(false)),
            b'n' => self
                .read_literal(b"null", ErrorCode::NotMatchNull)
                .map(|()| Value::Null),
            b'-' | b'0'..=b'9' => self.read_number().map(Value::Number),
            _ => Err(self.fail(ErrorCode::MissValue)),
        }
    }

    fn enter(&mut self) -> Step<()> {
        self.depth += 1;
        if self.depth > self.options.max_depth {
            return Err(self.fail(ErrorCode::NestingTooDeep));
        }
        self.pos += 1;
        Ok(())
    }

    fn read_object(&mut self) -> Step<Value> {
        self.enter()?;
        let mut members = Map::new();

        if self.next_token()? == b'}' {
            self.pos += 1;
            self.depth -= 1;
            return Ok(Value::Object(members));
        }

        loop {
            if self.next_token()? != b'"' {
                return Err(self.fail(ErrorCode::MissQuote));
            }
            let key = self.read_string()?;

            if self.next_token()? != b':' {
                return Err(self.fail(ErrorCode::MissColon));
            }
            self.pos += 1;

            let value = self.read_value()?;
            members.insert(key, value);

            match self.next_token()? {
                b',' => self.pos += 1,
                b'}' => {
                    self.pos += 1;
                    break;
                }
                b'"' => return Err(self.fail(ErrorCode::MissComma)),
                _ => return Err(self.fail(ErrorCode::MissCurlyClose)),
            }
        }

        self.depth -= 1;
        Ok(Value::Object(members))
    }

    fn read_array(&mut self) -> Step<Value> {
        self.enter()?;
        let mut elements = Vec::new();

        if self.next_token()? == b']' {
            self.pos += 1;
            self.depth -= 1;
            return Ok(Value::Array(elements));
        }

        loop {
            elements.push(self.read_value()?);

            match self.next_token()? {
                b',' => self.pos += 1,
                b']' => {
                    self.pos += 1;
                    break;
                }
                byte if starts_value(byte) => return Err(self.fail(ErrorCode::MissComma)),
                _ => return Err(self.fail(ErrorCode::MissSquareClose)),
            }
        }

        self.depth -= 1;
        Ok(Value::Array(elements))
    }

    /// Reads a quoted string; the cursor sits on the opening quote.
    fn read_string(&mut self) -> Step<String> {
        self.pos += 1;
        let mut out = String::new();

        loop {
            let start = self.pos;
            while self.pos < self.end && !matches!(self.bytes[self.pos], b'"' | b'\\') {
                self.pos += 1;
            }
            if self.pos >= self.end {
                return Err(self.eof());
            }
            // both delimiters are ASCII, so the slice ends on a char boundary
            out.push_str(&self.input[start..self.pos]);

            let delimiter = self.bytes[self.pos];
            self.pos += 1;
            if delimiter == b'"' {
                return Ok(out);
            }
            out.push(self.read_escape()?);
        }
    }

    fn read_escape(&mut self) -> Step<char> {
        let decoded = match self.peek().ok_or_else(|| self.eof())? {
            b'"' => '"',
            b'\\' => '\\',
            b'/' => '/',
            b'b' => '\u{0008}',
            b'f' => '\u{000C}',
            b'n' => '\n',
            b'r' => '\r',
            b't' => '\t',
            b'u' => {
                self.pos += 1;
                return self.read_unicode();
            }
            _ => return Err(self.fail(ErrorCode::InvalidEscape)),
        };
        self.pos += 1;
        Ok(decoded)
    }

    fn read_hex4(&mut self) -> Step<u32> {
        let mut code = 0;
        for _ in 0..4 {
            let byte = self.peek().ok_or_else(|| self.eof())?;
            let digit = char::from(byte)
                .to_digit(16)
                .ok_or_else(|| self.fail(ErrorCode::InvalidUnicode))?;
            code = (code << 4) | digit;
            self.pos += 1;
        }
        Ok(code)
    }

    /// Decodes the digits of a `\u` escape, pairing a high surrogate with a
    /// directly following low one. Unpaired surrogates become U+FFFD.
    fn read_unicode(&mut self) -> Step<char> {
        let first = self.read_hex4()?;
        let code = match first {
            0xD800..=0xDBFF => match self.read_low_surrogate() {
                Some(low) => 0x10000 + ((first - 0xD800) << 10) + (low - 0xDC00),
                None => return Ok(char::REPLACEMENT_CHARACTER),
            },
            _ => first,
        };
        Ok(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    fn read_low_surrogate(&mut self) -> Option<u32> {
        let rest = self.bytes.get(self.pos..self.end)?;
        if rest.len() < 6 || rest[0] != b'\\' || rest[1] != b'u' {
            return None;
        }
        if !rest[2..6].iter().all(u8::is_ascii_hexdigit) {
            return None;
        }
        let hex = std::str::from_utf8(&rest[2..6]).ok()?;
        let low = u32::from_str_radix(hex, 16).ok()?;
        if (0xDC00..=0xDFFF).contains(&low) {
            self.pos += 6;
            Some(low)
        } else {
            None
        }
    }

    fn read_literal(&mut self, literal: &[u8], code: ErrorCode) -> Step<()> {
        let stop = self.pos + literal.len();
        if stop > self.end {
            return Err(self.eof());
        }
        if &self.bytes[self.pos..stop] != literal {
            return Err(self.fail(code));
        }
        self.pos = stop;
        Ok(())
    }

    fn skip_digits(&mut self) {
        while let Some(b'0'..=b'9') = self.peek() {
            self.pos += 1;
        }
    }

    fn require_digits(&mut self, code: ErrorCode) -> Step<()> {
        let start = self.pos;
        self.skip_digits();
        if self.pos > start {
            Ok(())
        } else if self.pos >= self.end {
            Err(self.eof())
        } else {
            Err(self.fail(code))
        }
    }

    fn read_number(&mut self) -> Step<Number> {
        let input = self.input;
        let start = self.pos;

        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        match self.peek() {
            Some(b'0') => self.pos += 1,
            Some(b'1'..=b'9') => self.skip_digits(),
            Some(_) => return Err(self.fail(ErrorCode::InvalidNumberInteger)),
            None => return Err(self.eof()),
        }
        let integer = &input[start..self.pos];

        let mut has_fraction = false;
        if self.peek() == Some(b'.') {
            self.pos += 1;
            self.require_digits(ErrorCode::InvalidNumberFraction)?;
            has_fraction = true;
        }

        let mut exponent = None;
        if let Some(b'e' | b'E') = self.peek() {
            self.pos += 1;
            let exp_start = self.pos;
            if let Some(b'+' | b'-') = self.peek() {
                self.pos += 1;
            }
            self.require_digits(ErrorCode::InvalidNumberExponent)?;
            exponent = Some(&input[exp_start..self.pos]);
        }

        // a window boundary must not split a number in two
        if self.pos == self.end
            && self.end < self.bytes.len()
            && matches!(self.bytes[self.end], b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-')
        {
            return Err(self.eof());
        }

        let text = &input[start..self.pos];
        match classify_number(text, integer, has_fraction, exponent) {
            Number::Double(d) if !d.is_finite() => Err(Fail {
                code: ErrorCode::InvalidNumberExponent,
                offset: start,
            }),
            number => Ok(number),
        }
    }
}

fn starts_value(byte: u8) -> bool {
    matches!(
        byte,
        b'"' | b'{' | b'[' | b't' | b'f' | b'n' | b'-' | b'0'..=b'9'
    )
}

/// Picks the number kind from its textual parts.
///
/// Without a fraction and with a non-negative exponent the value is the
/// integer part scaled by `10^exponent`: `Uint` when non-negative, `Int`
/// otherwise. Everything else, and any integer that overflows 64 bits, is a
/// `Double`.
fn classify_number(text: &str, integer: &str, has_fraction: bool, exponent: Option<&str>) -> Number {
    if !has_fraction {
        let exp = exponent.map_or(Some(0), |e| e.parse::<i32>().ok());
        if let Some(exp) = exp.and_then(|e| u32::try_from(e).ok()) {
            if let Some(number) = scale_integer(integer, exp) {
                return number;
            }
        }
    }
    Number::Double(text.parse().unwrap_or(f64::NAN))
}

fn scale_integer(integer: &str, exp: u32) -> Option<Number> {
    let scale = 10u64.checked_pow(exp)?;
    if integer.starts_with('-') {
        let value = integer
            .parse::<i64>()
            .ok()?
            .checked_mul(i64::try_from(scale).ok()?)?;
        Some(u64::try_from(value).map_or(Number::Int(value), Number::Uint))
    } else {
        let value = integer.parse::<u64>().ok()?.checked_mul(scale)?;
        Some(Number::Uint(value))
    }
}

/// Parses exactly one document; anything but whitespace after it is an error.
pub(crate) fn parse_single(input: &str, options: &ParserOptions) -> Result<Value> {
    let mut reader = Reader::new(input, options);
    let parsed = if reader.next_document() {
        reader.read_document().and_then(|value| {
            if reader.next_document() {
                Err(reader.fail(ErrorCode::TrailingCharacters))
            } else {
                Ok(value)
            }
        })
    } else {
        Err(reader.eof())
    };

    parsed.map_err(|fail| {
        let err = reader.locate(fail);
        debug!(code = ?err.code, line = err.line, column = err.column, offset = err.offset, "failed to parse JSON document");
        Error::Syntax(err)
    })
}

/// Multi-document JSON parser.
///
/// Every call to [`feed`](Deserializer::feed) parses a complete buffer and
/// appends its roots to an internal queue; [`next_root`](Deserializer::next_root)
/// hands them out oldest first.
///
/// # Examples
///
/// ```rust
/// use json_tree::{Deserializer, Value};
///
/// let mut de = Deserializer::new();
/// de.feed(r#"{"id": 1}"#).feed(r#"{"id": 2}"#);
///
/// assert_eq!(de.len(), 2);
/// assert!(de.error().is_none());
/// assert_eq!(de.next_root().unwrap()["id"], 1u32);
/// assert_eq!(de.next_root().unwrap()["id"], 2u32);
/// assert!(de.next_root().is_none());
/// ```
#[derive(Debug, Default)]
pub struct Deserializer {
    roots: VecDeque<Value>,
    options: ParserOptions,
    error: Option<ParseError>,
}

impl Deserializer {
    /// Creates a parser with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: ParserOptions) -> Self {
        Deserializer {
            options,
            ..Self::default()
        }
    }

    /// Parses `input` and queues every root it contains.
    ///
    /// The error from a previous buffer is cleared first. Parsing stops at
    /// the first failure; the roots completed before it are still queued and
    /// the failure is available from [`error`](Deserializer::error).
    pub fn feed(&mut self, input: &str) -> &mut Self {
        self.error = None;
        let before = self.roots.len();
        let mut reader = Reader::new(input, &self.options);

        while reader.next_document() {
            match reader.read_document() {
                Ok(value) => self.roots.push_back(value),
                Err(fail) => {
                    let err = reader.locate(fail);
                    debug!(code = ?err.code, line = err.line, column = err.column, offset = err.offset, "failed to parse JSON document");
                    self.error = Some(err);
                    break;
                }
            }
        }

        trace!(roots = self.roots.len() - before, bytes = input.len(), "parsed JSON buffer");
        self
    }

    /// Removes and returns the oldest queued root.
    pub fn next_root(&mut self) -> Option<Value> {
        self.roots.pop_front()
    }

    /// Iterates over the queued roots without removing them.
    pub fn roots(&self) -> vec_deque::Iter<'_, Value> {
        self.roots.iter()
    }

    #[must_use]
    pub fn into_roots(self) -> Vec<Value> {
        self.roots.into()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// The first failure of the last [`feed`](Deserializer::feed), if any.
    #[must_use]
    pub fn error(&self) -> Option<&ParseError> {
        self.error.as_ref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    #[must_use]
    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Replaces the limits used by later calls to [`feed`](Deserializer::feed).
    pub fn set_options(&mut self, options: ParserOptions) {
        self.options = options;
    }
}

impl IntoIterator for Deserializer {
    type Item = Value;
    type IntoIter = vec_deque::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.roots.into_iter()
    }
}
