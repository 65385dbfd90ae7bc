//! # json_tree
//!
//! An ordered, owned JSON value tree with a position-tracking parser and a
//! compact/pretty serializer.
//!
//! ## Key Features
//!
//! - **Three number kinds**: signed, unsigned and floating point are kept
//!   apart ([`Number`]), and parsing picks the kind from the text
//! - **Ordered objects**: members keep insertion order and lookups return
//!   the first member with a key ([`Map`])
//! - **Auto-vivification**: `value["a"][0]["b"] = ...` grows the tree on demand
//! - **Precise errors**: the first syntax error is reported with a symbolic
//!   [`ErrorCode`], 1-based line and column and byte offset
//! - **Multi-document input**: one buffer may hold many top-level values
//! - **Bounded parsing**: per-document size window and nesting limit
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```rust
//! use json_tree::{from_str, to_string, Value};
//!
//! let mut config = from_str(r#"{"name": "api", "replicas": 2}"#).unwrap();
//!
//! assert_eq!(config["name"], "api");
//! assert_eq!(config["replicas"].as_u64(), Some(2));
//!
//! config["replicas"] = Value::from(3u32);
//! config["labels"]["tier"] = Value::from("backend");
//!
//! assert_eq!(
//!     to_string(&config),
//!     r#"{"name":"api","replicas":3,"labels":{"tier":"backend"}}"#
//! );
//! ```
//!
//! ### Building values with the json! macro
//!
//! ```rust
//! use json_tree::{json, to_string_pretty};
//!
//! let data = json!({
//!     "name": "Alice",
//!     "tags": ["rust", "json"]
//! });
//!
//! assert_eq!(
//!     to_string_pretty(&data),
//!     "{\n    \"name\" : \"Alice\",\n    \"tags\" : [\n        \"rust\",\n        \"json\"\n    ]\n}"
//! );
//! ```
//!
//! ### Handling errors
//!
//! ```rust
//! use json_tree::{from_str, ErrorCode};
//!
//! let err = from_str("[1, 2\n 3]").unwrap_err();
//! let parse = err.as_parse_error().unwrap();
//! assert_eq!(parse.code, ErrorCode::MissComma);
//! assert_eq!((parse.line, parse.column), (2, 2));
//! ```
//!
//! ## Logging
//!
//! The crate never prints. Parse failures are reported as `tracing` debug
//! events and finished buffers as trace events; install a subscriber to see
//! them.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - All indexing into the input is bounds-checked
//! - Malformed input is reported through `Result`, never by panicking
//! - The `IndexMut` operators panic only on misuse (indexing a string by key,
//!   or an array more than one past its end), like `Vec`
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - parse, edit and print a document
//! - **`dynamic_values.rs`** - building and walking trees
//! - **`multi_document.rs`** - streams of documents and error reporting
//!
//! Run any example with: `cargo run --example <name>`

#[macro_use]
mod macros;

pub mod de;
pub mod error;
pub mod iter;
pub mod map;
pub mod number;
pub mod options;
pub mod ser;
pub mod value;

pub use de::Deserializer;
pub use error::{Error, ErrorCode, ParseError, Result};
pub use iter::{Entries, Iter, IterMut};
pub use map::{Map, Pair};
pub use number::{Number, NumberType};
pub use options::{FormatOptions, ParserOptions};
pub use ser::{to_value, Serializer, ValueSerializer};
pub use value::{Value, ValueType};

use std::io;

/// Serializes a value to compact JSON.
///
/// # Examples
///
/// ```rust
/// use json_tree::{json, to_string};
///
/// let value = json!({"x": 1, "y": [true, null]});
/// assert_eq!(to_string(&value), r#"{"x":1,"y":[true,null]}"#);
/// ```
#[must_use]
pub fn to_string(value: &Value) -> String {
    to_string_with_options(value, &FormatOptions::new())
}

/// Serializes a value to pretty-printed JSON with a 4-space indent.
#[must_use]
pub fn to_string_pretty(value: &Value) -> String {
    to_string_with_options(value, &FormatOptions::pretty())
}

/// Serializes a value with custom layout options.
#[must_use]
pub fn to_string_with_options(value: &Value, options: &FormatOptions) -> String {
    let mut serializer = Serializer::new(options.clone());
    serializer.write(value);
    serializer.into_inner()
}

/// Writes a value as compact JSON.
///
/// # Examples
///
/// ```rust
/// use json_tree::{json, to_writer};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &json!([1, 2])).unwrap();
/// assert_eq!(buffer, b"[1,2]");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing to the writer fails.
pub fn to_writer<W>(writer: W, value: &Value) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, value, &FormatOptions::new())
}

/// Writes a value as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing to the writer fails.
pub fn to_writer_pretty<W>(writer: W, value: &Value) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, value, &FormatOptions::pretty())
}

/// Writes a value with custom layout options.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing to the writer fails.
pub fn to_writer_with_options<W>(mut writer: W, value: &Value, options: &FormatOptions) -> Result<()>
where
    W: io::Write,
{
    let json = to_string_with_options(value, options);
    writer
        .write_all(json.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Parses exactly one JSON document.
///
/// Leading and trailing whitespace is allowed; anything else after the
/// document fails with [`ErrorCode::TrailingCharacters`]. No size window is
/// applied, but nesting is limited to [`ParserOptions::max_depth`].
///
/// # Examples
///
/// ```rust
/// use json_tree::{from_str, NumberType};
///
/// let value = from_str(r#"{"count": 5, "ratio": 0.5, "delta": -1}"#).unwrap();
/// assert_eq!(value["count"].as_number().unwrap().get_type(), NumberType::Uint);
/// assert_eq!(value["ratio"].as_number().unwrap().get_type(), NumberType::Double);
/// assert_eq!(value["delta"].as_number().unwrap().get_type(), NumberType::Int);
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] with the position of the first failure.
pub fn from_str(s: &str) -> Result<Value> {
    from_str_with_options(s, &ParserOptions::unlimited())
}

/// Parses exactly one JSON document under custom limits.
///
/// # Errors
///
/// Returns [`Error::Syntax`] with the position of the first failure.
pub fn from_str_with_options(s: &str, options: &ParserOptions) -> Result<Value> {
    de::parse_single(s, options)
}

/// Parses exactly one JSON document from UTF-8 bytes.
///
/// # Errors
///
/// Returns [`Error::Custom`] for invalid UTF-8 and [`Error::Syntax`] for
/// malformed JSON.
pub fn from_slice(v: &[u8]) -> Result<Value> {
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

/// Reads a stream to the end and parses exactly one JSON document.
///
/// # Examples
///
/// ```rust
/// use json_tree::from_reader;
/// use std::io::Cursor;
///
/// let value = from_reader(Cursor::new(b"[1, 2, 3]")).unwrap();
/// assert_eq!(value.len(), 3);
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise as [`from_str`].
pub fn from_reader<R>(mut reader: R) -> Result<Value>
where
    R: io::Read,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Parses every document in a buffer.
///
/// Unlike [`Deserializer::feed`], which keeps the roots completed before a
/// failure, this discards them and returns the error.
///
/// ```rust
/// use json_tree::parse_all;
///
/// let roots = parse_all("{\"a\": 1}\n{\"a\": 2}\n").unwrap();
/// assert_eq!(roots.len(), 2);
/// assert_eq!(roots[1]["a"], 2u32);
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] with the position of the first failure.
pub fn parse_all(s: &str) -> Result<Vec<Value>> {
    let mut deserializer = Deserializer::with_options(ParserOptions::unlimited());
    deserializer.feed(s);
    match deserializer.error() {
        Some(err) => Err(Error::Syntax(*err)),
        None => Ok(deserializer.into_roots()),
    }
}
