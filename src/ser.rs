//! JSON serialization.
//!
//! This module provides the [`Serializer`], which writes [`Value`] trees as
//! JSON text, and the [`ValueSerializer`], which turns any `Serialize` type
//! into a [`Value`].
//!
//! ## Overview
//!
//! - **Compact**: no insignificant whitespace, `"key":value`
//! - **Pretty**: one element or member per line, indented by
//!   [`FormatOptions::indent`] spaces per level, `"key" : value`
//!
//! Empty arrays and objects print as `[]` and `{}` in both layouts. Strings
//! are always escaped, so every output parses back to an equal tree.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use json_tree::{json, to_string, to_string_pretty};
//!
//! let value = json!({"id": 7, "tags": []});
//!
//! assert_eq!(to_string(&value), r#"{"id":7,"tags":[]}"#);
//! assert_eq!(to_string_pretty(&value), "{\n    \"id\" : 7,\n    \"tags\" : []\n}");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! A [`Serializer`] accumulates any number of documents:
//!
//! ```rust
//! use json_tree::{json, FormatOptions, Serializer};
//!
//! let mut serializer = Serializer::new(FormatOptions::new());
//! serializer.write(&json!({"a": 1})).write(&json!([true]));
//!
//! assert_eq!(serializer.into_inner(), r#"{"a":1} [true]"#);
//! ```

use crate::{Error, FormatOptions, Map, Number, Result, Value};
use serde::{ser, Serialize};

/// The JSON writer.
///
/// Documents written one after another are separated by a newline in pretty
/// mode and a single space in compact mode, so the accumulated text is a
/// valid multi-document buffer for the [`Deserializer`](crate::Deserializer).
#[derive(Debug, Default)]
pub struct Serializer {
    output: String,
    options: FormatOptions,
    indent_level: usize,
    documents: usize,
}

impl Serializer {
    pub fn new(options: FormatOptions) -> Self {
        Serializer {
            output: String::with_capacity(256),
            options,
            indent_level: 0,
            documents: 0,
        }
    }

    /// Appends one document.
    pub fn write(&mut self, value: &Value) -> &mut Self {
        if self.documents > 0 {
            self.output.push(if self.options.pretty { '\n' } else { ' ' });
        }
        self.write_value(value);
        self.documents += 1;
        self
    }

    /// Number of documents written so far.
    #[must_use]
    pub fn documents(&self) -> usize {
        self.documents
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Drops the accumulated text, keeping the options.
    pub fn clear(&mut self) {
        self.output.clear();
        self.documents = 0;
    }

    fn write_newline(&mut self) {
        if self.options.pretty {
            self.output.push('\n');
            for _ in 0..self.indent_level * self.options.indent {
                self.output.push(' ');
            }
        }
    }

    fn write_value(&mut self, value: &Value) {
        match value {
            Value::Null => self.output.push_str("null"),
            Value::Bool(b) => self.output.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => self.write_number(n),
            Value::String(s) => self.write_string(s),
            Value::Array(items) => self.write_array(items),
            Value::Object(members) => self.write_object(members),
        }
    }

    fn write_number(&mut self, number: &Number) {
        self.output.push_str(&number.to_string());
    }

    fn write_array(&mut self, items: &[Value]) {
        if items.is_empty() {
            self.output.push_str("[]");
            return;
        }

        self.output.push('[');
        self.indent_level += 1;
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.write_newline();
            self.write_value(item);
        }
        self.indent_level -= 1;
        self.write_newline();
        self.output.push(']');
    }

    fn write_object(&mut self, members: &Map) {
        if members.is_empty() {
            self.output.push_str("{}");
            return;
        }

        let separator = if self.options.pretty { " : " } else { ":" };
        self.output.push('{');
        self.indent_level += 1;
        for (i, (key, value)) in members.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.write_newline();
            self.write_string(key);
            self.output.push_str(separator);
            self.write_value(value);
        }
        self.indent_level -= 1;
        self.write_newline();
        self.output.push('}');
    }

    /// Writes `s` quoted, escaping quotes, backslashes and every control
    /// character below U+0020.
    fn write_string(&mut self, s: &str) {
        self.output.push('"');
        let mut start = 0;
        for (i, byte) in s.bytes().enumerate() {
            let escape = match byte {
                b'"' => "\\\"",
                b'\\' => "\\\\",
                b'\n' => "\\n",
                b'\r' => "\\r",
                b'\t' => "\\t",
                0x08 => "\\b",
                0x0C => "\\f",
                0x00..=0x1F => "",
                _ => continue,
            };

            self.output.push_str(&s[start..i]);
            if escape.is_empty() {
                self.output.push_str("\\u00");
                self.output.push(hex_digit(byte >> 4));
                self.output.push(hex_digit(byte & 0x0F));
            } else {
                self.output.push_str(escape);
            }
            start = i + 1;
        }
        self.output.push_str(&s[start..]);
        self.output.push('"');
    }
}

/// Upper-case hex digit for a value below 16.
fn hex_digit(nibble: u8) -> char {
    char::from(if nibble < 10 {
        b'0' + nibble
    } else {
        b'A' + (nibble - 10)
    })
}

/// Builds a [`Value`] from any `Serialize` type.
///
/// Integers keep their signedness (`Int` for signed types, `Uint` for
/// unsigned ones), enum variants with data are externally tagged
/// (`{"Variant": ...}`) and map keys must serialize as strings.
///
/// ```rust
/// use json_tree::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: u8 }
///
/// let value = to_value(&Point { x: -1, y: 2 }).unwrap();
/// assert_eq!(value["x"], -1);
/// assert_eq!(value["y"], 2u32);
/// ```
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeTupleVariant {
    name: &'static str,
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: Map,
    current_key: Option<String>,
}

pub struct SerializeStructVariant {
    name: &'static str,
    map: Map,
}

fn tagged(name: &str, value: Value) -> Value {
    Value::from((name, value))
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::Int(v)))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::Number(Number::Uint(v)))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::Double(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(v.iter().map(|&b| Value::from(b)).collect())
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(tagged(variant, to_value(value)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            name: variant,
            vec: Vec::with_capacity(len),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            name: variant,
            map: Map::new(),
        })
    }
}

impl SerializeVec {
    fn new(capacity: usize) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(capacity),
        }
    }
}

impl SerializeMap {
    fn new() -> Self {
        SerializeMap {
            map: Map::new(),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Array(self.vec))
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(tagged(self.name, Value::Array(self.vec)))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match to_value(key)? {
            Value::String(s) => {
                self.current_key = Some(s);
                Ok(())
            }
            other => Err(Error::unsupported_type(&format!(
                "map key must be a string, found {}",
                other.value_type()
            ))),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(tagged(self.name, Value::Object(self.map)))
    }
}

/// Converts any `Serialize` type into a [`Value`].
///
/// # Errors
///
/// Returns [`Error::UnsupportedType`] for maps whose keys are not strings,
/// and propagates custom errors raised by `Serialize` impls.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}
