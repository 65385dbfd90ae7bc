//! Dynamic value representation for JSON data.
//!
//! This module provides the [`Value`] enum, an owned tree of JSON data. Every
//! value owns its children outright: there are no shared or back references, so
//! dropping a value drops the whole subtree and a value can only be placed in a
//! second spot by cloning it.
//!
//! ## Creating Values
//!
//! ```rust
//! use json_tree::{json, Value, ValueType};
//!
//! let null = Value::Null;
//! let boolean = Value::from(true);
//! let number = Value::from(42u32);
//! let text = Value::from("hello");
//! let member = Value::from(("key", Value::from(1)));
//! let empty_object = Value::with_type(ValueType::Object);
//!
//! let obj = json!({
//!     "name": "Alice",
//!     "tags": ["rust", "json"]
//! });
//! assert_eq!(obj["tags"][1], "json");
//! ```
//!
//! ## Auto-vivification
//!
//! Mutable indexing grows the tree on demand. A Null value indexed by key
//! becomes an object; indexed by position it becomes an array, and indexing one
//! past the end of an array appends a Null element:
//!
//! ```rust
//! use json_tree::Value;
//!
//! let mut value = Value::Null;
//! value["servers"][0]["port"] = Value::from(8080u16);
//! value["servers"][1]["port"] = Value::from(8081u16);
//! assert_eq!(value["servers"].len(), 2);
//! ```
//!
//! ## Typed access
//!
//! `as_*` accessors return `Option`; the `TryFrom` conversions and the strict
//! `at`/`at_index` lookups return a [`Result`](crate::Result) carrying a
//! [`TypeMismatch`](crate::Error::TypeMismatch),
//! [`KeyNotFound`](crate::Error::KeyNotFound) or
//! [`IndexOutOfRange`](crate::Error::IndexOutOfRange) error.

use crate::iter::{Iter, IterMut};
use crate::{Error, Map, Number, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Index, IndexMut};

/// The tag of a [`Value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Null,
    Boolean,
    String,
    Number,
    Array,
    Object,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueType::Null => "null",
            ValueType::Boolean => "boolean",
            ValueType::String => "string",
            ValueType::Number => "number",
            ValueType::Array => "array",
            ValueType::Object => "object",
        })
    }
}

/// Any JSON value.
///
/// # Examples
///
/// ```rust
/// use json_tree::{Value, Number};
///
/// let null = Value::Null;
/// let num = Value::Number(Number::Uint(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    String(String),
    Number(Number),
    Array(Vec<Value>),
    Object(Map),
}

/// Returned by the `Index` operators when nothing matches.
static NULL: Value = Value::Null;

impl Value {
    /// Creates the empty/zero value of the given type.
    ///
    /// ```rust
    /// use json_tree::{Value, ValueType};
    ///
    /// assert_eq!(Value::with_type(ValueType::Array), Value::Array(vec![]));
    /// assert_eq!(Value::with_type(ValueType::Number), Value::from(0));
    /// ```
    #[must_use]
    pub fn with_type(value_type: ValueType) -> Self {
        match value_type {
            ValueType::Null => Value::Null,
            ValueType::Boolean => Value::Bool(false),
            ValueType::String => Value::String(String::new()),
            ValueType::Number => Value::Number(Number::default()),
            ValueType::Array => Value::Array(Vec::new()),
            ValueType::Object => Value::Object(Map::new()),
        }
    }

    /// Creates an array holding `count` copies of `value`.
    #[must_use]
    pub fn filled(count: usize, value: &Value) -> Self {
        Value::Array(vec![value.clone(); count])
    }

    #[inline]
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Boolean,
            Value::String(_) => ValueType::String,
            Value::Number(_) => ValueType::Number,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the number converted to `i64` under the [`Number`] lossy policy.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_number().map(Number::to_i64)
    }

    #[inline]
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        self.as_number().map(Number::to_u64)
    }

    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_number().map(Number::to_f64)
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    #[inline]
    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Replaces the value with Null and returns the old one.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    fn mismatch(&self, expected: ValueType) -> Error {
        Error::type_mismatch(expected, self.value_type())
    }

    /// Looks up the first member named `key`.
    ///
    /// Returns `None` for a missing key and for non-object values.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|obj| obj.get(key))
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.as_object_mut().and_then(|obj| obj.get_mut(key))
    }

    /// Looks up an array element, or the value of the `index`-th object member.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(arr) => arr.get(index),
            Value::Object(obj) => obj.get_index(index).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Strict key lookup.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] if the value is not an object,
    /// [`Error::KeyNotFound`] if no member carries `key`.
    ///
    /// ```rust
    /// use json_tree::{json, Error};
    ///
    /// let value = json!({"a": 1});
    /// assert!(value.at("a").is_ok());
    /// assert_eq!(value.at("b"), Err(Error::key_not_found("b")));
    /// ```
    pub fn at(&self, key: &str) -> Result<&Value> {
        let obj = self
            .as_object()
            .ok_or_else(|| self.mismatch(ValueType::Object))?;
        obj.get(key).ok_or_else(|| Error::key_not_found(key))
    }

    /// Strict positional lookup into an array or object.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] for scalars, [`Error::IndexOutOfRange`] past the end.
    pub fn at_index(&self, index: usize) -> Result<&Value> {
        if !self.is_array() && !self.is_object() {
            return Err(self.mismatch(ValueType::Array));
        }
        self.get_index(index)
            .ok_or_else(|| Error::index_out_of_range(index, self.len()))
    }

    /// Mutable key access with auto-vivification.
    ///
    /// Null becomes an empty object; an object returns its first member named
    /// `key`, appending a Null member when there is none.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] for any other type.
    pub fn member_mut(&mut self, key: &str) -> Result<&mut Value> {
        if self.is_null() {
            *self = Value::Object(Map::new());
        }
        match self {
            Value::Object(obj) => Ok(obj.get_or_insert(key)),
            other => Err(other.mismatch(ValueType::Object)),
        }
    }

    /// Mutable positional access with auto-vivification.
    ///
    /// Null becomes an empty array; `index == len` on an array appends a Null
    /// element. Objects are addressed by member position.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] past the end, [`Error::TypeMismatch`] for scalars.
    pub fn element_mut(&mut self, index: usize) -> Result<&mut Value> {
        if self.is_null() {
            *self = Value::Array(Vec::new());
        }
        match self {
            Value::Array(arr) => {
                let len = arr.len();
                if index == len {
                    arr.push(Value::Null);
                }
                arr.get_mut(index)
                    .ok_or_else(|| Error::index_out_of_range(index, len))
            }
            Value::Object(obj) => {
                let len = obj.len();
                obj.get_index_mut(index)
                    .ok_or_else(|| Error::index_out_of_range(index, len))
            }
            other => Err(other.mismatch(ValueType::Array)),
        }
    }

    /// Appends `value` to an array, turning Null into an array first.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] if the value is neither Null nor an array.
    pub fn push(&mut self, value: Value) -> Result<()> {
        if self.is_null() {
            *self = Value::Array(Vec::new());
        }
        match self {
            Value::Array(arr) => {
                arr.push(value);
                Ok(())
            }
            other => Err(other.mismatch(ValueType::Array)),
        }
    }

    /// Adds a member.
    ///
    /// Null becomes an object. On an object the first member named `key` is
    /// overwritten (or a new one appended). On an array the pair is appended as
    /// a single-member object element.
    ///
    /// # Errors
    ///
    /// [`Error::TypeMismatch`] for scalars.
    ///
    /// ```rust
    /// use json_tree::{json, Value};
    ///
    /// let mut list = json!([1]);
    /// list.push_member("k", Value::from(2)).unwrap();
    /// assert_eq!(list, json!([1, {"k": 2}]));
    /// ```
    pub fn push_member(&mut self, key: impl Into<String>, value: Value) -> Result<()> {
        if self.is_null() {
            *self = Value::Object(Map::new());
        }
        match self {
            Value::Object(obj) => {
                obj.insert(key, value);
                Ok(())
            }
            Value::Array(arr) => {
                let key: String = key.into();
                arr.push(Value::from((key, value)));
                Ok(())
            }
            other => Err(other.mismatch(ValueType::Object)),
        }
    }

    /// Removes the last array element or object member.
    ///
    /// Any other value is reset to Null and its old content returned.
    pub fn pop(&mut self) -> Option<Value> {
        match self {
            Value::Array(arr) => arr.pop(),
            Value::Object(obj) => obj.pop().map(|(_, v)| v),
            Value::Null => None,
            _ => Some(self.take()),
        }
    }

    /// Element count for arrays, member count for objects, character count for
    /// strings, `1` for numbers and booleans and `0` for Null.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Value::Null => 0,
            Value::Bool(_) | Value::Number(_) => 1,
            Value::String(s) => s.chars().count(),
            Value::Array(arr) => arr.len(),
            Value::Object(obj) => obj.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Empties a container or resets a scalar to its zero value, keeping the type.
    pub fn clear(&mut self) {
        match self {
            Value::Null => {}
            Value::Bool(b) => *b = false,
            Value::String(s) => s.clear(),
            Value::Number(n) => *n = Number::default(),
            Value::Array(arr) => arr.clear(),
            Value::Object(obj) => obj.clear(),
        }
    }

    /// Removes the first member named `key`, returning how many members were removed.
    pub fn erase(&mut self, key: &str) -> usize {
        match self {
            Value::Object(obj) => usize::from(obj.remove(key).is_some()),
            _ => 0,
        }
    }

    /// Iterates over array elements or object member values in insertion order.
    ///
    /// Scalars yield an empty iterator.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut::new(self)
    }

    /// Cursor at the first element; equal to [`Value::end`] for scalars and
    /// empty containers.
    pub fn begin(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Cursor one past the last element.
    pub fn end(&self) -> Iter<'_> {
        Iter::new_end(self)
    }

    /// Serializes to pretty-printed JSON with the default 4-space indent.
    #[must_use]
    pub fn to_pretty_string(&self) -> String {
        crate::to_string_pretty(self)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            _ => false,
        }
    }
}

/// Values of the same type are ordered by payload; values of different types
/// are unordered.
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Null, Value::Null) => Some(Ordering::Equal),
            (Value::Bool(a), Value::Bool(b)) => a.partial_cmp(b),
            (Value::String(a), Value::String(b)) => a.partial_cmp(b),
            (Value::Number(a), Value::Number(b)) => a.partial_cmp(b),
            (Value::Array(a), Value::Array(b)) => a.partial_cmp(b),
            (Value::Object(a), Value::Object(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

macro_rules! value_eq_scalar {
    ($($ty:ty => $pat:ident($bind:ident) => $cmp:expr),* $(,)?) => {
        $(
            impl PartialEq<$ty> for Value {
                fn eq(&self, other: &$ty) -> bool {
                    match self {
                        Value::$pat($bind) => $cmp(other),
                        _ => false,
                    }
                }
            }

            impl PartialEq<Value> for $ty {
                fn eq(&self, other: &Value) -> bool {
                    other == self
                }
            }
        )*
    };
}

value_eq_scalar! {
    str => String(s) => |o: &str| s == o,
    String => String(s) => |o: &String| s == o,
    bool => Bool(b) => |o: &bool| b == o,
    i32 => Number(n) => |o: &i32| *n == Number::from(*o),
    i64 => Number(n) => |o: &i64| *n == Number::from(*o),
    u32 => Number(n) => |o: &u32| *n == Number::from(*o),
    u64 => Number(n) => |o: &u64| *n == Number::from(*o),
    f64 => Number(n) => |o: &f64| *n == Number::from(*o),
}

impl PartialEq<&str> for Value {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<()> for Value {
    fn eq(&self, _other: &()) -> bool {
        self.is_null()
    }
}

impl Index<&str> for Value {
    type Output = Value;

    /// Returns the first member named `key`, or a shared immutable Null when
    /// the key is missing or the value is not an object.
    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }
}

impl Index<usize> for Value {
    type Output = Value;

    /// Returns the element (or member value) at `index`, or a shared immutable
    /// Null when there is none.
    fn index(&self, index: usize) -> &Value {
        self.get_index(index).unwrap_or(&NULL)
    }
}

impl IndexMut<&str> for Value {
    /// Auto-vivifying key access; see [`Value::member_mut`].
    ///
    /// # Panics
    ///
    /// Panics if the value is neither Null nor an object.
    fn index_mut(&mut self, key: &str) -> &mut Value {
        match self.member_mut(key) {
            Ok(value) => value,
            Err(err) => panic!("cannot index by {:?}: {}", key, err),
        }
    }
}

impl IndexMut<usize> for Value {
    /// Auto-vivifying positional access; see [`Value::element_mut`].
    ///
    /// # Panics
    ///
    /// Panics past the end of the container or on a scalar value.
    fn index_mut(&mut self, index: usize) -> &mut Value {
        match self.element_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("cannot index by {}: {}", index, err),
        }
    }
}

impl<'a> IntoIterator for &'a Value {
    type Item = &'a Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Value {
    type Item = &'a mut Value;
    type IntoIter = IterMut<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Compact JSON text.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::to_string(self))
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Int(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Uint(u)) => serializer.serialize_u64(*u),
            Value::Number(Number::Double(d)) => serializer.serialize_f64(*d),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("any valid JSON value")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Value, E> {
                Ok(Value::Number(Number::Int(value)))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Value, E> {
                Ok(Value::Number(Number::Uint(value)))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Value, E> {
                Ok(Value::Number(Number::Double(value)))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Value, E> {
                Ok(Value::String(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_none<E>(self) -> std::result::Result<Value, E> {
                Ok(Value::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> std::result::Result<Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut vec = Vec::with_capacity(seq.size_hint().unwrap_or(0));
                while let Some(elem) = seq.next_element()? {
                    vec.push(elem);
                }
                Ok(Value::Array(vec))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = Map::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// Strict conversions out of a Value
impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(other.mismatch(ValueType::String)),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        value
            .as_bool()
            .ok_or_else(|| value.mismatch(ValueType::Boolean))
    }
}

impl TryFrom<Value> for Number {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Number(n) => Ok(n),
            other => Err(other.mismatch(ValueType::Number)),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Number::try_from(value).map(|n| n.to_i64())
    }
}

impl TryFrom<Value> for u64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Number::try_from(value).map(|n| n.to_u64())
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Number::try_from(value).map(|n| n.to_f64())
    }
}

impl TryFrom<Value> for Vec<Value> {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Array(arr) => Ok(arr),
            other => Err(other.mismatch(ValueType::Array)),
        }
    }
}

impl TryFrom<Value> for Map {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(obj) => Ok(obj),
            other => Err(other.mismatch(ValueType::Object)),
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = Error;

    fn try_from(value: &'a Value) -> Result<Self> {
        value
            .as_str()
            .ok_or_else(|| value.mismatch(ValueType::String))
    }
}

impl<'a> TryFrom<&'a Value> for &'a [Value] {
    type Error = Error;

    fn try_from(value: &'a Value) -> Result<Self> {
        value
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| value.mismatch(ValueType::Array))
    }
}

impl<'a> TryFrom<&'a Value> for &'a Map {
    type Error = Error;

    fn try_from(value: &'a Value) -> Result<Self> {
        value
            .as_object()
            .ok_or_else(|| value.mismatch(ValueType::Object))
    }
}

// From implementations for creating Values
impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! value_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

value_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

/// A single key/value pair becomes a one-member object.
impl<K: Into<String>> From<(K, Value)> for Value {
    fn from((key, value): (K, Value)) -> Self {
        let mut map = Map::with_capacity(1);
        map.push(key, value);
        Value::Object(map)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Array literal.
impl FromIterator<Value> for Value {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

/// Object literal; a repeated key overwrites the first occurrence.
impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        Value::Object(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_null() {
        assert!(Value::default().is_null());
        assert_eq!(Value::default().len(), 0);
    }

    #[test]
    fn test_with_type() {
        assert_eq!(Value::with_type(ValueType::Boolean), Value::Bool(false));
        assert_eq!(Value::with_type(ValueType::String), Value::from(""));
        assert!(Value::with_type(ValueType::Object).is_object());
        assert_eq!(Value::with_type(ValueType::Null).value_type(), ValueType::Null);
    }

    #[test]
    fn test_auto_vivify_object_and_array() {
        let mut value = Value::Null;
        value["a"]["b"] = Value::from(1);
        assert!(value.is_object());
        assert!(value["a"].is_object());

        let mut list = Value::Null;
        list[0] = Value::from("x");
        list[1] = Value::from("y");
        assert_eq!(list, Value::from(vec![Value::from("x"), Value::from("y")]));
    }

    #[test]
    fn test_mutable_access_type_mismatch() {
        let mut text = Value::from("hello");
        assert_eq!(
            text.member_mut("k").unwrap_err(),
            Error::type_mismatch(ValueType::Object, ValueType::String)
        );
        assert!(text.element_mut(0).is_err());

        let mut list = Value::from(vec![Value::Null]);
        assert_eq!(
            list.element_mut(5).unwrap_err(),
            Error::index_out_of_range(5, 1)
        );
    }

    #[test]
    #[should_panic(expected = "Type mismatch")]
    fn test_index_mut_on_string_panics() {
        let mut text = Value::from("hello");
        text["k"] = Value::Null;
    }

    #[test]
    fn test_const_index_returns_null_sentinel() {
        let value: Value = vec![("a", Value::from(1))].into_iter().collect();
        assert!(value["missing"].is_null());
        assert!(value[3].is_null());
        assert!(Value::from(5)["x"].is_null());
        assert_eq!(value[0], 1);
    }

    #[test]
    fn test_strict_lookups() {
        let value: Value = vec![("a", Value::from(1))].into_iter().collect();
        assert_eq!(value.at("a").unwrap(), &Value::from(1));
        assert_eq!(value.at("b"), Err(Error::key_not_found("b")));
        assert_eq!(value.at_index(1), Err(Error::index_out_of_range(1, 1)));
        assert_eq!(
            Value::from(true).at("a"),
            Err(Error::type_mismatch(ValueType::Object, ValueType::Boolean))
        );
    }

    #[test]
    fn test_first_match_lookup_and_erase() {
        let mut map = Map::new();
        map.push("k", Value::from(1));
        map.push("k", Value::from(2));
        let mut value = Value::Object(map);

        assert_eq!(value["k"], 1);
        assert_eq!(value.erase("k"), 1);
        assert_eq!(value["k"], 2);
        assert_eq!(value.len(), 1);
        assert_eq!(value.erase("missing"), 0);
        assert_eq!(Value::from(3).erase("k"), 0);
    }

    #[test]
    fn test_push_and_push_member() {
        let mut value = Value::Null;
        value.push(Value::from(1)).unwrap();
        value.push(Value::Null).unwrap();
        assert_eq!(value.len(), 2);

        let mut obj = Value::Null;
        obj.push_member("a", Value::from(1)).unwrap();
        obj.push_member("a", Value::from(2)).unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["a"], 2);

        assert!(obj.push(Value::Null).is_err());
        assert!(Value::from(1.5).push_member("a", Value::Null).is_err());
    }

    #[test]
    fn test_pop() {
        let mut arr = Value::from(vec![Value::from(1), Value::from(2)]);
        assert_eq!(arr.pop(), Some(Value::from(2)));
        assert_eq!(arr.len(), 1);

        let mut obj: Value = vec![("a", Value::from(1)), ("b", Value::from(2))]
            .into_iter()
            .collect();
        assert_eq!(obj.pop(), Some(Value::from(2)));
        assert!(obj.get("b").is_none());

        let mut scalar = Value::from("text");
        assert_eq!(scalar.pop(), Some(Value::from("text")));
        assert!(scalar.is_null());
        assert_eq!(scalar.pop(), None);
    }

    #[test]
    fn test_len_by_type() {
        assert_eq!(Value::from("héllo").len(), 5);
        assert_eq!(Value::from(12).len(), 1);
        assert_eq!(Value::from(false).len(), 1);
        assert_eq!(Value::filled(3, &Value::Null).len(), 3);
    }

    #[test]
    fn test_clear_keeps_type() {
        let mut n = Value::from(3.5);
        n.clear();
        assert!(n.is_number());
        assert_eq!(n, 0);

        let mut s = Value::from("abc");
        s.clear();
        assert_eq!(s, "");

        let mut b = Value::from(true);
        b.clear();
        assert_eq!(b, false);

        let mut arr = Value::filled(2, &Value::from(1));
        arr.clear();
        assert!(arr.is_array());
        assert!(arr.is_empty());
    }

    #[test]
    fn test_structural_equality_is_order_sensitive() {
        let a: Value = vec![("x", Value::from(1)), ("y", Value::from(2))]
            .into_iter()
            .collect();
        let b: Value = vec![("y", Value::from(2)), ("x", Value::from(1))]
            .into_iter()
            .collect();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
        assert_ne!(Value::from(1), Value::from("1"));
    }

    #[test]
    fn test_ordering_only_within_type() {
        assert!(Value::from(1) < Value::from(2));
        assert!(Value::from("a") < Value::from("b"));
        assert_eq!(Value::from(1).partial_cmp(&Value::from("1")), None);
        assert!(!(Value::Null < Value::from(false)));
    }

    #[test]
    fn test_tryfrom_conversions() {
        assert_eq!(String::try_from(Value::from("s")).unwrap(), "s");
        assert!(bool::try_from(Value::from(1)).is_err());
        assert_eq!(i64::try_from(Value::from(2.6)).unwrap(), 3);
        assert_eq!(u64::try_from(Value::from(-4)).unwrap(), 0);
        assert_eq!(f64::try_from(Value::from(4u8)).unwrap(), 4.0);
        assert_eq!(
            Vec::<Value>::try_from(Value::Null).unwrap_err(),
            Error::type_mismatch(ValueType::Array, ValueType::Null)
        );

        let value = Value::from("borrowed");
        let text: &str = (&value).try_into().unwrap();
        assert_eq!(text, "borrowed");
        let members: Result<&Map> = (&value).try_into();
        assert!(members.is_err());
    }

    #[test]
    fn test_pair_constructor() {
        let value = Value::from(("key", Value::from(true)));
        assert!(value.is_object());
        assert_eq!(value["key"], true);
    }

    #[test]
    fn test_scalar_comparisons() {
        assert_eq!(Value::from("a"), "a");
        assert_eq!(Value::from(true), true);
        assert_eq!(Value::from(5u32), 5i64);
        assert_eq!(Value::from(-5), -5i32);
        assert_eq!(Value::from(0.5), 0.5);
        assert_eq!(Value::Null, ());
        assert_ne!(Value::from("5"), 5i32);
    }
}
