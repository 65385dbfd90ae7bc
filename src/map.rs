//! Ordered member list for JSON objects.
//!
//! [`Map`] stores `(key, value)` pairs in insertion order. Keys are not forced to
//! be unique at the storage level: [`Map::push`] appends unconditionally. All
//! keyed operations ([`Map::get`], [`Map::insert`], [`Map::remove`], ...) act on
//! the **first** pair carrying the key, so a map built only through the keyed
//! operations behaves like an insertion-ordered map with first-wins lookup.
//!
//! ## Examples
//!
//! ```rust
//! use json_tree::{Map, Value};
//!
//! let mut map = Map::new();
//! map.insert("name", Value::from("Alice"));
//! map.insert("age", Value::from(30));
//! map.insert("name", Value::from("Bob"));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Bob"));
//!
//! let keys: Vec<_> = map.keys().collect();
//! assert_eq!(keys, vec!["name", "age"]);
//! ```

use crate::Value;
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::fmt;
use std::slice;

/// A member of a JSON object.
pub type Pair = (String, Value);

/// An insertion-ordered list of object members with first-match lookup.
///
/// Members live in a `Vec`; a side index maps each distinct key to the
/// position of its first occurrence, so keyed lookups do not scan.
#[derive(Clone, Default)]
pub struct Map {
    entries: Vec<Pair>,
    index: IndexMap<String, usize>,
}

impl Map {
    /// Creates an empty `Map`.
    #[must_use]
    pub fn new() -> Self {
        Map::default()
    }

    /// Creates an empty `Map` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Map {
            entries: Vec::with_capacity(capacity),
            index: IndexMap::with_capacity(capacity),
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Sets the value of the first member named `key`, or appends a new member.
    ///
    /// Returns the previous value when the key was already present.
    ///
    /// ```rust
    /// use json_tree::{Map, Value};
    ///
    /// let mut map = Map::new();
    /// assert!(map.insert("key", Value::from(42)).is_none());
    /// assert_eq!(map.insert("key", Value::from(43)), Some(Value::from(42)));
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        let key = key.into();
        match self.position(&key) {
            Some(pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Appends a member without looking for an existing key.
    ///
    /// This is the only way to store duplicate keys; lookups keep returning the
    /// first one.
    ///
    /// ```rust
    /// use json_tree::{Map, Value};
    ///
    /// let mut map = Map::new();
    /// map.push("dup", Value::from(1));
    /// map.push("dup", Value::from(2));
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get("dup"), Some(&Value::from(1)));
    /// ```
    pub fn push(&mut self, key: impl Into<String>, value: Value) {
        let key = key.into();
        if !self.index.contains_key(&key) {
            self.index.insert(key.clone(), self.entries.len());
        }
        self.entries.push((key, value));
    }

    /// Returns the value of the first member named `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.position(key).map(|pos| &self.entries[pos].1)
    }

    /// Returns a mutable reference to the value of the first member named `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        let pos = self.position(key)?;
        Some(&mut self.entries[pos].1)
    }

    /// Returns the value of the first member named `key`, appending a Null
    /// member when there is none.
    pub fn get_or_insert(&mut self, key: &str) -> &mut Value {
        let pos = match self.position(key) {
            Some(pos) => pos,
            None => {
                let pos = self.entries.len();
                self.index.insert(key.to_string(), pos);
                self.entries.push((key.to_string(), Value::Null));
                pos
            }
        };
        &mut self.entries[pos].1
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Removes the first member named `key` and returns its value.
    ///
    /// A later duplicate of `key`, if any, becomes the first occurrence.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let pos = self.index.swap_remove(key)?;
        let (key, value) = self.entries.remove(pos);

        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        if let Some(next) = self.entries[pos..].iter().position(|(k, _)| *k == key) {
            self.index.insert(key, pos + next);
        }
        Some(value)
    }

    /// Removes and returns the last member.
    pub fn pop(&mut self) -> Option<Pair> {
        let (key, value) = self.entries.pop()?;
        if self.position(&key) == Some(self.entries.len()) {
            self.index.swap_remove(&key);
        }
        Some((key, value))
    }

    /// Returns the member at `index` in insertion order.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<(&str, &Value)> {
        self.entries.get(index).map(|(k, v)| (k.as_str(), v))
    }

    pub fn get_index_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.entries.get_mut(index).map(|(_, v)| v)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Returns the members as a slice, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[Pair] {
        &self.entries
    }

    /// Callers must not rename keys through the returned slice.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [Pair] {
        &mut self.entries
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> + ExactSizeIterator {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Returns an iterator over the members, in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, Pair> {
        self.entries.iter()
    }

    /// Returns an iterator over keys and mutable values, in insertion order.
    pub fn iter_mut(&mut self) -> impl DoubleEndedIterator<Item = (&str, &mut Value)> + ExactSizeIterator {
        self.entries.iter_mut().map(|(k, v)| (k.as_str(), v))
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

/// Members compare in order, duplicates included.
impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl PartialOrd for Map {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.entries.partial_cmp(&other.entries)
    }
}

impl IntoIterator for Map {
    type Item = Pair;
    type IntoIter = std::vec::IntoIter<Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = &'a Pair;
    type IntoIter = slice::Iter<'a, Pair>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Collects with [`Map::insert`] semantics: a repeated key overwrites the
/// first occurrence in place.
impl<K: Into<String>> FromIterator<(K, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        let mut map = Map::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>> Extend<(K, Value)> for Map {
    fn extend<T: IntoIterator<Item = (K, Value)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_overwrites_first_match() {
        let mut map = Map::new();
        map.insert("a", Value::from(1));
        map.insert("b", Value::from(2));
        assert_eq!(map.insert("a", Value::from(3)), Some(Value::from(1)));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get_index(0), Some(("a", &Value::from(3))));
    }

    #[test]
    fn test_duplicates_resolve_to_first() {
        let mut map = Map::new();
        map.push("k", Value::from("first"));
        map.push("k", Value::from("second"));
        assert_eq!(map.get("k"), Some(&Value::from("first")));

        assert_eq!(map.remove("k"), Some(Value::from("first")));
        assert_eq!(map.get("k"), Some(&Value::from("second")));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_get_or_insert_appends_null() {
        let mut map = Map::new();
        *map.get_or_insert("x") = Value::from(true);
        assert!(map.get_or_insert("y").is_null());
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn test_from_iterator_keeps_order() {
        let map: Map = vec![
            ("z", Value::from(1)),
            ("a", Value::from(2)),
            ("z", Value::from(3)),
        ]
        .into_iter()
        .collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().collect::<Vec<_>>(), vec!["z", "a"]);
        assert_eq!(map.get("z"), Some(&Value::from(3)));
    }

    #[test]
    fn test_pop_and_clear() {
        let mut map = Map::new();
        map.insert("a", Value::Null);
        map.insert("b", Value::from(false));
        assert_eq!(map.pop(), Some(("b".to_string(), Value::from(false))));
        assert!(map.contains_key("a"));
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.pop(), None);
    }

    #[test]
    fn test_remove_shifts_later_lookups() {
        let mut map = Map::new();
        for (i, key) in ["a", "b", "c", "d"].iter().enumerate() {
            map.insert(*key, Value::from(i as u64));
        }
        assert_eq!(map.remove("b"), Some(Value::from(1u64)));
        assert_eq!(map.get("c"), Some(&Value::from(2u64)));
        assert_eq!(map.get("d"), Some(&Value::from(3u64)));
        assert_eq!(map.insert("d", Value::Null), Some(Value::from(3u64)));
        assert_eq!(map.get_index(2), Some(("d", &Value::Null)));
        assert_eq!(map.remove("b"), None);
    }

    #[test]
    fn test_pop_keeps_earlier_duplicate() {
        let mut map = Map::new();
        map.push("k", Value::from(1));
        map.push("x", Value::from(2));
        map.push("k", Value::from(3));

        assert_eq!(map.pop(), Some(("k".to_string(), Value::from(3))));
        assert_eq!(map.get("k"), Some(&Value::from(1)));

        map.pop();
        map.pop();
        assert!(!map.contains_key("k"));
        assert!(map.get_or_insert("k").is_null());
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_iter_mut_edits_values() {
        let mut map: Map = vec![("a", Value::from(1)), ("b", Value::from(2))]
            .into_iter()
            .collect();
        for (key, value) in map.iter_mut() {
            if key == "b" {
                *value = Value::from("two");
            }
        }
        assert_eq!(map.get("b"), Some(&Value::from("two")));
    }

    #[test]
    fn test_wide_map_lookups() {
        let mut map = Map::new();
        for i in 0..50_000u64 {
            map.insert(format!("key{i}"), Value::from(i));
        }
        for i in (0..50_000u64).step_by(997) {
            assert_eq!(map.get(&format!("key{i}")), Some(&Value::from(i)));
        }
        assert_eq!(map.len(), 50_000);
    }
}
