//! Iteration over arrays and objects through a single cursor type.
//!
//! [`Iter`] walks either the elements of an array or the member values of an
//! object, picked from the value's type when the iterator is created. It
//! yields `&Value` either way; [`Iter::key`] reports the member key under the
//! cursor for objects and `""` otherwise. Scalars produce an empty iterator.
//!
//! ```rust
//! use json_tree::json;
//!
//! let value = json!({"a": 1, "b": 2});
//! let mut it = value.iter();
//! assert_eq!(it.key(), "a");
//! assert_eq!(it.next(), Some(&json!(1)));
//! assert_eq!(it.key(), "b");
//!
//! let keys: Vec<_> = value.iter().entries().map(|(k, _)| k).collect();
//! assert_eq!(keys, vec!["a", "b"]);
//! ```
//!
//! Iterators borrow the value they walk, so the container cannot be mutated
//! while any of them is alive.

use crate::map::Pair;
use crate::Value;
use std::iter::FusedIterator;
use std::slice;

static EMPTY: [Value; 0] = [];

#[derive(Clone, Copy, Debug)]
enum Cursor<'a> {
    Array(&'a [Value]),
    Object(&'a [Pair]),
}

impl<'a> Cursor<'a> {
    fn len(&self) -> usize {
        match self {
            Cursor::Array(items) => items.len(),
            Cursor::Object(members) => members.len(),
        }
    }

    fn value(&self, pos: usize) -> Option<&'a Value> {
        match *self {
            Cursor::Array(items) => items.get(pos),
            Cursor::Object(members) => members.get(pos).map(|(_, v)| v),
        }
    }

    fn key(&self, pos: usize) -> &'a str {
        match *self {
            Cursor::Array(_) => "",
            Cursor::Object(members) => members.get(pos).map_or("", |(k, _)| k.as_str()),
        }
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Cursor::Array(a), Cursor::Array(b)) => std::ptr::eq(a.as_ptr(), b.as_ptr()),
            (Cursor::Object(a), Cursor::Object(b)) => std::ptr::eq(a.as_ptr(), b.as_ptr()),
            _ => false,
        }
    }
}

/// Shared cursor over an array's elements or an object's member values.
///
/// Two iterators are equal when they walk the same container kind, the same
/// storage and sit at the same position, so `value.begin() == value.end()`
/// holds exactly for empty containers and scalars.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    cursor: Cursor<'a>,
    front: usize,
    back: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(value: &'a Value) -> Self {
        let cursor = match value {
            Value::Array(items) => Cursor::Array(items.as_slice()),
            Value::Object(members) => Cursor::Object(members.as_slice()),
            _ => Cursor::Array(&EMPTY),
        };
        Iter {
            cursor,
            front: 0,
            back: cursor.len(),
        }
    }

    pub(crate) fn new_end(value: &'a Value) -> Self {
        let mut it = Iter::new(value);
        it.front = it.back;
        it
    }

    /// Returns `true` when walking object members.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self.cursor, Cursor::Object(_))
    }

    /// Returns `true` when no elements remain.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.front >= self.back
    }

    /// The element under the cursor, without advancing.
    #[must_use]
    pub fn value(&self) -> Option<&'a Value> {
        if self.is_end() {
            None
        } else {
            self.cursor.value(self.front)
        }
    }

    /// The member key under the cursor; `""` for arrays and at the end.
    #[must_use]
    pub fn key(&self) -> &'a str {
        if self.is_end() {
            ""
        } else {
            self.cursor.key(self.front)
        }
    }

    /// Returns the key and value under the cursor and advances.
    pub fn next_entry(&mut self) -> Option<(&'a str, &'a Value)> {
        let key = self.key();
        self.next().map(|value| (key, value))
    }

    /// Converts into an iterator of `(key, value)` pairs.
    pub fn entries(self) -> Entries<'a> {
        Entries { inner: self }
    }
}

impl PartialEq for Iter<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cursor == other.cursor && self.front == other.front
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Value;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.value()?;
        self.front += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.saturating_sub(self.front);
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.is_end() {
            return None;
        }
        self.back -= 1;
        self.cursor.value(self.back)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// `(key, value)` pairs from an [`Iter`]; keys are `""` for arrays.
#[derive(Clone, Debug)]
pub struct Entries<'a> {
    inner: Iter<'a>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_entry()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Entries<'_> {}

#[derive(Debug)]
enum CursorMut<'a> {
    Array(slice::IterMut<'a, Value>),
    Object(slice::IterMut<'a, Pair>),
}

/// Mutable cursor over an array's elements or an object's member values.
#[derive(Debug)]
pub struct IterMut<'a> {
    cursor: CursorMut<'a>,
}

impl<'a> IterMut<'a> {
    pub(crate) fn new(value: &'a mut Value) -> Self {
        let cursor = match value {
            Value::Array(items) => CursorMut::Array(items.iter_mut()),
            Value::Object(members) => CursorMut::Object(members.as_mut_slice().iter_mut()),
            _ => CursorMut::Array(<&mut [Value]>::default().iter_mut()),
        };
        IterMut { cursor }
    }

    /// Returns `true` when walking object members.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self.cursor, CursorMut::Object(_))
    }

    /// Returns the key and value under the cursor and advances.
    pub fn next_entry(&mut self) -> Option<(&'a str, &'a mut Value)> {
        match &mut self.cursor {
            CursorMut::Array(items) => items.next().map(|value| ("", value)),
            CursorMut::Object(members) => members
                .next()
                .map(|&mut (ref key, ref mut value)| (key.as_str(), value)),
        }
    }
}

impl<'a> Iterator for IterMut<'a> {
    type Item = &'a mut Value;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.cursor {
            CursorMut::Array(items) => items.next(),
            CursorMut::Object(members) => members.next().map(|(_, value)| value),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.cursor {
            CursorMut::Array(items) => items.size_hint(),
            CursorMut::Object(members) => members.size_hint(),
        }
    }
}

impl DoubleEndedIterator for IterMut<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.cursor {
            CursorMut::Array(items) => items.next_back(),
            CursorMut::Object(members) => members.next_back().map(|(_, value)| value),
        }
    }
}

impl ExactSizeIterator for IterMut<'_> {}

impl FusedIterator for IterMut<'_> {}
