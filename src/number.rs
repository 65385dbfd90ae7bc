//! JSON numbers.
//!
//! A [`Number`] holds exactly one of a signed integer, an unsigned integer or a
//! double. Conversions between the three kinds never fail; they follow a fixed
//! lossy policy instead:
//!
//! | from \ to | `i64`                  | `u64`                      | `f64`     |
//! |-----------|------------------------|----------------------------|-----------|
//! | `Int`     | identity               | negative becomes `0`       | cast      |
//! | `Uint`    | saturates at `i64::MAX`| identity                   | cast      |
//! | `Double`  | rounded to nearest     | negative becomes `0`, else rounded | identity |
//!
//! ```rust
//! use json_tree::Number;
//!
//! assert_eq!(Number::Int(-7).to_u64(), 0);
//! assert_eq!(Number::Uint(u64::MAX).to_i64(), i64::MAX);
//! assert_eq!(Number::Double(2.5).to_i64(), 3);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::AddAssign;

/// The kind of payload a [`Number`] holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberType {
    Int,
    Uint,
    Double,
}

/// A JSON number: signed, unsigned or floating point.
///
/// The default number is `Int(0)`.
///
/// # Equality
///
/// Two numbers are compared by the kind of the **left-hand** operand: the
/// right-hand side is converted to that kind first, and doubles compare with
/// an `f64::EPSILON` tolerance. This makes equality deliberately asymmetric
/// across kinds:
///
/// ```rust
/// use json_tree::Number;
///
/// assert!(Number::Uint(5) == Number::Int(5));
/// assert!(Number::Double(0.1 + 0.2) == Number::Double(0.3));
/// // -1 saturates to 0 when viewed as unsigned, but not the other way around
/// assert!(Number::Uint(0) == Number::Int(-1));
/// assert!(Number::Int(-1) != Number::Uint(0));
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Number {
    Int(i64),
    Uint(u64),
    Double(f64),
}

impl Default for Number {
    fn default() -> Self {
        Number::Int(0)
    }
}

impl Number {
    #[inline]
    #[must_use]
    pub const fn get_type(&self) -> NumberType {
        match self {
            Number::Int(_) => NumberType::Int,
            Number::Uint(_) => NumberType::Uint,
            Number::Double(_) => NumberType::Double,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_uint(&self) -> bool {
        matches!(self, Number::Uint(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_double(&self) -> bool {
        matches!(self, Number::Double(_))
    }

    /// Converts to a signed integer.
    ///
    /// Unsigned values above `i64::MAX` saturate; doubles are rounded to the
    /// nearest integer (saturating at the `i64` bounds, `NaN` becomes `0`).
    #[must_use]
    pub fn to_i64(&self) -> i64 {
        match *self {
            Number::Int(i) => i,
            Number::Uint(u) => i64::try_from(u).unwrap_or(i64::MAX),
            Number::Double(d) => d.round() as i64,
        }
    }

    /// Converts to an unsigned integer.
    ///
    /// Negative integers and negative doubles become `0`; other doubles are
    /// rounded to the nearest integer.
    #[must_use]
    pub fn to_u64(&self) -> u64 {
        match *self {
            Number::Int(i) => u64::try_from(i).unwrap_or(0),
            Number::Uint(u) => u,
            Number::Double(d) => {
                if d.is_sign_negative() {
                    0
                } else {
                    d.round() as u64
                }
            }
        }
    }

    /// Converts to a double. Large integers lose precision.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match *self {
            Number::Int(i) => i as f64,
            Number::Uint(u) => u as f64,
            Number::Double(d) => d,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match *self {
            Number::Int(i) => i == other.to_i64(),
            Number::Uint(u) => u == other.to_u64(),
            Number::Double(d) => (d - other.to_f64()).abs() < f64::EPSILON,
        }
    }
}

impl PartialOrd for Number {
    /// Orders by the left-hand kind, like [`PartialEq`].
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match *self {
            Number::Int(i) => i.partial_cmp(&other.to_i64()),
            Number::Uint(u) => u.partial_cmp(&other.to_u64()),
            Number::Double(d) => d.partial_cmp(&other.to_f64()),
        }
    }
}

/// Adds `rhs` converted to the kind of `self`; the kind of `self` never changes.
///
/// Adding a double to an integer therefore rounds the *increment*, not the
/// accumulator:
///
/// ```rust
/// use json_tree::Number;
///
/// let mut n = Number::Int(1);
/// n += Number::Double(2.6);
/// assert!(n.is_int());
/// assert_eq!(n.to_i64(), 4);
/// ```
impl AddAssign for Number {
    fn add_assign(&mut self, rhs: Self) {
        match self {
            Number::Int(i) => *i = i.wrapping_add(rhs.to_i64()),
            Number::Uint(u) => *u = u.wrapping_add(rhs.to_u64()),
            Number::Double(d) => *d += rhs.to_f64(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Uint(u) => write!(f, "{}", u),
            Number::Double(d) => f.write_str(&format_double(*d)),
        }
    }
}

/// Renders a double so that it parses back as a double.
///
/// Whole values keep a fractional part (`5.0`, `1.0e16`); non-finite values
/// have no JSON spelling and render as `null`.
pub(crate) fn format_double(value: f64) -> String {
    if !value.is_finite() {
        return "null".to_string();
    }
    let mut text = format!("{:?}", value);
    if !text.contains('.') {
        match text.find(['e', 'E']) {
            Some(pos) => text.insert_str(pos, ".0"),
            None => text.push_str(".0"),
        }
    }
    text
}

macro_rules! number_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Int(i64::from(value))
                }
            }
        )*
    };
}

macro_rules! number_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::Uint(u64::from(value))
                }
            }
        )*
    };
}

number_from_signed!(i8, i16, i32, i64);
number_from_unsigned!(u8, u16, u32, u64);

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Double(f64::from(value))
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Double(value)
    }
}

impl From<Number> for i64 {
    fn from(value: Number) -> Self {
        value.to_i64()
    }
}

impl From<Number> for u64 {
    fn from(value: Number) -> Self {
        value.to_u64()
    }
}

impl From<Number> for f64 {
    fn from(value: Number) -> Self {
        value.to_f64()
    }
}
