// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Positional arguments for formatted messages.
//!
//! Messages are only rendered when a contract fails, so arguments are captured
//! as cheap borrowed values and turned into text lazily. Each variant remembers
//! just enough about the original value for the conversions that care about
//! it: integers keep their bit width so `%x` can print two's complement, and
//! `Null` prints as `null` (or `false` under `%b`).

use std::borrow::Cow;
use std::fmt;

/// One positional argument of a formatted message.
#[derive(Clone)]
pub enum Arg<'a> {
    /// An absent value.
    Null,
    Bool(bool),
    Char(char),
    /// A signed integer and the bit width of the type it came from.
    Int { value: i64, bits: u32 },
    UInt(u64),
    Float(f64),
    Str(Cow<'a, str>),
    /// Anything else that can be displayed.
    Display(&'a dyn fmt::Display),
}

impl<'a> Arg<'a> {
    /// Wrap an arbitrary `Display` value.
    pub fn display(value: &'a dyn fmt::Display) -> Self {
        Arg::Display(value)
    }

    /// Whether this argument stands for an absent value.
    pub fn is_null(&self) -> bool {
        matches!(self, Arg::Null)
    }
}

impl fmt::Debug for Arg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Null => f.write_str("Null"),
            Arg::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Arg::Char(c) => f.debug_tuple("Char").field(c).finish(),
            Arg::Int { value, bits } => f
                .debug_struct("Int")
                .field("value", value)
                .field("bits", bits)
                .finish(),
            Arg::UInt(v) => f.debug_tuple("UInt").field(v).finish(),
            Arg::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Arg::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Arg::Display(d) => f.debug_tuple("Display").field(&d.to_string()).finish(),
        }
    }
}

macro_rules! signed_args {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg<'_> {
                fn from(value: $ty) -> Self {
                    Arg::Int { value: i64::from(value), bits: <$ty>::BITS }
                }
            }
        )*
    };
}

macro_rules! unsigned_args {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg<'_> {
                fn from(value: $ty) -> Self {
                    Arg::UInt(u64::from(value))
                }
            }
        )*
    };
}

signed_args!(i8, i16, i32, i64);
unsigned_args!(u8, u16, u32, u64);

impl From<isize> for Arg<'_> {
    fn from(value: isize) -> Self {
        Arg::Int {
            value: value as i64,
            bits: isize::BITS,
        }
    }
}

impl From<usize> for Arg<'_> {
    fn from(value: usize) -> Self {
        Arg::UInt(value as u64)
    }
}

impl From<f32> for Arg<'_> {
    fn from(value: f32) -> Self {
        Arg::Float(f64::from(value))
    }
}

impl From<f64> for Arg<'_> {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

impl From<bool> for Arg<'_> {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<char> for Arg<'_> {
    fn from(value: char) -> Self {
        Arg::Char(value)
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::Str(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Arg::Str(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Arg<'_> {
    fn from(value: String) -> Self {
        Arg::Str(Cow::Owned(value))
    }
}

impl<'a, T> From<Option<T>> for Arg<'a>
where
    T: Into<Arg<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Null, Into::into)
    }
}

/// Build a `[Arg; N]` array from heterogeneous values.
///
/// ```
/// use ensure::{args, format::sprintf};
///
/// let message = sprintf("%s has %d items", &args!["cart", 3]);
/// assert_eq!(message, "cart has 3 items");
/// ```
#[macro_export]
macro_rules! args {
    () => {{
        let empty: [$crate::Arg<'static>; 0] = [];
        empty
    }};
    ($($value:expr),+ $(,)?) => {
        [$($crate::Arg::from($value)),+]
    };
}
