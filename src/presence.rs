//! Presence of possibly-absent values.
//!
//! Conditions never look inside the values they check for nullness. All they
//! need to know is whether something is there, which is what [`Presence`]
//! answers. `Option` is the absent-capable type. Primitives, strings and the
//! std collections are always present, so they can be passed as additional
//! values or checked as elements directly. Smart pointers defer to what they
//! point at.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;

/// A value that may be absent.
pub trait Presence {
    fn is_present(&self) -> bool;

    fn is_absent(&self) -> bool {
        !self.is_present()
    }
}

impl<T> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.is_some()
    }
}

impl<P: Presence + ?Sized> Presence for &P {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<P: Presence + ?Sized> Presence for Box<P> {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<P: Presence + ?Sized> Presence for Rc<P> {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

impl<P: Presence + ?Sized> Presence for Arc<P> {
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

macro_rules! always_present {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Presence for $ty {
                fn is_present(&self) -> bool {
                    true
                }
            }
        )*
    };
}

always_present!(
    (), bool, char, str, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128,
    usize, f32, f64,
);

macro_rules! always_present_generic {
    ($($ty:ident<$($param:ident),+>),* $(,)?) => {
        $(
            impl<$($param),+> Presence for $ty<$($param),+> {
                fn is_present(&self) -> bool {
                    true
                }
            }
        )*
    };
}

always_present_generic!(
    Vec<T>,
    VecDeque<T>,
    BTreeSet<T>,
    HashSet<T, S>,
    BTreeMap<K, V>,
    HashMap<K, V, S>,
);

impl<T> Presence for [T] {
    fn is_present(&self) -> bool {
        true
    }
}

impl<T, const N: usize> Presence for [T; N] {
    fn is_present(&self) -> bool {
        true
    }
}
