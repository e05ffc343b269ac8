// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Condition builders: one per shape of checked value.
//!
//! | Condition            | Wraps                 | Checks                                   |
//! |----------------------|-----------------------|------------------------------------------|
//! | `BooleanCondition`   | `bool`                | `is_true`, `is_false`                    |
//! | `ObjectCondition`    | `Option<&T>` + extras | `ObjectChecks`                           |
//! | `StringCondition`    | `Option<&str>`        | `ObjectChecks`, `is_not_empty`, `is_not_blank` |
//! | `SequenceCondition`  | `Option<I>`           | `ObjectChecks`, `is_not_empty`           |
//! | `ArrayCondition`     | `Option<&[E]>`        | `ObjectChecks`, `is_not_empty`           |
//! | `ExceptionCondition` | `Option<Cause>`       | `is_never_thrown`                        |
//!
//! Every check has two forms: `check()` with the default message below, and
//! `check_with(template, args)` with a printf-style message.
//!
//! # INVARIANTS
//!
//! Conditions only borrow what they check. No check mutates, copies or
//! inspects the contents of a captured value beyond its presence, length and
//! type.

mod array;
mod boolean;
mod exception;
mod object;
mod sequence;
mod string;

pub use array::ArrayCondition;
pub use boolean::BooleanCondition;
pub use exception::ExceptionCondition;
pub use object::{ObjectChecks, ObjectCondition, TypeKey};
pub use sequence::SequenceCondition;
pub use string::StringCondition;

/// Default messages of the checks.
pub mod messages {
    pub const VALUE_IS_NOT_TRUE: &str = "Value is not TRUE";
    pub const VALUE_IS_NOT_FALSE: &str = "Value is not FALSE";
    pub const OBJECT_IS_NULL: &str = "Object is NULL";
    pub const OBJECT_IS_NOT_NULL: &str = "Object is not NULL";
    pub const WRONG_TYPE: &str = "Object is of wrong type. Actual: %s. Expected one of: %s";
    pub const STRING_IS_EMPTY: &str = "The string is empty or NULL";
    pub const STRING_IS_BLANK: &str = "The string is blank";
    pub const ITERABLE_IS_EMPTY: &str = "Iterable is empty or NULL";
    pub const ARRAY_IS_EMPTY: &str = "Array is empty or NULL";
    pub const NEVER_REACHED: &str = "This statement should never be reached.";
}
