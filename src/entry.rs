// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Entry points: pick the condition that matches the shape of the value.
//!
//! Dispatch is static. The caller names the constructor for the value it
//! holds; nothing here inspects types at runtime.

use crate::conditions::messages::NEVER_REACHED;
use crate::conditions::{
    ArrayCondition, BooleanCondition, ExceptionCondition, ObjectCondition, SequenceCondition,
    StringCondition,
};
use crate::format::Arg;
use crate::presence::Presence;
use crate::violation::{raise, Cause, ContractResult};

/// Checks on a boolean.
///
/// ```
/// ensure::that(2 + 2 == 4).is_true()?;
/// # Ok::<(), ensure::ContractViolation>(())
/// ```
pub fn that(value: bool) -> BooleanCondition {
    BooleanCondition::new(value)
}

/// Checks on a single possibly-absent value.
pub fn that_object<T: ?Sized>(value: Option<&T>) -> ObjectCondition<'_, T> {
    ObjectCondition::new(value)
}

/// Checks on a value plus additional values that must be present as well.
///
/// Additional values are anything implementing [`Presence`]: `Option`s are
/// absent when `None`, primitives, strings and collections are always present.
///
/// ```
/// use ensure::ObjectChecks;
///
/// let user = Some("ada");
/// let order_id = 42_u64;
/// let token: Option<&str> = None;
/// assert!(ensure::that_objects(user.as_ref(), &[&order_id]).is_not_null().is_ok());
/// assert!(ensure::that_objects(user.as_ref(), &[&order_id, &token]).is_not_null().is_err());
/// ```
pub fn that_objects<'a, T: ?Sized>(
    value: Option<&'a T>,
    additional: &'a [&'a dyn Presence],
) -> ObjectCondition<'a, T> {
    ObjectCondition::with_additional(value, additional)
}

/// Checks on a possibly-absent string.
pub fn that_string(value: Option<&str>) -> StringCondition<'_> {
    StringCondition::new(value)
}

/// Checks on a possibly-absent iterable of possibly-absent elements.
pub fn that_iterable<I>(value: Option<I>) -> SequenceCondition<I>
where
    I: IntoIterator + Clone,
    I::Item: Presence,
{
    SequenceCondition::new(value)
}

/// Checks on a possibly-absent slice of possibly-absent elements.
pub fn that_array<E: Presence>(value: Option<&[E]>) -> ArrayCondition<'_, E> {
    ArrayCondition::new(value)
}

/// Wraps an error that should never have occurred.
pub fn that_error<E: Into<Cause>>(value: Option<E>) -> ExceptionCondition {
    ExceptionCondition::new(value.map(Into::into))
}

/// Always fails with `This statement should never be reached.`
///
/// ```
/// fn quadrant(x: i32, y: i32) -> ensure::ContractResult<u8> {
///     match (x.signum(), y.signum()) {
///         (1, 1) => Ok(1),
///         (-1, 1) => Ok(2),
///         (-1, -1) => Ok(3),
///         (1, -1) => Ok(4),
///         _ => ensure::statement_is_never_reached(),
///     }
/// }
///
/// assert!(quadrant(0, 3).is_err());
/// ```
pub fn statement_is_never_reached<T>() -> ContractResult<T> {
    Err(raise(NEVER_REACHED, &[]))
}

/// Always fails with the given message.
pub fn statement_is_never_reached_with<T>(
    explanation: &str,
    args: &[Arg<'_>],
) -> ContractResult<T> {
    Err(raise(explanation, args))
}
