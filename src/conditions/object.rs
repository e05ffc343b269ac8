// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Presence and type checks shared by every condition that wraps a value.
//!
//! [`ObjectChecks`] carries the checks as default methods. A condition only
//! has to say what it captured; string, sequence and array conditions get
//! `is_not_null`, `is_null` and `is_instance_of` for free and layer their own
//! checks on top.

use std::any::{type_name, Any, TypeId};
use std::fmt;

use super::messages::{OBJECT_IS_NOT_NULL, OBJECT_IS_NULL, WRONG_TYPE};
use crate::format::Arg;
use crate::presence::Presence;
use crate::violation::{raise, ContractResult};

/// A runtime type, as accepted by `is_instance_of`.
#[derive(Debug, Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    pub fn of<T: ?Sized + Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Checks available on every condition that captures a possibly-absent value.
pub trait ObjectChecks {
    /// The type of the captured value.
    type Value: ?Sized;

    /// The captured value, if present.
    fn value(&self) -> Option<&Self::Value>;

    /// Values checked alongside the primary one by `is_not_null`.
    fn additional(&self) -> &[&dyn Presence] {
        &[]
    }

    /// Fails with `Object is NULL` if the value or any additional value is
    /// absent.
    fn is_not_null(&self) -> ContractResult {
        self.is_not_null_with(OBJECT_IS_NULL, &[])
    }

    fn is_not_null_with(&self, explanation: &str, args: &[Arg<'_>]) -> ContractResult {
        if self.value().is_none() || self.additional().iter().any(|v| v.is_absent()) {
            return Err(raise(explanation, args));
        }
        Ok(())
    }

    /// Fails with `Object is not NULL` if the value is present.
    ///
    /// Additional values are not looked at.
    fn is_null(&self) -> ContractResult {
        self.is_null_with(OBJECT_IS_NOT_NULL, &[])
    }

    fn is_null_with(&self, explanation: &str, args: &[Arg<'_>]) -> ContractResult {
        // INVARIANT: only the primary value decides; extras may be anything.
        if self.value().is_some() {
            return Err(raise(explanation, args));
        }
        Ok(())
    }

    /// Fails if the value is absent (`Object is NULL`) or its runtime type is
    /// none of `expected` and `more`.
    ///
    /// Types match exactly. When the captured value is a `dyn Any`, its
    /// concrete type is compared, but the failure message can only name the
    /// captured type (`dyn core::any::Any`): the concrete type's name is not
    /// recoverable from a trait object. Use `is_instance_of_with` to name it
    /// in the message yourself.
    fn is_instance_of(&self, expected: TypeKey, more: &[TypeKey]) -> ContractResult
    where
        Self::Value: Any,
    {
        self.is_not_null()?;

        if self.is_one_of(expected, more) {
            return Ok(());
        }

        let expected = std::iter::once(&expected)
            .chain(more)
            .map(TypeKey::name)
            .collect::<Vec<_>>()
            .join(", ");
        Err(raise(
            WRONG_TYPE,
            &[
                Arg::from(type_name::<Self::Value>()),
                Arg::from(format!("[{}]", expected)),
            ],
        ))
    }

    /// Like `is_instance_of`, reporting both the absent and the wrong-type
    /// case with the given message.
    fn is_instance_of_with(
        &self,
        expected: TypeKey,
        more: &[TypeKey],
        explanation: &str,
        args: &[Arg<'_>],
    ) -> ContractResult
    where
        Self::Value: Any,
    {
        self.is_not_null_with(explanation, args)?;

        if self.is_one_of(expected, more) {
            Ok(())
        } else {
            Err(raise(explanation, args))
        }
    }

    #[doc(hidden)]
    fn is_one_of(&self, expected: TypeKey, more: &[TypeKey]) -> bool
    where
        Self::Value: Any,
    {
        let Some(value) = self.value() else {
            return false;
        };
        let actual = value.type_id();
        actual == expected.id || more.iter().any(|key| key.id == actual)
    }
}

/// Checks on a single value, optionally with additional values that
/// `is_not_null` requires to be present too.
#[must_use = "a condition does nothing until one of its checks is called"]
pub struct ObjectCondition<'a, T: ?Sized> {
    value: Option<&'a T>,
    additional: &'a [&'a dyn Presence],
}

impl<'a, T: ?Sized> ObjectCondition<'a, T> {
    pub fn new(value: Option<&'a T>) -> Self {
        Self::with_additional(value, &[])
    }

    pub fn with_additional(value: Option<&'a T>, additional: &'a [&'a dyn Presence]) -> Self {
        Self { value, additional }
    }
}

impl<T: ?Sized> ObjectChecks for ObjectCondition<'_, T> {
    type Value = T;

    fn value(&self) -> Option<&T> {
        self.value
    }

    fn additional(&self) -> &[&dyn Presence] {
        self.additional
    }
}

impl<T: ?Sized> fmt::Debug for ObjectCondition<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectCondition")
            .field("type", &type_name::<T>())
            .field("present", &self.value.is_some())
            .field("additional", &self.additional.len())
            .finish()
    }
}
