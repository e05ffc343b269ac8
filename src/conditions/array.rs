// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use super::messages::ARRAY_IS_EMPTY;
use super::object::ObjectChecks;
use crate::format::Arg;
use crate::presence::Presence;
use crate::violation::{raise, ContractResult};

/// Checks on a possibly-absent slice.
///
/// The slice is borrowed as-is: the check sees exactly the elements the
/// slice holds when it runs.
#[derive(Debug, Clone, Copy)]
#[must_use = "a condition does nothing until one of its checks is called"]
pub struct ArrayCondition<'a, E> {
    value: Option<&'a [E]>,
}

impl<'a, E> ArrayCondition<'a, E> {
    pub fn new(value: Option<&'a [E]>) -> Self {
        Self { value }
    }
}

impl<E: Presence> ArrayCondition<'_, E> {
    /// Fails with `Array is empty or NULL` if the slice is absent, has no
    /// elements, or holds an absent element.
    pub fn is_not_empty(&self) -> ContractResult {
        self.is_not_empty_with(ARRAY_IS_EMPTY, &[])
    }

    pub fn is_not_empty_with(&self, explanation: &str, args: &[Arg<'_>]) -> ContractResult {
        self.is_not_null_with(explanation, args)?;

        match self.value {
            Some(items) if !items.is_empty() && items.iter().all(Presence::is_present) => Ok(()),
            _ => Err(raise(explanation, args)),
        }
    }
}

impl<E> ObjectChecks for ArrayCondition<'_, E> {
    type Value = [E];

    fn value(&self) -> Option<&[E]> {
        self.value
    }
}
