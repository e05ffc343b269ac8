// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use super::messages::ITERABLE_IS_EMPTY;
use super::object::ObjectChecks;
use crate::format::Arg;
use crate::presence::Presence;
use crate::violation::{raise, ContractResult};

/// Checks on a possibly-absent iterable.
///
/// The iterable is cloned for every traversal, so pass something cheap to
/// clone: a reference to a collection, or a lazy iterator adapter.
#[derive(Debug, Clone)]
#[must_use = "a condition does nothing until one of its checks is called"]
pub struct SequenceCondition<I> {
    value: Option<I>,
}

impl<I> SequenceCondition<I> {
    pub fn new(value: Option<I>) -> Self {
        Self { value }
    }
}

impl<I> SequenceCondition<I>
where
    I: IntoIterator + Clone,
    I::Item: Presence,
{
    /// Fails with `Iterable is empty or NULL` if the iterable is absent,
    /// yields nothing, or yields an absent element.
    pub fn is_not_empty(&self) -> ContractResult {
        self.is_not_empty_with(ITERABLE_IS_EMPTY, &[])
    }

    pub fn is_not_empty_with(&self, explanation: &str, args: &[Arg<'_>]) -> ContractResult {
        self.is_not_null_with(explanation, args)?;

        // INVARIANT: each traversal walks a fresh clone, never the caller's value.
        let mut items = self.value.iter().cloned().flatten().peekable();
        if items.peek().is_none() || items.any(|item| item.is_absent()) {
            return Err(raise(explanation, args));
        }
        Ok(())
    }
}

impl<I> ObjectChecks for SequenceCondition<I> {
    type Value = I;

    fn value(&self) -> Option<&I> {
        self.value.as_ref()
    }
}
