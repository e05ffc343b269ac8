// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use super::messages::{VALUE_IS_NOT_FALSE, VALUE_IS_NOT_TRUE};
use crate::format::Arg;
use crate::violation::{raise, ContractResult};

/// Checks on a boolean.
#[derive(Debug, Clone, Copy)]
#[must_use = "a condition does nothing until one of its checks is called"]
pub struct BooleanCondition {
    value: bool,
}

impl BooleanCondition {
    pub fn new(value: bool) -> Self {
        Self { value }
    }

    /// Fails with `Value is not TRUE` if the value is `false`.
    pub fn is_true(&self) -> ContractResult {
        self.is_true_with(VALUE_IS_NOT_TRUE, &[])
    }

    pub fn is_true_with(&self, explanation: &str, args: &[Arg<'_>]) -> ContractResult {
        self.expect(true, explanation, args)
    }

    /// Fails with `Value is not FALSE` if the value is `true`.
    pub fn is_false(&self) -> ContractResult {
        self.is_false_with(VALUE_IS_NOT_FALSE, &[])
    }

    pub fn is_false_with(&self, explanation: &str, args: &[Arg<'_>]) -> ContractResult {
        self.expect(false, explanation, args)
    }

    fn expect(&self, expected: bool, explanation: &str, args: &[Arg<'_>]) -> ContractResult {
        if self.value == expected {
            Ok(())
        } else {
            Err(raise(explanation, args))
        }
    }
}
