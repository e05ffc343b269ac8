// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use super::messages::{STRING_IS_BLANK, STRING_IS_EMPTY};
use super::object::ObjectChecks;
use crate::format::Arg;
use crate::violation::{raise, ContractResult};

/// Checks on a possibly-absent string.
#[derive(Debug, Clone, Copy)]
#[must_use = "a condition does nothing until one of its checks is called"]
pub struct StringCondition<'a> {
    value: Option<&'a str>,
}

impl<'a> StringCondition<'a> {
    pub fn new(value: Option<&'a str>) -> Self {
        Self { value }
    }

    /// Fails with `The string is empty or NULL` unless the string is present
    /// and has at least one character.
    pub fn is_not_empty(&self) -> ContractResult {
        self.is_not_empty_with(STRING_IS_EMPTY, &[])
    }

    pub fn is_not_empty_with(&self, explanation: &str, args: &[Arg<'_>]) -> ContractResult {
        self.is_not_null_with(explanation, args)?;

        match self.value {
            Some(value) if !value.is_empty() => Ok(()),
            _ => Err(raise(explanation, args)),
        }
    }

    /// Fails with `The string is blank` unless the string has at least one
    /// non-whitespace character. An absent string fails with `Object is NULL`.
    pub fn is_not_blank(&self) -> ContractResult {
        self.is_not_blank_with(STRING_IS_BLANK, &[])
    }

    pub fn is_not_blank_with(&self, explanation: &str, args: &[Arg<'_>]) -> ContractResult {
        self.is_not_null()?;

        match self.value {
            Some(value) if !is_blank(value) => Ok(()),
            _ => Err(raise(explanation, args)),
        }
    }
}

impl ObjectChecks for StringCondition<'_> {
    type Value = str;

    fn value(&self) -> Option<&str> {
        self.value
    }
}

/// Empty, or nothing but Unicode whitespace.
fn is_blank(value: &str) -> bool {
    value.chars().all(char::is_whitespace)
}
