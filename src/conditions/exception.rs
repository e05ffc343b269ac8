// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::format::Arg;
use crate::violation::{raise_with_cause, Cause, ContractResult};

/// Turns an error that must never happen into a contract violation.
///
/// ```
/// use ensure::args;
///
/// fn parse_port(raw: &str) -> ensure::ContractResult<u16> {
///     match raw.parse::<u16>() {
///         Ok(port) => Ok(port),
///         Err(err) => ensure::that_error(Some(err))
///             .is_never_thrown("validated port '%s' failed to parse", &args![raw]),
///     }
/// }
///
/// let violation = parse_port("http").unwrap_err();
/// assert_eq!(violation.message(), "validated port 'http' failed to parse");
/// assert!(violation.cause().is_some());
/// ```
#[derive(Debug)]
#[must_use = "a condition does nothing until one of its checks is called"]
pub struct ExceptionCondition {
    value: Option<Cause>,
}

impl ExceptionCondition {
    pub fn new(value: Option<Cause>) -> Self {
        Self { value }
    }

    /// Always fails. The captured error becomes the violation's source.
    pub fn is_never_thrown<T>(self, explanation: &str, args: &[Arg<'_>]) -> ContractResult<T> {
        Err(raise_with_cause(explanation, args, self.value))
    }
}
