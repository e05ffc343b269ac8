// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The failure signal: what a broken contract turns into.
//!
//! Every check in this crate funnels through [`raise`]. It formats the
//! message, builds the [`ContractViolation`], and emits exactly one WARN
//! record on the `ensure` target before handing the violation back to the
//! caller. Building a violation is the only side effect in the crate.
//!
//! A violation signals a programming error, not a transient condition. The
//! crate never retries or swallows one: callers propagate it with `?` or
//! escalate it with [`Enforce::enforce`].

use std::error::Error as StdError;

use thiserror::Error;

use crate::format::{sprintf, Arg};
use crate::logging::LOG_TARGET;

/// The underlying error carried by a violation.
pub type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// Result of a contract check.
pub type ContractResult<T = ()> = Result<T, ContractViolation>;

/// A violated contract.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ContractViolation {
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl ContractViolation {
    /// The formatted message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The error this violation was raised for, if any.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Take the cause out of the violation.
    pub fn into_cause(self) -> Option<Cause> {
        self.cause
    }

    /// Plain-data snapshot: the message and the rendered cause chain,
    /// outermost cause first.
    pub fn report(&self) -> ViolationReport {
        let mut causes = Vec::new();
        let mut next = self.source();
        while let Some(cause) = next {
            causes.push(cause.to_string());
            next = cause.source();
        }

        ViolationReport {
            message: self.message.clone(),
            causes,
        }
    }

    fn log(&self) {
        match &self.cause {
            Some(cause) => tracing::warn!(
                target: LOG_TARGET,
                violation = %self.message,
                cause = %cause,
                "Assertion failed."
            ),
            None => tracing::warn!(
                target: LOG_TARGET,
                violation = %self.message,
                "Assertion failed."
            ),
        }
    }
}

/// Snapshot of a [`ContractViolation`] for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViolationReport {
    pub message: String,
    pub causes: Vec<String>,
}

/// Build a violation from a template and log it.
pub(crate) fn raise(template: &str, args: &[Arg<'_>]) -> ContractViolation {
    raise_with_cause(template, args, None)
}

/// Build a violation carrying `cause` and log it.
pub(crate) fn raise_with_cause(
    template: &str,
    args: &[Arg<'_>],
    cause: Option<Cause>,
) -> ContractViolation {
    // INVARIANT: exactly one record per violation, emitted before return.
    let violation = ContractViolation {
        message: sprintf(template, args),
        cause,
    };
    violation.log();
    violation
}

/// Turn a returned violation into a panic.
///
/// For call sites where a broken contract should stop the thread, the way
/// `assert!` does:
///
/// ```should_panic
/// use ensure::Enforce;
///
/// ensure::that(1 + 1 == 3).is_true().enforce();
/// ```
pub trait Enforce<T> {
    /// Return the value, or panic with the violation's message.
    fn enforce(self) -> T;
}

impl<T> Enforce<T> for ContractResult<T> {
    #[track_caller]
    fn enforce(self) -> T {
        match self {
            Ok(value) => value,
            Err(violation) => panic!("{}", violation),
        }
    }
}
