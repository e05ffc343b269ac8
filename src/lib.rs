//! Design-by-contract assertions with a fluent API.
//!
//! State preconditions, postconditions and invariants over booleans, values,
//! strings, iterables, slices and errors. A check that does not hold returns a
//! [`ContractViolation`] and logs one WARN record through `tracing`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────────┐     ┌────────────────┐
//! │  entry.rs   │────▶│  conditions/     │────▶│  violation.rs  │
//! │ (that_*,    │     │ (Boolean, Object,│     │ (raise, log,   │
//! │  dispatch)  │     │  String, ...)    │     │  Enforce)      │
//! └─────────────┘     └──────────────────┘     └────────────────┘
//!                              │                       │
//!                              ▼                       ▼
//!                     ┌──────────────────┐     ┌────────────────┐
//!                     │   presence.rs    │     │   format/      │
//!                     │ (absent values)  │     │ (printf-style) │
//!                     └──────────────────┘     └────────────────┘
//! ```
//!
//! # Entry Points
//!
//! | Value you hold        | Entry point                    | Condition            |
//! |-----------------------|--------------------------------|----------------------|
//! | `bool`                | [`that`]                       | `BooleanCondition`   |
//! | `Option<&T>`          | [`that_object`], [`that_objects`] | `ObjectCondition` |
//! | `Option<&str>`        | [`that_string`]                | `StringCondition`    |
//! | `Option<I>` iterable  | [`that_iterable`]              | `SequenceCondition`  |
//! | `Option<&[E]>`        | [`that_array`]                 | `ArrayCondition`     |
//! | `Option<E>` error     | [`that_error`]                 | `ExceptionCondition` |
//!
//! # Usage
//!
//! ```
//! use ensure::prelude::*;
//!
//! fn rename(name: Option<&str>, tags: &[Option<&str>]) -> ContractResult {
//!     ensure::that_string(name).is_not_blank()?;
//!     ensure::that_array(Some(tags)).is_not_empty_with("no tags for %s", &args![name])?;
//!     Ok(())
//! }
//!
//! assert!(rename(Some("ada"), &[Some("admin")]).is_ok());
//!
//! let err = rename(Some("ada"), &[]).unwrap_err();
//! assert_eq!(err.message(), "no tags for ada");
//! ```

pub mod conditions;
mod entry;
pub mod format;
pub mod logging;
mod presence;
pub mod testing;
mod violation;

pub use conditions::{
    messages, ArrayCondition, BooleanCondition, ExceptionCondition, ObjectChecks, ObjectCondition,
    SequenceCondition, StringCondition, TypeKey,
};
pub use entry::{
    statement_is_never_reached, statement_is_never_reached_with, that, that_array, that_error,
    that_iterable, that_object, that_objects, that_string,
};
pub use format::Arg;
pub use presence::Presence;
pub use violation::{Cause, ContractResult, ContractViolation, Enforce, ViolationReport};

/// Everything a call site needs: the check traits, the result types and
/// the `args!` macro.
pub mod prelude {
    pub use crate::args;
    pub use crate::{
        Arg, ContractResult, ContractViolation, Enforce, ObjectChecks, Presence, TypeKey,
    };
}
