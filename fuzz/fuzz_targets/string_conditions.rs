// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the string checks.
//!
//! Arbitrary UTF-8 (including every Unicode whitespace class) against the
//! reference definitions of empty and blank.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let condition = ensure::that_string(Some(text));

    let empty = text.is_empty();
    let blank = text.chars().all(char::is_whitespace);

    assert_eq!(condition.is_not_empty().is_ok(), !empty);
    assert_eq!(condition.is_not_blank().is_ok(), !blank);

    // Blank is the stronger condition
    if condition.is_not_blank().is_ok() {
        assert!(condition.is_not_empty().is_ok());
    }
});
