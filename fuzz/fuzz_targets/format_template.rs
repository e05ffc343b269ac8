// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the printf-style message formatter.
//!
//! Templates come from callers and may be anything. A malformed specifier
//! must be copied through, never turned into a panic inside a failing check.

#![no_main]

use arbitrary::Arbitrary;
use ensure::format::sprintf;
use ensure::Arg;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum FuzzArg {
    Null,
    Bool(bool),
    Char(char),
    Int(i64),
    Small(i8),
    UInt(u64),
    Float(f64),
    Str(String),
}

impl FuzzArg {
    fn to_arg(&self) -> Arg<'_> {
        match self {
            FuzzArg::Null => Arg::Null,
            FuzzArg::Bool(b) => Arg::from(*b),
            FuzzArg::Char(c) => Arg::from(*c),
            FuzzArg::Int(v) => Arg::from(*v),
            FuzzArg::Small(v) => Arg::from(*v),
            FuzzArg::UInt(v) => Arg::from(*v),
            FuzzArg::Float(v) => Arg::from(*v),
            FuzzArg::Str(s) => Arg::from(s.as_str()),
        }
    }
}

#[derive(Arbitrary, Debug)]
struct Input {
    template: String,
    args: Vec<FuzzArg>,
}

fuzz_target!(|input: Input| {
    let args: Vec<Arg<'_>> = input.args.iter().map(FuzzArg::to_arg).collect();

    // Property 1: formatting never panics
    let out = sprintf(&input.template, &args);

    // Property 2: a template without '%' is returned as-is
    if !input.template.contains('%') {
        assert_eq!(out, input.template);
    }
});
