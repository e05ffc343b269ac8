//! Failure messages built from printf-style templates.

use super::common::{assert_violation, EMPTY_STRING};
use ensure::format::{sprintf, MAX_WIDTH};
use ensure::prelude::*;
use std::net::Ipv4Addr;

#[test]
fn message_format() {
    assert_violation(
        ensure::that_string(Some(EMPTY_STRING)).is_instance_of_with(
            TypeKey::of::<i32>(),
            &[],
            "This error uses '%s' to print the number %d.",
            &args!["String.format", 42],
        ),
        "This error uses 'String.format' to print the number 42.",
    );
}

#[test]
fn every_check_formats_its_message() {
    let id = 17_u64;
    assert_violation(
        ensure::that(false).is_true_with("order %d is not paid", &args![id]),
        "order 17 is not paid",
    );
    assert_violation(
        ensure::that_string(Some("  ")).is_not_blank_with("name of %s is blank", &args![id]),
        "name of 17 is blank",
    );
    assert_violation(
        ensure::that_array(Some(&[None::<u8>][..]))
            .is_not_empty_with("%s: %d items", &args!["cart", 1]),
        "cart: 1 items",
    );
    assert_violation(
        ensure::statement_is_never_reached_with::<()>("state %s", &args!["CLOSED"]),
        "state CLOSED",
    );
}

#[test]
fn absent_arguments_render_as_null() {
    let owner: Option<&str> = None;
    assert_violation(
        ensure::that_object(None::<&u8>).is_not_null_with("owner %s has no key", &args![owner]),
        "owner null has no key",
    );
}

#[test]
fn display_arguments() {
    let addr = Ipv4Addr::new(10, 0, 0, 1);
    assert_violation(
        ensure::that(false).is_true_with("%s is unreachable", &[Arg::display(&addr)]),
        "10.0.0.1 is unreachable",
    );
}

#[test]
fn templates_without_arguments_are_kept() {
    assert_violation(
        ensure::that(false).is_true_with("100% sure: %s", &[]),
        "100% sure: %s",
    );
}

#[test]
fn numeric_conversions() {
    assert_eq!(sprintf("%x %X %o", &args![255, 255, 8]), "ff FF 10");
    assert_eq!(sprintf("%#x", &args![255]), "0xff");
    assert_eq!(sprintf("%x", &args![-1_i8]), "ff");
    assert_eq!(sprintf("%,d", &args![1234567]), "1,234,567");
    assert_eq!(sprintf("%.2f", &args![3.14159]), "3.14");
    assert_eq!(sprintf("%e", &args![12345.678]), "1.234568e+04");
    assert_eq!(sprintf("%s", &args![1.5_f64]), "1.5");
    assert_eq!(sprintf("%s", &args![2.0_f64]), "2.0");
    assert_eq!(sprintf("%c", &args!['x']), "x");
}

#[test]
fn mismatched_conversion_falls_back_to_string() {
    assert_eq!(sprintf("%d", &args!["abc"]), "abc");
    assert_eq!(sprintf("%f", &args![3]), "3");
}

#[test]
fn oversized_width_is_kept_verbatim() {
    let template = format!("[%{}s]", MAX_WIDTH + 1);
    assert_eq!(sprintf(&template, &args!["x"]), template);

    let template = format!("[%{}s]", 8);
    assert_eq!(sprintf(&template, &args!["x"]), "[       x]");
}

#[test]
fn unknown_conversion_is_kept_verbatim() {
    assert_eq!(sprintf("%q and %s", &args!["a"]), "%q and a");
}
