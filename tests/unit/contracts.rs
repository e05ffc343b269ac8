//! Every check, passing and failing, through the public entry points.

use super::common::{assert_violation, logged, EMPTY_STRING, ERROR_MESSAGE, NOT_EMPTY_STRING};
use ensure::messages::*;
use ensure::prelude::*;
use std::collections::HashMap;

// ============================================================================
// VALID CONTRACTS
// ============================================================================

#[test]
fn valid_contracts_pass() {
    let nothing: Option<&str> = None;

    ensure::that(false).is_false().unwrap();
    ensure::that(true).is_true().unwrap();
    ensure::that_string(Some(EMPTY_STRING)).is_not_null().unwrap();
    ensure::that_objects(Some(&EMPTY_STRING), &[&Some(EMPTY_STRING)])
        .is_not_null()
        .unwrap();
    ensure::that_objects(None::<&str>, &[&nothing]).is_null().unwrap();
    ensure::that_array(Some(&[EMPTY_STRING][..])).is_not_empty().unwrap();
    ensure::that_string(Some(NOT_EMPTY_STRING)).is_not_empty().unwrap();
    ensure::that_string(Some(NOT_EMPTY_STRING)).is_not_blank().unwrap();
    ensure::that_string(Some(EMPTY_STRING))
        .is_instance_of(TypeKey::of::<str>(), &[])
        .unwrap();
}

#[test]
fn passing_checks_log_nothing() {
    let (result, records) = logged(|| {
        ensure::that(true).is_true()?;
        ensure::that_string(Some("x")).is_not_blank()?;
        ensure::that_iterable(Some(&vec![Some(1), Some(2)])).is_not_empty()
    });
    assert!(result.is_ok());
    assert!(records.is_empty());
}

// ============================================================================
// BOOLEAN
// ============================================================================

#[test]
fn false_is_not_true() {
    assert_violation(ensure::that(false).is_true(), VALUE_IS_NOT_TRUE);
    assert_violation(ensure::that(false).is_true_with(ERROR_MESSAGE, &[]), ERROR_MESSAGE);
}

#[test]
fn true_is_not_false() {
    assert_violation(ensure::that(true).is_false(), VALUE_IS_NOT_FALSE);
    assert_violation(ensure::that(true).is_false_with(ERROR_MESSAGE, &[]), ERROR_MESSAGE);
}

// ============================================================================
// OBJECTS
// ============================================================================

#[test]
fn present_value_is_not_null() {
    assert_violation(
        ensure::that_string(Some(EMPTY_STRING)).is_null_with(ERROR_MESSAGE, &[]),
        ERROR_MESSAGE,
    );
    assert_violation(
        ensure::that_objects(Some(&EMPTY_STRING), &[&Some(EMPTY_STRING)])
            .is_null_with(ERROR_MESSAGE, &[]),
        ERROR_MESSAGE,
    );
}

#[test]
fn absent_values_are_null() {
    let none: Option<&str> = None;

    assert_violation(
        ensure::that_object(None::<&u32>).is_not_null_with(ERROR_MESSAGE, &[]),
        ERROR_MESSAGE,
    );
    assert_violation(
        ensure::that_objects(Some(&EMPTY_STRING), &[&none]).is_not_null_with(ERROR_MESSAGE, &[]),
        ERROR_MESSAGE,
    );
    assert_violation(
        ensure::that_objects(None::<&str>, &[&Some(EMPTY_STRING)])
            .is_not_null_with(ERROR_MESSAGE, &[]),
        ERROR_MESSAGE,
    );
    assert_violation(
        ensure::that_objects(None::<&str>, &[&none]).is_not_null(),
        OBJECT_IS_NULL,
    );
}

#[test]
fn any_absent_additional_value_fails() {
    let a = Some(1);
    let b: Option<u8> = None;
    let c = Some("c");
    assert_violation(
        ensure::that_objects(Some(&0), &[&a, &b, &c]).is_not_null(),
        OBJECT_IS_NULL,
    );
    assert!(ensure::that_objects(Some(&0), &[&a, &c]).is_not_null().is_ok());
}

#[test]
fn wrong_type_names_both_sides() {
    assert_violation(
        ensure::that_string(Some(EMPTY_STRING))
            .is_instance_of_with(TypeKey::of::<i32>(), &[], ERROR_MESSAGE, &[]),
        ERROR_MESSAGE,
    );
    assert_violation(
        ensure::that_object(Some(&1.5_f64))
            .is_instance_of(TypeKey::of::<i32>(), &[TypeKey::of::<String>()]),
        "Object is of wrong type. Actual: f64. Expected one of: [i32, alloc::string::String]",
    );
}

#[test]
fn any_of_several_types_matches() {
    let value = 7_u16;
    let condition = ensure::that_object(Some(&value));
    assert!(condition
        .is_instance_of(
            TypeKey::of::<u8>(),
            &[TypeKey::of::<u32>(), TypeKey::of::<u16>()]
        )
        .is_ok());
}

// ============================================================================
// STRINGS
// ============================================================================

#[test]
fn absent_or_empty_string_is_empty() {
    assert_violation(
        ensure::that_string(None).is_not_empty_with(ERROR_MESSAGE, &[]),
        ERROR_MESSAGE,
    );
    assert_violation(
        ensure::that_string(Some(EMPTY_STRING)).is_not_empty_with(ERROR_MESSAGE, &[]),
        ERROR_MESSAGE,
    );
    assert_violation(ensure::that_string(None).is_not_empty(), STRING_IS_EMPTY);
}

#[test]
fn whitespace_is_blank() {
    assert_violation(
        ensure::that_string(Some(" ")).is_not_blank_with(ERROR_MESSAGE, &[]),
        ERROR_MESSAGE,
    );
    assert_violation(ensure::that_string(Some("\t\n ")).is_not_blank(), STRING_IS_BLANK);
    assert!(ensure::that_string(Some(" a ")).is_not_blank().is_ok());
}

#[test]
fn absent_string_is_null_before_blank() {
    assert_violation(
        ensure::that_string(None).is_not_blank_with(ERROR_MESSAGE, &[]),
        OBJECT_IS_NULL,
    );
}

// ============================================================================
// ITERABLES AND ARRAYS
// ============================================================================

#[test]
fn iterable_with_absent_element_is_empty() {
    let list = vec![Some(EMPTY_STRING), None, Some(EMPTY_STRING)];
    assert_violation(
        ensure::that_iterable(Some(&list)).is_not_empty_with(ERROR_MESSAGE, &[]),
        ERROR_MESSAGE,
    );
}

#[test]
fn empty_or_absent_iterable_is_empty() {
    let empty: Vec<Option<u8>> = Vec::new();
    assert_violation(ensure::that_iterable(Some(&empty)).is_not_empty(), ITERABLE_IS_EMPTY);
    assert_violation(
        ensure::that_iterable(None::<&Vec<Option<u8>>>).is_not_empty(),
        ITERABLE_IS_EMPTY,
    );
}

#[test]
fn map_values_are_an_iterable() {
    let mut ports = HashMap::new();
    ports.insert("http", Some(80));
    ports.insert("https", Some(443));
    assert!(ensure::that_iterable(Some(ports.values())).is_not_empty().is_ok());

    ports.insert("gopher", None);
    assert!(ensure::that_iterable(Some(ports.values())).is_not_empty().is_err());
}

#[test]
fn array_with_absent_element_is_empty() {
    let items = [Some(EMPTY_STRING), None, Some(EMPTY_STRING)];
    assert_violation(
        ensure::that_array(Some(&items[..])).is_not_empty_with(ERROR_MESSAGE, &[]),
        ERROR_MESSAGE,
    );
}

#[test]
fn empty_or_absent_array_is_empty() {
    let empty: [&str; 0] = [];
    assert_violation(
        ensure::that_array(Some(&empty[..])).is_not_empty_with(ERROR_MESSAGE, &[]),
        ERROR_MESSAGE,
    );
    assert_violation(
        ensure::that_array(None::<&[Option<&str>]>).is_not_empty(),
        ARRAY_IS_EMPTY,
    );
}

#[test]
fn collections_keep_object_checks() {
    let list = vec![Some(1)];
    assert!(ensure::that_iterable(Some(&list)).is_not_null().is_ok());
    assert_violation(ensure::that_iterable(Some(&list)).is_null(), OBJECT_IS_NOT_NULL);
    assert!(ensure::that_array(None::<&[Option<u8>]>).is_null().is_ok());
}

// ============================================================================
// ERRORS AND UNREACHABLE CODE
// ============================================================================

#[test]
fn thrown_error_is_a_violation() {
    let error = std::io::Error::new(std::io::ErrorKind::InvalidInput, "bad argument");
    let violation = ensure::that_error(Some(error))
        .is_never_thrown::<()>(ERROR_MESSAGE, &[])
        .unwrap_err();
    assert_eq!(violation.message(), ERROR_MESSAGE);
    assert_eq!(violation.cause().map(ToString::to_string).as_deref(), Some("bad argument"));
}

#[test]
fn unreachable_statement_fails() {
    assert_violation(ensure::statement_is_never_reached::<()>(), NEVER_REACHED);
    assert_violation(
        ensure::statement_is_never_reached_with::<()>(ERROR_MESSAGE, &[]),
        ERROR_MESSAGE,
    );
}

#[test]
fn every_failure_logs_one_record() {
    let (result, records) = logged(|| ensure::that(false).is_true_with("step %d", &args![3]));
    assert_violation(result, "step 3");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].field("violation"), Some("step 3"));
}

#[test]
#[should_panic(expected = "Object is NULL")]
fn enforce_escalates_to_a_panic() {
    ensure::that_object(None::<&str>).is_not_null().enforce();
}
