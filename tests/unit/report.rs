//! Violation reports and their serialized form.

use std::error::Error;
use std::fmt;

use ensure::{ContractViolation, ViolationReport};

#[derive(Debug)]
struct Timeout {
    after_ms: u64,
}

impl fmt::Display for Timeout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timed out after {}ms", self.after_ms)
    }
}

impl Error for Timeout {}

fn violation_with_cause() -> ContractViolation {
    ensure::that_error(Some(Timeout { after_ms: 250 }))
        .is_never_thrown::<()>("lock on %s was never released", &ensure::args!["ledger"])
        .unwrap_err()
}

#[test]
fn report_has_message_and_causes() {
    let report = violation_with_cause().report();
    assert_eq!(
        report,
        ViolationReport {
            message: "lock on ledger was never released".to_string(),
            causes: vec!["timed out after 250ms".to_string()],
        }
    );
}

#[test]
fn report_without_cause() {
    let report = ensure::that(false).is_true().unwrap_err().report();
    assert_eq!(report.message, "Value is not TRUE");
    assert!(report.causes.is_empty());
}

#[test]
fn violation_source_is_the_cause() {
    let violation = violation_with_cause();
    let source = violation.source().expect("cause becomes the source");
    assert_eq!(source.to_string(), "timed out after 250ms");
    assert!(source.downcast_ref::<Timeout>().is_some());
}

#[cfg(feature = "serde")]
#[test]
fn report_serializes_to_json() {
    let report = violation_with_cause().report();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "message": "lock on ledger was never released",
            "causes": ["timed out after 250ms"],
        })
    );

    let back: ViolationReport = serde_json::from_value(json).unwrap();
    assert_eq!(back, report);
}
