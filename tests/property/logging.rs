//! One WARN record per failed check, none per passed check.

use super::common::logged;
use super::elements_strategy;
use ensure::ContractResult;
use proptest::prelude::*;
use tracing::Level;

proptest! {
    #[test]
    fn one_record_per_failure(outcomes in prop::collection::vec(any::<bool>(), 0..16)) {
        let (failures, records) = logged(|| -> ContractResult<usize> {
            Ok(outcomes
                .iter()
                .filter(|&&ok| {
                    ensure::that(ok)
                        .is_true_with("check %b", &ensure::args![ok])
                        .is_err()
                })
                .count())
        });

        let failures = failures.unwrap();
        prop_assert_eq!(records.len(), failures);
        prop_assert_eq!(failures, outcomes.iter().filter(|ok| !**ok).count());
        for record in &records {
            prop_assert_eq!(record.level, Level::WARN);
            prop_assert_eq!(record.field("violation"), Some("check false"));
        }
    }

    #[test]
    fn record_carries_the_violation_message(items in elements_strategy()) {
        let (result, records) = logged(|| {
            ensure::that_iterable(Some(&items))
                .is_not_empty_with("%d items", &ensure::args![items.len()])
        });

        match result {
            Ok(()) => prop_assert!(records.is_empty()),
            Err(violation) => {
                prop_assert_eq!(records.len(), 1);
                prop_assert_eq!(records[0].field("violation"), Some(violation.message()));
            }
        }
    }
}
