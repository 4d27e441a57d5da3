//! Id allocation under concurrent and randomized submission

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use proptest::prelude::*;
use unit_registry::UnitRegistry;
use unit_types::{CallContext, UnitFields, UnitId};

#[test]
fn test_concurrent_creations_never_share_an_id() {
    let registry = Arc::new(UnitRegistry::with_administrator("deployer").unwrap());
    let threads = 8;
    let per_thread = 50;

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let ctx = CallContext::new(format!("caller-{}", t), t as u64);
                (0..per_thread)
                    .map(|_| {
                        registry
                            .create(UnitFields::new("S", 10, "D", ["x"]), &ctx)
                            .unwrap()
                    })
                    .collect::<Vec<UnitId>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(seen.insert(id), "duplicate id {}", id);
        }
    }

    let total = (threads * per_thread) as u64;
    assert_eq!(registry.read_total_units(), total);
    let expected: HashSet<UnitId> = (1..=total).map(UnitId::new).collect();
    assert_eq!(seen, expected);
}

fn fields_strategy() -> impl Strategy<Value = UnitFields> {
    (
        "[a-z]{0,70}",
        0u64..1_100_000_000,
        "[a-z]{0,130}",
        proptest::collection::vec("[a-z]{0,34}", 0..12),
    )
        .prop_map(|(signature, weight, description, labels)| {
            UnitFields::new(signature, weight, description, labels)
        })
}

proptest! {
    #[test]
    fn property_total_units_is_monotonic(batch in proptest::collection::vec(fields_strategy(), 1..24)) {
        let registry = UnitRegistry::with_administrator("deployer").unwrap();
        let ctx = CallContext::new("P", 1);
        let mut last = registry.read_total_units();

        for fields in batch {
            let result = registry.create(fields, &ctx);
            let now = registry.read_total_units();
            match result {
                Ok(id) => {
                    prop_assert_eq!(id.value(), last + 1);
                    prop_assert_eq!(now, last + 1);
                    prop_assert!(registry.integrity_check(id).unwrap());
                }
                Err(_) => {
                    prop_assert_eq!(now, last);
                }
            }
            last = now;
        }
    }

    #[test]
    fn property_spectral_score_is_stable(fields in fields_strategy()) {
        let registry = UnitRegistry::with_administrator("deployer").unwrap();
        let ctx = CallContext::new("P", 1);
        let admin = CallContext::new("deployer", 1);
        if let Ok(id) = registry.create(fields, &ctx) {
            let first = registry.spectral_score(id).unwrap();

            // unrelated activity: another unit, links both ways, recalibration
            let other_fields = UnitFields::new("OTHER-SIGNATURE", 999_999, "other", ["a", "b", "c"]);
            let other = registry.create(other_fields, &ctx).unwrap();
            registry.link(id, other, 42, "feeds", &ctx).unwrap();
            registry.link(other, id, 7, "mirrors", &ctx).unwrap();
            registry.set_stability_index(7, &admin).unwrap();
            registry.set_flux_value(3, &admin).unwrap();
            registry.update(other, UnitFields::new("O", 1, "o", ["z"]), &ctx).unwrap();

            prop_assert_eq!(registry.spectral_score(id).unwrap(), first);
        }
    }
}
