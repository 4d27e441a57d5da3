//! Derived reads over stored units and counters
//!
//! Pure arithmetic. Products widen to `u128`, so none of these can overflow
//! for `u64` inputs. `cluster_bounds` saturates instead.

use unit_types::{ClusterBounds, Unit};

use crate::error::{RegistryError, Result};

/// Units above this count are considered coherent
pub const COHERENCE_THRESHOLD: u64 = 100;

/// `2 * |signature| + 3 * |labels| + weight / 100`
pub fn spectral_score(unit: &Unit) -> u64 {
    let signature_len = unit.signature.chars().count() as u64;
    let label_count = unit.labels.len() as u64;
    2 * signature_len + 3 * label_count + unit.weight / 100
}

pub fn cluster_bounds(reference: u64, tolerance: u64) -> ClusterBounds {
    ClusterBounds {
        lower: reference.saturating_sub(tolerance),
        upper: reference.saturating_add(tolerance),
        reference,
    }
}

/// `weight * created_at`
pub fn multidimensional_property(unit: &Unit) -> u128 {
    u128::from(unit.weight) * u128::from(unit.created_at.value())
}

pub fn coherence_evaluation(total_units: u64) -> bool {
    total_units > COHERENCE_THRESHOLD
}

/// `total_units * stability_index / flux_value`, rounded down
pub fn constellation_density(
    total_units: u64,
    stability_index: u64,
    flux_value: u64,
) -> Result<u128> {
    if flux_value == 0 {
        return Err(RegistryError::ZeroFlux);
    }
    Ok(u128::from(total_units) * u128::from(stability_index) / u128::from(flux_value))
}

/// `7 * total_units + 3 * stability_index + 11 * flux_value`
pub fn harmonization_ceremony(total_units: u64, stability_index: u64, flux_value: u64) -> u128 {
    7 * u128::from(total_units) + 3 * u128::from(stability_index) + 11 * u128::from(flux_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use unit_types::{LedgerHeight, Principal, UnitFields, UnitId};

    fn unit(signature: &str, weight: u64, labels: &[&str], height: u64) -> Unit {
        Unit::from_fields(
            UnitId::new(1),
            UnitFields::new(signature, weight, "d", labels.iter().copied()),
            Principal::new("p"),
            LedgerHeight::new(height),
        )
    }

    #[test]
    fn test_spectral_score() {
        // 2*4 + 3*2 + 1234/100
        assert_eq!(spectral_score(&unit("abcd", 1234, &["a", "b"], 1)), 8 + 6 + 12);
        assert_eq!(spectral_score(&unit("S1", 50, &["x"], 1)), 4 + 3);
    }

    #[test]
    fn test_cluster_bounds_clamps_at_zero() {
        assert_eq!(
            cluster_bounds(50, 70),
            ClusterBounds {
                lower: 0,
                upper: 120,
                reference: 50
            }
        );
        assert_eq!(cluster_bounds(100, 30).lower, 70);
        assert_eq!(cluster_bounds(u64::MAX, 1).upper, u64::MAX);
    }

    #[test]
    fn test_multidimensional_property_widens() {
        assert_eq!(multidimensional_property(&unit("s", 50, &["x"], 4)), 200);
        let big = unit("s", 999_999_999, &["x"], u64::MAX);
        assert_eq!(
            multidimensional_property(&big),
            999_999_999u128 * u128::from(u64::MAX)
        );
    }

    #[test]
    fn test_coherence_threshold() {
        assert!(!coherence_evaluation(100));
        assert!(coherence_evaluation(101));
    }

    #[test]
    fn test_constellation_density() {
        assert_eq!(constellation_density(3, 100, 1).unwrap(), 300);
        assert_eq!(constellation_density(7, 10, 3).unwrap(), 23);
        assert_eq!(
            constellation_density(7, 10, 0).unwrap_err(),
            RegistryError::ZeroFlux
        );
    }

    #[test]
    fn test_harmonization_ceremony() {
        assert_eq!(harmonization_ceremony(0, 100, 1), 311);
        assert_eq!(harmonization_ceremony(2, 100, 1), 325);
    }
}
