//! Calibration parameters and analytic result types

use serde::{Deserialize, Serialize};

pub const DEFAULT_STABILITY_INDEX: u64 = 100;
pub const DEFAULT_FLUX_VALUE: u64 = 1;

/// Process-wide tunables consumed by analytic reads
///
/// Both values must stay above zero. Only the administrator may change them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Calibration {
    pub stability_index: u64,
    /// Used as a divisor
    pub flux_value: u64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            stability_index: DEFAULT_STABILITY_INDEX,
            flux_value: DEFAULT_FLUX_VALUE,
        }
    }
}

/// Snapshot of the registry counters, read under a single guard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryCounters {
    /// Highest allocated unit id; never decreases
    pub total_units: u64,
    pub stability_index: u64,
    pub flux_value: u64,
}

/// Weight window around a reference weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterBounds {
    pub lower: u64,
    pub upper: u64,
    pub reference: u64,
}
