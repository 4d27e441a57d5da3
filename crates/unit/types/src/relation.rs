//! Access grant keys and interconnections between units

use crate::ids::{Principal, UnitId};
use serde::{Deserialize, Serialize};

/// Key of an access grant row
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GrantKey {
    pub unit: UnitId,
    pub accessor: Principal,
}

impl GrantKey {
    pub fn new(unit: UnitId, accessor: Principal) -> Self {
        Self { unit, accessor }
    }
}

/// Directed pair of unit ids. `(a, b)` and `(b, a)` are distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterconnectionKey {
    pub primary: UnitId,
    pub secondary: UnitId,
}

impl InterconnectionKey {
    pub fn new(primary: UnitId, secondary: UnitId) -> Self {
        Self { primary, secondary }
    }

    pub fn reversed(&self) -> Self {
        Self {
            primary: self.secondary,
            secondary: self.primary,
        }
    }
}

/// A directed, weighted, typed relationship between two units
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interconnection {
    pub key: InterconnectionKey,
    /// 1..=99
    pub intensity: u8,
    pub kind: String,
}
