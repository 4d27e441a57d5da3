//! Strongly-typed identifiers for registry entities
//!
//! Unit ids and ledger heights are integers, principals are opaque strings.
//! All are wrapped in newtype structs for type safety.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a unit
///
/// Allocated by the registry, strictly increasing, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitId(u64);

impl UnitId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// The id allocated after this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u64> for UnitId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unit:{}", self.0)
    }
}

/// Identity of an invoking principal
///
/// Opaque and compared by value. No format validation is applied.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "principal:{}", self.0)
    }
}

/// Host-supplied monotonic sequence number, used as a creation timestamp
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct LedgerHeight(u64);

impl LedgerHeight {
    pub fn new(height: u64) -> Self {
        Self(height)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for LedgerHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "height:{}", self.0)
    }
}

/// What the host hands to every invocation: who is calling, and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    pub caller: Principal,
    pub height: LedgerHeight,
}

impl CallContext {
    pub fn new(caller: impl Into<String>, height: u64) -> Self {
        Self {
            caller: Principal::new(caller),
            height: LedgerHeight::new(height),
        }
    }
}
