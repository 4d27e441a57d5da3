//! Unit records
//!
//! A unit is never physically removed. Archival overwrites the description
//! and leaves the row live and readable.

use crate::ids::{LedgerHeight, Principal, UnitId};
use serde::{Deserialize, Serialize};

/// The caller-supplied, mutable part of a unit
///
/// Used as input to both creation and update. Validated as a whole before
/// any write happens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitFields {
    /// Opaque identifying label chosen by the creator
    pub signature: String,

    /// Numeric weight attribute
    pub weight: u64,

    /// Free-form description
    pub description: String,

    /// Ordered classification labels
    pub labels: Vec<String>,
}

impl UnitFields {
    pub fn new<L, S>(
        signature: impl Into<String>,
        weight: u64,
        description: impl Into<String>,
        labels: L,
    ) -> Self
    where
        L: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            signature: signature.into(),
            weight,
            description: description.into(),
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }
}

/// A stored registry record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    pub id: UnitId,
    pub signature: String,
    /// Principal allowed to mutate or transfer this unit
    pub owner: Principal,
    pub weight: u64,
    pub description: String,
    pub labels: Vec<String>,
    /// Ledger height at creation, immutable
    pub created_at: LedgerHeight,
}

impl Unit {
    /// Materialize a new record from validated fields
    pub fn from_fields(
        id: UnitId,
        fields: UnitFields,
        owner: Principal,
        created_at: LedgerHeight,
    ) -> Self {
        Self {
            id,
            signature: fields.signature,
            owner,
            weight: fields.weight,
            description: fields.description,
            labels: fields.labels,
            created_at,
        }
    }

    /// Replace the mutable fields, keeping owner and creation height
    pub fn apply(&mut self, fields: UnitFields) {
        self.signature = fields.signature;
        self.weight = fields.weight;
        self.description = fields.description;
        self.labels = fields.labels;
    }

    pub fn is_owned_by(&self, principal: &Principal) -> bool {
        &self.owner == principal
    }
}
