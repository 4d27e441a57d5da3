//! Registry error types

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use unit_types::{Principal, UnitId};

/// Text fields subject to a length bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextField {
    Signature,
    Description,
    Notes,
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextField::Signature => "signature",
            TextField::Description => "description",
            TextField::Notes => "notes",
        };
        f.write_str(name)
    }
}

/// Numeric fields subject to a range bound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericField {
    Weight,
    Intensity,
    StabilityIndex,
    FluxValue,
    RelatedCount,
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumericField::Weight => "weight",
            NumericField::Intensity => "intensity",
            NumericField::StabilityIndex => "stability index",
            NumericField::FluxValue => "flux value",
            NumericField::RelatedCount => "related unit count",
        };
        f.write_str(name)
    }
}

/// Which rule a label collection broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelViolation {
    /// Collection size outside 1..=10
    Count(usize),
    /// Element at `index` has a length outside 1..=32
    Label { index: usize, len: usize },
}

impl fmt::Display for LabelViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelViolation::Count(count) => write!(f, "{} labels", count),
            LabelViolation::Label { index, len } => {
                write!(f, "label {} has length {}", index, len)
            }
        }
    }
}

/// Coarse failure taxonomy exposed to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    AccessViolation,
    NotFound,
    DuplicateConflict,
    InvalidEncoding,
    BoundaryBreach,
    NotOwner,
    /// Reserved; not produced by any current operation
    IdentityVerificationFailure,
    /// Reserved; not produced by any current operation
    Unauthorized,
    StructureViolation,
}

/// Registry errors
///
/// Every error is returned before any write; a failed call commits nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Calibration access denied for {caller}")]
    AccessViolation { caller: Principal },

    #[error("Unit not found: {0}")]
    UnitNotFound(UnitId),

    #[error("No access grant for {accessor} on {unit}")]
    GrantNotFound { unit: UnitId, accessor: Principal },

    #[error("Interconnection already exists: {primary} -> {secondary}")]
    DuplicateInterconnection { primary: UnitId, secondary: UnitId },

    #[error("Invalid {field}: length {len} outside {min}..={max}")]
    InvalidEncoding {
        field: TextField,
        len: usize,
        min: usize,
        max: usize,
    },

    #[error("Interconnection kind must not be empty")]
    EmptyInterconnectionKind,

    #[error("Invalid {field}: {value} out of range")]
    BoundaryBreach { field: NumericField, value: u64 },

    #[error("{caller} does not own {unit}")]
    NotOwner { unit: UnitId, caller: Principal },

    #[error("Invalid label collection: {0}")]
    StructureViolation(LabelViolation),

    #[error("Flux value is zero")]
    ZeroFlux,
}

impl RegistryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RegistryError::AccessViolation { .. } => ErrorKind::AccessViolation,
            RegistryError::UnitNotFound(_) | RegistryError::GrantNotFound { .. } => {
                ErrorKind::NotFound
            }
            RegistryError::DuplicateInterconnection { .. } => ErrorKind::DuplicateConflict,
            RegistryError::InvalidEncoding { .. } | RegistryError::EmptyInterconnectionKind => {
                ErrorKind::InvalidEncoding
            }
            RegistryError::BoundaryBreach { .. } | RegistryError::ZeroFlux => {
                ErrorKind::BoundaryBreach
            }
            RegistryError::NotOwner { .. } => ErrorKind::NotOwner,
            RegistryError::StructureViolation(_) => ErrorKind::StructureViolation,
        }
    }
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
