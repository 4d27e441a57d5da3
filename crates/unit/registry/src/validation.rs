//! Field validators
//!
//! The `valid_*` predicates are pure and total. The `check_*` functions wrap
//! them and produce the typed error for the first violated rule. Lengths are
//! counted in characters.

use crate::error::{LabelViolation, NumericField, RegistryError, Result, TextField};
use unit_types::UnitFields;

pub const SIGNATURE_MAX_LEN: usize = 64;
pub const DESCRIPTION_MAX_LEN: usize = 128;
pub const LABEL_MAX_LEN: usize = 32;
pub const MAX_LABELS: usize = 10;
/// Exclusive upper bound on unit weight
pub const WEIGHT_LIMIT: u64 = 1_000_000_000;
pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 99;

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn within(s: &str, max: usize) -> bool {
    (1..=max).contains(&char_len(s))
}

pub fn valid_signature(s: &str) -> bool {
    within(s, SIGNATURE_MAX_LEN)
}

pub fn valid_description(s: &str) -> bool {
    within(s, DESCRIPTION_MAX_LEN)
}

pub fn valid_label(s: &str) -> bool {
    within(s, LABEL_MAX_LEN)
}

pub fn valid_label_collection<S: AsRef<str>>(labels: &[S]) -> bool {
    (1..=MAX_LABELS).contains(&labels.len()) && labels.iter().all(|l| valid_label(l.as_ref()))
}

pub fn valid_weight(w: u64) -> bool {
    w > 0 && w < WEIGHT_LIMIT
}

fn check_text(field: TextField, s: &str, max: usize) -> Result<()> {
    if within(s, max) {
        Ok(())
    } else {
        Err(RegistryError::InvalidEncoding {
            field,
            len: char_len(s),
            min: 1,
            max,
        })
    }
}

pub fn check_signature(s: &str) -> Result<()> {
    check_text(TextField::Signature, s, SIGNATURE_MAX_LEN)
}

pub fn check_description(s: &str) -> Result<()> {
    check_text(TextField::Description, s, DESCRIPTION_MAX_LEN)
}

/// Archive notes share the description bound
pub fn check_notes(s: &str) -> Result<()> {
    check_text(TextField::Notes, s, DESCRIPTION_MAX_LEN)
}

pub fn check_weight(w: u64) -> Result<()> {
    if valid_weight(w) {
        Ok(())
    } else {
        Err(RegistryError::BoundaryBreach {
            field: NumericField::Weight,
            value: w,
        })
    }
}

pub fn check_label_collection<S: AsRef<str>>(labels: &[S]) -> Result<()> {
    if !(1..=MAX_LABELS).contains(&labels.len()) {
        return Err(RegistryError::StructureViolation(LabelViolation::Count(
            labels.len(),
        )));
    }
    match labels.iter().position(|l| !valid_label(l.as_ref())) {
        Some(index) => Err(RegistryError::StructureViolation(LabelViolation::Label {
            index,
            len: char_len(labels[index].as_ref()),
        })),
        None => Ok(()),
    }
}

/// Narrow a link intensity to `u8`, rejecting anything outside 1..=99
pub fn check_intensity(intensity: u64) -> Result<u8> {
    u8::try_from(intensity)
        .ok()
        .filter(|v| (MIN_INTENSITY..=MAX_INTENSITY).contains(v))
        .ok_or(RegistryError::BoundaryBreach {
            field: NumericField::Intensity,
            value: intensity,
        })
}

pub fn check_interconnection_kind(kind: &str) -> Result<()> {
    if kind.is_empty() {
        Err(RegistryError::EmptyInterconnectionKind)
    } else {
        Ok(())
    }
}

/// Validate a full field set in order: signature, weight, description, labels
pub fn check_fields(fields: &UnitFields) -> Result<()> {
    check_signature(&fields.signature)?;
    check_weight(fields.weight)?;
    check_description(&fields.description)?;
    check_label_collection(&fields.labels)
}
