//! Unit Registry - Ownership-gated registry engine
//!
//! This crate provides the registry engine:
//!
//! - **UnitStore**: Id allocation and the unit table, owner-gated mutation
//! - **AccessControlTable**: Advisory per-unit grants, written at creation
//! - **InterconnectionTable**: Insert-only directed links between units
//! - **CalibrationState**: Administrator-gated tunables for analytic reads
//! - **UnitRegistry**: The facade the host invokes, one atomic call at a time
//!
//! ## Host Boundary
//!
//! The host supplies a [`CallContext`](unit_types::CallContext) (caller and
//! ledger height) with every mutating call and owns durable storage. The
//! registry performs no I/O beyond optional config loading.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod access;
pub mod analytics;
pub mod calibration;
pub mod config;
pub mod error;
pub mod interconnect;
pub mod registry;
pub mod store;
pub mod validation;

// Re-exports
pub use access::AccessControlTable;
pub use calibration::CalibrationState;
pub use config::{ConfigError, RegistryConfig};
pub use error::{ErrorKind, LabelViolation, NumericField, RegistryError, Result, TextField};
pub use interconnect::InterconnectionTable;
pub use registry::{UnitRegistry, MAX_RELATED_UNITS};
pub use store::UnitStore;
