//! Unit Types - Core types for the unit registry
//!
//! The registry issues and tracks *units*: records identified by a strictly
//! increasing integer, owned by a principal, carrying a signature, a weight,
//! a description and a bounded set of labels.
//!
//! ## Key Concepts
//!
//! - **Unit**: A registry record; mutable only by its owner
//! - **CallContext**: Caller identity and ledger height supplied by the host
//! - **GrantKey**: (unit, accessor) key of the advisory access table
//! - **Interconnection**: Directed, weighted, typed link between two units
//! - **Calibration**: Administrator-tuned parameters for analytic reads

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod calibration;
pub mod ids;
pub mod relation;
pub mod unit;

// Re-export main types
pub use calibration::{
    Calibration, ClusterBounds, RegistryCounters, DEFAULT_FLUX_VALUE, DEFAULT_STABILITY_INDEX,
};
pub use ids::{CallContext, LedgerHeight, Principal, UnitId};
pub use relation::{GrantKey, Interconnection, InterconnectionKey};
pub use unit::{Unit, UnitFields};
