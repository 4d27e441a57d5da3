//! Access control table
//!
//! Grants are written for the creator when a unit is created. Nothing else
//! writes them, and no mutating operation consults them: ownership alone
//! gates mutation. The table is informational.

use std::collections::HashMap;

use tracing::debug;
use unit_types::{GrantKey, Principal, UnitId};

use crate::error::{RegistryError, Result};

#[derive(Debug, Default)]
pub struct AccessControlTable {
    grants: HashMap<GrantKey, bool>,
}

impl AccessControlTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the creator's grant for a freshly created unit
    pub(crate) fn grant_creator(&mut self, unit: UnitId, creator: &Principal) {
        let key = GrantKey::new(unit, creator.clone());
        debug!(unit = %unit, accessor = %creator, "Creator access granted");
        self.grants.insert(key, true);
    }

    /// Stored permission flag for (unit, accessor)
    pub fn check_access(&self, unit: UnitId, accessor: &Principal) -> Result<bool> {
        let key = GrantKey::new(unit, accessor.clone());
        self.grants
            .get(&key)
            .copied()
            .ok_or_else(|| RegistryError::GrantNotFound {
                unit,
                accessor: accessor.clone(),
            })
    }

    pub fn len(&self) -> usize {
        self.grants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }
}
