//! Unit store - the primary id -> record table
//!
//! Owns id allocation. Every write is preceded by full validation, so the
//! table never holds a record that fails a validator.

use std::collections::HashMap;

use tracing::{debug, info, warn};
use unit_types::{CallContext, Principal, Unit, UnitFields, UnitId};

use crate::error::{RegistryError, Result};
use crate::validation;

/// In-memory unit table with its allocation counter
#[derive(Debug, Default)]
pub struct UnitStore {
    units: HashMap<UnitId, Unit>,
    /// Highest allocated id
    total_units: u64,
}

impl UnitStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_units(&self) -> u64 {
        self.total_units
    }

    pub fn contains(&self, id: UnitId) -> bool {
        self.units.contains_key(&id)
    }

    pub fn get(&self, id: UnitId) -> Result<&Unit> {
        self.units.get(&id).ok_or(RegistryError::UnitNotFound(id))
    }

    /// Look up a unit and require `caller` to own it
    fn owned_mut(&mut self, id: UnitId, caller: &Principal) -> Result<&mut Unit> {
        let unit = self
            .units
            .get_mut(&id)
            .ok_or(RegistryError::UnitNotFound(id))?;
        if !unit.is_owned_by(caller) {
            warn!(unit = %id, caller = %caller, owner = %unit.owner, "Ownership check failed");
            return Err(RegistryError::NotOwner {
                unit: id,
                caller: caller.clone(),
            });
        }
        Ok(unit)
    }

    /// Require `caller` to own unit `id` without mutating it
    pub fn ensure_owner(&self, id: UnitId, caller: &Principal) -> Result<&Unit> {
        let unit = self.get(id)?;
        if !unit.is_owned_by(caller) {
            warn!(unit = %id, caller = %caller, owner = %unit.owner, "Ownership check failed");
            return Err(RegistryError::NotOwner {
                unit: id,
                caller: caller.clone(),
            });
        }
        Ok(unit)
    }

    /// Validate and insert a new unit owned by the caller
    pub fn create(&mut self, fields: UnitFields, ctx: &CallContext) -> Result<UnitId> {
        if let Err(err) = validation::check_fields(&fields) {
            debug!(caller = %ctx.caller, error = %err, "Unit creation rejected");
            return Err(err);
        }

        let id = UnitId::new(self.total_units).next();
        debug_assert!(!self.units.contains_key(&id));

        let unit = Unit::from_fields(id, fields, ctx.caller.clone(), ctx.height);
        self.units.insert(id, unit);
        self.total_units = id.value();

        info!(unit = %id, owner = %ctx.caller, height = %ctx.height, "Unit created");
        Ok(id)
    }

    /// Replace signature, weight, description and labels of an owned unit
    pub fn update(&mut self, id: UnitId, fields: UnitFields, caller: &Principal) -> Result<()> {
        let unit = self.owned_mut(id, caller)?;
        if let Err(err) = validation::check_fields(&fields) {
            debug!(unit = %id, error = %err, "Unit update rejected");
            return Err(err);
        }

        unit.apply(fields);
        info!(unit = %id, caller = %caller, "Unit updated");
        Ok(())
    }

    /// Hand ownership to `new_owner`; any identity is accepted
    pub fn transfer_owner(
        &mut self,
        id: UnitId,
        new_owner: Principal,
        caller: &Principal,
    ) -> Result<()> {
        let unit = self.owned_mut(id, caller)?;
        info!(unit = %id, from = %caller, to = %new_owner, "Unit ownership transferred");
        unit.owner = new_owner;
        Ok(())
    }

    /// Overwrite the description with archival notes. The unit stays live.
    pub fn archive(&mut self, id: UnitId, notes: String, caller: &Principal) -> Result<()> {
        let unit = self.owned_mut(id, caller)?;
        if let Err(err) = validation::check_notes(&notes) {
            debug!(unit = %id, error = %err, "Unit archival rejected");
            return Err(err);
        }

        unit.description = notes;
        info!(unit = %id, caller = %caller, "Unit archived");
        Ok(())
    }

    /// Re-check a stored record against the validators
    pub fn integrity_check(&self, id: UnitId) -> Result<bool> {
        let unit = self.get(id)?;
        Ok(!unit.signature.is_empty()
            && !unit.description.is_empty()
            && !unit.labels.is_empty()
            && unit.weight > 0
            && validation::valid_label_collection(&unit.labels))
    }
}
