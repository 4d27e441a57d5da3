//! Calibration state - administrator-gated tunables

use tracing::{info, warn};
use unit_types::{Calibration, Principal};

use crate::error::{NumericField, RegistryError, Result};

#[derive(Debug)]
pub struct CalibrationState {
    administrator: Principal,
    current: Calibration,
}

impl CalibrationState {
    pub fn new(administrator: Principal, initial: Calibration) -> Self {
        Self {
            administrator,
            current: initial,
        }
    }

    pub fn administrator(&self) -> &Principal {
        &self.administrator
    }

    pub fn stability_index(&self) -> u64 {
        self.current.stability_index
    }

    pub fn flux_value(&self) -> u64 {
        self.current.flux_value
    }

    pub fn current(&self) -> Calibration {
        self.current
    }

    fn authorize(&self, caller: &Principal) -> Result<()> {
        if caller != &self.administrator {
            warn!(caller = %caller, "Calibration change refused");
            return Err(RegistryError::AccessViolation {
                caller: caller.clone(),
            });
        }
        Ok(())
    }

    fn non_zero(field: NumericField, value: u64) -> Result<()> {
        if value == 0 {
            return Err(RegistryError::BoundaryBreach { field, value });
        }
        Ok(())
    }

    pub fn set_stability_index(&mut self, value: u64, caller: &Principal) -> Result<()> {
        self.authorize(caller)?;
        Self::non_zero(NumericField::StabilityIndex, value)?;

        info!(
            from = self.current.stability_index,
            to = value,
            "Stability index recalibrated"
        );
        self.current.stability_index = value;
        Ok(())
    }

    pub fn set_flux_value(&mut self, value: u64, caller: &Principal) -> Result<()> {
        self.authorize(caller)?;
        Self::non_zero(NumericField::FluxValue, value)?;

        info!(from = self.current.flux_value, to = value, "Flux value recalibrated");
        self.current.flux_value = value;
        Ok(())
    }
}
