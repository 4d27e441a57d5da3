//! Unit registry facade
//!
//! Composes the unit store, access table, interconnection table and
//! calibration state behind one lock. Each operation holds the guard for its
//! whole validate-authorize-write sequence, so operations never interleave
//! and a failed call leaves every table untouched.

use parking_lot::RwLock;
use tracing::{debug, info};
use unit_types::{
    CallContext, Calibration, ClusterBounds, InterconnectionKey, LedgerHeight, Principal,
    RegistryCounters, Unit, UnitFields, UnitId,
};

use crate::access::AccessControlTable;
use crate::analytics;
use crate::calibration::CalibrationState;
use crate::config::{ConfigError, RegistryConfig};
use crate::error::{NumericField, RegistryError, Result};
use crate::interconnect::InterconnectionTable;
use crate::store::UnitStore;
use crate::validation;

/// Most related ids accepted by `synchronize_descriptions`
pub const MAX_RELATED_UNITS: usize = 5;

#[derive(Debug)]
struct RegistryState {
    units: UnitStore,
    access: AccessControlTable,
    links: InterconnectionTable,
    calibration: CalibrationState,
}

/// The registry: sole writer of all tables and counters
#[derive(Debug)]
pub struct UnitRegistry {
    state: RwLock<RegistryState>,
}

impl UnitRegistry {
    pub fn new(config: RegistryConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// Create a registry administered by `administrator` with default calibration
    pub fn with_administrator(
        administrator: impl Into<String>,
    ) -> std::result::Result<Self, ConfigError> {
        Self::new(RegistryConfig::new(administrator))
    }

    fn from_config(config: RegistryConfig) -> Self {
        info!(administrator = %config.administrator, "Unit registry initialized");

        Self {
            state: RwLock::new(RegistryState {
                units: UnitStore::new(),
                access: AccessControlTable::new(),
                links: InterconnectionTable::new(),
                calibration: CalibrationState::new(config.administrator, config.calibration),
            }),
        }
    }

    pub fn administrator(&self) -> Principal {
        self.state.read().calibration.administrator().clone()
    }

    // --- Unit lifecycle ---

    /// Create a unit owned by the caller and grant the caller access to it
    pub fn create(&self, fields: UnitFields, ctx: &CallContext) -> Result<UnitId> {
        let mut state = self.state.write();
        let id = state.units.create(fields, ctx)?;
        state.access.grant_creator(id, &ctx.caller);
        Ok(id)
    }

    pub fn update(&self, id: UnitId, fields: UnitFields, ctx: &CallContext) -> Result<()> {
        self.state.write().units.update(id, fields, &ctx.caller)
    }

    pub fn transfer_owner(
        &self,
        id: UnitId,
        new_owner: Principal,
        ctx: &CallContext,
    ) -> Result<()> {
        self.state
            .write()
            .units
            .transfer_owner(id, new_owner, &ctx.caller)
    }

    pub fn archive(&self, id: UnitId, notes: impl Into<String>, ctx: &CallContext) -> Result<()> {
        self.state.write().units.archive(id, notes.into(), &ctx.caller)
    }

    // --- Field reads (public, no grant check) ---

    fn read_unit<T>(&self, id: UnitId, f: impl FnOnce(&Unit) -> T) -> Result<T> {
        let state = self.state.read();
        let unit = state.units.get(id)?;
        Ok(f(unit))
    }

    pub fn unit(&self, id: UnitId) -> Result<Unit> {
        self.read_unit(id, Unit::clone)
    }

    pub fn signature_of(&self, id: UnitId) -> Result<String> {
        self.read_unit(id, |u| u.signature.clone())
    }

    pub fn labels_of(&self, id: UnitId) -> Result<Vec<String>> {
        self.read_unit(id, |u| u.labels.clone())
    }

    pub fn owner_of(&self, id: UnitId) -> Result<Principal> {
        self.read_unit(id, |u| u.owner.clone())
    }

    pub fn created_at_of(&self, id: UnitId) -> Result<LedgerHeight> {
        self.read_unit(id, |u| u.created_at)
    }

    pub fn weight_of(&self, id: UnitId) -> Result<u64> {
        self.read_unit(id, |u| u.weight)
    }

    pub fn description_of(&self, id: UnitId) -> Result<String> {
        self.read_unit(id, |u| u.description.clone())
    }

    pub fn integrity_check(&self, id: UnitId) -> Result<bool> {
        self.state.read().units.integrity_check(id)
    }

    // --- Access grants ---

    pub fn check_access(&self, id: UnitId, accessor: &Principal) -> Result<bool> {
        self.state.read().access.check_access(id, accessor)
    }

    // --- Interconnections ---

    /// Record a directed link from `primary` to `secondary`
    pub fn link(
        &self,
        primary: UnitId,
        secondary: UnitId,
        intensity: u64,
        kind: impl Into<String>,
        ctx: &CallContext,
    ) -> Result<()> {
        let mut state = self.state.write();
        for id in [primary, secondary] {
            if !state.units.contains(id) {
                return Err(RegistryError::UnitNotFound(id));
            }
        }

        debug!(caller = %ctx.caller, primary = %primary, secondary = %secondary, "Linking units");
        state
            .links
            .insert(InterconnectionKey::new(primary, secondary), intensity, kind.into())
    }

    // --- Analytics ---

    pub fn spectral_score(&self, id: UnitId) -> Result<u64> {
        self.read_unit(id, analytics::spectral_score)
    }

    pub fn cluster_bounds(&self, reference_weight: u64, tolerance: u64) -> ClusterBounds {
        analytics::cluster_bounds(reference_weight, tolerance)
    }

    pub fn multidimensional_property(&self, id: UnitId) -> Result<u128> {
        self.read_unit(id, analytics::multidimensional_property)
    }

    pub fn coherence_evaluation(&self) -> bool {
        analytics::coherence_evaluation(self.read_total_units())
    }

    pub fn constellation_density(&self) -> Result<u128> {
        let counters = self.counters();
        analytics::constellation_density(
            counters.total_units,
            counters.stability_index,
            counters.flux_value,
        )
    }

    pub fn harmonization_ceremony(&self) -> u128 {
        let counters = self.counters();
        analytics::harmonization_ceremony(
            counters.total_units,
            counters.stability_index,
            counters.flux_value,
        )
    }

    // --- Calibration ---

    pub fn set_stability_index(&self, value: u64, ctx: &CallContext) -> Result<()> {
        self.state
            .write()
            .calibration
            .set_stability_index(value, &ctx.caller)
    }

    pub fn set_flux_value(&self, value: u64, ctx: &CallContext) -> Result<()> {
        self.state.write().calibration.set_flux_value(value, &ctx.caller)
    }

    pub fn read_stability_index(&self) -> u64 {
        self.state.read().calibration.stability_index()
    }

    pub fn read_flux_value(&self) -> u64 {
        self.state.read().calibration.flux_value()
    }

    pub fn read_total_units(&self) -> u64 {
        self.state.read().units.total_units()
    }

    pub fn calibration(&self) -> Calibration {
        self.state.read().calibration.current()
    }

    /// All three counters, read under one guard
    pub fn counters(&self) -> RegistryCounters {
        let state = self.state.read();
        RegistryCounters {
            total_units: state.units.total_units(),
            stability_index: state.calibration.stability_index(),
            flux_value: state.calibration.flux_value(),
        }
    }

    // --- Batch description sync ---

    /// Validate a description sync request against the primary unit and up
    /// to five related units.
    ///
    /// Writes nothing. Only the checks are performed; no unit's description
    /// changes, whatever the arguments.
    pub fn synchronize_descriptions(
        &self,
        primary: UnitId,
        related: &[UnitId],
        unified_description: &str,
        ctx: &CallContext,
    ) -> Result<()> {
        let state = self.state.read();
        state.units.ensure_owner(primary, &ctx.caller)?;

        if related.len() > MAX_RELATED_UNITS {
            return Err(RegistryError::BoundaryBreach {
                field: NumericField::RelatedCount,
                value: related.len() as u64,
            });
        }
        if let Some(missing) = related.iter().find(|id| !state.units.contains(**id)) {
            return Err(RegistryError::UnitNotFound(*missing));
        }
        validation::check_description(unified_description)?;

        debug!(
            primary = %primary,
            related = related.len(),
            "Description sync request validated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn registry() -> UnitRegistry {
        UnitRegistry::with_administrator("admin").unwrap()
    }

    fn fields() -> UnitFields {
        UnitFields::new("S1", 50, "D1", ["x"])
    }

    #[test]
    fn test_create_grants_creator_access() {
        let registry = registry();
        let ctx = CallContext::new("p", 3);
        let id = registry.create(fields(), &ctx).unwrap();

        assert!(registry.check_access(id, &ctx.caller).unwrap());
        assert_eq!(
            registry
                .check_access(id, &Principal::new("q"))
                .unwrap_err()
                .kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_failed_create_leaves_no_grant() {
        let registry = registry();
        let ctx = CallContext::new("p", 3);
        registry
            .create(UnitFields::new("S1", 50, "D1", Vec::<String>::new()), &ctx)
            .unwrap_err();

        assert_eq!(registry.read_total_units(), 0);
        assert!(registry.check_access(UnitId::new(1), &ctx.caller).is_err());
    }

    #[test]
    fn test_grant_survives_transfer_but_does_not_authorize() {
        let registry = registry();
        let p = CallContext::new("p", 1);
        let id = registry.create(fields(), &p).unwrap();
        registry
            .transfer_owner(id, Principal::new("q"), &p)
            .unwrap();

        // grant is advisory only
        assert!(registry.check_access(id, &p.caller).unwrap());
        assert_eq!(
            registry.update(id, fields(), &p).unwrap_err().kind(),
            ErrorKind::NotOwner
        );
    }

    #[test]
    fn test_link_requires_both_endpoints() {
        let registry = registry();
        let ctx = CallContext::new("p", 1);
        let a = registry.create(fields(), &ctx).unwrap();

        let err = registry
            .link(a, UnitId::new(2), 10, "feeds", &ctx)
            .unwrap_err();
        assert_eq!(err, RegistryError::UnitNotFound(UnitId::new(2)));

        let err = registry
            .link(UnitId::new(5), a, 0, "", &ctx)
            .unwrap_err();
        assert_eq!(err, RegistryError::UnitNotFound(UnitId::new(5)));
    }

    #[test]
    fn test_empty_administrator_rejected() {
        let err = UnitRegistry::with_administrator("").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(UnitRegistry::new(RegistryConfig::new("")).is_err());
    }

    #[test]
    fn test_zero_calibration_config_rejected() {
        let config = RegistryConfig::new("admin").with_calibration(Calibration {
            stability_index: 100,
            flux_value: 0,
        });
        assert!(UnitRegistry::new(config).is_err());
    }

    fn sync(
        registry: &UnitRegistry,
        primary: UnitId,
        related: &[UnitId],
        text: &str,
        ctx: &CallContext,
    ) -> std::result::Result<(), ErrorKind> {
        registry
            .synchronize_descriptions(primary, related, text, ctx)
            .map_err(|e| e.kind())
    }

    #[test]
    fn test_synchronize_checks_in_order() {
        let registry = registry();
        let p = CallContext::new("p", 1);
        let q = CallContext::new("q", 1);
        let a = registry.create(fields(), &p).unwrap();
        let b = registry.create(fields(), &q).unwrap();

        assert_eq!(sync(&registry, UnitId::new(9), &[], "u", &p), Err(ErrorKind::NotFound));
        assert_eq!(sync(&registry, a, &[], "u", &q), Err(ErrorKind::NotOwner));
        assert_eq!(sync(&registry, a, &[b; 6], "u", &p), Err(ErrorKind::BoundaryBreach));
        assert_eq!(
            sync(&registry, a, &[b, UnitId::new(9)], "u", &p),
            Err(ErrorKind::NotFound)
        );
        assert_eq!(sync(&registry, a, &[b], "", &p), Err(ErrorKind::InvalidEncoding));
        assert_eq!(sync(&registry, a, &[b; 5], "unified", &p), Ok(()));
        assert_eq!(sync(&registry, a, &[], "unified", &p), Ok(()));
    }
}
