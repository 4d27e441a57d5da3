//! Interconnection table
//!
//! Insert-only map of directed links. Endpoint existence is the caller's
//! concern (checked against the unit store by the registry); this table
//! validates intensity and kind and rejects duplicate pairs.

use std::collections::HashMap;

use tracing::{debug, info};
use unit_types::{Interconnection, InterconnectionKey};

use crate::error::{RegistryError, Result};
use crate::validation;

#[derive(Debug, Default)]
pub struct InterconnectionTable {
    links: HashMap<InterconnectionKey, Interconnection>,
}

impl InterconnectionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: InterconnectionKey, intensity: u64, kind: String) -> Result<()> {
        let intensity = validation::check_intensity(intensity)?;
        validation::check_interconnection_kind(&kind)?;

        if self.links.contains_key(&key) {
            debug!(primary = %key.primary, secondary = %key.secondary, "Duplicate interconnection");
            return Err(RegistryError::DuplicateInterconnection {
                primary: key.primary,
                secondary: key.secondary,
            });
        }

        info!(
            primary = %key.primary,
            secondary = %key.secondary,
            intensity,
            kind = %kind,
            "Units interconnected"
        );
        self.links.insert(
            key,
            Interconnection {
                key,
                intensity,
                kind,
            },
        );
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn get(&self, key: &InterconnectionKey) -> Option<&Interconnection> {
        self.links.get(key)
    }
}
