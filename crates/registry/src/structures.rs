//! Structure Registry - country → BBAN layout

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use ibankit_core::{Bban, CountryCode, CountryStructure, IbanError, IbanResult};

use crate::table;

/// Registry of country structures.
///
/// Registering a country again replaces its structure wholesale; fields
/// are never merged.
#[derive(Debug, Clone, Default)]
pub struct StructureRegistry {
    structures: HashMap<CountryCode, Arc<CountryStructure>>,
}

impl StructureRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the built-in table
    pub fn with_builtins() -> Self {
        Self {
            structures: table::builtin_structures()
                .map(|s| (s.country(), s))
                .collect(),
        }
    }

    /// Register a structure, returning the one it replaced
    pub fn register(
        &mut self,
        structure: impl Into<Arc<CountryStructure>>,
    ) -> Option<Arc<CountryStructure>> {
        let structure = structure.into();
        let country = structure.country();
        let replaced = self.structures.insert(country, structure);
        if let Some(previous) = &replaced {
            tracing::debug!(
                country = %country,
                previous = %previous.format_string(),
                "Replacing country structure"
            );
        }
        replaced
    }

    pub fn unregister(&mut self, country: CountryCode) -> Option<Arc<CountryStructure>> {
        self.structures.remove(&country)
    }

    pub fn get(&self, country: CountryCode) -> Option<&Arc<CountryStructure>> {
        self.structures.get(&country)
    }

    pub fn is_supported(&self, country: CountryCode) -> bool {
        self.structures.contains_key(&country)
    }

    /// Structure for a raw two-letter code.
    ///
    /// Unknown codes and known codes without a structure are both
    /// `UnsupportedCountry`.
    pub fn resolve(&self, code: &str) -> IbanResult<Arc<CountryStructure>> {
        CountryCode::by_alpha2(code)
            .and_then(|country| self.get(country))
            .cloned()
            .ok_or_else(|| IbanError::UnsupportedCountry(code.to_string()))
    }

    /// Validate a BBAN against its country's structure
    pub fn validate_bban(&self, country: CountryCode, bban: &str) -> IbanResult<Bban> {
        let structure = self
            .get(country)
            .cloned()
            .ok_or_else(|| IbanError::UnsupportedCountry(country.to_string()))?;
        Bban::parse(structure, bban)
    }

    /// Countries with a structure, sorted
    pub fn supported_countries(&self) -> BTreeSet<CountryCode> {
        self.structures.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.structures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }
}
