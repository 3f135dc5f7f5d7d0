//! IbanKit configuration
//!
//! Loaded from JSON. Extra country structures are written in the legacy
//! format notation and registered through the normal provider path.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ibankit_core::{CountryCode, CountryStructure, EntryType, StructureSyntaxError};
use ibankit_registry::{IbanRegistry, StructureProvider};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::format::IbanFormat;
use crate::pipeline::Validator;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid structure for {country}: {source}")]
    Structure {
        country: CountryCode,
        #[source]
        source: StructureSyntaxError,
    },
}

/// A country structure in configuration form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureDefinition {
    pub country: CountryCode,
    /// Entry types in BBAN order, one per format token
    pub entries: Vec<EntryType>,
    /// Format notation, e.g. `"4!n4!n2!n10!n"`
    pub format: String,
}

impl StructureDefinition {
    /// Parse into a country structure
    pub fn to_structure(&self) -> Result<CountryStructure, ConfigError> {
        CountryStructure::from_format(self.country, &self.entries, &self.format).map_err(|source| {
            ConfigError::Structure {
                country: self.country,
                source,
            }
        })
    }
}

/// Runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IbanConfig {
    /// Also verify national check digits
    #[serde(default)]
    pub enhanced_validation: bool,

    /// Accepted input layout
    #[serde(default)]
    pub format: IbanFormat,

    /// Seed for deterministic generation
    #[serde(default)]
    pub random_seed: Option<u64>,

    /// Structures added to or replacing the built-ins
    #[serde(default)]
    pub structures: Vec<StructureDefinition>,
}

impl IbanConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Configured structures as a provider
    pub fn structure_provider(&self) -> Result<ConfigStructureProvider, ConfigError> {
        ConfigStructureProvider::from_definitions(&self.structures)
    }

    /// Built-ins overridden by the configured structures
    pub fn registry(&self) -> Result<IbanRegistry, ConfigError> {
        let provider = self.structure_provider()?;
        Ok(IbanRegistry::builder()
            .structure_provider(Arc::new(provider))
            .build())
    }

    /// Validator honouring `format` and `enhanced_validation`
    pub fn validator<'r>(&self, registry: &'r IbanRegistry) -> Validator<'r> {
        Validator::with_registry(registry)
            .format(self.format)
            .enhanced(self.enhanced_validation)
    }

    /// Generator seeded from `random_seed`, or from entropy when unset
    pub fn rng(&self) -> StdRng {
        match self.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Structures parsed from configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigStructureProvider {
    structures: Vec<Arc<CountryStructure>>,
}

impl ConfigStructureProvider {
    /// Parse every definition; the first malformed one fails the load
    pub fn from_definitions(definitions: &[StructureDefinition]) -> Result<Self, ConfigError> {
        let structures = definitions
            .iter()
            .map(|d| d.to_structure().map(Arc::new))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { structures })
    }
}

impl StructureProvider for ConfigStructureProvider {
    fn name(&self) -> &str {
        "config"
    }

    fn for_country(&self, country: CountryCode) -> Option<Arc<CountryStructure>> {
        self.structures
            .iter()
            .rev()
            .find(|s| s.country() == country)
            .cloned()
    }

    fn supported_countries(&self) -> BTreeSet<CountryCode> {
        self.structures.iter().map(|s| s.country()).collect()
    }
}
