//! Provider traits - explicit registration points for structures and
//! national algorithms
//!
//! Providers are applied in the order they are handed to
//! [`IbanRegistryBuilder`](crate::IbanRegistryBuilder); a later provider
//! overrides an earlier one for the same country.

use std::collections::BTreeSet;
use std::sync::Arc;

use ibankit_checksum::NationalAlgorithm;
use ibankit_core::{CountryCode, CountryStructure};

use crate::table;

/// Source of country structures
pub trait StructureProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &str;

    fn supports_country(&self, country: CountryCode) -> bool {
        self.for_country(country).is_some()
    }

    fn for_country(&self, country: CountryCode) -> Option<Arc<CountryStructure>>;

    fn supported_countries(&self) -> BTreeSet<CountryCode>;
}

/// Source of national check digit algorithms
pub trait AlgorithmProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &str;

    fn supports_country(&self, country: CountryCode) -> bool {
        self.for_country(country).is_some()
    }

    fn for_country(&self, country: CountryCode) -> Option<NationalAlgorithm>;

    fn supported_countries(&self) -> BTreeSet<CountryCode>;
}

/// The compiled-in structure table
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinStructures;

impl StructureProvider for BuiltinStructures {
    fn name(&self) -> &str {
        "builtin-structures"
    }

    fn for_country(&self, country: CountryCode) -> Option<Arc<CountryStructure>> {
        table::builtin_structure(country)
    }

    fn supported_countries(&self) -> BTreeSet<CountryCode> {
        table::builtin_countries().collect()
    }
}

/// The 15 compiled-in national schemes
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinAlgorithms;

impl AlgorithmProvider for BuiltinAlgorithms {
    fn name(&self) -> &str {
        "builtin-algorithms"
    }

    fn for_country(&self, country: CountryCode) -> Option<NationalAlgorithm> {
        NationalAlgorithm::for_country(country)
    }

    fn supported_countries(&self) -> BTreeSet<CountryCode> {
        NationalAlgorithm::BUILTIN_COUNTRIES.into_iter().collect()
    }
}

/// A fixed set of structures supplied by the caller
#[derive(Debug, Clone, Default)]
pub struct StaticStructures {
    name: String,
    structures: Vec<Arc<CountryStructure>>,
}

impl StaticStructures {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            structures: Vec::new(),
        }
    }

    /// Add a structure; a later one for the same country shadows earlier ones
    pub fn with_structure(mut self, structure: impl Into<Arc<CountryStructure>>) -> Self {
        self.structures.push(structure.into());
        self
    }

    pub fn len(&self) -> usize {
        self.structures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }
}

impl StructureProvider for StaticStructures {
    fn name(&self) -> &str {
        &self.name
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

/// A fixed set of algorithms supplied by the caller
#[derive(Debug, Clone, Default)]
pub struct StaticAlgorithms {
    name: String,
    algorithms: Vec<(CountryCode, NationalAlgorithm)>,
}

impl StaticAlgorithms {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            algorithms: Vec::new(),
        }
    }

    pub fn with_algorithm(mut self, country: CountryCode, algorithm: NationalAlgorithm) -> Self {
        self.algorithms.push((country, algorithm));
        self
    }
}

impl AlgorithmProvider for StaticAlgorithms {
    fn name(&self) -> &str {
        &self.name
    }

    fn for_country(&self, country: CountryCode) -> Option<NationalAlgorithm> {
        self.algorithms
            .iter()
            .rev()
            .find(|(code, _)| *code == country)
            .map(|(_, algorithm)| algorithm.clone())
    }

    fn supported_countries(&self) -> BTreeSet<CountryCode> {
        self.algorithms.iter().map(|(code, _)| *code).collect()
    }
}
