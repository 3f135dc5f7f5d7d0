//! IbanRegistry - structures and national algorithms behind one handle

use std::collections::BTreeSet;
use std::sync::Arc;

use ibankit_checksum::{NationalAlgorithm, NationalAlgorithmRegistry};
use ibankit_core::{CountryCode, CountryStructure, IbanResult};

use crate::provider::{AlgorithmProvider, BuiltinAlgorithms, BuiltinStructures, StructureProvider};
use crate::structures::StructureRegistry;

/// Country structures plus national check digit algorithms.
///
/// Owned and mutable; share it behind an `Arc` or install it as the
/// process-wide default with [`install`](crate::install).
#[derive(Debug, Clone, Default)]
pub struct IbanRegistry {
    structures: StructureRegistry,
    algorithms: NationalAlgorithmRegistry,
}

impl IbanRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in structure and algorithm
    pub fn with_builtins() -> Self {
        Self {
            structures: StructureRegistry::with_builtins(),
            algorithms: NationalAlgorithmRegistry::with_builtins(),
        }
    }

    /// Start a builder seeded with the built-ins
    pub fn builder() -> IbanRegistryBuilder {
        IbanRegistryBuilder::new()
    }

    pub fn structures(&self) -> &StructureRegistry {
        &self.structures
    }

    pub fn structures_mut(&mut self) -> &mut StructureRegistry {
        &mut self.structures
    }

    pub fn algorithms(&self) -> &NationalAlgorithmRegistry {
        &self.algorithms
    }

    pub fn algorithms_mut(&mut self) -> &mut NationalAlgorithmRegistry {
        &mut self.algorithms
    }

    /// Register a structure; last registration for a country wins
    pub fn register_structure(
        &mut self,
        structure: impl Into<Arc<CountryStructure>>,
    ) -> Option<Arc<CountryStructure>> {
        self.structures.register(structure)
    }

    /// Register an algorithm; last registration for a country wins
    pub fn register_algorithm(
        &mut self,
        country: CountryCode,
        algorithm: NationalAlgorithm,
    ) -> Option<NationalAlgorithm> {
        self.algorithms.register(country, algorithm)
    }

    /// Copy every structure a provider offers into the registry
    pub fn apply_structure_provider(&mut self, provider: &dyn StructureProvider) -> usize {
        let mut applied = 0;
        for country in provider.supported_countries() {
            if let Some(structure) = provider.for_country(country) {
                self.structures.register(structure);
                applied += 1;
            }
        }
        tracing::debug!(provider = provider.name(), applied, "Applied structure provider");
        applied
    }

    /// Copy every algorithm a provider offers into the registry
    pub fn apply_algorithm_provider(&mut self, provider: &dyn AlgorithmProvider) -> usize {
        let mut applied = 0;
        for country in provider.supported_countries() {
            if let Some(algorithm) = provider.for_country(country) {
                self.algorithms.register(country, algorithm);
                applied += 1;
            }
        }
        tracing::debug!(provider = provider.name(), applied, "Applied algorithm provider");
        applied
    }

    pub fn structure(&self, country: CountryCode) -> Option<&Arc<CountryStructure>> {
        self.structures.get(country)
    }

    pub fn algorithm(&self, country: CountryCode) -> Option<&NationalAlgorithm> {
        self.algorithms.get(country)
    }

    /// Structure for a raw two-letter code, or `UnsupportedCountry`
    pub fn resolve(&self, code: &str) -> IbanResult<Arc<CountryStructure>> {
        self.structures.resolve(code)
    }

    /// Whether the country has a structure
    pub fn is_supported(&self, country: CountryCode) -> bool {
        self.structures.is_supported(country)
    }

    /// Countries with a structure, sorted
    pub fn supported_countries(&self) -> BTreeSet<CountryCode> {
        self.structures.supported_countries()
    }
}

/// Builds an [`IbanRegistry`] from providers applied in order
pub struct IbanRegistryBuilder {
    builtins: bool,
    structure_providers: Vec<Arc<dyn StructureProvider>>,
    algorithm_providers: Vec<Arc<dyn AlgorithmProvider>>,
}

impl Default for IbanRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl IbanRegistryBuilder {
    pub fn new() -> Self {
        Self {
            builtins: true,
            structure_providers: Vec::new(),
            algorithm_providers: Vec::new(),
        }
    }

    /// Start from an empty registry instead of the built-ins
    pub fn without_builtins(mut self) -> Self {
        self.builtins = false;
        self
    }

    /// Add a structure provider; it overrides providers added before it
    pub fn structure_provider(mut self, provider: Arc<dyn StructureProvider>) -> Self {
        self.structure_providers.push(provider);
        self
    }

    /// Add an algorithm provider; it overrides providers added before it
    pub fn algorithm_provider(mut self, provider: Arc<dyn AlgorithmProvider>) -> Self {
        self.algorithm_providers.push(provider);
        self
    }

    pub fn build(self) -> IbanRegistry {
        let mut registry = IbanRegistry::new();
        if self.builtins {
            registry.apply_structure_provider(&BuiltinStructures);
            registry.apply_algorithm_provider(&BuiltinAlgorithms);
        }
        for provider in &self.structure_providers {
            registry.apply_structure_provider(provider.as_ref());
        }
        for provider in &self.algorithm_providers {
            registry.apply_algorithm_provider(provider.as_ref());
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{StaticAlgorithms, StaticStructures};
    use ibankit_core::{CharacterClass, FieldDescriptor};

    fn short_austria() -> CountryStructure {
        CountryStructure::new(
            CountryCode::AT,
            vec![
                FieldDescriptor::bank_code(5, CharacterClass::Numeric),
                FieldDescriptor::account_number(10, CharacterClass::Numeric),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_builder_defaults_to_builtins() {
        let registry = IbanRegistry::builder().build();
        assert_eq!(registry.supported_countries().len(), 90);
        assert_eq!(registry.algorithms().len(), 15);
    }

    #[test]
    fn test_builder_without_builtins() {
        let registry = IbanRegistry::builder().without_builtins().build();
        assert!(registry.supported_countries().is_empty());
        assert!(registry.resolve("AT").is_err());
    }

    #[test]
    fn test_later_provider_wins() {
        let first = StaticStructures::new("first").with_structure(short_austria());
        let second = StaticStructures::new("second")
            .with_structure(crate::table::builtin_structure(CountryCode::AT).unwrap());

        let registry = IbanRegistry::builder()
            .structure_provider(Arc::new(first.clone()))
            .structure_provider(Arc::new(second.clone()))
            .build();
        assert_eq!(registry.structure(CountryCode::AT).unwrap().bban_length(), 16);

        let registry = IbanRegistry::builder()
            .structure_provider(Arc::new(second))
            .structure_provider(Arc::new(first))
            .build();
        assert_eq!(registry.structure(CountryCode::AT).unwrap().bban_length(), 15);
    }

    #[test]
    fn test_algorithm_provider_overrides_builtin() {
        let provider =
            StaticAlgorithms::new("custom").with_algorithm(CountryCode::BE, NationalAlgorithm::Iso7064);
        let registry = IbanRegistry::builder()
            .algorithm_provider(Arc::new(provider))
            .build();
        assert!(matches!(
            registry.algorithm(CountryCode::BE),
            Some(NationalAlgorithm::Iso7064)
        ));
    }

    #[test]
    fn test_register_structure_returns_previous() {
        let mut registry = IbanRegistry::with_builtins();
        let previous = registry.register_structure(short_austria());
        assert_eq!(previous.unwrap().bban_length(), 16);
        assert_eq!(registry.resolve("AT").unwrap().bban_length(), 15);
    }

    #[test]
    fn test_apply_provider_counts() {
        let mut registry = IbanRegistry::new();
        assert_eq!(registry.apply_structure_provider(&BuiltinStructures), 90);
        assert_eq!(registry.apply_algorithm_provider(&BuiltinAlgorithms), 15);
        assert!(registry.is_supported(CountryCode::GB));
        assert!(registry.algorithm(CountryCode::GB).is_none());
    }
}
