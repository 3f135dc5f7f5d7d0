//! National Algorithm Registry - country → check digit scheme

use std::collections::{BTreeSet, HashMap};

use ibankit_core::{Bban, CountryCode, IbanResult};

use crate::national::{NationalAlgorithm, NationalCheckDigit};

/// Registry mapping countries to their national check digit scheme.
///
/// Countries without an entry simply have no national check; that is not
/// an error. Registering a country again replaces the previous scheme.
#[derive(Debug, Clone, Default)]
pub struct NationalAlgorithmRegistry {
    algorithms: HashMap<CountryCode, NationalAlgorithm>,
}

impl NationalAlgorithmRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in scheme
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for country in NationalAlgorithm::BUILTIN_COUNTRIES {
            if let Some(algorithm) = NationalAlgorithm::for_country(country) {
                registry.algorithms.insert(country, algorithm);
            }
        }
        registry
    }

    /// Register a scheme for a country, returning the one it replaced
    pub fn register(
        &mut self,
        country: CountryCode,
        algorithm: NationalAlgorithm,
    ) -> Option<NationalAlgorithm> {
        let replaced = self.algorithms.insert(country, algorithm);
        if let Some(previous) = &replaced {
            tracing::debug!(
                country = %country,
                previous = previous.name(),
                "Replacing national check digit algorithm"
            );
        }
        replaced
    }

    /// Remove a country's scheme
    pub fn unregister(&mut self, country: CountryCode) -> Option<NationalAlgorithm> {
        self.algorithms.remove(&country)
    }

    pub fn get(&self, country: CountryCode) -> Option<&NationalAlgorithm> {
        self.algorithms.get(&country)
    }

    pub fn is_supported(&self, country: CountryCode) -> bool {
        self.algorithms.contains_key(&country)
    }

    /// Countries with a registered scheme, sorted
    pub fn supported_countries(&self) -> BTreeSet<CountryCode> {
        self.algorithms.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }

    /// Run the national check for a BBAN. Passes when no scheme is registered.
    pub fn check(&self, bban: &Bban) -> IbanResult<()> {
        match self.get(bban.country()) {
            Some(algorithm) => algorithm.check(bban),
            None => Ok(()),
        }
    }

    /// National check digit for a BBAN, if its country has a scheme that
    /// produces one
    pub fn calculate(&self, bban: &Bban) -> Option<String> {
        self.get(bban.country())?.calculate(bban)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::national::tests::bban;

    #[test]
    fn test_empty_registry() {
        let registry = NationalAlgorithmRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.is_supported(CountryCode::BE));
    }

    #[test]
    fn test_builtins() {
        let registry = NationalAlgorithmRegistry::with_builtins();
        assert_eq!(registry.len(), 15);
        assert!(registry.is_supported(CountryCode::ES));
        assert!(registry.is_supported(CountryCode::TN));
        assert!(!registry.is_supported(CountryCode::DE));
        assert!(registry.get(CountryCode::AT).is_none());
    }

    #[test]
    fn test_check_unsupported_country_passes() {
        let mut registry = NationalAlgorithmRegistry::with_builtins();
        registry.unregister(CountryCode::BE);
        let bban = bban(CountryCode::BE, "539007547099");
        assert!(registry.check(&bban).is_ok());
    }

    #[test]
    fn test_register_last_wins() {
        let mut registry = NationalAlgorithmRegistry::with_builtins();
        let previous = registry.register(CountryCode::BE, NationalAlgorithm::Iso7064);
        assert!(matches!(previous, Some(NationalAlgorithm::Belgium)));
        assert!(matches!(
            registry.get(CountryCode::BE),
            Some(NationalAlgorithm::Iso7064)
        ));
    }

    #[test]
    fn test_calculate() {
        let registry = NationalAlgorithmRegistry::with_builtins();
        let bban = bban(CountryCode::ES, "21000418450200051332");
        assert_eq!(registry.calculate(&bban).as_deref(), Some("45"));
        assert!(registry.check(&bban).is_ok());
    }

    #[test]
    fn test_supported_countries_sorted() {
        let registry = NationalAlgorithmRegistry::with_builtins();
        let countries: Vec<_> = registry.supported_countries().into_iter().collect();
        assert_eq!(countries.first(), Some(&CountryCode::BA));
        assert_eq!(countries.last(), Some(&CountryCode::TN));
    }
}
