//! IbanBuilder - assemble an IBAN from its fields

use std::collections::HashMap;

use ibankit_checksum::{mod97, NationalCheckDigit};
use ibankit_core::{Bban, CountryCode, EntryType, FormatViolation, IbanResult};
use ibankit_registry::IbanRegistry;
use rand::Rng;

use crate::iban::Iban;
use crate::random::Generator;

/// Builder for [`Iban`].
///
/// ```
/// use ibankit::{CountryCode, IbanBuilder};
///
/// let iban = IbanBuilder::new()
///     .country_code(CountryCode::AT)
///     .bank_code("19043")
///     .account_number("00234573201")
///     .build()
///     .unwrap();
/// assert_eq!(iban.to_string(), "AT611904300234573201");
/// ```
#[derive(Debug, Clone)]
pub struct IbanBuilder<'r> {
    registry: &'r IbanRegistry,
    country: Option<CountryCode>,
    fields: HashMap<EntryType, String>,
    left_padding: bool,
    padding_character: char,
}

impl Default for IbanBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl IbanBuilder<'static> {
    /// Builder over the process-wide registry
    pub fn new() -> Self {
        Self::with_registry(ibankit_registry::global())
    }
}

impl<'r> IbanBuilder<'r> {
    pub fn with_registry(registry: &'r IbanRegistry) -> Self {
        Self {
            registry,
            country: None,
            fields: HashMap::new(),
            left_padding: true,
            padding_character: '0',
        }
    }

    pub fn country_code(mut self, country: CountryCode) -> Self {
        self.country = Some(country);
        self
    }

    /// Set any field by entry type
    pub fn field(mut self, entry_type: EntryType, value: impl Into<String>) -> Self {
        self.fields.insert(entry_type, value.into());
        self
    }

    pub fn bank_code(self, value: impl Into<String>) -> Self {
        self.field(EntryType::BankCode, value)
    }

    pub fn branch_code(self, value: impl Into<String>) -> Self {
        self.field(EntryType::BranchCode, value)
    }

    pub fn account_number(self, value: impl Into<String>) -> Self {
        self.field(EntryType::AccountNumber, value)
    }

    pub fn national_check_digit(self, value: impl Into<String>) -> Self {
        self.field(EntryType::NationalCheckDigit, value)
    }

    pub fn account_type(self, value: impl Into<String>) -> Self {
        self.field(EntryType::AccountType, value)
    }

    pub fn owner_account_type(self, value: impl Into<String>) -> Self {
        self.field(EntryType::OwnerAccountNumber, value)
    }

    pub fn identification_number(self, value: impl Into<String>) -> Self {
        self.field(EntryType::IdentificationNumber, value)
    }

    /// Pad short field values on the left up to the field length (default on)
    pub fn left_padding(mut self, enabled: bool) -> Self {
        self.left_padding = enabled;
        self
    }

    /// Character used for padding (default `'0'`)
    pub fn padding_character(mut self, padding: char) -> Self {
        self.padding_character = padding;
        self
    }

    /// Build and run the national check when the country has one
    pub fn build(self) -> IbanResult<Iban> {
        let registry = self.registry;
        let iban = self.build_unvalidated()?;
        if let Some(algorithm) = registry.algorithm(iban.country_code()) {
            algorithm.check(iban.bban())?;
        }
        Ok(iban)
    }

    /// Build with structural checks only; the national check digit is
    /// taken as given
    pub fn build_unvalidated(self) -> IbanResult<Iban> {
        let country = self.country.ok_or(FormatViolation::CountryCodeRequired)?;
        let structure = self.registry.resolve(country.alpha2())?;
        let fields = self.padded_fields(country)?;
        let bban = Bban::from_fields(structure, |entry| fields.get(&entry).map(String::as_str))?;
        let check_digit = mod97::calculate_check_digit(country.alpha2(), bban.as_str())?;
        Ok(Iban::from_parts(check_digit, bban))
    }

    /// Build, generating every unset field from the thread-local generator
    pub fn build_random(self) -> IbanResult<Iban> {
        self.build_random_with(&mut rand::thread_rng())
    }

    /// Build, generating every unset field from `rng`
    pub fn build_random_with<R: Rng + ?Sized>(self, rng: &mut R) -> IbanResult<Iban> {
        let country = match self.country {
            Some(country) => country,
            None => return Generator::with_registry(self.registry).generate_any(rng),
        };
        let fields = self.padded_fields(country)?;
        Generator::with_registry(self.registry).generate_with_fields(country, &fields, rng)
    }

    fn padded_fields(&self, country: CountryCode) -> IbanResult<HashMap<EntryType, String>> {
        if !self.left_padding {
            return Ok(self.fields.clone());
        }
        let structure = self.registry.resolve(country.alpha2())?;
        Ok(self
            .fields
            .iter()
            .map(|(entry, value)| {
                let length = structure.field(*entry).map_or(0, |f| f.length);
                (*entry, self.pad(value, length))
            })
            .collect())
    }

    fn pad(&self, value: &str, length: usize) -> String {
        let current = value.chars().count();
        if current >= length {
            return value.to_string();
        }
        let mut padded: String = std::iter::repeat(self.padding_character)
            .take(length - current)
            .collect();
        padded.push_str(value);
        padded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ibankit_core::IbanError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn registry() -> IbanRegistry {
        IbanRegistry::with_builtins()
    }

    #[test]
    fn test_build_austria() {
        let registry = registry();
        let iban = IbanBuilder::with_registry(&registry)
            .country_code(CountryCode::AT)
            .bank_code("19043")
            .account_number("00234573201")
            .build()
            .unwrap();
        assert_eq!(iban.as_str(), "AT611904300234573201");
    }

    #[test]
    fn test_left_padding() {
        let registry = registry();
        let iban = IbanBuilder::with_registry(&registry)
            .country_code(CountryCode::AT)
            .bank_code("19043")
            .account_number("234573201")
            .build()
            .unwrap();
        assert_eq!(iban.account_number(), Some("00234573201"));

        let err = IbanBuilder::with_registry(&registry)
            .country_code(CountryCode::AT)
            .bank_code("19043")
            .account_number("234573201")
            .left_padding(false)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            FormatViolation::FieldLength {
                entry: EntryType::AccountNumber,
                expected: 11,
                actual: 9
            }
            .into()
        );
    }

    #[test]
    fn test_padding_character() {
        let registry = registry();
        let iban = IbanBuilder::with_registry(&registry)
            .country_code(CountryCode::GB)
            .bank_code("NWBK")
            .branch_code("601613")
            .account_number("1926819")
            .padding_character('3')
            .build()
            .unwrap();
        assert_eq!(iban.account_number(), Some("31926819"));
        assert_eq!(iban.as_str(), "GB29NWBK60161331926819");
    }

    #[test]
    fn test_required_fields() {
        let registry = registry();
        let err = IbanBuilder::with_registry(&registry).build().unwrap_err();
        assert_eq!(err, FormatViolation::CountryCodeRequired.into());

        let err = IbanBuilder::with_registry(&registry)
            .country_code(CountryCode::DE)
            .account_number("0532013000")
            .build()
            .unwrap_err();
        assert_eq!(err, FormatViolation::BankCodeRequired.into());

        let err = IbanBuilder::with_registry(&registry)
            .country_code(CountryCode::DE)
            .bank_code("37040044")
            .build()
            .unwrap_err();
        assert_eq!(err, FormatViolation::AccountNumberRequired.into());
    }

    #[test]
    fn test_unsupported_country() {
        let registry = registry();
        let err = IbanBuilder::with_registry(&registry)
            .country_code(CountryCode::US)
            .bank_code("1")
            .build()
            .unwrap_err();
        assert_eq!(err, IbanError::UnsupportedCountry("US".to_string()));
    }

    #[test]
    fn test_build_checks_national_digit() {
        let registry = registry();
        let builder = IbanBuilder::with_registry(&registry)
            .country_code(CountryCode::BE)
            .bank_code("539")
            .account_number("0075470")
            .national_check_digit("35");
        assert!(builder.clone().build().unwrap_err().is_national_check_digit_error());

        let iban = builder.build_unvalidated().unwrap();
        assert_eq!(iban.national_check_digit(), Some("35"));
    }

    #[test]
    fn test_build_random_keeps_supplied() {
        let registry = registry();
        let iban = IbanBuilder::with_registry(&registry)
            .country_code(CountryCode::ES)
            .bank_code("2100")
            .build_random_with(&mut StdRng::seed_from_u64(21))
            .unwrap();
        assert_eq!(iban.bank_code(), Some("2100"));
        assert!(registry.algorithms().check(iban.bban()).is_ok());
    }

    #[test]
    fn test_build_random_without_country() {
        let registry = registry();
        let iban = IbanBuilder::with_registry(&registry)
            .build_random_with(&mut StdRng::seed_from_u64(4))
            .unwrap();
        assert!(registry.is_supported(iban.country_code()));
    }
}
