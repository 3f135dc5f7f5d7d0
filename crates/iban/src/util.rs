//! Free functions over raw IBAN strings, backed by the process-wide registry

use ibankit_core::{CountryCode, EntryType, IbanError, IbanResult};
use ibankit_registry::global;

use crate::format::IbanFormat;
use crate::pipeline::Validator;

/// Validate a compact IBAN: structure and MOD-97 check digit
pub fn validate(iban: &str) -> IbanResult<()> {
    Validator::new().validate(iban).map(|_| ())
}

/// Validate an IBAN written in `format`
pub fn validate_with_format(iban: &str, format: IbanFormat) -> IbanResult<()> {
    Validator::new().format(format).validate(iban).map(|_| ())
}

/// Validate including the national check digit, where the country has one
pub fn validate_enhanced(iban: &str) -> IbanResult<()> {
    Validator::new().enhanced(true).validate(iban).map(|_| ())
}

/// Whether a compact IBAN is valid. Diagnostics are discarded.
pub fn is_valid(iban: &str) -> bool {
    validate(iban).is_ok()
}

/// Two-digit IBAN check digit for a country code and BBAN
pub fn calculate_check_digit(country_code: &str, bban: &str) -> IbanResult<String> {
    ibankit_checksum::calculate_check_digit(country_code, bban)
}

pub fn is_supported_country(country: CountryCode) -> bool {
    global().is_supported(country)
}

/// Expected IBAN length for a country
pub fn iban_length(country: CountryCode) -> Option<usize> {
    global().structure(country).map(|s| s.iban_length())
}

/// First two characters
pub fn country_code(iban: &str) -> Option<&str> {
    iban.get(..2)
}

/// Characters two and three
pub fn check_digit(iban: &str) -> Option<&str> {
    iban.get(2..4)
}

/// Everything after the check digit
pub fn bban(iban: &str) -> Option<&str> {
    iban.get(4..)
}

/// Slice one field out of an IBAN using its country's structure.
///
/// Only the country code is validated; `Ok(None)` means the country has no
/// such field or the input is too short to contain it.
pub fn field(iban: &str, entry_type: EntryType) -> IbanResult<Option<&str>> {
    let code = country_code(iban).ok_or_else(|| IbanError::UnsupportedCountry(iban.to_string()))?;
    let structure = global().resolve(code)?;
    Ok(bban(iban).and_then(|b| structure.extract(b, entry_type)))
}

pub fn bank_code(iban: &str) -> IbanResult<Option<&str>> {
    field(iban, EntryType::BankCode)
}

pub fn branch_code(iban: &str) -> IbanResult<Option<&str>> {
    field(iban, EntryType::BranchCode)
}

pub fn account_number(iban: &str) -> IbanResult<Option<&str>> {
    field(iban, EntryType::AccountNumber)
}

pub fn national_check_digit(iban: &str) -> IbanResult<Option<&str>> {
    field(iban, EntryType::NationalCheckDigit)
}

pub fn account_type(iban: &str) -> IbanResult<Option<&str>> {
    field(iban, EntryType::AccountType)
}

pub fn owner_account_type(iban: &str) -> IbanResult<Option<&str>> {
    field(iban, EntryType::OwnerAccountNumber)
}

pub fn identification_number(iban: &str) -> IbanResult<Option<&str>> {
    field(iban, EntryType::IdentificationNumber)
}

/// Compact IBAN rendered in groups of four
pub fn to_formatted_string(iban: &str) -> String {
    IbanFormat::Spaced.render(iban)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid() {
        assert!(is_valid("AT611904300234573201"));
        assert!(!is_valid("AT621904300234573201"));
        assert!(!is_valid(""));
    }

    #[test]
    fn test_validate_variants() {
        assert!(validate_with_format("AT61 1904 3002 3457 3201", IbanFormat::Spaced).is_ok());
        assert!(validate_enhanced("BE68539007547034").is_ok());
        assert!(validate_enhanced("NO9386011117947").is_ok());
    }

    #[test]
    fn test_slicing_helpers() {
        let iban = "DE89370400440532013000";
        assert_eq!(country_code(iban), Some("DE"));
        assert_eq!(check_digit(iban), Some("89"));
        assert_eq!(bban(iban), Some("370400440532013000"));
        assert_eq!(bank_code(iban).unwrap(), Some("37040044"));
        assert_eq!(account_number(iban).unwrap(), Some("0532013000"));
        assert_eq!(branch_code(iban).unwrap(), None);
    }

    #[test]
    fn test_field_helpers_need_known_country() {
        assert!(bank_code("ZZ00123").unwrap_err().is_unsupported_country());
        assert!(bank_code("Z").unwrap_err().is_unsupported_country());
        assert_eq!(bank_code("DE89370").unwrap(), None);
    }

    #[test]
    fn test_more_field_helpers() {
        assert_eq!(national_check_digit("IT60X0542811101000000123456").unwrap(), Some("X"));
        assert_eq!(account_type("BR1800360305000010009795493C1").unwrap(), Some("C"));
        assert_eq!(owner_account_type("BR1800360305000010009795493C1").unwrap(), Some("1"));
        assert_eq!(
            identification_number("IS140159260076545510730339").unwrap(),
            Some("5510730339")
        );
    }

    #[test]
    fn test_country_lookups() {
        assert!(is_supported_country(CountryCode::DE));
        assert!(!is_supported_country(CountryCode::US));
        assert_eq!(iban_length(CountryCode::DE), Some(22));
        assert_eq!(iban_length(CountryCode::US), None);
        assert_eq!(calculate_check_digit("AT", "1904300234573201").unwrap(), "61");
    }

    #[test]
    fn test_formatted() {
        assert_eq!(to_formatted_string("AT611904300234573201"), "AT61 1904 3002 3457 3201");
    }
}
