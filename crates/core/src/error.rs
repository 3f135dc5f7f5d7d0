//! Error taxonomy for IBAN handling

use crate::country::CountryCode;
use crate::structure::{CharacterClass, EntryType};
use thiserror::Error;

/// Kinds of format violation, with the offending data attached
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatViolation {
    #[error("Input must not be empty")]
    Empty,

    #[error("Country code must be two letters, got '{0}'")]
    CountryCodeTwoLetters(String),

    #[error("Country code must contain upper case letters only, got '{0}'")]
    CountryCodeUpperCase(String),

    #[error("Check digit must be two digits, got '{0}'")]
    CheckDigitTwoDigits(String),

    #[error("BBAN length mismatch: expected {expected}, actual {actual}")]
    BbanLength { expected: usize, actual: usize },

    #[error("Length mismatch for {entry}: expected {expected}, actual {actual}")]
    FieldLength {
        entry: EntryType,
        expected: usize,
        actual: usize,
    },

    #[error("Field {entry} must contain only {class}, found '{character}' at position {position}")]
    CharacterClass {
        entry: EntryType,
        class: CharacterClass,
        character: char,
        position: usize,
    },

    #[error("Invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Input is not formatted in space separated groups of four: '{0}'")]
    Formatting(String),

    #[error("Country code is required")]
    CountryCodeRequired,

    #[error("Bank code is required")]
    BankCodeRequired,

    #[error("Account number is required")]
    AccountNumberRequired,
}

/// Errors raised while validating, parsing or building an IBAN
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IbanError {
    #[error("Invalid format: {0}")]
    Format(#[from] FormatViolation),

    #[error("Invalid check digit: actual {actual}, expected {expected}")]
    CheckDigit { actual: String, expected: String },

    #[error("Invalid national check digit for {country}: actual {actual}, expected {expected}")]
    NationalCheckDigit {
        country: CountryCode,
        actual: String,
        expected: String,
    },

    #[error("Unsupported country: {0}")]
    UnsupportedCountry(String),
}

/// Result type for IBAN operations
pub type IbanResult<T> = Result<T, IbanError>;

impl IbanError {
    pub fn is_format_error(&self) -> bool {
        matches!(self, IbanError::Format(_))
    }

    pub fn is_check_digit_error(&self) -> bool {
        matches!(self, IbanError::CheckDigit { .. })
    }

    pub fn is_national_check_digit_error(&self) -> bool {
        matches!(self, IbanError::NationalCheckDigit { .. })
    }

    pub fn is_unsupported_country(&self) -> bool {
        matches!(self, IbanError::UnsupportedCountry(_))
    }

    /// The format violation, if this is a format error
    pub fn format_violation(&self) -> Option<&FormatViolation> {
        match self {
            IbanError::Format(v) => Some(v),
            _ => None,
        }
    }
}

/// Errors from the structure format notation and structure construction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructureSyntaxError {
    #[error("Structure format is empty")]
    Empty,

    #[error("Invalid token at position {position}: {reason}")]
    InvalidToken {
        position: usize,
        reason: &'static str,
    },

    #[error("Variable length token '{0}' cannot describe a BBAN field")]
    VariableLength(String),

    #[error("Blank token '{0}' cannot describe a BBAN field")]
    BlankField(String),

    #[error("Entry count mismatch: {entries} entry types for {tokens} format tokens")]
    EntryCountMismatch { entries: usize, tokens: usize },

    #[error("Entry type {0} appears more than once")]
    DuplicateEntry(EntryType),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_digit_error_display() {
        let err = IbanError::CheckDigit {
            actual: "62".to_string(),
            expected: "61".to_string(),
        };
        assert!(err.is_check_digit_error());
        assert_eq!(err.to_string(), "Invalid check digit: actual 62, expected 61");
    }

    #[test]
    fn test_format_violation_conversion() {
        let err: IbanError = FormatViolation::BbanLength {
            expected: 16,
            actual: 15,
        }
        .into();
        assert!(err.is_format_error());
        assert_eq!(
            err.format_violation(),
            Some(&FormatViolation::BbanLength {
                expected: 16,
                actual: 15
            })
        );
        assert!(err.to_string().contains("expected 16, actual 15"));
    }

    #[test]
    fn test_character_class_message() {
        let violation = FormatViolation::CharacterClass {
            entry: EntryType::BankCode,
            class: CharacterClass::Numeric,
            character: 'X',
            position: 2,
        };
        assert_eq!(
            violation.to_string(),
            "Field bank_code must contain only digits, found 'X' at position 2"
        );
    }

    #[test]
    fn test_messages_start_capitalized() {
        let messages = [
            FormatViolation::Empty.to_string(),
            IbanError::UnsupportedCountry("ZZ".to_string()).to_string(),
            FormatViolation::BbanLength { expected: 16, actual: 15 }.to_string(),
        ];
        for message in messages {
            assert!(message.starts_with(char::is_uppercase), "{message}");
        }
    }

    #[test]
    fn test_error_kind_predicates() {
        let err = IbanError::UnsupportedCountry("ZZ".to_string());
        assert!(err.is_unsupported_country());
        assert!(!err.is_format_error());

        let err = IbanError::NationalCheckDigit {
            country: CountryCode::ES,
            actual: "45".to_string(),
            expected: "95".to_string(),
        };
        assert!(err.is_national_check_digit_error());
        assert!(err.to_string().contains("ES"));
    }
}
