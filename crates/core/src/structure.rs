//! BBAN structure - positional field layout of a national account number
//!
//! A `CountryStructure` is an ordered list of fixed-length fields. Field
//! order defines the exact string layout; there are no delimiters.

use crate::country::CountryCode;
use crate::dsl::{parse_structure_format, FormatClass, FormatToken};
use crate::error::StructureSyntaxError;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumString};

/// Role of a BBAN field
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum EntryType {
    BankCode,
    BranchCode,
    AccountNumber,
    NationalCheckDigit,
    AccountType,
    OwnerAccountNumber,
    IdentificationNumber,
}

/// Characters a field may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterClass {
    /// 0-9
    Numeric,
    /// A-Z
    UpperAlpha,
    /// A-Z and 0-9
    Alphanumeric,
}

impl CharacterClass {
    /// Whether `c` belongs to this class
    #[inline]
    pub fn accepts(&self, c: char) -> bool {
        match self {
            CharacterClass::Numeric => c.is_ascii_digit(),
            CharacterClass::UpperAlpha => c.is_ascii_uppercase(),
            CharacterClass::Alphanumeric => c.is_ascii_digit() || c.is_ascii_uppercase(),
        }
    }

    /// Alphabet used when generating values of this class
    pub fn alphabet(&self) -> &'static [u8] {
        match self {
            CharacterClass::Numeric => b"0123456789",
            CharacterClass::UpperAlpha => b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Alphanumeric => b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ",
        }
    }

    /// Single-letter code used by the structure format (`n`, `a`, `c`)
    pub fn code(&self) -> char {
        match self {
            CharacterClass::Numeric => 'n',
            CharacterClass::UpperAlpha => 'a',
            CharacterClass::Alphanumeric => 'c',
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CharacterClass::Numeric => "digits",
            CharacterClass::UpperAlpha => "upper case letters",
            CharacterClass::Alphanumeric => "digits or upper case letters",
        };
        f.write_str(label)
    }
}

/// One positional field in a BBAN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub entry_type: EntryType,
    pub character_class: CharacterClass,
    pub length: usize,
}

impl FieldDescriptor {
    pub const fn new(entry_type: EntryType, character_class: CharacterClass, length: usize) -> Self {
        Self {
            entry_type,
            character_class,
            length,
        }
    }

    pub const fn bank_code(length: usize, class: CharacterClass) -> Self {
        Self::new(EntryType::BankCode, class, length)
    }

    pub const fn branch_code(length: usize, class: CharacterClass) -> Self {
        Self::new(EntryType::BranchCode, class, length)
    }

    pub const fn account_number(length: usize, class: CharacterClass) -> Self {
        Self::new(EntryType::AccountNumber, class, length)
    }

    pub const fn national_check_digit(length: usize, class: CharacterClass) -> Self {
        Self::new(EntryType::NationalCheckDigit, class, length)
    }

    pub const fn account_type(length: usize, class: CharacterClass) -> Self {
        Self::new(EntryType::AccountType, class, length)
    }

    pub const fn owner_account_number(length: usize, class: CharacterClass) -> Self {
        Self::new(EntryType::OwnerAccountNumber, class, length)
    }

    pub const fn identification_number(length: usize, class: CharacterClass) -> Self {
        Self::new(EntryType::IdentificationNumber, class, length)
    }
}

/// Field layout of one country's BBAN.
///
/// # Invariants
/// - at most one field per `EntryType`
/// - `bban_length()` is the sum of all field lengths
///
/// # Example
/// ```
/// use ibankit_core::{CharacterClass::Numeric, CountryCode, CountryStructure, FieldDescriptor};
///
/// let at = CountryStructure::new(
///     CountryCode::AT,
///     vec![
///         FieldDescriptor::bank_code(5, Numeric),
///         FieldDescriptor::account_number(11, Numeric),
///     ],
/// )
/// .unwrap();
/// assert_eq!(at.bban_length(), 16);
/// assert_eq!(at.format_string(), "5!n11!n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStructure")]
pub struct CountryStructure {
    country: CountryCode,
    fields: Vec<FieldDescriptor>,
}

/// Unchecked serde form of `CountryStructure`
#[derive(Deserialize)]
struct RawStructure {
    country: CountryCode,
    fields: Vec<FieldDescriptor>,
}

impl TryFrom<RawStructure> for CountryStructure {
    type Error = StructureSyntaxError;

    fn try_from(raw: RawStructure) -> Result<Self, Self::Error> {
        Self::new(raw.country, raw.fields)
    }
}

impl CountryStructure {
    /// Create a structure, rejecting duplicate entry types
    pub fn new(
        country: CountryCode,
        fields: Vec<FieldDescriptor>,
    ) -> Result<Self, StructureSyntaxError> {
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.entry_type == field.entry_type) {
                return Err(StructureSyntaxError::DuplicateEntry(field.entry_type));
            }
        }
        Ok(Self { country, fields })
    }

    /// Build a structure from entry types paired with a format string such
    /// as `"4!n4!n2!n10!n"`.
    ///
    /// Only fixed-length tokens of class `n`, `a` or `c` can become fields.
    pub fn from_format(
        country: CountryCode,
        entries: &[EntryType],
        format: &str,
    ) -> Result<Self, StructureSyntaxError> {
        let tokens = parse_structure_format(format)?;
        if tokens.len() != entries.len() {
            return Err(StructureSyntaxError::EntryCountMismatch {
                entries: entries.len(),
                tokens: tokens.len(),
            });
        }

        let fields = entries
            .iter()
            .zip(tokens)
            .map(|(entry, token)| field_from_token(*entry, token))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(country, fields)
    }

    #[inline]
    pub fn country(&self) -> CountryCode {
        self.country
    }

    #[inline]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Total BBAN length
    pub fn bban_length(&self) -> usize {
        self.fields.iter().map(|f| f.length).sum()
    }

    /// Total IBAN length (country code + check digit + BBAN)
    pub fn iban_length(&self) -> usize {
        self.bban_length() + 4
    }

    /// Descriptor for an entry type, if the country has that field
    pub fn field(&self, entry_type: EntryType) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.entry_type == entry_type)
    }

    pub fn has_field(&self, entry_type: EntryType) -> bool {
        self.field(entry_type).is_some()
    }

    /// Byte range of a field inside the BBAN
    pub fn field_range(&self, entry_type: EntryType) -> Option<std::ops::Range<usize>> {
        let mut offset = 0;
        for field in &self.fields {
            if field.entry_type == entry_type {
                return Some(offset..offset + field.length);
            }
            offset += field.length;
        }
        None
    }

    /// Fields paired with their byte offset inside the BBAN
    pub fn positioned_fields(&self) -> impl Iterator<Item = (usize, &FieldDescriptor)> {
        self.fields.iter().scan(0, |offset, field| {
            let start = *offset;
            *offset += field.length;
            Some((start, field))
        })
    }

    /// Extract a field from a BBAN string by position.
    ///
    /// Returns `None` if the structure has no such field or the string is
    /// too short to contain it.
    pub fn extract<'a>(&self, bban: &'a str, entry_type: EntryType) -> Option<&'a str> {
        let range = self.field_range(entry_type)?;
        bban.get(range)
    }

    /// Render the structure in the legacy format notation
    pub fn format_string(&self) -> String {
        self.fields
            .iter()
            .map(|f| format!("{}!{}", f.length, f.character_class.code()))
            .collect()
    }
}

fn field_from_token(
    entry_type: EntryType,
    token: FormatToken,
) -> Result<FieldDescriptor, StructureSyntaxError> {
    if !token.fixed {
        return Err(StructureSyntaxError::VariableLength(token.to_string()));
    }
    let class = match token.class {
        FormatClass::Numeric => CharacterClass::Numeric,
        FormatClass::UpperAlpha => CharacterClass::UpperAlpha,
        FormatClass::Alphanumeric => CharacterClass::Alphanumeric,
        FormatClass::Blank => return Err(StructureSyntaxError::BlankField(token.to_string())),
    };
    Ok(FieldDescriptor::new(entry_type, class, token.length))
}

#[cfg(test)]
mod tests {
    use super::*;
    use CharacterClass::*;

    fn spain() -> CountryStructure {
        CountryStructure::new(
            CountryCode::ES,
            vec![
                FieldDescriptor::bank_code(4, Numeric),
                FieldDescriptor::branch_code(4, Numeric),
                FieldDescriptor::national_check_digit(2, Numeric),
                FieldDescriptor::account_number(10, Numeric),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_lengths() {
        let es = spain();
        assert_eq!(es.bban_length(), 20);
        assert_eq!(es.iban_length(), 24);
    }

    #[test]
    fn test_field_range_and_extract() {
        let es = spain();
        assert_eq!(es.field_range(EntryType::NationalCheckDigit), Some(8..10));
        let bban = "21000418450200051332";
        assert_eq!(es.extract(bban, EntryType::BranchCode), Some("0418"));
        assert_eq!(es.extract(bban, EntryType::AccountNumber), Some("0200051332"));
        assert_eq!(es.extract(bban, EntryType::AccountType), None);
        assert_eq!(es.extract("2100", EntryType::AccountNumber), None);
    }

    #[test]
    fn test_duplicate_entry_rejected() {
        let result = CountryStructure::new(
            CountryCode::DE,
            vec![
                FieldDescriptor::bank_code(8, Numeric),
                FieldDescriptor::bank_code(10, Numeric),
            ],
        );
        assert_eq!(
            result,
            Err(StructureSyntaxError::DuplicateEntry(EntryType::BankCode))
        );
    }

    #[test]
    fn test_from_format() {
        let es = CountryStructure::from_format(
            CountryCode::ES,
            &[
                EntryType::BankCode,
                EntryType::BranchCode,
                EntryType::NationalCheckDigit,
                EntryType::AccountNumber,
            ],
            "4!n4!n2!n10!n",
        )
        .unwrap();
        assert_eq!(es, spain());
        assert_eq!(es.format_string(), "4!n4!n2!n10!n");
    }

    #[test]
    fn test_from_format_rejects_variable_and_blank() {
        let variable =
            CountryStructure::from_format(CountryCode::DE, &[EntryType::BankCode], "8n");
        assert!(matches!(variable, Err(StructureSyntaxError::VariableLength(_))));

        let blank = CountryStructure::from_format(CountryCode::DE, &[EntryType::BankCode], "8!e");
        assert!(matches!(blank, Err(StructureSyntaxError::BlankField(_))));
    }

    #[test]
    fn test_from_format_entry_count_mismatch() {
        let result = CountryStructure::from_format(
            CountryCode::AT,
            &[EntryType::BankCode],
            "5!n11!n",
        );
        assert_eq!(
            result,
            Err(StructureSyntaxError::EntryCountMismatch {
                entries: 1,
                tokens: 2
            })
        );
    }

    #[test]
    fn test_character_class_accepts() {
        assert!(Numeric.accepts('7'));
        assert!(!Numeric.accepts('A'));
        assert!(UpperAlpha.accepts('Q'));
        assert!(!UpperAlpha.accepts('q'));
        assert!(Alphanumeric.accepts('Z'));
        assert!(Alphanumeric.accepts('0'));
        assert!(!Alphanumeric.accepts(' '));
    }

    #[test]
    fn test_entry_type_names() {
        assert_eq!(EntryType::NationalCheckDigit.to_string(), "national_check_digit");
        assert_eq!(
            "bank_code".parse::<EntryType>().unwrap(),
            EntryType::BankCode
        );
    }

    #[test]
    fn test_has_field() {
        let es = spain();
        assert!(es.has_field(EntryType::NationalCheckDigit));
        assert!(!es.has_field(EntryType::AccountType));
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&spain()).unwrap();
        let parsed: CountryStructure = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, spain());
    }

    #[test]
    fn test_deserialize_rejects_duplicate_entry() {
        let json = r#"{
            "country": "DE",
            "fields": [
                { "entry_type": "bank_code", "character_class": "numeric", "length": 8 },
                { "entry_type": "bank_code", "character_class": "numeric", "length": 10 }
            ]
        }"#;
        let err = serde_json::from_str::<CountryStructure>(json).unwrap_err();
        assert!(err.to_string().contains("Entry type bank_code appears more than once"));
    }

    #[test]
    fn test_positioned_fields() {
        let offsets: Vec<usize> = spain().positioned_fields().map(|(o, _)| o).collect();
        assert_eq!(offsets, vec![0, 4, 8, 10]);
    }
}
