//! Bban - a structurally valid national account number

use crate::country::CountryCode;
use crate::error::{FormatViolation, IbanResult};
use crate::structure::{CountryStructure, EntryType};
use crate::validator::{validate_field, validate_structure};
use std::fmt;
use std::sync::Arc;

/// A BBAN that has passed structure validation for its country.
///
/// Field values are sliced out of the underlying string on demand using the
/// structure's positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bban {
    structure: Arc<CountryStructure>,
    value: String,
}

impl Bban {
    /// Validate `value` against `structure` and wrap it
    pub fn parse(structure: Arc<CountryStructure>, value: impl Into<String>) -> IbanResult<Self> {
        let value = value.into();
        validate_structure(&structure, &value)?;
        Ok(Self { structure, value })
    }

    /// Assemble a BBAN from per-field values, in structure order.
    ///
    /// Every field of the structure must be present and valid.
    pub fn from_fields<'a, F>(structure: Arc<CountryStructure>, mut lookup: F) -> IbanResult<Self>
    where
        F: FnMut(EntryType) -> Option<&'a str>,
    {
        let mut value = String::with_capacity(structure.bban_length());
        for field in structure.fields() {
            let part = lookup(field.entry_type).ok_or(match field.entry_type {
                EntryType::BankCode => FormatViolation::BankCodeRequired,
                EntryType::AccountNumber => FormatViolation::AccountNumberRequired,
                other => FormatViolation::FieldLength {
                    entry: other,
                    expected: field.length,
                    actual: 0,
                },
            })?;
            validate_field(&structure, field.entry_type, part)?;
            value.push_str(part);
        }
        Self::parse(structure, value)
    }

    #[inline]
    pub fn country(&self) -> CountryCode {
        self.structure.country()
    }

    #[inline]
    pub fn structure(&self) -> &CountryStructure {
        &self.structure
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Value of a field, if the country has it
    pub fn field(&self, entry_type: EntryType) -> Option<&str> {
        self.structure.extract(&self.value, entry_type)
    }

    pub fn bank_code(&self) -> Option<&str> {
        self.field(EntryType::BankCode)
    }

    pub fn branch_code(&self) -> Option<&str> {
        self.field(EntryType::BranchCode)
    }

    pub fn account_number(&self) -> Option<&str> {
        self.field(EntryType::AccountNumber)
    }

    pub fn national_check_digit(&self) -> Option<&str> {
        self.field(EntryType::NationalCheckDigit)
    }

    pub fn account_type(&self) -> Option<&str> {
        self.field(EntryType::AccountType)
    }

    pub fn owner_account_number(&self) -> Option<&str> {
        self.field(EntryType::OwnerAccountNumber)
    }

    pub fn identification_number(&self) -> Option<&str> {
        self.field(EntryType::IdentificationNumber)
    }

    /// Concatenate the given fields in the order listed.
    ///
    /// Fields the country lacks are skipped.
    pub fn join(&self, entries: &[EntryType]) -> String {
        entries.iter().filter_map(|e| self.field(*e)).collect()
    }

    /// The BBAN with one field removed, other fields kept in order
    pub fn without(&self, entry_type: EntryType) -> String {
        self.structure
            .fields()
            .iter()
            .filter(|f| f.entry_type != entry_type)
            .filter_map(|f| self.field(f.entry_type))
            .collect()
    }

    /// Copy with one field replaced.
    ///
    /// The replacement must satisfy the field's length and class.
    pub fn with_field(&self, entry_type: EntryType, replacement: &str) -> IbanResult<Self> {
        let Some(range) = self.structure.field_range(entry_type) else {
            return Ok(self.clone());
        };
        validate_field(&self.structure, entry_type, replacement)?;
        let mut value = self.value.clone();
        value.replace_range(range, replacement);
        Ok(Self {
            structure: Arc::clone(&self.structure),
            value,
        })
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for Bban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Bban {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
