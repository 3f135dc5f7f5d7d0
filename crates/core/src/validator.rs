//! Structure validation - checks a raw BBAN against a country's fields
//!
//! Fails closed: the first deviation is reported, no fuzzy matching.

use crate::error::FormatViolation;
use crate::structure::{CountryStructure, EntryType};

/// Validate a raw BBAN string against a structure.
///
/// 1. total length must equal the sum of field lengths
/// 2. the string is sliced into contiguous segments in field order
/// 3. every character of a segment must belong to the field's class
///
/// Positions reported in errors are offsets into the BBAN.
pub fn validate_structure(structure: &CountryStructure, bban: &str) -> Result<(), FormatViolation> {
    let expected = structure.bban_length();
    let actual = bban.chars().count();
    if actual != expected {
        return Err(FormatViolation::BbanLength { expected, actual });
    }

    // Byte slicing below requires ASCII
    if let Some((position, character)) = bban.chars().enumerate().find(|(_, c)| !c.is_ascii()) {
        let entry = entry_at(structure, position).unwrap_or(EntryType::AccountNumber);
        let class = structure
            .field(entry)
            .map(|f| f.character_class)
            .unwrap_or(crate::structure::CharacterClass::Alphanumeric);
        return Err(FormatViolation::CharacterClass {
            entry,
            class,
            character,
            position,
        });
    }

    for (offset, field) in structure.positioned_fields() {
        let segment = &bban[offset..offset + field.length];
        if let Some((i, character)) = segment
            .char_indices()
            .find(|(_, c)| !field.character_class.accepts(*c))
        {
            return Err(FormatViolation::CharacterClass {
                entry: field.entry_type,
                class: field.character_class,
                character,
                position: offset + i,
            });
        }
    }

    Ok(())
}

/// Validate a single field value against its descriptor
pub fn validate_field(
    structure: &CountryStructure,
    entry_type: EntryType,
    value: &str,
) -> Result<(), FormatViolation> {
    let Some(field) = structure.field(entry_type) else {
        return Ok(());
    };
    let actual = value.chars().count();
    if actual != field.length {
        return Err(FormatViolation::FieldLength {
            entry: entry_type,
            expected: field.length,
            actual,
        });
    }
    if let Some((position, character)) = value
        .chars()
        .enumerate()
        .find(|(_, c)| !field.character_class.accepts(*c))
    {
        return Err(FormatViolation::CharacterClass {
            entry: entry_type,
            class: field.character_class,
            character,
            position,
        });
    }
    Ok(())
}

/// Entry type of the field covering a BBAN position
pub fn entry_at(structure: &CountryStructure, position: usize) -> Option<EntryType> {
    structure
        .positioned_fields()
        .find(|(offset, field)| position >= *offset && position < offset + field.length)
        .map(|(_, field)| field.entry_type)
}
