//! IbanKit Core - domain types shared by every IbanKit crate
//!
//! # Key Types
//! - `CountryCode`: ISO 3166-1 alpha-2 codes, including transitional ones
//! - `FieldDescriptor` / `CountryStructure`: positional BBAN layout
//! - `Bban`: a structurally valid national account number
//! - `IbanError` / `FormatViolation`: the error taxonomy

pub mod bban;
pub mod country;
pub mod dsl;
pub mod error;
pub mod structure;
pub mod validator;

pub use bban::Bban;
pub use country::CountryCode;
pub use dsl::{parse_structure_format, FormatClass, FormatToken};
pub use error::{FormatViolation, IbanError, IbanResult, StructureSyntaxError};
pub use structure::{CharacterClass, CountryStructure, EntryType, FieldDescriptor};
pub use validator::{validate_field, validate_structure};
