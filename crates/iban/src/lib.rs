//! IbanKit - IBAN validation, building and random generation
//!
//! # Key Types
//! - `Iban`: a parsed, validated IBAN with per-field accessors
//! - `Validator`: the staged validation pipeline, optionally enhanced with
//!   national check digits
//! - `IbanBuilder`: assemble or randomly complete an IBAN from its fields
//! - `Generator`: seeded per-field random generation
//! - `IbanConfig`: JSON configuration, including extra country structures
//!
//! # Example
//! ```
//! use ibankit::{is_valid, validate, IbanError};
//!
//! assert!(is_valid("AT611904300234573201"));
//! assert!(matches!(
//!     validate("AT621904300234573201"),
//!     Err(IbanError::CheckDigit { .. })
//! ));
//! ```

pub mod builder;
pub mod config;
pub mod format;
pub mod iban;
pub mod pipeline;
pub mod random;
pub mod util;

pub use builder::IbanBuilder;
pub use config::{ConfigError, ConfigStructureProvider, IbanConfig, StructureDefinition};
pub use format::IbanFormat;
pub use iban::Iban;
pub use pipeline::{Stage, Validator};
pub use random::Generator;
pub use util::*;

pub use ibankit_core::{
    Bban, CharacterClass, CountryCode, CountryStructure, EntryType, FieldDescriptor,
    FormatViolation, IbanError, IbanResult,
};
pub use ibankit_registry::{global, IbanRegistry};

/// Random IBAN for `country` from the thread-local generator
pub fn random(country: CountryCode) -> IbanResult<Iban> {
    Iban::random(country)
}

/// Random IBAN for `country` drawn from `rng`
pub fn random_with<R: rand::Rng + ?Sized>(country: CountryCode, rng: &mut R) -> IbanResult<Iban> {
    Iban::random_with(country, rng)
}
