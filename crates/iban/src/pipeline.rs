//! Validation pipeline
//!
//! Stages run in order and stop at the first failure:
//! `Layout → Empty → CountryCodeFormat → CountrySupported → TotalLength →
//! StructuralFields → Mod97CheckDigit → NationalCheckDigit`.
//! The national stage runs only in enhanced mode and only when the
//! country has a registered algorithm.

use ibankit_checksum::mod97;
use ibankit_checksum::NationalCheckDigit;
use ibankit_core::{Bban, FormatViolation, IbanError, IbanResult};
use ibankit_registry::IbanRegistry;
use strum_macros::Display;

use crate::format::IbanFormat;
use crate::iban::Iban;

/// Validation stage, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Stage {
    Layout,
    Empty,
    CountryCodeFormat,
    CountrySupported,
    TotalLength,
    StructuralFields,
    Mod97CheckDigit,
    NationalCheckDigit,
}

/// Configurable IBAN validator bound to a registry
#[derive(Debug, Clone, Copy)]
pub struct Validator<'r> {
    registry: &'r IbanRegistry,
    format: IbanFormat,
    enhanced: bool,
}

impl Default for Validator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator<'static> {
    /// Validator over the process-wide registry, compact input, basic checks
    pub fn new() -> Self {
        Self::with_registry(ibankit_registry::global())
    }
}

impl<'r> Validator<'r> {
    pub fn with_registry(registry: &'r IbanRegistry) -> Self {
        Self {
            registry,
            format: IbanFormat::Compact,
            enhanced: false,
        }
    }

    /// Accept input in the given layout
    pub fn format(mut self, format: IbanFormat) -> Self {
        self.format = format;
        self
    }

    /// Also verify the national check digit
    pub fn enhanced(mut self, enhanced: bool) -> Self {
        self.enhanced = enhanced;
        self
    }

    pub fn registry(&self) -> &'r IbanRegistry {
        self.registry
    }

    /// Run every stage and return the parsed IBAN
    pub fn validate(&self, input: &str) -> IbanResult<Iban> {
        let compact = self.format.to_compact(input).map_err(|e| {
            let stage = match e {
                FormatViolation::Empty => Stage::Empty,
                _ => Stage::Layout,
            };
            self.fail(stage, e.into())
        })?;
        let iban = compact.as_ref();

        let country_code = check_country_code(iban)
            .map_err(|e| self.fail(Stage::CountryCodeFormat, e.into()))?;

        let structure = self
            .registry
            .resolve(country_code)
            .map_err(|e| self.fail(Stage::CountrySupported, e))?;

        let expected = structure.bban_length();
        let actual = iban.chars().count().saturating_sub(4);
        if actual != expected {
            return Err(self.fail(
                Stage::TotalLength,
                FormatViolation::BbanLength { expected, actual }.into(),
            ));
        }
        let check_digit =
            check_digit_shape(iban).map_err(|e| self.fail(Stage::TotalLength, e.into()))?;

        let bban_part = iban.get(4..).unwrap_or_default();
        let bban = Bban::parse(structure, bban_part)
            .map_err(|e| self.fail(Stage::StructuralFields, e))?;

        mod97::validate_check_digit(iban).map_err(|e| self.fail(Stage::Mod97CheckDigit, e))?;

        if self.enhanced {
            if let Some(algorithm) = self.registry.algorithm(bban.country()) {
                algorithm
                    .check(&bban)
                    .map_err(|e| self.fail(Stage::NationalCheckDigit, e))?;
            }
        }

        Ok(Iban::from_parts(check_digit.to_string(), bban))
    }

    /// Whether `input` passes every stage
    pub fn is_valid(&self, input: &str) -> bool {
        self.validate(input).is_ok()
    }

    fn fail(&self, stage: Stage, error: IbanError) -> IbanError {
        tracing::trace!(stage = %stage, error = %error, "IBAN validation failed");
        error
    }
}

/// Leading two upper case letters
fn check_country_code(iban: &str) -> Result<&str, FormatViolation> {
    let head: String = iban.chars().take(2).collect();
    if head.chars().count() < 2 || !head.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(FormatViolation::CountryCodeTwoLetters(head));
    }
    if !head.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(FormatViolation::CountryCodeUpperCase(head));
    }
    // Both characters are ASCII here
    iban.get(..2).ok_or(FormatViolation::CountryCodeTwoLetters(head))
}

/// Characters two and three must be digits
fn check_digit_shape(iban: &str) -> Result<&str, FormatViolation> {
    let digits: String = iban.chars().skip(2).take(2).collect();
    if digits.chars().count() != 2 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(FormatViolation::CheckDigitTwoDigits(digits));
    }
    iban.get(2..4).ok_or(FormatViolation::CheckDigitTwoDigits(digits))
}
