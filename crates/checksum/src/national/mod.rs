//! National check digit schemes
//!
//! Some countries embed a second checksum inside the BBAN, independent of
//! the IBAN-level MOD-97 digits. The built-in schemes form a closed set of
//! variants; anything else plugs in through `NationalAlgorithm::Custom`.

pub mod belgium;
pub mod finland;
pub mod france;
pub mod iso;
pub mod italy;
pub mod netherlands;
pub mod norway;
pub mod slovakia;
pub mod spain;

use ibankit_core::{Bban, CountryCode, EntryType, IbanError, IbanResult};
use std::fmt;
use std::sync::Arc;

/// A country-specific check digit scheme.
///
/// Implementations must be pure: for every structurally valid BBAN where
/// `calculate` returns `Some(d)`, `validate(bban, &d)` is true.
pub trait NationalCheckDigit: Send + Sync {
    /// Scheme name for logging/debugging
    fn name(&self) -> &str;

    /// Check digit computed from the other fields.
    ///
    /// `None` when the scheme has no separate digit or no digit can make
    /// this BBAN valid.
    fn calculate(&self, bban: &Bban) -> Option<String>;

    /// Whether `check_digit` is correct for `bban`
    fn validate(&self, bban: &Bban, check_digit: &str) -> bool {
        self.calculate(bban).as_deref() == Some(check_digit)
    }

    /// Field holding the value the scheme verifies
    fn checked_entry(&self) -> EntryType {
        EntryType::NationalCheckDigit
    }

    /// Verify the value embedded in `bban`
    fn check(&self, bban: &Bban) -> IbanResult<()> {
        let actual = bban.field(self.checked_entry()).unwrap_or_default();
        if self.validate(bban, actual) {
            return Ok(());
        }
        Err(IbanError::NationalCheckDigit {
            country: bban.country(),
            actual: actual.to_string(),
            expected: self
                .calculate(bban)
                .unwrap_or_else(|| format!("value passing {}", self.name())),
        })
    }
}

/// National check digit algorithm: one of the built-in schemes or a
/// runtime-registered one.
#[derive(Clone)]
pub enum NationalAlgorithm {
    /// BE: bank + account modulo 97
    Belgium,
    /// ES: two weighted MOD-11 digits
    Spain,
    /// FR, TN: RIB key
    FrenchRib,
    /// IT: CIN letter
    Italy,
    /// BA, MK, ME, PT, RS, SI: ISO 7064 MOD 97-10 over the BBAN
    Iso7064,
    /// FI: Luhn
    Finland,
    /// NL: MOD-11 account number
    Netherlands,
    /// NO: MOD-11
    Norway,
    /// SK: MOD-11 prefix and base number
    Slovakia,
    /// Registered at runtime
    Custom(Arc<dyn NationalCheckDigit>),
}

impl NationalAlgorithm {
    /// Countries with a built-in scheme
    pub const BUILTIN_COUNTRIES: [CountryCode; 15] = [
        CountryCode::BE,
        CountryCode::ES,
        CountryCode::FR,
        CountryCode::IT,
        CountryCode::BA,
        CountryCode::FI,
        CountryCode::MK,
        CountryCode::ME,
        CountryCode::NL,
        CountryCode::NO,
        CountryCode::PT,
        CountryCode::RS,
        CountryCode::SK,
        CountryCode::SI,
        CountryCode::TN,
    ];

    /// Built-in scheme for a country
    pub fn for_country(country: CountryCode) -> Option<Self> {
        match country {
            CountryCode::BE => Some(Self::Belgium),
            CountryCode::ES => Some(Self::Spain),
            CountryCode::FR | CountryCode::TN => Some(Self::FrenchRib),
            CountryCode::IT => Some(Self::Italy),
            CountryCode::BA
            | CountryCode::MK
            | CountryCode::ME
            | CountryCode::PT
            | CountryCode::RS
            | CountryCode::SI => Some(Self::Iso7064),
            CountryCode::FI => Some(Self::Finland),
            CountryCode::NL => Some(Self::Netherlands),
            CountryCode::NO => Some(Self::Norway),
            CountryCode::SK => Some(Self::Slovakia),
            _ => None,
        }
    }

    /// Wrap a runtime-provided scheme
    pub fn custom(algorithm: impl NationalCheckDigit + 'static) -> Self {
        Self::Custom(Arc::new(algorithm))
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }
}

impl NationalCheckDigit for NationalAlgorithm {
    fn name(&self) -> &str {
        match self {
            Self::Belgium => "belgium_mod97",
            Self::Spain => "spain_mod11",
            Self::FrenchRib => "french_rib",
            Self::Italy => "italy_cin",
            Self::Iso7064 => "iso7064_mod97_10",
            Self::Finland => "finland_luhn",
            Self::Netherlands => "netherlands_mod11",
            Self::Norway => "norway_mod11",
            Self::Slovakia => "slovakia_mod11",
            Self::Custom(algorithm) => algorithm.name(),
        }
    }

    fn calculate(&self, bban: &Bban) -> Option<String> {
        match self {
            Self::Belgium => belgium::calculate(bban),
            Self::Spain => spain::calculate(bban),
            Self::FrenchRib => france::calculate(bban),
            Self::Italy => italy::calculate(bban),
            Self::Iso7064 => iso::calculate(bban),
            Self::Finland => finland::calculate(bban),
            Self::Norway => norway::calculate(bban),
            Self::Netherlands | Self::Slovakia => None,
            Self::Custom(algorithm) => algorithm.calculate(bban),
        }
    }

    fn validate(&self, bban: &Bban, check_digit: &str) -> bool {
        match self {
            Self::Iso7064 => iso::validate(bban, check_digit),
            Self::Netherlands => netherlands::validate(bban),
            Self::Slovakia => slovakia::validate(bban),
            Self::Custom(algorithm) => algorithm.validate(bban, check_digit),
            _ => self.calculate(bban).as_deref() == Some(check_digit),
        }
    }

    fn checked_entry(&self) -> EntryType {
        match self {
            Self::Netherlands | Self::Slovakia => EntryType::AccountNumber,
            Self::Custom(algorithm) => algorithm.checked_entry(),
            _ => EntryType::NationalCheckDigit,
        }
    }
}

impl fmt::Debug for NationalAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Custom(algorithm) => f.debug_tuple("Custom").field(&algorithm.name()).finish(),
            other => f.write_str(other.name()),
        }
    }
}
