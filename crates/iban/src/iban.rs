//! Iban - a validated International Bank Account Number

use std::fmt;
use std::str::FromStr;

use ibankit_core::{Bban, CountryCode, EntryType, IbanError, IbanResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::format::{self, IbanFormat};
use crate::pipeline::Validator;
use crate::random::Generator;

/// A structurally valid IBAN with a correct MOD-97 check digit.
///
/// Stored in compact form. Field accessors slice the BBAN by the
/// country structure it was validated against.
///
/// # Example
/// ```
/// use ibankit::Iban;
///
/// let iban: Iban = "DE89370400440532013000".parse().unwrap();
/// assert_eq!(iban.bank_code(), Some("37040044"));
/// assert_eq!(iban.to_formatted_string(), "DE89 3704 0044 0532 0130 00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iban {
    value: String,
    bban: Bban,
}

impl Iban {
    /// Parse a compact IBAN against the process-wide registry
    pub fn parse(input: &str) -> IbanResult<Self> {
        Validator::new().validate(input)
    }

    /// Parse an IBAN written in `format`
    pub fn parse_with_format(input: &str, format: IbanFormat) -> IbanResult<Self> {
        Validator::new().format(format).validate(input)
    }

    pub(crate) fn from_parts(check_digit: String, bban: Bban) -> Self {
        let mut value = String::with_capacity(4 + bban.as_str().len());
        value.push_str(bban.country().alpha2());
        value.push_str(&check_digit);
        value.push_str(bban.as_str());
        Self { value, bban }
    }

    /// Random IBAN for `country` from the thread-local generator
    pub fn random(country: CountryCode) -> IbanResult<Self> {
        Self::random_with(country, &mut rand::thread_rng())
    }

    /// Random IBAN for `country` drawn from `rng`
    pub fn random_with<R: Rng + ?Sized>(country: CountryCode, rng: &mut R) -> IbanResult<Self> {
        Generator::new().generate(country, rng)
    }

    /// Deterministic random IBAN: the same seed yields the same IBAN
    pub fn random_seeded(country: CountryCode, seed: u64) -> IbanResult<Self> {
        Self::random_with(country, &mut StdRng::seed_from_u64(seed))
    }

    pub fn country_code(&self) -> CountryCode {
        self.bban.country()
    }

    /// The two MOD-97 digits
    pub fn check_digit(&self) -> &str {
        &self.value[2..4]
    }

    pub fn bban(&self) -> &Bban {
        &self.bban
    }

    /// Compact form
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn field(&self, entry_type: EntryType) -> Option<&str> {
        self.bban.field(entry_type)
    }

    pub fn bank_code(&self) -> Option<&str> {
        self.bban.bank_code()
    }

    pub fn branch_code(&self) -> Option<&str> {
        self.bban.branch_code()
    }

    pub fn account_number(&self) -> Option<&str> {
        self.bban.account_number()
    }

    pub fn national_check_digit(&self) -> Option<&str> {
        self.bban.national_check_digit()
    }

    pub fn account_type(&self) -> Option<&str> {
        self.bban.account_type()
    }

    pub fn owner_account_type(&self) -> Option<&str> {
        self.bban.owner_account_number()
    }

    pub fn identification_number(&self) -> Option<&str> {
        self.bban.identification_number()
    }

    /// Printed form: groups of four separated by spaces
    pub fn to_formatted_string(&self) -> String {
        format::group(&self.value)
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl FromStr for Iban {
    type Err = IbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Iban {
    type Error = IbanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Iban> for String {
    fn from(iban: Iban) -> Self {
        iban.value
    }
}

impl AsRef<str> for Iban {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
