//! MOD-97 engine - streaming remainder and IBAN check digit
//!
//! Letters count as two decimal digits (`A = 10` … `Z = 35`), digits as
//! themselves. The running total is folded modulo 97 whenever it passes
//! `MAX_TOTAL`, so no big-integer arithmetic is needed.

use ibankit_core::{FormatViolation, IbanError, IbanResult};

pub const MODULUS: u64 = 97;

/// Fold threshold; `MAX_TOTAL * 100 + 35` still fits in a u64
const MAX_TOTAL: u64 = 999_999_999;

/// Running MOD-97 remainder over a stream of characters
#[derive(Debug, Clone, Copy, Default)]
pub struct Mod97 {
    total: u64,
}

impl Mod97 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one decimal digit into the total
    #[inline]
    pub fn push_digit(&mut self, digit: u32) {
        self.total = self.total * 10 + u64::from(digit);
        self.fold();
    }

    /// Fold one character. Returns false if it is not `0-9` or `A-Z`.
    #[inline]
    pub fn push_char(&mut self, c: char) -> bool {
        match char_value(c) {
            Some(v) if v < 10 => {
                self.total = self.total * 10 + u64::from(v);
            }
            Some(v) => {
                self.total = self.total * 100 + u64::from(v);
            }
            None => return false,
        }
        self.fold();
        true
    }

    /// Fold every character of `s`, reporting the first invalid one with
    /// its position in `s`.
    pub fn push_str(&mut self, s: &str) -> Result<(), FormatViolation> {
        for (position, character) in s.chars().enumerate() {
            if !self.push_char(character) {
                return Err(FormatViolation::InvalidCharacter {
                    character,
                    position,
                });
            }
        }
        Ok(())
    }

    #[inline]
    fn fold(&mut self) {
        if self.total > MAX_TOTAL {
            self.total %= MODULUS;
        }
    }

    /// Remainder of everything pushed so far
    #[inline]
    pub fn remainder(&self) -> u32 {
        (self.total % MODULUS) as u32
    }
}

/// Numeric value of an IBAN character: digits as-is, `A = 10` … `Z = 35`
#[inline]
pub fn char_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => c.to_digit(10),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        _ => None,
    }
}

/// MOD-97 remainder of an alphanumeric string
pub fn remainder(input: &str) -> Result<u32, FormatViolation> {
    let mut acc = Mod97::new();
    acc.push_str(input)?;
    Ok(acc.remainder())
}

/// Compute the two-digit IBAN check digit for a country code and BBAN.
///
/// Forms `bban + country + "00"`, takes it modulo 97 and returns
/// `98 - remainder`, zero padded.
///
/// # Example
/// ```
/// use ibankit_checksum::mod97::calculate_check_digit;
///
/// assert_eq!(calculate_check_digit("AT", "1904300234573201").unwrap(), "61");
/// ```
pub fn calculate_check_digit(country_code: &str, bban: &str) -> IbanResult<String> {
    check_country_shape(country_code)?;

    let mut acc = Mod97::new();
    acc.push_str(bban)?;
    acc.push_str(country_code)?;
    acc.push_digit(0);
    acc.push_digit(0);

    Ok(format!("{:02}", 98 - acc.remainder()))
}

/// Recompute the check digit of a compact IBAN and compare it with the
/// digits found at positions 2..4.
pub fn validate_check_digit(iban: &str) -> IbanResult<()> {
    let (Some(country_code), Some(actual), Some(bban)) =
        (iban.get(..2), iban.get(2..4), iban.get(4..))
    else {
        return Err(FormatViolation::CountryCodeTwoLetters(iban.to_string()).into());
    };
    if !actual.chars().all(|c| c.is_ascii_digit()) {
        return Err(FormatViolation::CheckDigitTwoDigits(actual.to_string()).into());
    }

    let expected = calculate_check_digit(country_code, bban).map_err(|e| match e {
        IbanError::Format(FormatViolation::InvalidCharacter {
            character,
            position,
        }) => IbanError::Format(FormatViolation::InvalidCharacter {
            character,
            position: position + 4,
        }),
        other => other,
    })?;

    if expected != actual {
        return Err(IbanError::CheckDigit {
            actual: actual.to_string(),
            expected,
        });
    }
    Ok(())
}

/// Whether a compact IBAN has a correct check digit
pub fn is_valid_check_digit(iban: &str) -> bool {
    validate_check_digit(iban).is_ok()
}

fn check_country_shape(country_code: &str) -> Result<(), FormatViolation> {
    if country_code.chars().count() != 2 {
        return Err(FormatViolation::CountryCodeTwoLetters(
            country_code.to_string(),
        ));
    }
    if !country_code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(FormatViolation::CountryCodeUpperCase(
            country_code.to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_digit_austria() {
        assert_eq!(calculate_check_digit("AT", "1904300234573201").unwrap(), "61");
    }

    #[test]
    fn test_check_digit_zero_padded() {
        // AE070331234567890123456
        assert_eq!(calculate_check_digit("AE", "0331234567890123456").unwrap(), "07");
        // SA0380000000608010167519
        assert_eq!(calculate_check_digit("SA", "80000000608010167519").unwrap(), "03");
    }

    #[test]
    fn test_check_digit_with_letters() {
        assert_eq!(calculate_check_digit("GB", "NWBK60161331926819").unwrap(), "29");
        assert_eq!(calculate_check_digit("FR", "20041010050500013M02606").unwrap(), "14");
    }

    #[test]
    fn test_validate_mismatch_carries_both_values() {
        let err = validate_check_digit("AT621904300234573201").unwrap_err();
        assert_eq!(
            err,
            IbanError::CheckDigit {
                actual: "62".to_string(),
                expected: "61".to_string()
            }
        );
    }

    #[test]
    fn test_validate_ok() {
        assert!(validate_check_digit("DE89370400440532013000").is_ok());
        assert!(is_valid_check_digit("MT84MALT011000012345MTLCAST001S"));
    }

    #[test]
    fn test_invalid_character_position() {
        let err = calculate_check_digit("AT", "19043002345-3201").unwrap_err();
        assert_eq!(
            err,
            IbanError::Format(FormatViolation::InvalidCharacter {
                character: '-',
                position: 11
            })
        );

        let err = validate_check_digit("AT6119043002345-3201").unwrap_err();
        assert_eq!(
            err,
            IbanError::Format(FormatViolation::InvalidCharacter {
                character: '-',
                position: 15
            })
        );
    }

    #[test]
    fn test_lowercase_rejected() {
        assert!(calculate_check_digit("at", "1904300234573201").is_err());
        assert!(calculate_check_digit("AT", "nwbk").is_err());
    }

    #[test]
    fn test_remainder_matches_direct_computation() {
        // 5390075470 mod 97 = 34
        assert_eq!(remainder("5390075470").unwrap(), 34);
        // Long input that must be folded several times
        let long = "1".repeat(60);
        let direct = long.chars().fold(0u64, |acc, c| {
            (acc * 10 + u64::from(c.to_digit(10).unwrap())) % 97
        });
        assert_eq!(u64::from(remainder(&long).unwrap()), direct);
    }

    #[test]
    fn test_char_value() {
        assert_eq!(char_value('0'), Some(0));
        assert_eq!(char_value('A'), Some(10));
        assert_eq!(char_value('Z'), Some(35));
        assert_eq!(char_value('a'), None);
    }
}
