//! ISO 7064 MOD 97-10 helpers shared by the national schemes

use crate::mod97::Mod97;

/// MOD 97-10 remainder of a string of digits.
///
/// Returns `None` for empty or non-numeric input.
pub fn mod97_10(numeric: &str) -> Option<u32> {
    if numeric.is_empty() || !numeric.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut acc = Mod97::new();
    for c in numeric.chars() {
        acc.push_char(c);
    }
    Some(acc.remainder())
}

/// MOD 97-10 remainder of an alphanumeric string, letters expanded to
/// `A = 10` … `Z = 35`.
pub fn mod97_10_alphanumeric(value: &str) -> Option<u32> {
    if value.is_empty() {
        return None;
    }
    let mut acc = Mod97::new();
    value.chars().all(|c| acc.push_char(c)).then(|| acc.remainder())
}

/// A value carrying trailing ISO 7064 check digits is valid iff its
/// remainder is 1.
pub fn is_valid(value: &str) -> bool {
    mod97_10_alphanumeric(value) == Some(1)
}

/// Two check digits making `value + digits` valid: `98 - (value * 100 mod 97)`
pub fn check_digits(value: &str) -> Option<String> {
    let remainder = mod97_10_alphanumeric(value)?;
    let shifted = (u64::from(remainder) * 100) % 97;
    Some(format!("{:02}", 98 - shifted))
}

/// French RIB key: `97 - (value * 100 mod 97)`, so that
/// `value + key ≡ 0 (mod 97)`.
pub fn rib_key(numeric: &str) -> Option<String> {
    let remainder = mod97_10(numeric)?;
    let shifted = (u64::from(remainder) * 100) % 97;
    Some(format!("{:02}", 97 - shifted))
}

/// Map a RIB character to a digit using the French conversion table:
/// `A-I → 1-9`, `J-R → 1-9`, `S-Z → 2-9`.
pub fn rib_digit(c: char) -> Option<char> {
    let value = match c {
        '0'..='9' => return Some(c),
        'A'..='I' => c as u32 - 'A' as u32 + 1,
        'J'..='R' => c as u32 - 'J' as u32 + 1,
        'S'..='Z' => c as u32 - 'S' as u32 + 2,
        _ => return None,
    };
    char::from_digit(value, 10)
}

/// Convert an alphanumeric RIB into digits
pub fn rib_numeric(value: &str) -> Option<String> {
    value.chars().map(rib_digit).collect()
}
