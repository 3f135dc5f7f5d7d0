//! Norway: MOD-11 over bank code + account number

use ibankit_core::{Bban, EntryType};

const WEIGHTS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];

/// `None` when the remainder is 1: no digit can make such an account valid
pub fn calculate(bban: &Bban) -> Option<String> {
    let value = bban.join(&[EntryType::BankCode, EntryType::AccountNumber]);
    if value.len() != WEIGHTS.len() {
        return None;
    }
    let mut sum = 0;
    for (c, weight) in value.chars().zip(WEIGHTS) {
        sum += c.to_digit(10)? * weight;
    }
    match sum % 11 {
        0 => Some("0".to_string()),
        1 => None,
        r => Some((11 - r).to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::national::tests::bban;
    use ibankit_core::CountryCode;

    #[test]
    fn test_known_account() {
        // NO9386011117947
        assert_eq!(
            calculate(&bban(CountryCode::NO, "86011117947")).as_deref(),
            Some("7")
        );
    }

    #[test]
    fn test_remainder_zero_gives_zero() {
        // 1 * 5 + 3 * 2 = 11
        assert_eq!(
            calculate(&bban(CountryCode::NO, "00000010030")).as_deref(),
            Some("0")
        );
    }

    #[test]
    fn test_remainder_one_has_no_digit() {
        // 6 * 2 = 12
        assert_eq!(calculate(&bban(CountryCode::NO, "00000000060")), None);
    }

    #[test]
    fn test_other_remainders() {
        assert_eq!(
            calculate(&bban(CountryCode::NO, "00000000030")).as_deref(),
            Some("5")
        );
        assert_eq!(
            calculate(&bban(CountryCode::NO, "00000000070")).as_deref(),
            Some("8")
        );
    }
}
