//! Slovakia: prefix (6 digits) and base number (10 digits) of the account
//! number each pass MOD-11 independently

use ibankit_core::Bban;

const PREFIX_WEIGHTS: [u32; 6] = [10, 5, 8, 4, 2, 1];
const NUMBER_WEIGHTS: [u32; 10] = [6, 3, 7, 9, 10, 5, 8, 4, 2, 1];

pub fn validate(bban: &Bban) -> bool {
    let Some(account) = bban.account_number() else {
        return false;
    };
    if account.len() != PREFIX_WEIGHTS.len() + NUMBER_WEIGHTS.len() {
        return false;
    }
    let (prefix, number) = account.split_at(PREFIX_WEIGHTS.len());
    weighted_mod11(prefix, &PREFIX_WEIGHTS) == Some(0)
        && weighted_mod11(number, &NUMBER_WEIGHTS) == Some(0)
}

fn weighted_mod11(value: &str, weights: &[u32]) -> Option<u32> {
    let mut sum = 0;
    for (c, weight) in value.chars().zip(weights) {
        sum += c.to_digit(10)? * weight;
    }
    Some(sum % 11)
}
