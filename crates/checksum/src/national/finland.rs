//! Finland: Luhn over bank code + account number

use ibankit_core::{Bban, EntryType};

pub fn calculate(bban: &Bban) -> Option<String> {
    let value = bban.join(&[EntryType::BankCode, EntryType::AccountNumber]);
    luhn(&value).map(|d| d.to_string())
}

/// Weights 2,1,2,1… from the rightmost digit, products above 9 reduced to
/// their digit sum.
fn luhn(value: &str) -> Option<u32> {
    let mut sum = 0;
    for (i, c) in value.chars().rev().enumerate() {
        let product = c.to_digit(10)? * if i % 2 == 0 { 2 } else { 1 };
        sum += if product > 9 {
            product / 10 + product % 10
        } else {
            product
        };
    }
    Some((10 - sum % 10) % 10)
}
