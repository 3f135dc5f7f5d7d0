//! Spain: two MOD-11 digits ("dígitos de control")
//!
//! The first covers `"00" + bank + branch`, the second the account number.

use ibankit_core::{Bban, EntryType};

const WEIGHTS: [u32; 10] = [1, 2, 4, 8, 5, 10, 9, 7, 3, 6];

pub fn calculate(bban: &Bban) -> Option<String> {
    let office = format!(
        "00{}",
        bban.join(&[EntryType::BankCode, EntryType::BranchCode])
    );
    let account = bban.account_number()?;
    Some(format!("{}{}", digit(&office)?, digit(account)?))
}

fn digit(value: &str) -> Option<u32> {
    if value.len() != WEIGHTS.len() {
        return None;
    }
    let mut sum = 0;
    for (c, weight) in value.chars().zip(WEIGHTS) {
        sum += c.to_digit(10)? * weight;
    }
    Some(match 11 - sum % 11 {
        11 => 0,
        10 => 1,
        d => d,
    })
}
