//! Italy: CIN letter over bank + branch + account
//!
//! Characters at odd positions (1st, 3rd, …) go through a substitution
//! table, the others count by value. Digits and letters index both tables
//! the same way (`0`/`A` = 0, `1`/`B` = 1, …). The sum modulo 26 picks
//! the letter.

use ibankit_core::{Bban, EntryType};

const ODD_VALUES: [u32; 26] = [
    1, 0, 5, 7, 9, 13, 15, 17, 19, 21, 2, 4, 18, 20, 11, 3, 6, 8, 12, 14, 16, 10, 22, 25, 24, 23,
];

pub fn calculate(bban: &Bban) -> Option<String> {
    let value = bban.join(&[
        EntryType::BankCode,
        EntryType::BranchCode,
        EntryType::AccountNumber,
    ]);
    cin(&value).map(String::from)
}

fn cin(value: &str) -> Option<char> {
    let mut sum = 0;
    for (i, c) in value.chars().enumerate() {
        let index = match c {
            '0'..='9' => c as u32 - '0' as u32,
            'A'..='Z' => c as u32 - 'A' as u32,
            _ => return None,
        };
        sum += if i % 2 == 0 {
            ODD_VALUES[index as usize]
        } else {
            index
        };
    }
    char::from_u32('A' as u32 + sum % 26)
}
