//! ISO 7064 MOD 97-10 over the whole BBAN
//!
//! Used by Bosnia and Herzegovina, North Macedonia, Montenegro, Portugal,
//! Serbia and Slovenia. The check digits are the trailing field.

use crate::iso7064;
use ibankit_core::{Bban, EntryType};

pub fn calculate(bban: &Bban) -> Option<String> {
    iso7064::check_digits(&bban.without(EntryType::NationalCheckDigit))
}

pub fn validate(bban: &Bban, check_digit: &str) -> bool {
    let value = format!("{}{}", bban.without(EntryType::NationalCheckDigit), check_digit);
    iso7064::is_valid(&value)
}
