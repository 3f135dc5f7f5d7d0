//! Belgium: bank code + account number modulo 97, `0` mapped to `97`

use ibankit_core::{Bban, EntryType};

pub fn calculate(bban: &Bban) -> Option<String> {
    let value = bban.join(&[EntryType::BankCode, EntryType::AccountNumber]);
    let remainder = crate::iso7064::mod97_10(&value)?;
    let check = if remainder == 0 { 97 } else { remainder };
    Some(format!("{:02}", check))
}
