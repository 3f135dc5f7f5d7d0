//! Netherlands: the account number itself must pass MOD-11
//!
//! Former Postbank accounts (leading `000`) carry no checksum.

use ibankit_core::Bban;

pub fn validate(bban: &Bban) -> bool {
    let Some(account) = bban.account_number() else {
        return false;
    };
    if account.starts_with("000") {
        return true;
    }
    let mut sum = 0;
    for (c, weight) in account.chars().zip((1..=10u32).rev()) {
        let Some(d) = c.to_digit(10) else {
            return false;
        };
        sum += d * weight;
    }
    account.len() == 10 && sum % 11 == 0
}
