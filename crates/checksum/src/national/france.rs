//! France and Tunisia: RIB key over bank + branch + account

use crate::iso7064::{rib_key, rib_numeric};
use ibankit_core::{Bban, EntryType};

pub fn calculate(bban: &Bban) -> Option<String> {
    let rib = bban.join(&[
        EntryType::BankCode,
        EntryType::BranchCode,
        EntryType::AccountNumber,
    ]);
    rib_key(&rib_numeric(&rib)?)
}
