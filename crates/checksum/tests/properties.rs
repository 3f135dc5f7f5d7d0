//! Property tests for the checksum engines

use std::sync::Arc;

use ibankit_checksum::{iso7064, mod97, NationalAlgorithm, NationalCheckDigit};
use ibankit_core::{Bban, CountryCode, CountryStructure, EntryType};
use proptest::prelude::*;

fn structure(country: CountryCode, entries: &[EntryType], format: &str) -> Arc<CountryStructure> {
    Arc::new(CountryStructure::from_format(country, entries, format).unwrap())
}

/// Replace the check digit field with the algorithm's own result
fn with_calculated_digit(algorithm: &NationalAlgorithm, bban: Bban) -> Option<Bban> {
    let digit = algorithm.calculate(&bban)?;
    bban.with_field(EntryType::NationalCheckDigit, &digit).ok()
}

proptest! {
    #[test]
    fn streaming_remainder_matches_wide_arithmetic(digits in "[0-9]{1,38}") {
        let direct = digits.parse::<u128>().unwrap() % 97;
        prop_assert_eq!(u128::from(mod97::remainder(&digits).unwrap()), direct);
    }

    #[test]
    fn calculated_iban_check_digit_validates(bban in "[0-9A-Z]{8,30}") {
        let check_digit = mod97::calculate_check_digit("DE", &bban).unwrap();
        let iban = format!("DE{check_digit}{bban}");
        prop_assert!(mod97::validate_check_digit(&iban).is_ok());
    }

    #[test]
    fn iso7064_digits_complete_value(value in "[0-9]{1,30}") {
        let digits = iso7064::check_digits(&value).unwrap();
        let full = format!("{value}{digits}");
        prop_assert!(iso7064::is_valid(&full));
    }

    #[test]
    fn spain_self_consistent(raw in "[0-9]{20}") {
        let s = structure(
            CountryCode::ES,
            &[EntryType::BankCode, EntryType::BranchCode, EntryType::NationalCheckDigit, EntryType::AccountNumber],
            "4!n4!n2!n10!n",
        );
        let bban = with_calculated_digit(&NationalAlgorithm::Spain, Bban::parse(s, raw).unwrap()).unwrap();
        prop_assert!(NationalAlgorithm::Spain.check(&bban).is_ok());
    }

    #[test]
    fn french_rib_self_consistent(raw in "[0-9]{10}[0-9A-Z]{11}[0-9]{2}") {
        let s = structure(
            CountryCode::FR,
            &[EntryType::BankCode, EntryType::BranchCode, EntryType::AccountNumber, EntryType::NationalCheckDigit],
            "5!n5!n11!c2!n",
        );
        let bban = with_calculated_digit(&NationalAlgorithm::FrenchRib, Bban::parse(s, raw).unwrap()).unwrap();
        prop_assert!(NationalAlgorithm::FrenchRib.check(&bban).is_ok());
    }

    #[test]
    fn italy_self_consistent(raw in "[A-Z][0-9]{10}[0-9A-Z]{12}") {
        let s = structure(
            CountryCode::IT,
            &[EntryType::NationalCheckDigit, EntryType::BankCode, EntryType::BranchCode, EntryType::AccountNumber],
            "1!a5!n5!n12!c",
        );
        let bban = with_calculated_digit(&NationalAlgorithm::Italy, Bban::parse(s, raw).unwrap()).unwrap();
        prop_assert!(NationalAlgorithm::Italy.check(&bban).is_ok());
    }

    #[test]
    fn belgium_and_iso_self_consistent(raw in "[0-9]{12}") {
        let s = structure(
            CountryCode::BE,
            &[EntryType::BankCode, EntryType::AccountNumber, EntryType::NationalCheckDigit],
            "3!n7!n2!n",
        );
        for algorithm in [NationalAlgorithm::Belgium, NationalAlgorithm::Iso7064] {
            let bban = with_calculated_digit(&algorithm, Bban::parse(s.clone(), raw.clone()).unwrap()).unwrap();
            prop_assert!(algorithm.check(&bban).is_ok());
        }
    }

    #[test]
    fn finland_self_consistent(raw in "[0-9]{14}") {
        let s = structure(
            CountryCode::FI,
            &[EntryType::BankCode, EntryType::AccountNumber, EntryType::NationalCheckDigit],
            "6!n7!n1!n",
        );
        let bban = with_calculated_digit(&NationalAlgorithm::Finland, Bban::parse(s, raw).unwrap()).unwrap();
        prop_assert!(NationalAlgorithm::Finland.check(&bban).is_ok());
    }

    #[test]
    fn norway_self_consistent_when_digit_exists(raw in "[0-9]{11}") {
        let s = structure(
            CountryCode::NO,
            &[EntryType::BankCode, EntryType::AccountNumber, EntryType::NationalCheckDigit],
            "4!n6!n1!n",
        );
        let bban = Bban::parse(s, raw).unwrap();
        if let Some(bban) = with_calculated_digit(&NationalAlgorithm::Norway, bban) {
            prop_assert!(NationalAlgorithm::Norway.check(&bban).is_ok());
        }
    }
}
