//! Random generation of syntactically valid IBANs
//!
//! Each structure field draws one `u64` from the caller's generator and
//! seeds a dedicated `StdRng` with it. A field's value therefore depends
//! only on its own draw, not on how many characters other fields consume.

use std::collections::HashMap;
use std::sync::Arc;

use ibankit_checksum::{mod97, NationalCheckDigit};
use ibankit_core::{Bban, CountryCode, CountryStructure, EntryType, FieldDescriptor, IbanResult};
use ibankit_registry::IbanRegistry;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};

use crate::iban::Iban;

/// Random value for one field, matching its class and length
pub fn random_field<R: Rng + ?Sized>(field: &FieldDescriptor, rng: &mut R) -> String {
    let alphabet = field.character_class.alphabet();
    (0..field.length)
        .map(|_| char::from(alphabet[rng.gen_range(0..alphabet.len())]))
        .collect()
}

/// Generates random IBANs against a registry
#[derive(Debug, Clone, Copy)]
pub struct Generator<'r> {
    registry: &'r IbanRegistry,
}

impl Default for Generator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator<'static> {
    pub fn new() -> Self {
        Self::with_registry(ibankit_registry::global())
    }
}

impl<'r> Generator<'r> {
    pub fn with_registry(registry: &'r IbanRegistry) -> Self {
        Self { registry }
    }

    /// Random IBAN for a country
    pub fn generate<R: Rng + ?Sized>(&self, country: CountryCode, rng: &mut R) -> IbanResult<Iban> {
        self.generate_with_fields(country, &HashMap::new(), rng)
    }

    /// Random IBAN for a country picked uniformly among supported ones
    pub fn generate_any<R: Rng + ?Sized>(&self, rng: &mut R) -> IbanResult<Iban> {
        let country = self
            .registry
            .supported_countries()
            .into_iter()
            .choose(rng)
            .ok_or_else(|| ibankit_core::IbanError::UnsupportedCountry(String::new()))?;
        self.generate(country, rng)
    }

    /// Random IBAN keeping every value in `supplied`.
    ///
    /// Missing fields are generated. If the national check digit was not
    /// supplied and the country's algorithm produces one, it is recomputed
    /// over the final BBAN. The IBAN check digit is computed last.
    pub fn generate_with_fields<R: Rng + ?Sized>(
        &self,
        country: CountryCode,
        supplied: &HashMap<EntryType, String>,
        rng: &mut R,
    ) -> IbanResult<Iban> {
        let structure = self.registry.resolve(country.alpha2())?;
        let bban = self.random_bban(structure, supplied, rng)?;
        let check_digit = mod97::calculate_check_digit(country.alpha2(), bban.as_str())?;
        Ok(Iban::from_parts(check_digit, bban))
    }

    fn random_bban<R: Rng + ?Sized>(
        &self,
        structure: Arc<CountryStructure>,
        supplied: &HashMap<EntryType, String>,
        rng: &mut R,
    ) -> IbanResult<Bban> {
        let mut values = HashMap::with_capacity(structure.fields().len());
        for field in structure.fields() {
            let seed: u64 = rng.gen();
            let value = match supplied.get(&field.entry_type) {
                Some(value) => value.clone(),
                None => random_field(field, &mut StdRng::seed_from_u64(seed)),
            };
            values.insert(field.entry_type, value);
        }

        let bban = Bban::from_fields(structure, |entry| values.get(&entry).map(String::as_str))?;
        if supplied.contains_key(&EntryType::NationalCheckDigit) {
            return Ok(bban);
        }
        self.with_national_check_digit(bban)
    }

    fn with_national_check_digit(&self, bban: Bban) -> IbanResult<Bban> {
        let Some(algorithm) = self.registry.algorithm(bban.country()) else {
            return Ok(bban);
        };
        if algorithm.checked_entry() != EntryType::NationalCheckDigit
            || !bban.structure().has_field(EntryType::NationalCheckDigit)
        {
            return Ok(bban);
        }
        match algorithm.calculate(&bban) {
            Some(digit) => bban.with_field(EntryType::NationalCheckDigit, &digit),
            None => {
                tracing::debug!(
                    country = %bban.country(),
                    algorithm = algorithm.name(),
                    "No national check digit exists for generated BBAN"
                );
                Ok(bban)
            }
        }
    }
}
