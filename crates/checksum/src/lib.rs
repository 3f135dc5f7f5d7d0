//! IbanKit Checksum - IBAN and national check digit computation
//!
//! - `mod97`: streaming MOD-97 remainder and the IBAN check digit
//! - `iso7064`: MOD 97-10 helpers and the French RIB key
//! - `national`: per-country check digit schemes
//! - `registry`: country → scheme lookup

pub mod iso7064;
pub mod mod97;
pub mod national;
pub mod registry;

pub use mod97::{calculate_check_digit, validate_check_digit, Mod97};
pub use national::{NationalAlgorithm, NationalCheckDigit};
pub use registry::NationalAlgorithmRegistry;
