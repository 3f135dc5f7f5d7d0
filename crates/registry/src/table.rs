//! Built-in country structure table
//!
//! One entry per IBAN country, fields in BBAN order. Lengths sum to the
//! country's BBAN length.

use std::sync::Arc;

use ibankit_core::{CharacterClass, CountryCode, CountryStructure, FieldDescriptor};

const N: CharacterClass = CharacterClass::Numeric;
const A: CharacterClass = CharacterClass::UpperAlpha;
const C: CharacterClass = CharacterClass::Alphanumeric;

macro_rules! structures {
    ($($country:ident => [$($kind:ident($len:literal, $class:ident)),+ $(,)?];)+) => {
        static BUILTIN: &[(CountryCode, &[FieldDescriptor])] = &[
            $((CountryCode::$country, &[$(FieldDescriptor::$kind($len, $class)),+]),)+
        ];
    };
}

structures! {
    AD => [bank_code(4, N), branch_code(4, N), account_number(12, C)];
    AE => [bank_code(3, N), account_number(16, C)];
    AL => [bank_code(3, N), branch_code(4, N), national_check_digit(1, N), account_number(16, C)];
    AT => [bank_code(5, N), account_number(11, N)];
    AZ => [bank_code(4, A), account_number(20, C)];
    BA => [bank_code(3, N), branch_code(3, N), account_number(8, N), national_check_digit(2, N)];
    BE => [bank_code(3, N), account_number(7, N), national_check_digit(2, N)];
    BG => [bank_code(4, A), branch_code(4, N), account_type(2, N), account_number(8, C)];
    BH => [bank_code(4, A), account_number(14, C)];
    BI => [bank_code(5, N), branch_code(5, N), account_number(11, N), national_check_digit(2, N)];
    BR => [
        bank_code(8, N),
        branch_code(5, N),
        account_number(10, N),
        account_type(1, A),
        owner_account_number(1, C),
    ];
    BY => [bank_code(4, C), branch_code(4, N), account_number(16, C)];
    CH => [bank_code(5, N), account_number(12, C)];
    CI => [bank_code(5, C), branch_code(5, N), account_number(12, N), national_check_digit(2, N)];
    CR => [bank_code(4, N), account_number(14, N)];
    CY => [bank_code(3, N), branch_code(5, N), account_number(16, C)];
    CZ => [bank_code(4, N), account_number(16, N)];
    DE => [bank_code(8, N), account_number(10, N)];
    DJ => [bank_code(5, N), branch_code(5, N), account_number(11, N), national_check_digit(2, N)];
    DK => [bank_code(4, N), account_number(10, N)];
    DO => [bank_code(4, C), account_number(20, N)];
    EE => [bank_code(2, N), branch_code(2, N), account_number(11, N), national_check_digit(1, N)];
    EG => [bank_code(4, N), branch_code(4, N), account_number(17, N)];
    ES => [bank_code(4, N), branch_code(4, N), national_check_digit(2, N), account_number(10, N)];
    FI => [bank_code(6, N), account_number(7, N), national_check_digit(1, N)];
    FK => [bank_code(2, A), account_number(12, N)];
    FO => [bank_code(4, N), account_number(9, N), national_check_digit(1, N)];
    FR => [bank_code(5, N), branch_code(5, N), account_number(11, C), national_check_digit(2, N)];
    GB => [bank_code(4, A), branch_code(6, N), account_number(8, N)];
    GE => [bank_code(2, A), account_number(16, N)];
    GI => [bank_code(4, A), account_number(15, C)];
    GL => [bank_code(4, N), account_number(10, N)];
    GR => [bank_code(3, N), branch_code(4, N), account_number(16, C)];
    GT => [bank_code(4, C), account_number(20, C)];
    HN => [bank_code(4, A), account_number(20, N)];
    HR => [bank_code(7, N), account_number(10, N)];
    HU => [bank_code(3, N), branch_code(4, N), account_number(16, N), national_check_digit(1, N)];
    IE => [bank_code(4, A), branch_code(6, N), account_number(8, N)];
    IL => [bank_code(3, N), branch_code(3, N), account_number(13, N)];
    IQ => [bank_code(4, A), branch_code(3, N), account_number(12, N)];
    IS => [
        bank_code(4, N),
        branch_code(2, N),
        account_number(6, N),
        identification_number(10, N),
    ];
    IT => [national_check_digit(1, A), bank_code(5, N), branch_code(5, N), account_number(12, C)];
    JO => [bank_code(4, A), branch_code(4, N), account_number(18, C)];
    KW => [bank_code(4, A), account_number(22, C)];
    KZ => [bank_code(3, N), account_number(13, C)];
    LB => [bank_code(4, N), account_number(20, C)];
    LC => [bank_code(4, A), account_number(24, C)];
    LI => [bank_code(5, N), account_number(12, C)];
    LT => [bank_code(5, N), account_number(11, N)];
    LU => [bank_code(3, N), account_number(13, C)];
    LV => [bank_code(4, A), account_number(13, C)];
    LY => [bank_code(3, N), branch_code(3, N), account_number(15, N)];
    MC => [bank_code(5, N), branch_code(5, N), account_number(11, C), national_check_digit(2, N)];
    MD => [bank_code(2, C), account_number(18, C)];
    ME => [bank_code(3, N), account_number(13, N), national_check_digit(2, N)];
    MK => [bank_code(3, N), account_number(10, C), national_check_digit(2, N)];
    MN => [bank_code(4, N), account_number(12, N)];
    MR => [bank_code(5, N), branch_code(5, N), account_number(11, N), national_check_digit(2, N)];
    MT => [bank_code(4, A), branch_code(5, N), account_number(18, C)];
    MU => [bank_code(6, C), branch_code(2, N), account_number(18, C)];
    NI => [bank_code(4, A), account_number(20, N)];
    NL => [bank_code(4, A), account_number(10, N)];
    NO => [bank_code(4, N), account_number(6, N), national_check_digit(1, N)];
    OM => [bank_code(3, N), account_number(16, C)];
    PK => [bank_code(4, C), account_number(16, N)];
    PL => [bank_code(3, N), branch_code(4, N), national_check_digit(1, N), account_number(16, N)];
    PS => [bank_code(4, C), account_number(21, C)];
    PT => [bank_code(4, N), branch_code(4, N), account_number(11, N), national_check_digit(2, N)];
    QA => [bank_code(4, A), account_number(21, C)];
    RO => [bank_code(4, A), account_number(16, C)];
    RS => [bank_code(3, N), account_number(13, N), national_check_digit(2, N)];
    RU => [bank_code(9, N), branch_code(5, N), account_number(15, C)];
    SA => [bank_code(2, N), account_number(18, C)];
    SC => [bank_code(4, A), branch_code(4, N), account_number(16, N), account_type(3, A)];
    SD => [bank_code(2, N), account_number(12, N)];
    SE => [bank_code(3, N), account_number(17, N)];
    SI => [bank_code(2, N), branch_code(3, N), account_number(8, N), national_check_digit(2, N)];
    SK => [bank_code(4, N), account_number(16, N)];
    SM => [national_check_digit(1, A), bank_code(5, N), branch_code(5, N), account_number(12, C)];
    SO => [bank_code(4, N), branch_code(3, N), account_number(12, N)];
    ST => [bank_code(4, N), branch_code(4, N), account_number(11, N), national_check_digit(2, N)];
    SV => [bank_code(4, A), account_number(20, N)];
    TL => [bank_code(3, N), account_number(14, N), national_check_digit(2, N)];
    TN => [bank_code(2, N), branch_code(3, N), account_number(13, C), national_check_digit(2, N)];
    TR => [bank_code(5, N), national_check_digit(1, C), account_number(16, C)];
    UA => [bank_code(6, N), account_number(19, C)];
    VA => [bank_code(3, N), account_number(15, N)];
    VG => [bank_code(4, A), account_number(16, N)];
    XK => [bank_code(2, N), branch_code(2, N), account_number(10, N), national_check_digit(2, N)];
    YE => [bank_code(4, A), branch_code(4, N), account_number(18, C)];
}

/// Field layout of a built-in country, if any
pub fn builtin_fields(country: CountryCode) -> Option<&'static [FieldDescriptor]> {
    BUILTIN
        .iter()
        .find(|(code, _)| *code == country)
        .map(|(_, fields)| *fields)
}

/// Built-in structure for a country
pub fn builtin_structure(country: CountryCode) -> Option<Arc<CountryStructure>> {
    let fields = builtin_fields(country)?;
    CountryStructure::new(country, fields.to_vec()).ok().map(Arc::new)
}

/// Every built-in structure, in table order
pub fn builtin_structures() -> impl Iterator<Item = Arc<CountryStructure>> {
    BUILTIN.iter().filter_map(|(country, _)| builtin_structure(*country))
}

/// Countries present in the built-in table
pub fn builtin_countries() -> impl Iterator<Item = CountryCode> {
    BUILTIN.iter().map(|(country, _)| *country)
}
