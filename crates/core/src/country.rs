//! CountryCode - ISO 3166-1 alpha-2 country codes
//!
//! A closed enumeration covering every officially assigned code plus the
//! transitionally reserved codes that may still appear in legacy data.
//! The alpha-2 form is the canonical string form (`Display`, `FromStr`, serde).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Declares the country table.
///
/// Each row is `ALPHA2 => "ALPHA3", "English name"` optionally followed by
/// `since YYYY-MM` for transitionally reserved codes.
macro_rules! country_codes {
    (
        $(
            $code:ident => $alpha3:literal, $name:literal $(, since $year:literal - $month:literal)?;
        )*
    ) => {
        /// ISO 3166-1 alpha-2 country code.
        ///
        /// # Examples
        /// ```
        /// use ibankit_core::CountryCode;
        ///
        /// let de: CountryCode = "DE".parse().unwrap();
        /// assert_eq!(de, CountryCode::DE);
        /// assert_eq!(de.alpha3(), "DEU");
        /// assert_eq!(de.to_string(), "DE");
        /// ```
        #[allow(clippy::upper_case_acronyms)]
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            Serialize, Deserialize, Display, EnumString, EnumIter, IntoStaticStr,
        )]
        pub enum CountryCode {
            $(
                #[doc = $name]
                $code,
            )*
        }

        impl CountryCode {
            /// ISO 3166-1 alpha-3 code
            pub fn alpha3(&self) -> &'static str {
                match self {
                    $( CountryCode::$code => $alpha3, )*
                }
            }

            /// English short name
            pub fn name(&self) -> &'static str {
                match self {
                    $( CountryCode::$code => $name, )*
                }
            }

            /// Start of the transitional period for codes that are no longer
            /// officially assigned but are still accepted when parsing.
            pub fn transitional_since(&self) -> Option<NaiveDate> {
                match self {
                    $( CountryCode::$code => country_codes!(@since $($year, $month)?), )*
                }
            }
        }
    };
    (@since) => { None };
    (@since $year:literal, $month:literal) => { NaiveDate::from_ymd_opt($year, $month, 1) };
}

country_codes! {
    AD => "AND", "Andorra";
    AE => "ARE", "United Arab Emirates";
    AF => "AFG", "Afghanistan";
    AG => "ATG", "Antigua and Barbuda";
    AI => "AIA", "Anguilla";
    AL => "ALB", "Albania";
    AM => "ARM", "Armenia";
    AN => "ANT", "Netherlands Antilles", since 2010-12;
    AO => "AGO", "Angola";
    AQ => "ATA", "Antarctica";
    AR => "ARG", "Argentina";
    AS => "ASM", "American Samoa";
    AT => "AUT", "Austria";
    AU => "AUS", "Australia";
    AW => "ABW", "Aruba";
    AX => "ALA", "Åland Islands";
    AZ => "AZE", "Azerbaijan";
    BA => "BIH", "Bosnia and Herzegovina";
    BB => "BRB", "Barbados";
    BD => "BGD", "Bangladesh";
    BE => "BEL", "Belgium";
    BF => "BFA", "Burkina Faso";
    BG => "BGR", "Bulgaria";
    BH => "BHR", "Bahrain";
    BI => "BDI", "Burundi";
    BJ => "BEN", "Benin";
    BL => "BLM", "Saint Barthélemy";
    BM => "BMU", "Bermuda";
    BN => "BRN", "Brunei Darussalam";
    BO => "BOL", "Bolivia";
    BQ => "BES", "Bonaire, Sint Eustatius and Saba";
    BR => "BRA", "Brazil";
    BS => "BHS", "Bahamas";
    BT => "BTN", "Bhutan";
    BU => "BUR", "Burma", since 1989-12;
    BV => "BVT", "Bouvet Island";
    BW => "BWA", "Botswana";
    BY => "BLR", "Belarus";
    BZ => "BLZ", "Belize";
    CA => "CAN", "Canada";
    CC => "CCK", "Cocos (Keeling) Islands";
    CD => "COD", "Congo, the Democratic Republic of the";
    CF => "CAF", "Central African Republic";
    CG => "COG", "Congo";
    CH => "CHE", "Switzerland";
    CI => "CIV", "Côte d'Ivoire";
    CK => "COK", "Cook Islands";
    CL => "CHL", "Chile";
    CM => "CMR", "Cameroon";
    CN => "CHN", "China";
    CO => "COL", "Colombia";
    CR => "CRI", "Costa Rica";
    CS => "SCG", "Serbia and Montenegro", since 2006-09;
    CU => "CUB", "Cuba";
    CV => "CPV", "Cabo Verde";
    CW => "CUW", "Curaçao";
    CX => "CXR", "Christmas Island";
    CY => "CYP", "Cyprus";
    CZ => "CZE", "Czechia";
    DE => "DEU", "Germany";
    DJ => "DJI", "Djibouti";
    DK => "DNK", "Denmark";
    DM => "DMA", "Dominica";
    DO => "DOM", "Dominican Republic";
    DZ => "DZA", "Algeria";
    EC => "ECU", "Ecuador";
    EE => "EST", "Estonia";
    EG => "EGY", "Egypt";
    EH => "ESH", "Western Sahara";
    ER => "ERI", "Eritrea";
    ES => "ESP", "Spain";
    ET => "ETH", "Ethiopia";
    FI => "FIN", "Finland";
    FJ => "FJI", "Fiji";
    FK => "FLK", "Falkland Islands (Malvinas)";
    FM => "FSM", "Micronesia, Federated States of";
    FO => "FRO", "Faroe Islands";
    FR => "FRA", "France";
    FX => "FXX", "France, Metropolitan", since 1997-07;
    GA => "GAB", "Gabon";
    GB => "GBR", "United Kingdom";
    GD => "GRD", "Grenada";
    GE => "GEO", "Georgia";
    GF => "GUF", "French Guiana";
    GG => "GGY", "Guernsey";
    GH => "GHA", "Ghana";
    GI => "GIB", "Gibraltar";
    GL => "GRL", "Greenland";
    GM => "GMB", "Gambia";
    GN => "GIN", "Guinea";
    GP => "GLP", "Guadeloupe";
    GQ => "GNQ", "Equatorial Guinea";
    GR => "GRC", "Greece";
    GS => "SGS", "South Georgia and the South Sandwich Islands";
    GT => "GTM", "Guatemala";
    GU => "GUM", "Guam";
    GW => "GNB", "Guinea-Bissau";
    GY => "GUY", "Guyana";
    HK => "HKG", "Hong Kong";
    HM => "HMD", "Heard Island and McDonald Islands";
    HN => "HND", "Honduras";
    HR => "HRV", "Croatia";
    HT => "HTI", "Haiti";
    HU => "HUN", "Hungary";
    ID => "IDN", "Indonesia";
    IE => "IRL", "Ireland";
    IL => "ISR", "Israel";
    IM => "IMN", "Isle of Man";
    IN => "IND", "India";
    IO => "IOT", "British Indian Ocean Territory";
    IQ => "IRQ", "Iraq";
    IR => "IRN", "Iran";
    IS => "ISL", "Iceland";
    IT => "ITA", "Italy";
    JE => "JEY", "Jersey";
    JM => "JAM", "Jamaica";
    JO => "JOR", "Jordan";
    JP => "JPN", "Japan";
    KE => "KEN", "Kenya";
    KG => "KGZ", "Kyrgyzstan";
    KH => "KHM", "Cambodia";
    KI => "KIR", "Kiribati";
    KM => "COM", "Comoros";
    KN => "KNA", "Saint Kitts and Nevis";
    KP => "PRK", "Korea, Democratic People's Republic of";
    KR => "KOR", "Korea, Republic of";
    KW => "KWT", "Kuwait";
    KY => "CYM", "Cayman Islands";
    KZ => "KAZ", "Kazakhstan";
    LA => "LAO", "Lao People's Democratic Republic";
    LB => "LBN", "Lebanon";
    LC => "LCA", "Saint Lucia";
    LI => "LIE", "Liechtenstein";
    LK => "LKA", "Sri Lanka";
    LR => "LBR", "Liberia";
    LS => "LSO", "Lesotho";
    LT => "LTU", "Lithuania";
    LU => "LUX", "Luxembourg";
    LV => "LVA", "Latvia";
    LY => "LBY", "Libya";
    MA => "MAR", "Morocco";
    MC => "MCO", "Monaco";
    MD => "MDA", "Moldova, Republic of";
    ME => "MNE", "Montenegro";
    MF => "MAF", "Saint Martin (French part)";
    MG => "MDG", "Madagascar";
    MH => "MHL", "Marshall Islands";
    MK => "MKD", "North Macedonia";
    ML => "MLI", "Mali";
    MM => "MMR", "Myanmar";
    MN => "MNG", "Mongolia";
    MO => "MAC", "Macao";
    MP => "MNP", "Northern Mariana Islands";
    MQ => "MTQ", "Martinique";
    MR => "MRT", "Mauritania";
    MS => "MSR", "Montserrat";
    MT => "MLT", "Malta";
    MU => "MUS", "Mauritius";
    MV => "MDV", "Maldives";
    MW => "MWI", "Malawi";
    MX => "MEX", "Mexico";
    MY => "MYS", "Malaysia";
    MZ => "MOZ", "Mozambique";
    NA => "NAM", "Namibia";
    NC => "NCL", "New Caledonia";
    NE => "NER", "Niger";
    NF => "NFK", "Norfolk Island";
    NG => "NGA", "Nigeria";
    NI => "NIC", "Nicaragua";
    NL => "NLD", "Netherlands";
    NO => "NOR", "Norway";
    NP => "NPL", "Nepal";
    NR => "NRU", "Nauru";
    NT => "NTZ", "Neutral Zone", since 1993-07;
    NU => "NIU", "Niue";
    NZ => "NZL", "New Zealand";
    OM => "OMN", "Oman";
    PA => "PAN", "Panama";
    PE => "PER", "Peru";
    PF => "PYF", "French Polynesia";
    PG => "PNG", "Papua New Guinea";
    PH => "PHL", "Philippines";
    PK => "PAK", "Pakistan";
    PL => "POL", "Poland";
    PM => "SPM", "Saint Pierre and Miquelon";
    PN => "PCN", "Pitcairn";
    PR => "PRI", "Puerto Rico";
    PS => "PSE", "Palestine, State of";
    PT => "PRT", "Portugal";
    PW => "PLW", "Palau";
    PY => "PRY", "Paraguay";
    QA => "QAT", "Qatar";
    RE => "REU", "Réunion";
    RO => "ROU", "Romania";
    RS => "SRB", "Serbia";
    RU => "RUS", "Russian Federation";
    RW => "RWA", "Rwanda";
    SA => "SAU", "Saudi Arabia";
    SB => "SLB", "Solomon Islands";
    SC => "SYC", "Seychelles";
    SD => "SDN", "Sudan";
    SE => "SWE", "Sweden";
    SG => "SGP", "Singapore";
    SH => "SHN", "Saint Helena, Ascension and Tristan da Cunha";
    SI => "SVN", "Slovenia";
    SJ => "SJM", "Svalbard and Jan Mayen";
    SK => "SVK", "Slovakia";
    SL => "SLE", "Sierra Leone";
    SM => "SMR", "San Marino";
    SN => "SEN", "Senegal";
    SO => "SOM", "Somalia";
    SR => "SUR", "Suriname";
    SS => "SSD", "South Sudan";
    ST => "STP", "Sao Tome and Principe";
    SU => "SUN", "USSR", since 1992-08;
    SV => "SLV", "El Salvador";
    SX => "SXM", "Sint Maarten (Dutch part)";
    SY => "SYR", "Syrian Arab Republic";
    SZ => "SWZ", "Eswatini";
    TC => "TCA", "Turks and Caicos Islands";
    TD => "TCD", "Chad";
    TF => "ATF", "French Southern Territories";
    TG => "TGO", "Togo";
    TH => "THA", "Thailand";
    TJ => "TJK", "Tajikistan";
    TK => "TKL", "Tokelau";
    TL => "TLS", "Timor-Leste";
    TM => "TKM", "Turkmenistan";
    TN => "TUN", "Tunisia";
    TO => "TON", "Tonga";
    TP => "TMP", "East Timor", since 2002-05;
    TR => "TUR", "Türkiye";
    TT => "TTO", "Trinidad and Tobago";
    TV => "TUV", "Tuvalu";
    TW => "TWN", "Taiwan";
    TZ => "TZA", "Tanzania, United Republic of";
    UA => "UKR", "Ukraine";
    UG => "UGA", "Uganda";
    UM => "UMI", "United States Minor Outlying Islands";
    US => "USA", "United States";
    UY => "URY", "Uruguay";
    UZ => "UZB", "Uzbekistan";
    VA => "VAT", "Holy See (Vatican City State)";
    VC => "VCT", "Saint Vincent and the Grenadines";
    VE => "VEN", "Venezuela";
    VG => "VGB", "Virgin Islands, British";
    VI => "VIR", "Virgin Islands, U.S.";
    VN => "VNM", "Viet Nam";
    VU => "VUT", "Vanuatu";
    WF => "WLF", "Wallis and Futuna";
    WS => "WSM", "Samoa";
    XK => "XKX", "Kosovo";
    YE => "YEM", "Yemen";
    YT => "MYT", "Mayotte";
    YU => "YUG", "Yugoslavia", since 2003-07;
    ZA => "ZAF", "South Africa";
    ZM => "ZMB", "Zambia";
    ZR => "ZAR", "Zaire", since 1997-07;
    ZW => "ZWE", "Zimbabwe";
}

impl CountryCode {
    /// Returns the alpha-2 code as a static string slice
    pub fn alpha2(&self) -> &'static str {
        self.into()
    }

    /// True for codes that are only transitionally reserved
    pub fn is_transitional(&self) -> bool {
        self.transitional_since().is_some()
    }

    /// Look up a code by its alpha-2 form. Exact, upper case match only.
    pub fn by_alpha2(code: &str) -> Option<Self> {
        code.parse().ok()
    }

    /// Look up a code by its alpha-3 form. Exact, upper case match only.
    pub fn by_alpha3(code: &str) -> Option<Self> {
        static BY_ALPHA3: OnceLock<HashMap<&'static str, CountryCode>> = OnceLock::new();

        BY_ALPHA3
            .get_or_init(|| CountryCode::iter().map(|c| (c.alpha3(), c)).collect())
            .get(code)
            .copied()
    }

    /// Iterate over every known code, in alphabetical order
    pub fn all() -> impl Iterator<Item = CountryCode> {
        CountryCode::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_alpha2() {
        assert_eq!("AT".parse::<CountryCode>().unwrap(), CountryCode::AT);
        assert_eq!(CountryCode::by_alpha2("XK"), Some(CountryCode::XK));
        assert!("ZZ".parse::<CountryCode>().is_err());
        assert!(CountryCode::by_alpha2("at").is_none());
    }

    #[test]
    fn test_display_is_alpha2() {
        assert_eq!(CountryCode::GB.to_string(), "GB");
        assert_eq!(CountryCode::GB.alpha2(), "GB");
    }

    #[test]
    fn test_alpha3_lookup() {
        assert_eq!(CountryCode::by_alpha3("DEU"), Some(CountryCode::DE));
        assert_eq!(CountryCode::by_alpha3("XKX"), Some(CountryCode::XK));
        assert_eq!(CountryCode::by_alpha3("ZZZ"), None);
    }

    #[test]
    fn test_alpha3_is_unique() {
        let mut seen = std::collections::HashSet::new();
        for code in CountryCode::all() {
            assert!(seen.insert(code.alpha3()), "duplicate alpha-3 {}", code.alpha3());
        }
    }

    #[test]
    fn test_transitional_codes() {
        assert!(CountryCode::YU.is_transitional());
        assert_eq!(
            CountryCode::YU.transitional_since(),
            NaiveDate::from_ymd_opt(2003, 7, 1)
        );
        assert!(!CountryCode::RS.is_transitional());
    }

    #[test]
    fn test_names() {
        assert_eq!(CountryCode::BE.name(), "Belgium");
        assert_eq!(CountryCode::ES.name(), "Spain");
    }

    #[test]
    fn test_serde_as_alpha2() {
        let json = serde_json::to_string(&CountryCode::FR).unwrap();
        assert_eq!(json, "\"FR\"");
        let parsed: CountryCode = serde_json::from_str("\"NL\"").unwrap();
        assert_eq!(parsed, CountryCode::NL);
    }
}
