//! Textual IBAN representations

use std::borrow::Cow;

use ibankit_core::FormatViolation;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Group width of the printed form
pub const GROUP_SIZE: usize = 4;

/// Accepted input layout
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IbanFormat {
    /// `DE89370400440532013000`
    #[default]
    Compact,
    /// `DE89 3704 0044 0532 0130 00`
    Spaced,
}

impl IbanFormat {
    /// Strip the layout from `input`, returning the compact form.
    ///
    /// Spaced input must consist of groups of four characters separated
    /// by single spaces, the last group holding one to four characters.
    pub fn to_compact<'a>(&self, input: &'a str) -> Result<Cow<'a, str>, FormatViolation> {
        if input.is_empty() {
            return Err(FormatViolation::Empty);
        }
        match self {
            IbanFormat::Compact => Ok(Cow::Borrowed(input)),
            IbanFormat::Spaced => {
                let compact: String = input.chars().filter(|c| *c != ' ').collect();
                if compact.is_empty() || group(&compact) != input {
                    return Err(FormatViolation::Formatting(input.to_string()));
                }
                Ok(Cow::Owned(compact))
            }
        }
    }

    /// Render a compact IBAN in this layout
    pub fn render(&self, compact: &str) -> String {
        match self {
            IbanFormat::Compact => compact.to_string(),
            IbanFormat::Spaced => group(compact),
        }
    }
}

/// Split into space separated groups of four
pub fn group(compact: &str) -> String {
    let mut out = String::with_capacity(compact.len() + compact.len() / GROUP_SIZE);
    for (i, c) in compact.chars().enumerate() {
        if i > 0 && i % GROUP_SIZE == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}
