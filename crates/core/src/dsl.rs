//! Structure format notation
//!
//! Legacy text notation describing a BBAN layout as concatenated tokens:
//!
//! ```text
//! token  := length ["!"] class
//! length := digit+
//! class  := "n" | "a" | "c" | "e"
//! ```
//!
//! `!` marks a fixed length; without it the length is an upper bound.
//! Example: `4!n4!n2!n10!n` is the Spanish BBAN.

use crate::error::StructureSyntaxError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Character class letter of a format token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatClass {
    /// `n` - digits
    Numeric,
    /// `a` - upper case letters
    UpperAlpha,
    /// `c` - digits and upper case letters
    Alphanumeric,
    /// `e` - blank space
    Blank,
}

impl FormatClass {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'n' => Some(FormatClass::Numeric),
            'a' => Some(FormatClass::UpperAlpha),
            'c' => Some(FormatClass::Alphanumeric),
            'e' => Some(FormatClass::Blank),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            FormatClass::Numeric => 'n',
            FormatClass::UpperAlpha => 'a',
            FormatClass::Alphanumeric => 'c',
            FormatClass::Blank => 'e',
        }
    }

    /// Whether `c` belongs to this class
    pub fn accepts(&self, c: char) -> bool {
        match self {
            FormatClass::Numeric => c.is_ascii_digit(),
            FormatClass::UpperAlpha => c.is_ascii_uppercase(),
            FormatClass::Alphanumeric => c.is_ascii_digit() || c.is_ascii_uppercase(),
            FormatClass::Blank => c == ' ',
        }
    }
}

/// One parsed token such as `10!n`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormatToken {
    /// Exact length when `fixed`, maximum length otherwise
    pub length: usize,
    pub fixed: bool,
    pub class: FormatClass,
}

impl FormatToken {
    /// Whether `segment` satisfies this token's length rule and class
    pub fn matches(&self, segment: &str) -> bool {
        let len = segment.chars().count();
        let length_ok = if self.fixed {
            len == self.length
        } else {
            len <= self.length
        };
        length_ok && segment.chars().all(|c| self.class.accepts(c))
    }
}

impl fmt::Display for FormatToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.length,
            if self.fixed { "!" } else { "" },
            self.class.code()
        )
    }
}

/// Parse a format string into tokens.
///
/// # Example
/// ```
/// use ibankit_core::dsl::{parse_structure_format, FormatClass};
///
/// let tokens = parse_structure_format("5!n11c").unwrap();
/// assert_eq!(tokens.len(), 2);
/// assert!(tokens[0].fixed);
/// assert_eq!(tokens[1].length, 11);
/// assert_eq!(tokens[1].class, FormatClass::Alphanumeric);
/// ```
pub fn parse_structure_format(format: &str) -> Result<Vec<FormatToken>, StructureSyntaxError> {
    if format.is_empty() {
        return Err(StructureSyntaxError::Empty);
    }

    let mut tokens = Vec::new();
    let mut chars = format.char_indices().peekable();

    while let Some(&(start, _)) = chars.peek() {
        let mut length: usize = 0;
        let mut digits = 0;
        while let Some(&(_, c)) = chars.peek() {
            let Some(d) = c.to_digit(10) else { break };
            length = length
                .checked_mul(10)
                .and_then(|l| l.checked_add(d as usize))
                .ok_or(StructureSyntaxError::InvalidToken {
                    position: start,
                    reason: "length overflow",
                })?;
            digits += 1;
            chars.next();
        }
        if digits == 0 {
            return Err(StructureSyntaxError::InvalidToken {
                position: start,
                reason: "expected a length",
            });
        }
        if length == 0 {
            return Err(StructureSyntaxError::InvalidToken {
                position: start,
                reason: "length must be positive",
            });
        }

        let fixed = matches!(chars.peek(), Some(&(_, '!')));
        if fixed {
            chars.next();
        }

        let class = match chars.next() {
            Some((pos, c)) => FormatClass::from_code(c).ok_or(StructureSyntaxError::InvalidToken {
                position: pos,
                reason: "unknown character class",
            })?,
            None => {
                return Err(StructureSyntaxError::InvalidToken {
                    position: format.len(),
                    reason: "missing character class",
                })
            }
        };

        tokens.push(FormatToken {
            length,
            fixed,
            class,
        });
    }

    Ok(tokens)
}

/// Check a value against a format string, token by token.
///
/// Variable-length tokens consume greedily up to their maximum.
pub fn matches_format(format: &str, value: &str) -> Result<bool, StructureSyntaxError> {
    let tokens = parse_structure_format(format)?;
    let mut rest = value;

    for token in tokens {
        let take = rest
            .char_indices()
            .take(token.length)
            .take_while(|(_, c)| token.class.accepts(*c))
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        let (segment, tail) = rest.split_at(take);
        if !token.matches(segment) {
            return Ok(false);
        }
        rest = tail;
    }

    Ok(rest.is_empty())
}
