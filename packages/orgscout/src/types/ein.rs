//! Employer Identification Number.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExtractionError;

/// A validated EIN, stored as its nine digits.
///
/// Accepts `NN-NNNNNNN` or nine bare digits. Displays in the hyphenated form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ein(String);

impl Ein {
    /// Parse and validate an EIN.
    pub fn parse(input: &str) -> Result<Self, ExtractionError> {
        let trimmed = input.trim();
        let invalid = || ExtractionError::InvalidEin {
            input: input.to_string(),
        };

        let digits: String = match trimmed.split_once('-') {
            Some((prefix, rest)) if prefix.len() == 2 && rest.len() == 7 => {
                format!("{}{}", prefix, rest)
            }
            Some(_) => return Err(invalid()),
            None => trimmed.to_string(),
        };

        if digits.len() != 9 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        Ok(Self(digits))
    }

    /// The nine digits, no separator.
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// Canonical `NN-NNNNNNN` form.
    pub fn canonical(&self) -> String {
        format!("{}-{}", &self.0[..2], &self.0[2..])
    }
}

impl fmt::Display for Ein {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", &self.0[..2], &self.0[2..])
    }
}

impl FromStr for Ein {
    type Err = ExtractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Ein {
    type Error = ExtractionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Ein> for String {
    fn from(ein: Ein) -> Self {
        ein.canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hyphenated() {
        let ein = Ein::parse("75-3139219").unwrap();
        assert_eq!(ein.digits(), "753139219");
        assert_eq!(ein.to_string(), "75-3139219");
    }

    #[test]
    fn test_parse_bare_digits_matches_hyphenated() {
        assert_eq!(
            Ein::parse(" 753139219 ").unwrap(),
            Ein::parse("75-3139219").unwrap()
        );
    }

    #[test]
    fn test_rejects_malformed() {
        for input in ["", "75-313921", "7531392190", "753-139219", "75-31392a9", "abcdefghi"] {
            let err = Ein::parse(input).unwrap_err();
            assert!(
                matches!(err, ExtractionError::InvalidEin { .. }),
                "expected InvalidEin for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_serde_uses_canonical_form() {
        let ein = Ein::parse("753139219").unwrap();
        let json = serde_json::to_string(&ein).unwrap();
        assert_eq!(json, "\"75-3139219\"");

        let back: Ein = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ein);
    }
}
