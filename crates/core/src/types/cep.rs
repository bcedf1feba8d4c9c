//! Brazilian postal code (CEP) type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Cep`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CepError {
    /// The input does not contain exactly 8 digits.
    #[error("CEP must contain exactly {expected} digits (got {got})")]
    WrongLength {
        /// Required digit count.
        expected: usize,
        /// Digit count found in the input.
        got: usize,
    },
}

/// A Brazilian postal code (Código de Endereçamento Postal).
///
/// A CEP is exactly 8 digits. User input commonly carries a hyphen
/// (`01310-100`) or stray characters; [`Cep::normalize`] reduces any input
/// to its digits, capped at 8, and [`Cep::parse`] accepts only inputs whose
/// digits form a complete code.
///
/// ## Examples
///
/// ```
/// use camiseta_core::Cep;
///
/// let cep = Cep::parse("01310-100").unwrap();
/// assert_eq!(cep.as_str(), "01310100");
/// assert_eq!(cep.formatted(), "01310-100");
///
/// assert!(Cep::parse("0131").is_err()); // incomplete
/// assert_eq!(Cep::normalize("01310-100xyz99"), "01310100");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Cep(String);

impl Cep {
    /// Number of digits in a complete CEP.
    pub const LENGTH: usize = 8;

    /// Reduce arbitrary input to CEP digits: strip every non-digit
    /// character and truncate to [`Self::LENGTH`] digits.
    #[must_use]
    pub fn normalize(raw: &str) -> String {
        raw.chars()
            .filter(char::is_ascii_digit)
            .take(Self::LENGTH)
            .collect()
    }

    /// Parse a `Cep` from a string.
    ///
    /// The input is normalized first, so `"01310-100"` and `"01310100"`
    /// are both accepted.
    ///
    /// # Errors
    ///
    /// Returns [`CepError::WrongLength`] if the input does not contain
    /// exactly 8 digits after normalization.
    pub fn parse(raw: &str) -> Result<Self, CepError> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.len() != Self::LENGTH {
            return Err(CepError::WrongLength {
                expected: Self::LENGTH,
                got: digits.len(),
            });
        }
        Ok(Self(digits))
    }

    /// Returns the 8 digits as a string slice, without separator.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Cep` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Returns the conventional hyphenated form, e.g. `01310-100`.
    #[must_use]
    pub fn formatted(&self) -> String {
        let (prefix, suffix) = self.0.split_at(5);
        format!("{prefix}-{suffix}")
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Cep {
    type Err = CepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Cep {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
