//! Brazilian individual taxpayer number (CPF).
//!
//! A CPF is eleven digits where the last two are modulo-11 check digits over
//! the preceding ones. Clients may submit either the bare digits or the
//! masked `ddd.ddd.ddd-dd` form; the domain always stores the bare digits.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Number of digits in a normalized CPF.
pub const CPF_LENGTH: usize = 11;

static CPF_SHAPE_RE: OnceLock<Regex> = OnceLock::new();

fn cpf_shape_regex() -> &'static Regex {
    CPF_SHAPE_RE.get_or_init(|| {
        // Dots are optional in the masked form, the dash is not.
        let pattern = r"^(?:\d{3}\.?\d{3}\.?\d{3}-\d{2}|\d{11})$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("CPF regex failed to compile: {error}"))
    })
}

/// Reasons a raw value is not a CPF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CpfValidationError {
    /// Input is empty once surrounding whitespace is removed.
    #[error("CPF must not be empty")]
    Empty,
    /// Input does not match the bare or masked CPF layout.
    #[error("CPF must contain 11 digits, optionally masked as ddd.ddd.ddd-dd")]
    Malformed,
    /// All digits are the same, which the checksum accepts but the registry never issues.
    #[error("CPF must not be a repeated digit sequence")]
    RepeatedDigits,
    /// One of the two check digits does not match.
    #[error("CPF check digits do not match")]
    ChecksumMismatch,
}

/// Validated CPF stored as eleven ASCII digits.
///
/// ## Invariants
/// - exactly [`CPF_LENGTH`] ASCII digits;
/// - not a single repeated digit;
/// - both check digits satisfy the modulo-11 rule.
///
/// # Examples
/// ```
/// use clientes::domain::Cpf;
///
/// let cpf = Cpf::parse("529.982.247-25").expect("valid CPF");
/// assert_eq!(cpf.as_str(), "52998224725");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    /// Validate raw input and normalize it to bare digits.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, CpfValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CpfValidationError::Empty);
        }
        if !cpf_shape_regex().is_match(trimmed) {
            return Err(CpfValidationError::Malformed);
        }

        let digits: Vec<u32> = trimmed.chars().filter_map(|c| c.to_digit(10)).collect();
        if digits.len() != CPF_LENGTH {
            return Err(CpfValidationError::Malformed);
        }
        if digits.iter().all(|digit| Some(digit) == digits.first()) {
            return Err(CpfValidationError::RepeatedDigits);
        }

        let first = check_digit(&digits[..9]);
        let second = check_digit(&digits[..10]);
        if digits[9] != first || digits[10] != second {
            return Err(CpfValidationError::ChecksumMismatch);
        }

        Ok(Self(
            digits
                .iter()
                .filter_map(|digit| char::from_digit(*digit, 10))
                .collect(),
        ))
    }

    /// Borrow the normalized digits.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Modulo-11 check digit over `digits`, weighted from `len + 1` down to 2.
fn check_digit(digits: &[u32]) -> u32 {
    let top_weight = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=top_weight).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();
    match sum % 11 {
        0 | 1 => 0,
        remainder => 11 - remainder,
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Cpf {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Cpf> for String {
    fn from(value: Cpf) -> Self {
        value.0
    }
}

impl TryFrom<String> for Cpf {
    type Error = CpfValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests {
    //! Checksum and layout coverage for CPF parsing.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("52998224725", "52998224725")]
    #[case("529.982.247-25", "52998224725")]
    #[case("529982247-25", "52998224725")]
    #[case("111.444.777-35", "11144477735")]
    #[case("  11144477735 ", "11144477735")]
    fn accepts_valid_cpfs(#[case] raw: &str, #[case] expected: &str) {
        let cpf = Cpf::parse(raw).expect("valid CPF");
        assert_eq!(cpf.as_str(), expected);
    }

    #[rstest]
    #[case("", CpfValidationError::Empty)]
    #[case("   ", CpfValidationError::Empty)]
    #[case("123", CpfValidationError::Malformed)]
    #[case("5299822472a", CpfValidationError::Malformed)]
    #[case("529.982.24725", CpfValidationError::Malformed)]
    #[case("529982247250", CpfValidationError::Malformed)]
    #[case("11111111111", CpfValidationError::RepeatedDigits)]
    #[case("000.000.000-00", CpfValidationError::RepeatedDigits)]
    #[case("52998224726", CpfValidationError::ChecksumMismatch)]
    #[case("52998224715", CpfValidationError::ChecksumMismatch)]
    fn rejects_invalid_cpfs(#[case] raw: &str, #[case] expected: CpfValidationError) {
        let err = Cpf::parse(raw).expect_err("invalid CPF");
        assert_eq!(err, expected);
    }

    #[rstest]
    fn check_digit_uses_zero_for_small_remainders() {
        // 1*9 + 1*3 = 12, remainder 1.
        assert_eq!(check_digit(&[0, 1, 0, 0, 0, 0, 0, 1, 0]), 0);
    }

    #[rstest]
    fn deserialization_normalizes_masked_values() {
        let cpf: Cpf = serde_json::from_str("\"529.982.247-25\"").expect("deserialize CPF");
        assert_eq!(cpf.as_str(), "52998224725");
    }

    #[rstest]
    fn deserialization_rejects_invalid_values() {
        let result: Result<Cpf, _> = serde_json::from_str("\"123\"");
        assert!(result.is_err());
    }
}
