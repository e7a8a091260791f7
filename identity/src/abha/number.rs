//! 14-digit ABHA numbers: generation, canonical grouping, masking, and
//! validation.
//!
//! Validation is intentionally loose about grouping: stripping `-` and
//! whitespace must leave exactly 14 decimal digits, and nothing else is
//! checked. `"12345678901234"` and `"1234-5678-901234"` are equally valid.
//! The canonical display form puts the dashes back: `dddd-dddd-dddddd`.

use crate::config::{ABHA_GROUP_WIDTHS, ABHA_MASK_VISIBLE_DIGITS, ABHA_NUMBER_DIGITS};
use rand::Rng;
use std::fmt;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur when parsing a typed [`AbhaNumber`].
#[derive(Debug, Error)]
pub enum AbhaNumberError {
    /// After separator stripping, a non-digit character remains.
    #[error("non-digit character {found:?} in ABHA number")]
    NonDigit {
        /// The offending character.
        found: char,
    },

    /// After separator stripping, the digit count is wrong.
    #[error("expected {expected} digits, got {got}")]
    WrongLength {
        /// The required digit count.
        expected: usize,
        /// The count that was actually found.
        got: usize,
    },
}

// ---------------------------------------------------------------------------
// AbhaNumber
// ---------------------------------------------------------------------------

/// A 14-digit health account number, stored canonically.
///
/// Generated numbers are random and carry no uniqueness guarantee beyond
/// probability; deduplication against issued numbers belongs to whatever
/// registry stores them.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use sehat_identity::abha::AbhaNumber;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let number = AbhaNumber::generate(&mut rng);
/// assert_eq!(number.to_string().len(), 16); // 14 digits + 2 dashes
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct AbhaNumber {
    digits: [u8; ABHA_NUMBER_DIGITS],
}

impl AbhaNumber {
    /// Draw 14 independent uniform decimal digits from the given RNG.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut digits = [0u8; ABHA_NUMBER_DIGITS];
        for digit in &mut digits {
            *digit = rng.gen_range(0..10);
        }
        Self { digits }
    }

    /// Parse a number in any accepted spelling (dashes and whitespace are
    /// ignored) into its canonical form.
    pub fn parse(input: &str) -> Result<Self, AbhaNumberError> {
        let stripped = strip_separators(input);
        if let Some(found) = stripped.chars().find(|c| !c.is_ascii_digit()) {
            return Err(AbhaNumberError::NonDigit { found });
        }
        if stripped.len() != ABHA_NUMBER_DIGITS {
            return Err(AbhaNumberError::WrongLength {
                expected: ABHA_NUMBER_DIGITS,
                got: stripped.len(),
            });
        }

        let mut digits = [0u8; ABHA_NUMBER_DIGITS];
        for (slot, c) in digits.iter_mut().zip(stripped.chars()) {
            *slot = c as u8 - b'0';
        }
        Ok(Self { digits })
    }

    /// The raw digits, most significant first.
    pub fn digits(&self) -> &[u8; ABHA_NUMBER_DIGITS] {
        &self.digits
    }

    /// The masked display form: all but the last four digits replaced
    /// with `X`, dashes preserved.
    pub fn masked(&self) -> String {
        mask_abha_number(&self.to_string())
    }
}

impl fmt::Display for AbhaNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pos = 0;
        for (group, width) in ABHA_GROUP_WIDTHS.iter().enumerate() {
            if group > 0 {
                f.write_str("-")?;
            }
            for digit in &self.digits[pos..pos + width] {
                write!(f, "{digit}")?;
            }
            pos += width;
        }
        Ok(())
    }
}

impl fmt::Debug for AbhaNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AbhaNumber({self})")
    }
}

// ---------------------------------------------------------------------------
// Free functions over arbitrary text
// ---------------------------------------------------------------------------

fn strip_separators(input: &str) -> String {
    input
        .chars()
        .filter(|c| *c != '-' && !c.is_whitespace())
        .collect()
}

fn is_canonical_digits(stripped: &str) -> bool {
    stripped.len() == ABHA_NUMBER_DIGITS && stripped.chars().all(|c| c.is_ascii_digit())
}

fn group_digits(stripped: &str) -> String {
    let mut out = String::with_capacity(ABHA_NUMBER_DIGITS + ABHA_GROUP_WIDTHS.len() - 1);
    let mut pos = 0;
    for (group, width) in ABHA_GROUP_WIDTHS.iter().enumerate() {
        if group > 0 {
            out.push('-');
        }
        out.push_str(&stripped[pos..pos + width]);
        pos += width;
    }
    out
}

/// True iff stripping `-` and whitespace leaves exactly 14 decimal digits.
///
/// Grouping is not enforced. Total over all inputs, never errors.
pub fn validate_abha_number(input: &str) -> bool {
    is_canonical_digits(&strip_separators(input))
}

/// Re-render a number in the canonical `dddd-dddd-dddddd` grouping.
///
/// Input that does not strip to exactly 14 digits is returned unchanged;
/// the fallback is a defined no-op, not an error.
pub fn format_abha_number(input: &str) -> String {
    let stripped = strip_separators(input);
    if !is_canonical_digits(&stripped) {
        return input.to_string();
    }
    group_digits(&stripped)
}

/// Mask a number for display: canonical formatting first, then every digit
/// except the last four becomes `X`, with dash positions untouched.
///
/// When formatting fell back on malformed input, the digit replacement
/// still applies to whatever string resulted; callers must not assume a
/// fixed-width output in that case.
pub fn mask_abha_number(input: &str) -> String {
    let formatted = format_abha_number(input);
    let digit_count = formatted.chars().filter(|c| c.is_ascii_digit()).count();
    let hidden = digit_count.saturating_sub(ABHA_MASK_VISIBLE_DIGITS);

    let mut seen = 0;
    formatted
        .chars()
        .map(|c| {
            if c.is_ascii_digit() {
                seen += 1;
                if seen <= hidden {
                    return 'X';
                }
            }
            c
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
