//! A safe, self-contained type for representing USD amounts.
//!
//! All portfolio figures in the dashboard are quoted in a single reference
//! currency, so the amount is stored as a signed 64-bit integer in cents to
//! prevent floating-point inaccuracies across repeated recomputation.

use std::fmt;
use std::ops::Add;
use std::ops::AddAssign;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Number of decimal places in the reference currency.
pub const FIAT_DECIMALS: u32 = 2;

const MINOR_PER_MAJOR: i64 = 100;

/// An error that can occur when parsing a string into a `FiatAmount`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseFiatAmountError {
    /// The string is not in a valid numeric format (e.g., "abc", "1.2.3").
    #[error("invalid fiat amount format")]
    InvalidFormat,
    /// The string has more decimal places than the currency supports (e.g., "1.234").
    #[error("too many decimal places")]
    TooManyDecimals,
}

/// A monetary value in the reference currency, stored in cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct FiatAmount(i64);

impl FiatAmount {
    /// Creates a new `FiatAmount` directly from its smallest unit.
    ///
    /// ```ignore
    /// // 12345 cents represents $123.45
    /// let amount = FiatAmount::from_minor(12345);
    /// assert_eq!(amount.to_string(), "123.45");
    /// ```
    pub fn from_minor(amount: i64) -> Self {
        Self(amount)
    }

    /// Creates a new `FiatAmount` from whole currency units.
    pub fn from_major(amount: i64) -> Self {
        Self(amount * MINOR_PER_MAJOR)
    }

    /// Returns the raw amount in cents.
    pub fn as_minor_units(&self) -> i64 {
        self.0
    }

    /// Creates a new `FiatAmount` by parsing a string representation.
    ///
    /// Fails if the string is not a valid number or has more than two
    /// decimal places.
    pub fn from_str_exact(s: &str) -> Result<Self, ParseFiatAmountError> {
        let minor = parse_fixed_point(s, FIAT_DECIMALS)?;
        Ok(Self(minor))
    }

    /// Checked addition. Returns `None` on overflow.
    pub fn checked_add(&self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Saturating subtraction, used for "remaining" style figures.
    pub fn saturating_sub(&self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Formats the amount with thousands separators (e.g., "107,502.50").
    pub fn to_string_grouped(&self) -> String {
        let minor = self.0.abs() % MINOR_PER_MAJOR;
        let major = (self.0 / MINOR_PER_MAJOR).abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{sign}{}.{minor:02}", group_thousands(major))
    }

    /// Formats the amount with a leading dollar symbol (e.g., "$107,502.50").
    pub fn to_string_with_symbol(&self) -> String {
        format!("${}", self.to_string_grouped())
    }
}

/// Parses a plain decimal string into an integer scaled by `decimals`.
///
/// Shared by `FiatAmount` and `AssetAmount`; both store fixed-point values.
pub(crate) fn parse_fixed_point(s: &str, decimals: u32) -> Result<i64, ParseFiatAmountError> {
    let (is_negative, s) = match s.strip_prefix('-') {
        Some(stripped) => (true, stripped),
        None => (false, s),
    };

    let mut parts = s.split('.');
    let major_str = parts.next().unwrap_or("");
    let minor_str = parts.next().unwrap_or("");

    if parts.next().is_some() || (major_str.is_empty() && minor_str.is_empty()) {
        return Err(ParseFiatAmountError::InvalidFormat);
    }

    if minor_str.len() > decimals as usize {
        return Err(ParseFiatAmountError::TooManyDecimals);
    }

    let major_units = if major_str.is_empty() {
        0
    } else {
        major_str
            .parse::<i64>()
            .map_err(|_| ParseFiatAmountError::InvalidFormat)?
    };

    let minor_units = if minor_str.is_empty() {
        0
    } else {
        minor_str
            .parse::<i64>()
            .map_err(|_| ParseFiatAmountError::InvalidFormat)?
    };

    let scaling_factor = 10_i64.pow(decimals - minor_str.len() as u32);
    let scaled_minor_units = minor_units
        .checked_mul(scaling_factor)
        .ok_or(ParseFiatAmountError::InvalidFormat)?;

    let multiplier = 10_i64.pow(decimals);
    let mut total = major_units
        .checked_mul(multiplier)
        .ok_or(ParseFiatAmountError::InvalidFormat)?
        .checked_add(scaled_minor_units)
        .ok_or(ParseFiatAmountError::InvalidFormat)?;

    if is_negative {
        total = -total;
    }

    Ok(total)
}

/// Inserts a comma every three digits, right to left.
pub(crate) fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats the amount as a plain numeric string (e.g., "25.34").
impl fmt::Display for FiatAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let minor = self.0.abs() % MINOR_PER_MAJOR;
        let major = (self.0 / MINOR_PER_MAJOR).abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{sign}{major}.{minor:02}")
    }
}

impl Add for FiatAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for FiatAmount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_major_and_minor_units() {
        assert_eq!(FiatAmount::from_str_exact("123.45").unwrap().as_minor_units(), 12345);
        assert_eq!(FiatAmount::from_str_exact("123").unwrap().as_minor_units(), 12300);
        assert_eq!(FiatAmount::from_str_exact(".5").unwrap().as_minor_units(), 50);
        assert_eq!(FiatAmount::from_str_exact("-1.25").unwrap().as_minor_units(), -125);
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(
            FiatAmount::from_str_exact("abc").unwrap_err(),
            ParseFiatAmountError::InvalidFormat
        );
        assert_eq!(
            FiatAmount::from_str_exact("1.2.3").unwrap_err(),
            ParseFiatAmountError::InvalidFormat
        );
        assert_eq!(
            FiatAmount::from_str_exact("").unwrap_err(),
            ParseFiatAmountError::InvalidFormat
        );
        assert_eq!(
            FiatAmount::from_str_exact("1.234").unwrap_err(),
            ParseFiatAmountError::TooManyDecimals
        );
    }

    #[test]
    fn displays_as_plain_decimal() {
        assert_eq!(FiatAmount::from_minor(12345).to_string(), "123.45");
        assert_eq!(FiatAmount::from_minor(5).to_string(), "0.05");
        assert_eq!(FiatAmount::from_minor(-125).to_string(), "-1.25");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(FiatAmount::from_minor(10750250).to_string_grouped(), "107,502.50");
        assert_eq!(FiatAmount::from_minor(99).to_string_grouped(), "0.99");
        assert_eq!(
            FiatAmount::from_major(1_000_000).to_string_with_symbol(),
            "$1,000,000.00"
        );
    }
}
