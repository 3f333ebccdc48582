//! Fixed-point representation for asset balances.
//!
//! Balances carry up to 8 fractional digits, so they are stored as a signed
//! 64-bit integer scaled by 1e8. Multiplying a balance by a fiat price is
//! done in 128-bit arithmetic and scaled back down, which keeps repeated
//! portfolio recomputation exactly reproducible.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::fiat_amount::parse_fixed_point;
use crate::fiat_amount::FiatAmount;
use crate::fiat_amount::ParseFiatAmountError;

/// Number of fractional digits a balance can carry.
pub const ASSET_DECIMALS: u32 = 8;

const UNITS_PER_WHOLE: i64 = 100_000_000;

/// An asset quantity (e.g., 1.245 BTC), stored in 1e-8 units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct AssetAmount(i64);

impl AssetAmount {
    /// Creates an amount directly from its smallest (1e-8) unit.
    pub fn from_units(units: i64) -> Self {
        Self(units)
    }

    /// Creates an amount from a whole number of coins.
    pub fn whole(coins: i64) -> Self {
        Self(coins * UNITS_PER_WHOLE)
    }

    /// Returns the raw amount in 1e-8 units.
    pub fn as_units(&self) -> i64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parses a decimal string with at most 8 fractional digits.
    pub fn from_str_exact(s: &str) -> Result<Self, ParseFiatAmountError> {
        parse_fixed_point(s, ASSET_DECIMALS).map(Self)
    }

    /// The fiat value of this quantity at the given unit price.
    ///
    /// Computed as `units * price_minor / 1e8` in i128, truncating toward
    /// zero, so the result never drifts across recomputation.
    pub fn fiat_value(&self, price: FiatAmount) -> FiatAmount {
        let product = self.0 as i128 * price.as_minor_units() as i128;
        let minor = product / UNITS_PER_WHOLE as i128;
        FiatAmount::from_minor(minor as i64)
    }
}

/// Formats the amount as a decimal string with trailing zeros trimmed
/// (e.g., "1.245", "150", "0.00000001").
impl fmt::Display for AssetAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let whole = (self.0 / UNITS_PER_WHOLE).abs();
        let frac = (self.0 % UNITS_PER_WHOLE).abs();
        if frac == 0 {
            return write!(f, "{sign}{whole}");
        }
        let frac_str = format!("{frac:08}");
        write!(f, "{sign}{whole}.{}", frac_str.trim_end_matches('0'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_up_to_eight_decimals() {
        assert_eq!(AssetAmount::from_str_exact("1.245").unwrap().as_units(), 124_500_000);
        assert_eq!(AssetAmount::from_str_exact("0.00000001").unwrap().as_units(), 1);
        assert_eq!(AssetAmount::from_str_exact("150").unwrap().as_units(), 15_000_000_000);
        assert_eq!(
            AssetAmount::from_str_exact("0.000000001").unwrap_err(),
            ParseFiatAmountError::TooManyDecimals
        );
    }

    #[test]
    fn display_trims_trailing_zeros() {
        assert_eq!(AssetAmount::from_str_exact("1.24500000").unwrap().to_string(), "1.245");
        assert_eq!(AssetAmount::whole(150).to_string(), "150");
        assert_eq!(AssetAmount::from_units(1).to_string(), "0.00000001");
    }

    #[test]
    fn fiat_value_uses_exact_integer_math() {
        // 1.245 BTC at $64,500.00
        let balance = AssetAmount::from_str_exact("1.245").unwrap();
        let price = FiatAmount::from_major(64_500);
        assert_eq!(balance.fiat_value(price).as_minor_units(), 8_030_250);

        // 8.5 ETH at $3,200.00
        let balance = AssetAmount::from_str_exact("8.5").unwrap();
        let price = FiatAmount::from_major(3_200);
        assert_eq!(balance.fiat_value(price).as_minor_units(), 2_720_000);
    }
}
