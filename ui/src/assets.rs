//! Asset metadata and the fixture dataset backing the dashboard.
//!
//! The asset collection is a read-only input to the state core: balances
//! and prices are static sample data, never recomputed against a ledger.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::asset_amount::AssetAmount;
use crate::fiat_amount::FiatAmount;

/// The currencies the wallet knows about.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum CurrencyCode {
    BTC,
    ETH,
    XMR,
    USDT,
    USDC,
}

impl CurrencyCode {
    /// The deposit address shown on the Receive screen for this currency.
    ///
    /// Static sample addresses; the ERC-20 tokens share the ETH address.
    pub fn deposit_address(&self) -> &'static str {
        match self {
            CurrencyCode::BTC => "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh",
            CurrencyCode::ETH | CurrencyCode::USDT | CurrencyCode::USDC => {
                "0x71C7656EC7ab88b098defB751B7401B5f6d8976F"
            }
            CurrencyCode::XMR => "44AFFq5kSiGBoZ4NMDwYtN1800291919293...",
        }
    }
}

/// A 24h price movement in basis points (240 == +2.4%).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BasisPoints(pub i32);

impl BasisPoints {
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

/// Formats as a percentage with trailing zeros trimmed (e.g., "2.4", "0.01").
impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = (self.0 / 100).abs();
        let frac = (self.0 % 100).abs();
        let sign = if self.0 < 0 { "-" } else { "" };
        if frac == 0 {
            return write!(f, "{sign}{whole}");
        }
        let frac_str = format!("{frac:02}");
        write!(f, "{sign}{whole}.{}", frac_str.trim_end_matches('0'))
    }
}

/// A single currency holding.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub code: CurrencyCode,
    pub name: &'static str,
    pub balance: AssetAmount,
    pub price: FiatAmount,
    pub change_24h: BasisPoints,
    pub network: &'static str,
}

impl Asset {
    /// `balance * price`, the asset's contribution to the portfolio total.
    pub fn fiat_value(&self) -> FiatAmount {
        self.balance.fiat_value(self.price)
    }
}

/// The sample holdings. Codes are unique within the collection; the first
/// entry doubles as the fallback selection.
pub fn sample_assets() -> Vec<Asset> {
    vec![
        Asset {
            code: CurrencyCode::BTC,
            name: "Bitcoin",
            balance: AssetAmount::from_units(124_500_000),
            price: FiatAmount::from_major(64_500),
            change_24h: BasisPoints(240),
            network: "Bitcoin Core",
        },
        Asset {
            code: CurrencyCode::ETH,
            name: "Ethereum",
            balance: AssetAmount::from_units(850_000_000),
            price: FiatAmount::from_major(3_200),
            change_24h: BasisPoints(-120),
            network: "Ethereum Mainnet",
        },
        Asset {
            code: CurrencyCode::XMR,
            name: "Monero",
            balance: AssetAmount::whole(150),
            price: FiatAmount::from_minor(16_550),
            change_24h: BasisPoints(510),
            network: "Monero Network",
        },
        Asset {
            code: CurrencyCode::USDT,
            name: "Tether",
            balance: AssetAmount::whole(5_420),
            price: FiatAmount::from_major(1),
            change_24h: BasisPoints(1),
            network: "ERC-20",
        },
        Asset {
            code: CurrencyCode::USDC,
            name: "USD Coin",
            balance: AssetAmount::whole(2_100),
            price: FiatAmount::from_major(1),
            change_24h: BasisPoints(0),
            network: "ERC-20",
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::str::FromStr;

    use super::*;

    #[test]
    fn fixture_codes_are_unique() {
        let assets = sample_assets();
        let codes: HashSet<_> = assets.iter().map(|a| a.code).collect();
        assert_eq!(codes.len(), assets.len());
    }

    #[test]
    fn fixture_amounts_are_non_negative() {
        for asset in sample_assets() {
            assert!(asset.balance.as_units() >= 0, "{} balance", asset.code);
            assert!(asset.price.as_minor_units() >= 0, "{} price", asset.code);
            assert!(asset.fiat_value().as_minor_units() >= 0, "{} value", asset.code);
        }
    }

    #[test]
    fn currency_codes_round_trip_through_strings() {
        for code in [
            CurrencyCode::BTC,
            CurrencyCode::ETH,
            CurrencyCode::XMR,
            CurrencyCode::USDT,
            CurrencyCode::USDC,
        ] {
            assert_eq!(CurrencyCode::from_str(&code.to_string()).unwrap(), code);
        }
        assert!(CurrencyCode::from_str("DOGE").is_err());
    }

    #[test]
    fn change_display_trims_zeros() {
        assert_eq!(BasisPoints(240).to_string(), "2.4");
        assert_eq!(BasisPoints(-120).to_string(), "-1.2");
        assert_eq!(BasisPoints(1).to_string(), "0.01");
        assert_eq!(BasisPoints(0).to_string(), "0");
    }
}
