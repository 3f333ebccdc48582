//! Pure derivation of portfolio figures from the asset collection.
//!
//! Nothing here is cached: screens recompute on every render, so the
//! derived values can never go stale relative to the dataset or the
//! current selection.

use crate::assets::Asset;
use crate::assets::CurrencyCode;
use crate::fiat_amount::FiatAmount;

/// Derived portfolio figures. Never stored; recomputed on every read.
#[derive(Debug, PartialEq)]
pub struct PortfolioSnapshot<'a> {
    pub total: FiatAmount,
    pub selected: &'a Asset,
}

/// Sums `balance * price` over the collection.
///
/// Accumulates in i128 cents so the result is deterministic and invariant
/// under reordering; saturates at the i64 range on (absurd) overflow.
pub fn compute_total(assets: &[Asset]) -> FiatAmount {
    let minor: i128 = assets
        .iter()
        .map(|a| a.fiat_value().as_minor_units() as i128)
        .sum();
    FiatAmount::from_minor(minor.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
}

/// The asset matching `code`, or the first asset when nothing matches.
///
/// The fallback is policy, not an error: the selection must always resolve
/// to something renderable even if the dataset changed under it. `None`
/// only for an empty collection.
pub fn resolve_selected(assets: &[Asset], code: CurrencyCode) -> Option<&Asset> {
    assets.iter().find(|a| a.code == code).or_else(|| assets.first())
}

/// Total plus resolved selection, as a single derived snapshot.
pub fn aggregate(assets: &[Asset], code: CurrencyCode) -> Option<PortfolioSnapshot<'_>> {
    let selected = resolve_selected(assets, code)?;
    Some(PortfolioSnapshot {
        total: compute_total(assets),
        selected,
    })
}

#[cfg(test)]
mod tests {
    use crate::asset_amount::AssetAmount;
    use crate::assets::sample_assets;
    use crate::assets::BasisPoints;

    use super::*;

    fn two_asset_fixture() -> Vec<Asset> {
        vec![
            Asset {
                code: CurrencyCode::BTC,
                name: "Bitcoin",
                balance: AssetAmount::from_str_exact("1.245").unwrap(),
                price: FiatAmount::from_major(64_500),
                change_24h: BasisPoints(0),
                network: "Bitcoin Core",
            },
            Asset {
                code: CurrencyCode::ETH,
                name: "Ethereum",
                balance: AssetAmount::from_str_exact("8.5").unwrap(),
                price: FiatAmount::from_major(3_200),
                change_24h: BasisPoints(0),
                network: "Ethereum Mainnet",
            },
        ]
    }

    #[test]
    fn total_matches_independent_sum() {
        // 1.245 * 64500 + 8.5 * 3200 = 80302.50 + 27200.00 = 107502.50
        let assets = two_asset_fixture();
        assert_eq!(compute_total(&assets), FiatAmount::from_minor(10_750_250));
        assert_eq!(compute_total(&assets).to_string_grouped(), "107,502.50");
    }

    #[test]
    fn total_is_invariant_under_reordering() {
        let mut assets = sample_assets();
        let total = compute_total(&assets);
        assets.reverse();
        assert_eq!(compute_total(&assets), total);
        assets.rotate_left(2);
        assert_eq!(compute_total(&assets), total);
    }

    #[test]
    fn total_of_empty_collection_is_zero() {
        assert_eq!(compute_total(&[]), FiatAmount::from_minor(0));
    }

    #[test]
    fn resolves_matching_code() {
        let assets = two_asset_fixture();
        let eth = resolve_selected(&assets, CurrencyCode::ETH).unwrap();
        assert_eq!(eth.code, CurrencyCode::ETH);
    }

    #[test]
    fn falls_back_to_first_asset_for_absent_code() {
        // No XMR in the two-asset collection: BTC (first) is returned.
        let assets = two_asset_fixture();
        let resolved = resolve_selected(&assets, CurrencyCode::XMR).unwrap();
        assert_eq!(resolved.code, CurrencyCode::BTC);
    }

    #[test]
    fn empty_collection_resolves_to_none() {
        assert!(resolve_selected(&[], CurrencyCode::BTC).is_none());
        assert!(aggregate(&[], CurrencyCode::BTC).is_none());
    }

    #[test]
    fn aggregate_pairs_total_with_selection() {
        let assets = two_asset_fixture();
        let snapshot = aggregate(&assets, CurrencyCode::ETH).unwrap();
        assert_eq!(snapshot.total, FiatAmount::from_minor(10_750_250));
        assert_eq!(snapshot.selected.code, CurrencyCode::ETH);
    }
}
