//! The immutable application data: fixture datasets and referral program
//! figures, shared by reference through a Dioxus context.

use std::ops::Deref;
use std::sync::Arc;

use crate::assets::sample_assets;
use crate::assets::Asset;
use crate::fiat_amount::FiatAmount;
use crate::transactions::sample_card_transactions;
use crate::transactions::sample_transactions;
use crate::transactions::CardTransaction;
use crate::transactions::Transaction;

/// Static referral program numbers shown on the Referral screen.
#[derive(Debug, PartialEq)]
pub struct ReferralProgram {
    pub link: &'static str,
    /// Accrued rewards, quoted in USDT (1:1 with the reference currency).
    pub earnings: FiatAmount,
    pub limit: FiatAmount,
}

impl ReferralProgram {
    /// Progress toward the reward limit, as whole percent (0..=100).
    pub fn progress_percent(&self) -> i64 {
        if self.limit.as_minor_units() == 0 {
            return 0;
        }
        (self.earnings.as_minor_units() * 100 / self.limit.as_minor_units()).clamp(0, 100)
    }

    pub fn remaining(&self) -> FiatAmount {
        self.limit.saturating_sub(self.earnings)
    }
}

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub assets: Vec<Asset>,
    pub transactions: Vec<Transaction>,
    pub card_transactions: Vec<CardTransaction>,
    pub referral: ReferralProgram,
}

/// Cheaply clonable handle on the read-only dataset. The core never
/// mutates anything behind this.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new() -> Self {
        Self(Arc::new(AppStateData {
            assets: sample_assets(),
            transactions: sample_transactions(),
            card_transactions: sample_card_transactions(),
            referral: ReferralProgram {
                link: "https://obsidian.protocol/ref/supremo-mestre",
                earnings: FiatAmount::from_major(35),
                limit: FiatAmount::from_major(100),
            },
        }))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn referral_progress_is_bounded() {
        let state = AppState::new();
        assert_eq!(state.referral.progress_percent(), 35);
        assert_eq!(state.referral.remaining(), FiatAmount::from_major(65));

        let maxed = ReferralProgram {
            link: "",
            earnings: FiatAmount::from_major(250),
            limit: FiatAmount::from_major(100),
        };
        assert_eq!(maxed.progress_percent(), 100);
        assert_eq!(maxed.remaining(), FiatAmount::from_minor(0));

        let degenerate = ReferralProgram {
            link: "",
            earnings: FiatAmount::from_major(10),
            limit: FiatAmount::from_minor(0),
        };
        assert_eq!(degenerate.progress_percent(), 0);
    }
}
