//! Ledger and card transaction fixtures, consumed purely for display.

use serde::Deserialize;
use serde::Serialize;

use crate::asset_amount::AssetAmount;
use crate::assets::CurrencyCode;
use crate::fiat_amount::FiatAmount;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::EnumIs)]
pub enum Direction {
    Sent,
    Received,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum TxStatus {
    Confirmed,
    Pending,
}

/// One entry in the wallet ledger.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: &'static str,
    pub direction: Direction,
    pub amount: AssetAmount,
    pub currency: CurrencyCode,
    pub date: &'static str,
    pub address: &'static str,
    pub status: TxStatus,
    pub fiat_value: FiatAmount,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum CardTxStatus {
    Completed,
    Pending,
    Declined,
}

/// One entry in the card spending history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardTransaction {
    pub id: &'static str,
    pub merchant: &'static str,
    pub amount: FiatAmount,
    pub date: &'static str,
    pub category: &'static str,
    pub status: CardTxStatus,
}

pub fn sample_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: "tx-1a2b3c",
            direction: Direction::Received,
            amount: AssetAmount::from_units(4_500_000),
            currency: CurrencyCode::BTC,
            date: "Today, 14:30",
            address: "bc1qxy2kgdygjrsqtzq2n0yrf2493p83kkfjhx0wlh",
            status: TxStatus::Confirmed,
            fiat_value: FiatAmount::from_minor(285_050),
        },
        Transaction {
            id: "tx-eth-1",
            direction: Direction::Received,
            amount: AssetAmount::from_units(250_000_000),
            currency: CurrencyCode::ETH,
            date: "Today, 10:15",
            address: "0x71C7656EC7ab88b098defB751B7401B5f6d8976F",
            status: TxStatus::Confirmed,
            fiat_value: FiatAmount::from_major(8_000),
        },
        Transaction {
            id: "tx-xmr-1",
            direction: Direction::Sent,
            amount: AssetAmount::whole(10),
            currency: CurrencyCode::XMR,
            date: "Yesterday, 22:00",
            address: "44AFFq5kSiGBoZ4NMDwYtN18...",
            status: TxStatus::Confirmed,
            fiat_value: FiatAmount::from_major(1_650),
        },
        Transaction {
            id: "tx-4d5e6f",
            direction: Direction::Sent,
            amount: AssetAmount::from_units(1_200_000),
            currency: CurrencyCode::BTC,
            date: "Oct 23, 09:15",
            address: "bc1qar0srrr7xfkvy5l643lydnw9re59gtzzwf5mdq",
            status: TxStatus::Confirmed,
            fiat_value: FiatAmount::from_minor(76_020),
        },
        Transaction {
            id: "tx-usdt-1",
            direction: Direction::Received,
            amount: AssetAmount::whole(5_000),
            currency: CurrencyCode::USDT,
            date: "Oct 20, 11:20",
            address: "0x71C7656EC7ab88b098defB751B7401B5f6d8976F",
            status: TxStatus::Pending,
            fiat_value: FiatAmount::from_major(5_000),
        },
    ]
}

pub fn sample_card_transactions() -> Vec<CardTransaction> {
    vec![
        CardTransaction {
            id: "c1",
            merchant: "AWS EMEA",
            amount: FiatAmount::from_major(45),
            date: "Today, 10:23",
            category: "Infrastructure",
            status: CardTxStatus::Pending,
        },
        CardTransaction {
            id: "c2",
            merchant: "Starbucks Coffee",
            amount: FiatAmount::from_minor(550),
            date: "Yesterday, 14:30",
            category: "Food & Drink",
            status: CardTxStatus::Completed,
        },
        CardTransaction {
            id: "c3",
            merchant: "Apple Store",
            amount: FiatAmount::from_major(1_299),
            date: "Oct 22",
            category: "Electronics",
            status: CardTxStatus::Completed,
        },
        CardTransaction {
            id: "c4",
            merchant: "Netflix",
            amount: FiatAmount::from_minor(1_599),
            date: "Oct 20",
            category: "Subscriptions",
            status: CardTxStatus::Completed,
        },
        CardTransaction {
            id: "c5",
            merchant: "Uber Technologies",
            amount: FiatAmount::from_minor(2_450),
            date: "Oct 19",
            category: "Transport",
            status: CardTxStatus::Completed,
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn fixture_ids_are_unique() {
        let txs = sample_transactions();
        let ids: HashSet<_> = txs.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), txs.len());

        let card_txs = sample_card_transactions();
        let ids: HashSet<_> = card_txs.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), card_txs.len());
    }
}
