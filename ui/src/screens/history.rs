//=============================================================================
// File: src/screens/history.rs
//=============================================================================
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::pico::Card;
use crate::transactions::Transaction;

/// A self-contained component for rendering a single row in the ledger table.
#[component]
fn HistoryRow(tx: Transaction) -> Element {
    let label = if tx.direction.is_received() { "Received" } else { "Sent" };
    let sign = if tx.direction.is_received() { "+" } else { "-" };

    rsx! {
        tr {
            td { "{tx.date}" }
            td { "{label}" }
            td {
                style: "font-family: monospace;",
                "{sign}{tx.amount} {tx.currency}"
            }
            td { "${tx.fiat_value}" }
            td {
                code {
                    style: "font-size: 0.8rem;",
                    "{tx.address}"
                }
            }
            td { "{tx.status}" }
        }
    }
}

#[component]
pub fn HistoryScreen() -> Element {
    let app_state = use_context::<AppState>();

    rsx! {
        Card {
            h2 { "Ledger" }
            table {
                thead {
                    tr {
                        th { "Date" }
                        th { "Type" }
                        th { "Amount" }
                        th { "Fiat Value" }
                        th { "Address" }
                        th { "Status" }
                    }
                }
                tbody {
                    {app_state.transactions.iter().map(|tx| {
                        rsx! {
                            HistoryRow {
                                key: "{tx.id}",
                                tx: tx.clone(),
                            }
                        }
                    })}
                }
            }
        }
    }
}
