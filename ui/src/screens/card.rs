//=============================================================================
// File: src/screens/card.rs
//=============================================================================
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::hooks::use_notifier::use_notifier;

#[component]
pub fn CardScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut notifier = use_notifier();

    // Whether the user has issued their card. Local to this screen; it is
    // deliberately forgotten when the user navigates away.
    let mut has_card = use_signal(|| false);

    if !has_card() {
        return rsx! {
            Card {
                div {
                    style: "text-align: center; padding: 3rem 1rem;",
                    h2 { "Obsidian Black" }
                    p { "A virtual card backed by your holdings. No credit check, no issuance fee." }
                    Button {
                        on_click: move |_| {
                            has_card.set(true);
                            notifier.success("Card issued. Welcome to Obsidian Black.");
                        },
                        "Issue My Card"
                    }
                }
            }
        };
    }

    rsx! {
        Card {
            div {
                style: "background: linear-gradient(135deg, #1a1a1a, #000); color: #fff; border-radius: 1rem; padding: 1.5rem; max-width: 24rem;",
                div {
                    style: "display: flex; justify-content: space-between;",
                    strong { "OBSIDIAN" }
                    span { "VISA" }
                }
                p {
                    style: "font-family: monospace; letter-spacing: 0.2em; margin: 2rem 0 0.5rem;",
                    "4929 \u{2022}\u{2022}\u{2022}\u{2022} \u{2022}\u{2022}\u{2022}\u{2022} 8317"
                }
                small { "SUPREMO MESTRE" }
            }
        }

        Card {
            h3 { "Card Activity" }
            table {
                thead {
                    tr {
                        th { "Merchant" }
                        th { "Category" }
                        th { "Date" }
                        th { "Amount" }
                        th { "Status" }
                    }
                }
                tbody {
                    {app_state.card_transactions.iter().map(|tx| {
                        let amount = tx.amount.to_string_with_symbol();
                        rsx! {
                            tr {
                                key: "{tx.id}",
                                td { strong { "{tx.merchant}" } }
                                td { "{tx.category}" }
                                td { "{tx.date}" }
                                td {
                                    style: "font-family: monospace;",
                                    "-{amount}"
                                }
                                td { "{tx.status}" }
                            }
                        }
                    })}
                }
            }
        }
    }
}
