//=============================================================================
// File: src/screens/dashboard.rs
//=============================================================================
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::use_app_state_mut;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::portfolio::compute_total;
use crate::view::View;

#[component]
pub fn DashboardScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut state = use_app_state_mut();

    // Recomputed on every render; never cached, never stale.
    let total = compute_total(&app_state.assets);

    rsx! {
        header {
            hgroup {
                h2 { "Global Holdings" }
                p {
                    span {
                        style: "font-size: 2.5rem; font-weight: 700;",
                        "{total.to_string_with_symbol()}"
                    }
                    span {
                        style: "margin-left: 0.5rem; color: var(--pico-muted-color);",
                        "USD"
                    }
                }
            }
        }

        h3 { "Digital Custody" }
        div {
            style: "display: flex; gap: 1rem; overflow-x: auto; padding-bottom: 1rem;",
            {app_state.assets.iter().map(|asset| {
                let value = asset.fiat_value();
                let direction = if asset.change_24h.is_negative() { "▼" } else { "▲" };
                rsx! {
                    article {
                        key: "{asset.code}",
                        style: "min-width: 220px; margin: 0;",
                        header {
                            style: "display: flex; justify-content: space-between; align-items: baseline;",
                            strong { "{asset.name}" }
                            small { "{direction} {asset.change_24h}%" }
                        }
                        p {
                            style: "font-family: monospace; font-size: 1.25rem; margin-bottom: 0.25rem;",
                            "{value.to_string_with_symbol()}"
                        }
                        small {
                            style: "font-family: monospace; color: var(--pico-muted-color);",
                            "{asset.balance} {asset.code}"
                        }
                        footer {
                            small { "{asset.network}" }
                        }
                    }
                }
            })}
        }

        Grid {
            div {
                h3 { "Commands" }
                Button {
                    on_click: move |_| state.navigate(View::Send),
                    "Send"
                }
                " "
                Button {
                    button_type: ButtonType::Secondary,
                    on_click: move |_| state.navigate(View::Receive),
                    "Receive"
                }
            }
            div {
                div {
                    style: "display: flex; justify-content: space-between; align-items: baseline;",
                    h3 { "Activity" }
                    a {
                        href: "#",
                        onclick: move |evt| {
                            evt.prevent_default();
                            state.navigate(View::History);
                        },
                        "View all"
                    }
                }
                Card {
                    {app_state.transactions.iter().take(4).map(|tx| {
                        let sign = if tx.direction.is_received() { "+" } else { "-" };
                        let label = if tx.direction.is_received() { "Received" } else { "Sent" };
                        rsx! {
                            div {
                                key: "{tx.id}",
                                style: "display: flex; justify-content: space-between; padding: 0.5rem 0; border-bottom: 1px solid var(--pico-muted-border-color);",
                                div {
                                    strong { "{label}" }
                                    br {}
                                    small { "{tx.date}" }
                                }
                                div {
                                    style: "text-align: right; font-family: monospace;",
                                    "{sign}{tx.amount} {tx.currency}"
                                    br {}
                                    small { "≈ ${tx.fiat_value}" }
                                }
                            }
                        }
                    })}
                }
            }
        }
    }
}
