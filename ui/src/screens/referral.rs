//=============================================================================
// File: src/screens/referral.rs
//=============================================================================
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::components::copy_button::CopyButton;
use crate::components::pico::Card;
use crate::components::pico::Grid;

#[component]
pub fn ReferralScreen() -> Element {
    let app_state = use_context::<AppState>();
    let referral = &app_state.referral;
    let progress = referral.progress_percent();

    rsx! {
        div {
            style: "text-align: center;",
            hgroup {
                h2 { "Invite & Earn" }
                p { "Every friend who activates a card earns 5 USDT. So do you." }
            }
        }

        Card {
            Grid {
                div {
                    small { "Total Earnings" }
                    p {
                        style: "font-family: monospace; font-size: 2rem; margin: 0;",
                        "{referral.earnings} "
                        small { "USDT" }
                    }
                }
                div {
                    style: "text-align: right;",
                    small { "Remaining Limit" }
                    p {
                        style: "font-family: monospace; margin: 0;",
                        "{referral.remaining()} USDT"
                    }
                }
            }
            progress {
                value: "{progress}",
                max: "100",
            }
            div {
                style: "display: flex; justify-content: space-between;",
                small { "0 USDT" }
                small { "Limit: {referral.limit} USDT" }
            }
        }

        Card {
            label { "Your Exclusive Link" }
            div {
                style: "display: flex; align-items: center; gap: 1rem;",
                code {
                    style: "flex: 1; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    "{referral.link}"
                }
                CopyButton {
                    text_to_copy: referral.link.to_string(),
                    label: "Copy Link".to_string(),
                }
            }
        }
    }
}
