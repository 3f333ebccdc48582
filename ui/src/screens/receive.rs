//=============================================================================
// File: src/screens/receive.rs
//=============================================================================
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::use_app_state_mut;
use crate::components::asset_selector::AssetSelector;
use crate::components::copy_button::CopyButton;
use crate::components::pico::Card;
use crate::components::qr_code::QrCode;
use crate::portfolio::resolve_selected;

#[component]
pub fn ReceiveScreen() -> Element {
    let app_state = use_context::<AppState>();
    let state = use_app_state_mut();

    let Some(selected) = resolve_selected(&app_state.assets, state.selected_asset()).cloned()
    else {
        return rsx! {
            Card {
                h2 { "Receive" }
                p { "No assets available." }
            }
        };
    };

    let address = selected.code.deposit_address();

    rsx! {
        Card {
            h2 { "Receive" }

            label { "Choose Network" }
            AssetSelector {}

            div {
                style: "text-align: center; padding-top: 1rem;",
                p { "Share this address to receive funds." }

                QrCode {
                    data: address.to_string(),
                    caption: format!("{} address ({})", selected.name, selected.network),
                }

                code {
                    style: "word-break: break-all; font-size: 0.9rem;",
                    "{address}"
                }
                div {
                    style: "margin-top: 1.5rem; display: flex; justify-content: center; gap: 1rem;",
                    CopyButton {
                        text_to_copy: address.to_string(),
                        label: "Copy Address".to_string(),
                    }
                }
            }
        }
    }
}
