//=============================================================================
// File: src/components/asset_selector.rs
//=============================================================================
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::use_app_state_mut;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;

/// Horizontal row of asset buttons bound to the shared selection state.
/// Shared by the Send and Receive screens.
#[allow(non_snake_case)]
pub fn AssetSelector() -> Element {
    let app_state = use_context::<AppState>();
    let mut state = use_app_state_mut();
    let selected = state.selected_asset();

    rsx! {
        div {
            style: "display: flex; gap: 0.5rem; overflow-x: auto; padding-bottom: 0.5rem;",
            for asset in app_state.assets.clone() {
                Button {
                    button_type: ButtonType::Secondary,
                    outline: asset.code != selected,
                    on_click: move |_| state.select_asset(asset.code),
                    "{asset.code}"
                }
            }
        }
    }
}
