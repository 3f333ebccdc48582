//=============================================================================
// File: src/screens/oracle.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::pico::Card;

/// The assistant panel itself is an opaque embedded surface. This screen
/// only owns the surrounding layout.
#[component]
pub fn OracleScreen() -> Element {
    rsx! {
        hgroup {
            h2 { "Oracle" }
            p { "An assistant connected to the network nodes." }
        }
        Card {
            div {
                style: "min-height: 24rem; display: flex; align-items: center; justify-content: center; color: var(--pico-muted-color);",
                p { "The Oracle is listening." }
            }
        }
    }
}
