//=============================================================================
// File: src/screens/profile.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::copy_button::CopyButton;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::components::pico::Input;

const SUPPORT_EMAIL: &str = "suporte@obsidian.protocol";

#[component]
pub fn ProfileScreen() -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: baseline;",
            h2 { "Identity Core" }
            small {
                style: "color: var(--pico-ins-color);",
                "\u{25cf} Verified Account"
            }
        }

        Grid {
            Card {
                h3 { "Account Data" }
                div {
                    style: "display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem;",
                    div {
                        style: "width: 4rem; height: 4rem; border-radius: 1rem; background: var(--pico-muted-border-color); display: flex; align-items: center; justify-content: center; font-weight: 700;",
                        "SM"
                    }
                    div {
                        strong { "Supremo Mestre" }
                        br {}
                        small { "UID: 8492-AX-29" }
                    }
                }

                Input {
                    label: "Username".to_string(),
                    name: "username",
                    value: "Supremo Mestre",
                    disabled: true,
                }
                Input {
                    label: "Registered Email".to_string(),
                    name: "email",
                    input_type: "email".to_string(),
                    value: "supremo@obsidian.protocol",
                    disabled: true,
                }
            }

            Card {
                div {
                    style: "text-align: center; padding: 1rem;",
                    h3 { "Help Center" }
                    p { "For security matters, account recovery, or transaction issues, contact the official team." }

                    small { "Official Support Channel" }
                    p {
                        code { "{SUPPORT_EMAIL}" }
                    }
                    CopyButton {
                        text_to_copy: SUPPORT_EMAIL.to_string(),
                        label: "Copy Email Address".to_string(),
                    }
                    p {
                        small {
                            style: "color: var(--pico-muted-color);",
                            "Average response time: 24 business hours"
                        }
                    }
                }
            }
        }
    }
}
