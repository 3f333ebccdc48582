//=============================================================================
// File: src/screens/send.rs
//=============================================================================
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::app_state_mut::use_app_state_mut;
use crate::asset_amount::AssetAmount;
use crate::components::asset_selector::AssetSelector;
use crate::components::pico::Button;
use crate::components::pico::Card;
use crate::components::pico::Input;
use crate::hooks::use_notifier::use_notifier;
use crate::portfolio::resolve_selected;

/// The string data for the form while it's being edited.
#[derive(Clone, PartialEq, Debug, Default)]
struct EditableTransfer {
    recipient: String,
    amount_str: String,
    amount_error: Option<String>,
}

impl EditableTransfer {
    /// Validates the amount against the available balance. Returns the
    /// parsed amount or a user-facing message.
    fn validated_amount(&self, available: AssetAmount) -> Result<AssetAmount, String> {
        let amount = AssetAmount::from_str_exact(&self.amount_str)
            .map_err(|e| e.to_string())?;
        if amount.is_zero() || amount < AssetAmount::from_units(0) {
            return Err("Amount must be positive".to_owned());
        }
        if amount > available {
            return Err("Amount exceeds available balance".to_owned());
        }
        Ok(amount)
    }
}

#[component]
pub fn SendScreen() -> Element {
    let app_state = use_context::<AppState>();
    let state = use_app_state_mut();
    let mut notifier = use_notifier();

    let mut transfer = use_signal(EditableTransfer::default);

    // Derived on every render from the shared selection; falls back to the
    // first asset if the selected code is absent from the dataset.
    let Some(selected) = resolve_selected(&app_state.assets, state.selected_asset()).cloned()
    else {
        return rsx! {
            Card {
                h2 { "Send" }
                p { "No assets available." }
            }
        };
    };

    let available = selected.balance;
    let selected_code = selected.code;

    rsx! {
        Card {
            h2 { "Send" }

            label { "Select Asset" }
            AssetSelector {}

            Input {
                label: "Recipient".to_string(),
                name: "recipient",
                placeholder: format!("{} address ({})", selected.name, selected.network),
                value: "{transfer.read().recipient}",
                on_input: move |evt: FormEvent| {
                    transfer.with_mut(|t| t.recipient = evt.value());
                },
            }

            Input {
                label: "Amount".to_string(),
                name: "amount",
                input_type: "number".to_string(),
                placeholder: "0.00",
                value: "{transfer.read().amount_str}",
                on_input: move |evt: FormEvent| {
                    transfer.with_mut(|t| {
                        t.amount_str = evt.value();
                        t.amount_error = None;
                    });
                },
            }
            if let Some(err) = transfer.read().amount_error.clone() {
                small { style: "color: var(--pico-color-red-500);", "{err}" }
            }
            p {
                style: "text-align: right; font-family: monospace; color: var(--pico-muted-color);",
                "Available: {available} {selected_code}"
            }

            Button {
                on_click: move |_| {
                    let form = transfer.read().clone();
                    match form.validated_amount(available) {
                        Ok(amount) => {
                            // Mock flow: no transaction is actually submitted.
                            notifier.success(format!("Sent {amount} {selected_code}"));
                            transfer.set(EditableTransfer::default());
                        }
                        Err(msg) => {
                            transfer.with_mut(|t| t.amount_error = Some(msg));
                        }
                    }
                },
                "Confirm Transfer"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_overdraft_and_garbage() {
        let available = AssetAmount::from_str_exact("1.5").unwrap();

        let form = EditableTransfer {
            amount_str: "0".to_owned(),
            ..Default::default()
        };
        assert!(form.validated_amount(available).is_err());

        let form = EditableTransfer {
            amount_str: "2.0".to_owned(),
            ..Default::default()
        };
        assert!(form.validated_amount(available).is_err());

        let form = EditableTransfer {
            amount_str: "not a number".to_owned(),
            ..Default::default()
        };
        assert!(form.validated_amount(available).is_err());
    }

    #[test]
    fn accepts_amount_within_balance() {
        let available = AssetAmount::from_str_exact("1.5").unwrap();
        let form = EditableTransfer {
            amount_str: "1.245".to_owned(),
            ..Default::default()
        };
        let amount = form.validated_amount(available).unwrap();
        assert_eq!(amount, AssetAmount::from_str_exact("1.245").unwrap());
    }
}
