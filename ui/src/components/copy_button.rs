//=============================================================================
// File: src/components/copy_button.rs
//=============================================================================
use dioxus::prelude::*;

use crate::compat;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::hooks::use_copy_feedback::use_copy_feedback;
use crate::hooks::use_notifier::use_notifier;

#[derive(Props, Clone, PartialEq)]
pub struct CopyButtonProps {
    pub text_to_copy: String,
    #[props(optional)]
    pub label: Option<String>,
}

/// Button that writes its payload to the clipboard and shows a transient
/// "Copied!" confirmation. The indicator is armed only after the platform
/// confirms the write; a failed write surfaces as an error notification
/// instead.
#[allow(non_snake_case)]
pub fn CopyButton(props: CopyButtonProps) -> Element {
    let mut feedback = use_copy_feedback();
    let mut notifier = use_notifier();

    let label = props.label.clone().unwrap_or_else(|| "Copy".to_owned());

    rsx! {
        Button {
            button_type: ButtonType::Secondary,
            outline: !feedback.is_active(),
            on_click: move |_| {
                let text = props.text_to_copy.clone();
                spawn(async move {
                    if compat::clipboard_set(text).await {
                        feedback.trigger();
                    } else {
                        notifier.error("Could not copy to clipboard");
                    }
                });
            },
            if feedback.is_active() {
                "Copied!"
            } else {
                "{label}"
            }
        }
    }
}
