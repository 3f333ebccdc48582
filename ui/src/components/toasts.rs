//=============================================================================
// File: src/components/toasts.rs
//=============================================================================
use dioxus::prelude::*;

use crate::hooks::use_notifier::use_notifier;
use crate::notifications::NotificationKind;

fn kind_color(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "var(--pico-color-green-500, #2e7d32)",
        NotificationKind::Error => "var(--pico-color-red-500, #c62828)",
        NotificationKind::Warning => "var(--pico-color-amber-500, #f9a825)",
        NotificationKind::Info => "var(--pico-color-azure-500, #1565c0)",
    }
}

/// The toast stack rendered above every screen: live notifications in
/// arrival order, oldest on top, each with a dismiss button.
#[allow(non_snake_case)]
pub fn NotificationToasts() -> Element {
    let mut notifier = use_notifier();
    let queue = notifier.queue();

    // Snapshot the entries so no read borrow is held inside event handlers.
    let entries = queue.read().entries().to_vec();

    rsx! {
        div {
            class: "toast-stack",
            {entries.into_iter().map(|entry| {
                let color = kind_color(entry.kind);
                rsx! {
                    article {
                        key: "{entry.id}",
                        class: "toast",
                        style: "border-left: 4px solid {color};",
                        div {
                            style: "display: flex; justify-content: space-between; align-items: center; gap: 1rem;",
                            span { "{entry.message}" }
                            a {
                                href: "#",
                                "aria-label": "Dismiss",
                                onclick: move |evt| {
                                    evt.prevent_default();
                                    notifier.dismiss(entry.id);
                                },
                                "✕"
                            }
                        }
                    }
                }
            })}
        }
    }
}
