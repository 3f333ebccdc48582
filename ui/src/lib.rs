// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod asset_amount;
pub mod assets;
pub mod compat;
mod components;
pub mod fiat_amount;
pub mod hooks;
pub mod notifications;
pub mod portfolio;
mod screens;
pub mod timed_flag;
pub mod transactions;
pub mod view;

use app_state::AppState;
use app_state_mut::use_app_state_mut;
use app_state_mut::AppStateMut;
use assets::CurrencyCode;
use components::toasts::NotificationToasts;
use notifications::NotificationQueue;
use screens::card::CardScreen;
use screens::dashboard::DashboardScreen;
use screens::history::HistoryScreen;
use screens::oracle::OracleScreen;
use screens::profile::ProfileScreen;
use screens::receive::ReceiveScreen;
use screens::referral::ReferralScreen;
use screens::send::SendScreen;
use view::View;
use view::ViewState;
use view::ALL_VIEWS;

const PICO_CSS_URL: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";

#[allow(non_snake_case)]
pub fn App() -> Element {
    let shell_css = r#"
    * { box-sizing: border-box; }

    html, body {
        height: 100%;
        margin: 0;
        padding: 0;
    }

    /* --- APP FRAME --- */
    .app-shell {
        display: flex;
        min-height: 100vh;
    }

    /* --- SIDEBAR --- */
    .sidebar {
        width: 240px;
        flex-shrink: 0;
        padding: 1rem;
        border-right: 1px solid var(--pico-muted-border-color);
        background-color: var(--pico-card-background-color);
    }

    .sidebar nav a {
        display: block;
        padding: 0.5rem 0.75rem;
        border-radius: 0.5rem;
        color: var(--pico-muted-color);
        text-decoration: none;
    }

    .sidebar nav a.active-view {
        color: var(--pico-primary);
        font-weight: bold;
        background-color: var(--pico-primary-background-color, var(--pico-muted-border-color));
    }

    /* --- CONTENT --- */
    .view-content {
        flex: 1;
        min-width: 0;
        padding: 1.5rem;
        overflow-y: auto;
    }

    .mobile-header {
        display: none;
    }

    /* --- TOASTS --- */
    .toast-stack {
        position: fixed;
        bottom: 1rem;
        right: 1rem;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
        z-index: 1000;
        max-width: 22rem;
    }

    .toast-stack article {
        margin: 0;
        padding: 0.75rem 1rem;
    }

    /* --- MOBILE --- */
    @media (max-width: 768px) {
        .sidebar {
            position: fixed;
            top: 0; left: 0; bottom: 0;
            z-index: 200;
            transform: translateX(-100%);
            transition: transform 0.2s ease-out;
        }
        .sidebar.open {
            transform: translateX(0);
        }
        .sidebar-backdrop {
            position: fixed;
            top: 0; left: 0; right: 0; bottom: 0;
            background: rgba(0, 0, 0, 0.5);
            z-index: 150;
        }
        .mobile-header {
            display: flex;
            align-items: center;
            gap: 1rem;
            padding: 0.5rem 1rem;
            border-bottom: 1px solid var(--pico-muted-border-color);
        }
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS_URL,
        }
        style {
            "{shell_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(AppState::new);

    // Create signals for mutable state at the top level of the component.
    let view_signal = use_signal(ViewState::new);
    let selected_asset_signal = use_signal(|| CurrencyCode::BTC);
    let notifications_signal = use_signal(NotificationQueue::default);

    // Provide the mutable state by passing the already created signals.
    use_context_provider(|| AppStateMut {
        view: view_signal,
        selected_asset: selected_asset_signal,
        notifications: notifications_signal,
    });

    let mut state = use_app_state_mut();
    let sidebar_class = if state.sidebar_open() {
        "sidebar open"
    } else {
        "sidebar"
    };

    rsx! {
        div {
            class: "app-shell",
            aside {
                class: "{sidebar_class}",
                hgroup {
                    h1 {
                        style: "font-size: 1.25rem; margin-bottom: 0;",
                        "OBSIDIAN"
                    }
                    p { "Private Banking" }
                }
                nav {
                    for view in ALL_VIEWS {
                        NavItem { view }
                    }
                }
            }
            if state.sidebar_open() {
                div {
                    class: "sidebar-backdrop",
                    onclick: move |_| state.close_sidebar(),
                }
            }
            div {
                class: "view-content",
                header {
                    class: "mobile-header",
                    a {
                        href: "#",
                        onclick: move |event| {
                            event.prevent_default();
                            state.toggle_sidebar();
                        },
                        "≡"
                    }
                    strong { "OBSIDIAN" }
                }
                match state.active_view() {
                    View::Dashboard => rsx! {
                        DashboardScreen {}
                    },
                    View::Card => rsx! {
                        CardScreen {}
                    },
                    View::Oracle => rsx! {
                        OracleScreen {}
                    },
                    View::Referral => rsx! {
                        ReferralScreen {}
                    },
                    View::Send => rsx! {
                        SendScreen {}
                    },
                    View::Receive => rsx! {
                        ReceiveScreen {}
                    },
                    View::History => rsx! {
                        HistoryScreen {}
                    },
                    View::Profile => rsx! {
                        ProfileScreen {}
                    },
                }
            }
        }
        NotificationToasts {}
    }
}

/// One entry in the sidebar navigation.
#[component]
fn NavItem(view: View) -> Element {
    let mut state = use_app_state_mut();
    let class = if state.active_view() == view {
        "active-view"
    } else {
        ""
    };

    rsx! {
        a {
            class: "{class}",
            href: "#",
            onclick: move |event| {
                event.prevent_default();
                state.navigate(view);
            },
            "{view.label()}"
        }
    }
}
