//! The view-navigation state machine.
//!
//! Eight top-level screens, fully connected: any view is reachable from any
//! other via `navigate`. There is no back-stack; exactly one view is active
//! at a time. The sidebar-open flag is presentation sub-state for small
//! viewports and is cleared by every navigation.

use std::str::FromStr;

use thiserror::Error;

/// The top-level screens the application can display.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Default, strum::Display, strum::EnumString, strum::EnumIter,
)]
pub enum View {
    #[default]
    Dashboard,
    Send,
    Receive,
    History,
    Oracle,
    Card,
    Referral,
    Profile,
}

/// All views, in sidebar order.
pub const ALL_VIEWS: [View; 8] = [
    View::Dashboard,
    View::Card,
    View::Oracle,
    View::Referral,
    View::Send,
    View::Receive,
    View::History,
    View::Profile,
];

impl View {
    /// Human-readable sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Portfolio",
            View::Send => "Send",
            View::Receive => "Receive",
            View::History => "History",
            View::Oracle => "Oracle AI",
            View::Card => "Visa Card",
            View::Referral => "Invite & Earn",
            View::Profile => "Identity",
        }
    }
}

/// Navigation was requested to an unrecognized view identifier.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("unrecognized view identifier: {0:?}")]
pub struct InvalidView(pub String);

/// Which screen is showing, plus the mobile sidebar overlay flag.
///
/// Created once at application start and mutated only through the methods
/// below. Not persisted; resets on reload.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct ViewState {
    active: View,
    sidebar_open: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_view(&self) -> View {
        self.active
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    /// Switches to `view`. Navigating always closes the mobile overlay.
    pub fn navigate(&mut self, view: View) {
        self.active = view;
        self.sidebar_open = false;
    }

    /// String-keyed navigation. Fails with [`InvalidView`] for identifiers
    /// outside the eight known views; the state is left untouched.
    pub fn try_navigate(&mut self, name: &str) -> Result<(), InvalidView> {
        let view = View::from_str(name).map_err(|_| InvalidView(name.to_owned()))?;
        self.navigate(view);
        Ok(())
    }

    /// Like [`Self::try_navigate`], but absorbs the error: invalid input is
    /// a no-op, logged in debug builds so it surfaces during development.
    pub fn navigate_named(&mut self, name: &str) {
        if let Err(_invalid) = self.try_navigate(name) {
            #[cfg(debug_assertions)]
            dioxus_logger::tracing::warn!("{_invalid}");
        }
    }

    /// Flips the mobile sidebar overlay.
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    /// Unconditionally closes the overlay (backdrop-click dismissal).
    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn starts_on_dashboard_with_sidebar_closed() {
        let state = ViewState::new();
        assert_eq!(state.active_view(), View::Dashboard);
        assert!(!state.sidebar_open());
    }

    #[test]
    fn any_view_is_reachable_from_any_other() {
        for from in View::iter() {
            for to in View::iter() {
                let mut state = ViewState::new();
                state.navigate(from);
                state.navigate(to);
                assert_eq!(state.active_view(), to);
            }
        }
    }

    #[test]
    fn navigating_closes_the_sidebar() {
        let mut state = ViewState::new();
        state.toggle_sidebar();
        assert!(state.sidebar_open());
        state.navigate(View::Send);
        assert!(!state.sidebar_open());
    }

    #[test]
    fn toggle_sidebar_is_an_involution() {
        for initially_open in [false, true] {
            let mut state = ViewState::new();
            if initially_open {
                state.toggle_sidebar();
            }
            let before = state.sidebar_open();
            state.toggle_sidebar();
            state.toggle_sidebar();
            assert_eq!(state.sidebar_open(), before);
        }
    }

    #[test]
    fn close_sidebar_is_unconditional() {
        let mut state = ViewState::new();
        state.close_sidebar();
        assert!(!state.sidebar_open());
        state.toggle_sidebar();
        state.close_sidebar();
        assert!(!state.sidebar_open());
    }

    #[test]
    fn named_navigation_accepts_known_views_only() {
        let mut state = ViewState::new();
        assert!(state.try_navigate("Referral").is_ok());
        assert_eq!(state.active_view(), View::Referral);

        let err = state.try_navigate("Settings").unwrap_err();
        assert_eq!(err, InvalidView("Settings".to_owned()));
        // rejected input leaves the state untouched
        assert_eq!(state.active_view(), View::Referral);

        state.navigate_named("NotAView");
        assert_eq!(state.active_view(), View::Referral);
    }
}
