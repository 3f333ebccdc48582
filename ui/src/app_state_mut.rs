//! The mutable, reactive state for the application's UI.
//!
//! A Copy struct of `Signal`s provided once as a Dioxus context at the app
//! root. Every mutation of core state funnels through the methods here (or
//! through the hook wrappers built on top), so there are no hidden
//! singletons and only one logical owner per running application.

use dioxus::prelude::*;

use crate::assets::CurrencyCode;
use crate::notifications::NotificationQueue;
use crate::view::View;
use crate::view::ViewState;

#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// Active view + sidebar overlay flag.
    pub view: Signal<ViewState>,
    /// The asset code driving send/receive screens. May name an asset that
    /// is absent from the dataset; the portfolio fallback covers that.
    pub selected_asset: Signal<CurrencyCode>,
    /// Live notifications; expiry is scheduled by the notifier hook.
    pub notifications: Signal<NotificationQueue>,
}

impl AppStateMut {
    pub fn navigate(&mut self, view: View) {
        self.view.write().navigate(view);
    }

    pub fn toggle_sidebar(&mut self) {
        self.view.write().toggle_sidebar();
    }

    pub fn close_sidebar(&mut self) {
        self.view.write().close_sidebar();
    }

    pub fn active_view(&self) -> View {
        self.view.read().active_view()
    }

    pub fn sidebar_open(&self) -> bool {
        self.view.read().sidebar_open()
    }

    /// Accepts any code; validation is deliberately absent (the dataset is
    /// external and may change over the app's lifetime).
    pub fn select_asset(&mut self, code: CurrencyCode) {
        self.selected_asset.set(code);
    }

    pub fn selected_asset(&self) -> CurrencyCode {
        *self.selected_asset.read()
    }
}

pub fn use_app_state_mut() -> AppStateMut {
    use_context::<AppStateMut>()
}
