//! Shared components for the dashboard: Pico.css wrappers plus the
//! copy-to-clipboard, QR, toast, and asset chooser building blocks.

pub mod asset_selector;
pub mod copy_button;
pub mod pico;
pub mod qr_code;
pub mod toasts;
