//! Hooks bridging the pure state cores to the Dioxus runtime: they own the
//! timer side of the notification queue and the timed feedback flag.

pub mod use_copy_feedback;
pub mod use_notifier;
