//! Per-use-site "copied" indicator.
//!
//! Each call site owns its own flag, so two rapid copy actions on
//! different screens can never race each other's reset. The reset task
//! carries the generation it was armed with; `TimedFlag::reset` discards
//! it if a newer trigger has since re-armed the flag.

use dioxus::prelude::*;

use crate::compat;
use crate::timed_flag::TimedFlag;
use crate::timed_flag::RESET_DELAY;

#[derive(Clone, Copy)]
pub struct CopyFeedback {
    flag: Signal<TimedFlag>,
}

impl CopyFeedback {
    /// Arms the indicator and schedules the reset. Re-triggering restarts
    /// the delay; the superseded task becomes a no-op.
    pub fn trigger(&mut self) {
        let generation = self.flag.write().trigger();
        let mut flag = self.flag;
        spawn(async move {
            compat::sleep(RESET_DELAY).await;
            flag.write().reset(generation);
        });
    }

    pub fn is_active(&self) -> bool {
        self.flag.read().is_active()
    }
}

pub fn use_copy_feedback() -> CopyFeedback {
    let flag = use_signal(TimedFlag::new);
    CopyFeedback { flag }
}
