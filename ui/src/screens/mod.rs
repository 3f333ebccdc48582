//! One module per top-level view.

pub mod card;
pub mod dashboard;
pub mod history;
pub mod oracle;
pub mod profile;
pub mod receive;
pub mod referral;
pub mod send;
