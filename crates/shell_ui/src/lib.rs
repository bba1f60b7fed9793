//! Shared presentation primitives for the portfolio shell.

mod icons;

pub use icons::{Icon, IconName, IconSize};
