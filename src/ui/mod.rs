//! Terminal output helpers
//!
//! Styled output when attached to a terminal, plain bracketed markers in
//! CI and when piped.

mod context;
mod output;

pub use context::UiContext;
pub use output::{key_value, key_value_status, section, step_ok, step_ok_detail, step_warn_hint};
