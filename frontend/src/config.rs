use log::Level;

use crate::state::Theme;

/// Milliseconds between two reveal ticks of the typewriter.
pub const REVEAL_INTERVAL_MS: u32 = 100;

/// Vertical offset past which the nav counts as scrolled. Exclusive.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub const DEFAULT_THEME: Theme = Theme::Dark;

pub const BRAND: &str = "HSM Dynamics";
pub const TYPEWRITER_TEXT: &str = "This website was built in under 24 hours";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
