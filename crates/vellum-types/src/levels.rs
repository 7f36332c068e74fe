//! Numeric log levels and their display descriptors.
//!
//! Levels are plain `u32` values, not a closed enum: every logger carries its
//! own runtime map from level number to [`LevelSpec`], so a consumer can
//! clear the conventional five-level seed and install, say, the eight
//! syslog severities without touching this crate.

use colored::Color;
use once_cell::sync::Lazy;

/// Debug level.
pub const DEBUG: u32 = 0;
/// Info level.
pub const INFO: u32 = 1;
/// Warning level.
pub const WARNING: u32 = 2;
/// Error level.
pub const ERROR: u32 = 3;
/// Critical level.
pub const CRITICAL: u32 = 4;

/// Display descriptor for one numeric level: its name and colors.
///
/// `None` for a color means the terminal default is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSpec {
    /// Name shown in the `Field::Level` column (e.g. "INFO").
    pub name: String,
    /// Foreground color applied to the whole line on the console sink.
    pub fg: Option<Color>,
    /// Background color applied to the whole line on the console sink.
    pub bg: Option<Color>,
}

impl LevelSpec {
    /// Create a descriptor.
    pub fn new(name: impl Into<String>, fg: Option<Color>, bg: Option<Color>) -> Self {
        Self {
            name: name.into(),
            fg,
            bg,
        }
    }
}

static DEFAULT_LEVELS: Lazy<Vec<(u32, LevelSpec)>> = Lazy::new(|| {
    vec![
        (DEBUG, LevelSpec::new("DEBUG", Some(Color::Cyan), None)),
        (INFO, LevelSpec::new("INFO", Some(Color::BrightWhite), None)),
        (WARNING, LevelSpec::new("WARNING", Some(Color::BrightYellow), None)),
        (ERROR, LevelSpec::new("ERROR", Some(Color::Red), None)),
        (CRITICAL, LevelSpec::new("CRITICAL", Some(Color::BrightRed), None)),
    ]
});

/// The conventional five-level seed every fresh logger starts with.
///
/// A convenience, not a constraint: `clear_log_levels` wipes it and
/// `add_or_update_log_level` replaces any part of it.
pub fn default_levels() -> &'static [(u32, LevelSpec)] {
    &DEFAULT_LEVELS
}
