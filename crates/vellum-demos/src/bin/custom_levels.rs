//! Replacing the default taxonomy with eight syslog-style severities.

use colored::Color;
use vellum_core::{vlog, Logger};
use vellum_types::all_fields;

fn main() {
    let logger = Logger::new("syslog", 0, '|');
    logger.configure(all_fields());

    // Drop the five-level seed and install a fresh taxonomy.
    logger.clear_log_levels();
    logger
        .add_or_update_log_level(0, "DEBUG", Some(Color::Green), None)
        .add_or_update_log_level(1, "INFO", Some(Color::Cyan), Some(Color::Blue))
        .add_or_update_log_level(2, "NOTICE", Some(Color::Blue), None)
        .add_or_update_log_level(3, "WARNING", Some(Color::Yellow), None)
        .add_or_update_log_level(4, "ERROR", Some(Color::Red), None)
        .add_or_update_log_level(5, "CRITICAL", Some(Color::BrightRed), None)
        .add_or_update_log_level(6, "ALERT", Some(Color::BrightYellow), None)
        .add_or_update_log_level(7, "EMERGENCY", Some(Color::White), None);

    for (level, what) in [
        (0, "debug"),
        (1, "info"),
        (2, "notice"),
        (3, "warning"),
        (4, "error"),
        (5, "critical"),
        (6, "alert"),
        (7, "emergency"),
    ] {
        vlog!(logger, level, "This is {} message.\n", what);
    }

    // Recolor one level in place.
    logger.set_color(1, Some(Color::BrightMagenta), Some(Color::White));
    vlog!(logger, 1, "info, recolored\n");
}
