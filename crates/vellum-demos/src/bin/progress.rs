//! Progress tracking on a single line, rewritten in place with `\r`.

use std::thread;
use std::time::Duration;
use vellum_core::{vinfo, Logger};
use vellum_types::INFO;

fn main() {
    let logger = Logger::new("progress", INFO, '|');

    let total_steps: usize = 100;
    let bar_width: usize = 50;

    for step in 0..=total_steps {
        let pos = step * bar_width / total_steps;
        let bar = format!("[{}{}]", "=".repeat(pos), " ".repeat(bar_width - pos));

        // Ending in \r: the next call rewrites this line instead of
        // starting a new one, and the prefix is printed only once per line.
        vinfo!(logger, "{} {:3}%\r", bar, step);
        thread::sleep(Duration::from_millis(20));
    }

    vinfo!(logger, "\nDone!\n");
}
