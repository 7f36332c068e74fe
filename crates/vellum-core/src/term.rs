//! Terminal escape helpers for colored line output.

use colored::{Color, Colorize};

/// Erase from the cursor to the end of the line.
///
/// Written after every colored console emission so that a line rewritten in
/// place with `\r` (progress bars) leaves no stale tail from a longer
/// previous rendering. The `colored` crate models colors and styles but not
/// cursor/erase controls, so this one sequence lives here.
pub const ERASE_LINE: &str = "\x1b[2K";

/// Style a whole line with an optional foreground and background color.
///
/// `None` leaves the corresponding channel at the terminal default. Whether
/// escape codes are actually produced is still subject to the `colored`
/// crate's global controls (tty detection, `NO_COLOR`, overrides).
pub fn paint(text: &str, fg: Option<Color>, bg: Option<Color>) -> String {
    let mut styled = text.normal();
    if let Some(fg) = fg {
        styled = styled.color(fg);
    }
    if let Some(bg) = bg {
        styled = styled.on_color(bg);
    }
    styled.to_string()
}
