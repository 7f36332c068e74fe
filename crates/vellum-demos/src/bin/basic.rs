//! Basic usage: one logger, the default five-level taxonomy.

use vellum_core::{vcritical, vdebug, verror, vinfo, vwarning, Logger};
use vellum_types::{all_fields, DEBUG};

fn main() {
    let logger = Logger::new("basic", DEBUG, '|');

    vdebug!(logger, "Hello {}, the temperature is {}.\n", "friend", 10);
    vinfo!(logger, "Hello {}, the temperature is {}.\n", "friend", 10);
    vwarning!(logger, "Hello {}, the temperature is {}.\n", "friend", 10);
    verror!(logger, "Hello {}, the temperature is {}.\n", "friend", 10);
    vcritical!(logger, "Hello {}, the temperature is {}.\n", "friend", 10);

    // Same messages, now with every prefix field enabled.
    logger.configure(all_fields());
    vinfo!(logger, "with the date field enabled too\n");

    // And with no prefix at all.
    logger.configure(vec![]);
    vinfo!(logger, "bare line, no decoration\n");
}
