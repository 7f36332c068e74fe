//! Mirroring console output into a file sink.
//!
//! The file receives the same decorated lines, always uncolored. The sink
//! handle is shared: the logger never closes the file, the handle does when
//! the last clone drops.

use std::fs::File;
use vellum_core::{sink, verror, vinfo, Logger};
use vellum_types::DEBUG;

fn main() {
    let path = std::env::temp_dir().join("vellum-demo.log");
    let file = File::create(&path).expect("temp dir is writable");

    let logger = Logger::new("filedemo", DEBUG, '|');
    logger.set_file_handler(Some(sink(file)));

    vinfo!(logger, "this line goes to the console and to the file\n");
    verror!(logger, "so does this one, colored only on the console\n");

    vinfo!(logger, "log file at {}\n", path.display());
}
