//! Several threads logging through one shared logger.
//!
//! The logger serializes whole log calls, so lines from different threads
//! never interleave mid-line.

use std::sync::Arc;
use std::thread;
use vellum_core::{vinfo, Logger};
use vellum_types::DEBUG;

fn main() {
    let logger = Arc::new(Logger::new("workers", DEBUG, '|'));

    let mut handles = Vec::new();
    for worker in 0..4 {
        let logger = Arc::clone(&logger);
        handles.push(thread::spawn(move || {
            for step in 0..5 {
                vinfo!(logger, "worker {} finished step {}\n", worker, step);
            }
        }));
    }

    for handle in handles {
        handle.join().expect("worker panicked");
    }

    vinfo!(logger, "all workers done\n");
}
