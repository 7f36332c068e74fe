//! # Vellum Core
//!
//! The engine of the Vellum logging library: a leveled multi-sink [`Logger`]
//! with optional color, and a keyed [`Registry`] of shared logger instances.
//!
//! This crate provides:
//!
//! - **Logger**: renders a message into a retained buffer, splits it on
//!   newlines, and emits each fragment with a configurable decorated prefix
//!   to a console sink and an optional file sink
//! - **Registry**: thread-safe keyed storage handing out shared logger
//!   handles, with automatic header alignment across all stored loggers
//! - **Macros**: `vlog!` and per-level shorthands capturing the call site
//! - **Terminal helpers**: whole-line color painting over the `colored`
//!   crate, plus the erase-line control it does not model
//!
//! ## Example
//!
//! ```
//! use vellum_core::{vinfo, vwarning, Registry};
//! use vellum_types::DEBUG;
//!
//! let registry: Registry<&str> = Registry::new();
//! let net = registry.create("net", "net", DEBUG, '|').unwrap();
//! let disk = registry.create("disk", "disk", DEBUG, '|').unwrap();
//! net.toggle_color(false);
//! disk.toggle_color(false);
//!
//! vinfo!(net, "connected\n");
//! vwarning!(disk, "running low\n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod logger;
pub mod macros;
pub mod registry;
pub mod term;

// Re-export commonly used items
pub use logger::{sink, Logger, SharedSink};
pub use registry::Registry;
pub use vellum_types::{
    all_fields, default_fields, default_levels, Field, LevelSpec, Result, VellumError, CRITICAL,
    DEBUG, ERROR, INFO, WARNING,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
