//! # Vellum Types
//!
//! Shared types for the Vellum logging library.
//!
//! This crate provides the leaf building blocks consumed by `vellum-core`:
//!
//! - Numeric level constants and runtime level descriptors
//! - Output field tags describing the per-line prefix layout
//! - Error types and a result alias
//!
//! ## Example
//!
//! ```
//! use vellum_types::{Field, LevelSpec, default_fields, INFO};
//! use colored::Color;
//!
//! // Prefix layout is an ordered list, not a bitmask.
//! let layout = default_fields();
//! assert_eq!(layout[0], Field::Header);
//!
//! // Level descriptors are plain data keyed by u32.
//! let spec = LevelSpec::new("NOTICE", Some(Color::Blue), None);
//! assert_eq!(spec.name, "NOTICE");
//! assert_eq!(INFO, 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod fields;
pub mod levels;

// Re-export common types for convenience
pub use errors::{Result, VellumError};
pub use fields::{all_fields, default_fields, Field};
pub use levels::{default_levels, LevelSpec, CRITICAL, DEBUG, ERROR, INFO, WARNING};
