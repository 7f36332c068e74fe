//! Output field tags controlling the layout of each log line prefix.

use crate::errors::{Result, VellumError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single field that can appear in a log line's decorated prefix.
///
/// A logger's configuration is an ordered `Vec<Field>`, not a bitmask:
/// insertion order is display order, and duplicates and omissions are both
/// legal. An empty configuration produces bare message lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    /// The logger's header text (skipped while the header is empty).
    Header,
    /// The display name of the message's level, column-aligned.
    Level,
    /// The current date, `DD/MM/YY`.
    Date,
    /// The current time, `HH:MM`.
    Time,
    /// The call site as `file.rs:line` (skipped when no location was given).
    Location,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Header => write!(f, "header"),
            Field::Level => write!(f, "level"),
            Field::Date => write!(f, "date"),
            Field::Time => write!(f, "time"),
            Field::Location => write!(f, "location"),
        }
    }
}

impl FromStr for Field {
    type Err = VellumError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "header" => Ok(Field::Header),
            "level" => Ok(Field::Level),
            "date" => Ok(Field::Date),
            "time" => Ok(Field::Time),
            "location" => Ok(Field::Location),
            _ => Err(VellumError::Validation(format!("Invalid field tag: {}", s))),
        }
    }
}

/// The default prefix layout: header, level, time, location.
pub fn default_fields() -> Vec<Field> {
    vec![Field::Header, Field::Level, Field::Time, Field::Location]
}

/// A layout showing every available field.
pub fn all_fields() -> Vec<Field> {
    vec![
        Field::Header,
        Field::Level,
        Field::Date,
        Field::Time,
        Field::Location,
    ]
}
