//! Log priorities.
//!
//! Priorities are plain integers on the host platform's scale
//! (verbose = 2 through assert = 7). The named constants cover the six
//! levels the macros use; the generic `log!` entry point accepts any value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Integer severity of a log record. Higher is more severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(pub i32);

impl Priority {
    pub const VERBOSE: Priority = Priority(2);
    pub const DEBUG: Priority = Priority(3);
    pub const INFO: Priority = Priority(4);
    pub const WARN: Priority = Priority(5);
    pub const ERROR: Priority = Priority(6);
    /// Assert level, also called "what a terrible failure".
    pub const ASSERT: Priority = Priority(7);

    /// Raw integer value.
    pub fn value(self) -> i32 {
        self.0
    }

    /// Name of a standard priority, `None` for raw values off the scale.
    pub fn name(self) -> Option<&'static str> {
        match self.0 {
            2 => Some("VERBOSE"),
            3 => Some("DEBUG"),
            4 => Some("INFO"),
            5 => Some("WARN"),
            6 => Some("ERROR"),
            7 => Some("ASSERT"),
            _ => None,
        }
    }

    /// One-letter label used in console output (`V`, `D`, `I`, `W`, `E`, `A`).
    pub fn letter(self) -> char {
        match self.0 {
            i32::MIN..=2 => 'V',
            3 => 'D',
            4 => 'I',
            5 => 'W',
            6 => 'E',
            _ => 'A',
        }
    }
}

impl From<i32> for Priority {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<Priority> for i32 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Error returned when a string names no priority.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown priority: {0:?}")]
pub struct ParsePriorityError(pub String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(raw) = s.parse::<i32>() {
            return Ok(Self(raw));
        }
        let priority = match s.to_ascii_lowercase().as_str() {
            "verbose" | "trace" | "v" => Self::VERBOSE,
            "debug" | "d" => Self::DEBUG,
            "info" | "i" => Self::INFO,
            "warn" | "warning" | "w" => Self::WARN,
            "error" | "e" => Self::ERROR,
            "assert" | "wtf" | "fatal" | "a" => Self::ASSERT,
            _ => return Err(ParsePriorityError(s.to_string())),
        };
        Ok(priority)
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i32),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(Self(value)),
            Raw::Name(name) => name.parse().map_err(serde::de::Error::custom),
        }
    }
}
