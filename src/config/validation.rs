//! Configuration validation.
//!
//! Serde rejects malformed files and unknown priorities. This pass checks
//! what a well-formed file can still get wrong, and reports every problem at
//! once. A config that plants no tree is legal but logged as a warning.

use crate::config::schema::GroveConfig;

/// A semantic problem with an otherwise well-formed config.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("debug_tree.max_line_length must be greater than 0")]
    ZeroLineLength,
}

/// Check a parsed config, collecting every problem found.
pub fn validate_config(config: &GroveConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.debug_tree.max_line_length == 0 {
        errors.push(ValidationError::ZeroLineLength);
    }

    if !config.debug_tree.enabled && !config.tracing_tree.enabled {
        tracing::warn!(target: "grove::config", "No tree enabled: log calls will go nowhere");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
