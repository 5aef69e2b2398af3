//! Configuration validation

use super::error::ConfigResult;

/// Trait for validatable configuration objects
pub trait Validatable {
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}
