//! Full configuration validation.
//!
//! Validates numeric ranges and the shape of the tutoring text settings,
//! collecting every problem into a single `ConfigError`.

mod helpers;
mod model;
mod tutor;


use crate::schema::AppConfig;
use tutor_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    model::validate_model(&mut errors, config);
    tutor::validate_tutor(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
