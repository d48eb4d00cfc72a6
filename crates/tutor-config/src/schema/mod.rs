//! Configuration schema types for the tutor.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod model;
mod system;
mod tutor;

pub use model::*;
pub use system::*;
pub use tutor::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct AppConfig {
    pub model: ModelConfig,
    pub tutor: TutorConfig,
    pub logging: LoggingConfig,
}
