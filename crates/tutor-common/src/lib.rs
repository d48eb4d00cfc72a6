pub mod errors;
pub mod id;

pub use errors::{ConfigError, TutorError};
pub use id::{new_turn_tag, SessionId};

pub type Result<T> = std::result::Result<T, TutorError>;
