//! Tutoring behaviour: instruction source, per-turn wording, image handling.

use serde::{Deserialize, Serialize};

/// Where the tutoring instructions come from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum InstructionVariant {
    /// Load a prompt template file and send it as the system message.
    #[default]
    Template,
    /// Inline `inline_instructions` into the user message, no system message.
    Inline,
}

pub const DEFAULT_INLINE_INSTRUCTIONS: &str = "You are a math tutor who builds the student's own reasoning.\n\
Never reveal the final answer.";

pub const DEFAULT_TURN_TEMPLATE: &str = "Hint level: {hint_level}\nStudent input: {user_text}";

pub const DEFAULT_IMAGE_PLACEHOLDER: &str = "[image uploaded]";

/// Tutor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TutorConfig {
    pub variant: InstructionVariant,
    /// Prompt template file, resolved relative to the working directory.
    pub template_path: String,
    pub inline_instructions: String,
    /// Per-turn instruction text. `{hint_level}` is required, `{user_text}` optional.
    pub turn_template: String,
    /// Media type declared for every uploaded image.
    pub image_media_type: String,
    pub max_image_bytes: u64,
    /// History text recorded for a turn that carried only an image.
    pub image_placeholder: String,
}

impl Default for TutorConfig {
    fn default() -> Self {
        Self {
            variant: InstructionVariant::Template,
            template_path: "templates/math_tutor.yaml".into(),
            inline_instructions: DEFAULT_INLINE_INSTRUCTIONS.into(),
            turn_template: DEFAULT_TURN_TEMPLATE.into(),
            image_media_type: "image/png".into(),
            max_image_bytes: 20 * 1024 * 1024,
            image_placeholder: DEFAULT_IMAGE_PLACEHOLDER.into(),
        }
    }
}
