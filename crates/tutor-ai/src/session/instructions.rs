//! Instruction text sent with every turn.

use super::hint::HintLevel;

/// How the tutoring instructions reach the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstructionStyle {
    /// Sent as a system message ahead of the user message.
    SystemTemplate(String),
    /// Prepended to the user message; no system message is sent.
    Inline(String),
}

/// Per-turn instruction text with `{hint_level}` and `{user_text}` slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnTemplate(String);

impl TurnTemplate {
    pub const DEFAULT: &'static str = "Hint level: {hint_level}\nStudent input: {user_text}";

    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Fill the slots. Absent text renders empty; braces inside the student's
    /// text are not expanded.
    pub fn render(&self, level: HintLevel, user_text: Option<&str>) -> String {
        self.0
            .replace("{hint_level}", &level.to_string())
            .replace("{user_text}", user_text.unwrap_or(""))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for TurnTemplate {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}
