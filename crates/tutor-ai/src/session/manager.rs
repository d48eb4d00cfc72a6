//! Session struct and conversation state.

use tracing::debug;
use tutor_common::SessionId;

use crate::image::{Base64Encoder, ImageEncoder};
use crate::token_tracker::TokenTracker;
use crate::{ContentPart, HistoryEntry, Message};

use super::hint::HintLevel;
use super::instructions::{InstructionStyle, TurnTemplate};

pub(crate) const DEFAULT_IMAGE_PLACEHOLDER: &str = "[image uploaded]";

/// One interactive tutoring session.
pub struct TutorSession {
    pub(super) id: SessionId,
    /// Visible conversation, append-only for the life of the session.
    pub(super) history: Vec<HistoryEntry>,
    pub(super) hint_level: HintLevel,
    pub(super) instructions: InstructionStyle,
    pub(super) turn_template: TurnTemplate,
    /// History text for a turn that carried only an image.
    pub(super) image_placeholder: String,
    pub(super) encoder: Box<dyn ImageEncoder>,
    pub(super) tracker: TokenTracker,
}

impl TutorSession {
    pub fn new(instructions: InstructionStyle) -> Self {
        let id = SessionId::new();
        debug!(session = %id.short(), "session started");
        Self {
            id,
            history: Vec::new(),
            hint_level: HintLevel::None,
            instructions,
            turn_template: TurnTemplate::default(),
            image_placeholder: DEFAULT_IMAGE_PLACEHOLDER.to_string(),
            encoder: Box::new(Base64Encoder::default()),
            tracker: TokenTracker::new(),
        }
    }

    pub fn with_turn_template(mut self, template: TurnTemplate) -> Self {
        self.turn_template = template;
        self
    }

    pub fn with_image_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.image_placeholder = placeholder.into();
        self
    }

    pub fn with_encoder(mut self, encoder: Box<dyn ImageEncoder>) -> Self {
        self.encoder = encoder;
        self
    }

    /// Select the hint level used by subsequent turns.
    pub fn set_hint_level(&mut self, level: HintLevel) {
        debug!(session = %self.id.short(), from = %self.hint_level, to = %level, "hint level selected");
        self.hint_level = level;
    }

    pub fn hint_level(&self) -> HintLevel {
        self.hint_level
    }

    /// The conversation so far, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn usage(&self) -> &TokenTracker {
        &self.tracker
    }

    pub fn instructions(&self) -> &InstructionStyle {
        &self.instructions
    }

    /// Number of history entries.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Assemble the message list for one turn.
    ///
    /// At most one system message, then exactly one user message. The
    /// instruction text leads; an image turns the content into text and image
    /// parts.
    pub(crate) fn build_messages(
        &self,
        user_text: Option<&str>,
        image: Option<ContentPart>,
    ) -> Vec<Message> {
        let turn_text = self.turn_template.render(self.hint_level, user_text);

        let mut msgs = Vec::with_capacity(2);
        let text = match &self.instructions {
            InstructionStyle::SystemTemplate(system) => {
                msgs.push(Message::system(system.clone()));
                turn_text
            }
            InstructionStyle::Inline(preamble) => format!("{preamble}\n{turn_text}"),
        };

        msgs.push(match image {
            Some(image) => Message::user_parts(vec![ContentPart::text(text), image]),
            None => Message::user_text(text),
        });
        msgs
    }
}
