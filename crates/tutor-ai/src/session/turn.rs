//! One student turn: record, assemble, send, record the reply.

use tracing::{debug, warn};
use tutor_common::new_turn_tag;

use crate::{AiClient, AiError, ContentPart, HistoryEntry};

use super::manager::TutorSession;

impl TutorSession {
    /// Submit a turn and return the tutor's reply.
    ///
    /// At least one of `user_text` and `image` must be present; blank text
    /// counts as absent. The user entry is recorded before anything can
    /// fail. The assistant entry is recorded only when the service replies.
    /// Failures are returned as-is and never retried.
    pub async fn submit_turn(
        &mut self,
        client: &dyn AiClient,
        user_text: Option<&str>,
        image: Option<&[u8]>,
    ) -> Result<String, AiError> {
        let user_text = user_text.filter(|t| !t.trim().is_empty());
        if user_text.is_none() && image.is_none() {
            return Err(AiError::EmptyTurn);
        }

        let tag = new_turn_tag();
        let session = self.id.short().to_string();

        self.history.push(HistoryEntry::user(
            user_text.unwrap_or(self.image_placeholder.as_str()),
        ));
        debug!(%session, turn = %tag, hint_level = %self.hint_level, has_text = user_text.is_some(), has_image = image.is_some(), "turn started");

        let image_part: Option<ContentPart> = match image {
            Some(bytes) => match self.encoder.encode(bytes) {
                Ok(encoded) => Some(encoded.into()),
                Err(e) => {
                    warn!(%session, turn = %tag, error = %e, "image encoding failed, turn aborted");
                    return Err(e);
                }
            },
            None => None,
        };

        let messages = self.build_messages(user_text, image_part);
        debug!(
            %session,
            turn = %tag,
            model = client.model_name(),
            messages = messages.len(),
            has_image = messages.iter().any(|m| m.content.has_image()),
            "request prepared"
        );

        let response = match client.send_message(&messages).await {
            Ok(response) => response,
            Err(e) => {
                warn!(%session, turn = %tag, error = %e, "model call failed, turn abandoned");
                return Err(e);
            }
        };

        self.tracker.record(&response.usage);
        self.history
            .push(HistoryEntry::assistant(response.content.clone()));
        debug!(%session, turn = %tag, chars = response.content.len(), tokens = response.usage.total_tokens(), "reply received");

        Ok(response.content)
    }
}
