//! Command dispatch: maps each parsed command to a state change.

use std::io::{self, Write};

use tracing::{debug, warn};
use tutor_ai::AiError;

use super::commands::Command;
use super::core::TutorApp;
use super::{init, render};

impl TutorApp {
    pub(super) fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<()> {
        match command {
            Command::Idle => Ok(()),
            Command::Hint(level) => {
                self.session.set_hint_level(level);
                render::hint_selector(out, level)
            }
            Command::Attach(path) => match self.attach_image(&path) {
                Ok(()) => render::notice(out, &format!("attached {}", path.display())),
                Err(e) => render::error(out, &e, self.verbose),
            },
            Command::Detach => {
                if self.pending_image.take().is_some() {
                    debug!("pending image dropped");
                    render::notice(out, "image detached")
                } else {
                    render::notice(out, "no image attached")
                }
            }
            Command::SendImage => {
                if self.pending_image.is_none() {
                    return render::notice(out, "no image attached (use /image <path>)");
                }
                self.submit(None, out)
            }
            Command::Turn(text) => self.submit(Some(&text), out),
            Command::History => {
                render::history(out, self.session.history())?;
                debug!(entries = self.session.len(), "history rendered");
                Ok(())
            }
            Command::Usage => render::usage(out, self.session.usage()),
            Command::NewSession => {
                debug!(
                    session = %self.session.id().short(),
                    entries = self.session.len(),
                    "session ended"
                );
                self.session = init::new_session(&self.config.tutor, self.instructions.clone());
                self.pending_image = None;
                render::notice(out, "started a new session")?;
                render::hint_selector(out, self.session.hint_level())
            }
            Command::Help => render::help(out),
            Command::Quit => {
                self.should_exit = true;
                Ok(())
            }
            Command::Invalid(reason) => render::notice(out, &reason),
        }
    }

    /// Run one tutoring turn with the pending upload, if any.
    fn submit<W: Write>(&mut self, text: Option<&str>, out: &mut W) -> io::Result<()> {
        let image = self.pending_image.as_ref().map(|p| p.bytes.as_slice());
        debug!(
            upload = image.is_some(),
            hint_level = %self.session.hint_level(),
            "turn requested"
        );

        let before = self.session.len();
        let result = self.runtime.block_on(
            self.session
                .submit_turn(self.client.as_ref(), text, image),
        );

        match result {
            Ok(_) => {
                self.pending_image = None;
                render::history(out, &self.session.history()[before..])
            }
            Err(AiError::EmptyTurn) => Ok(()),
            Err(e @ AiError::ImageEncoding(_)) => {
                if let Some(ref pending) = self.pending_image {
                    warn!(path = %pending.path.display(), "upload kept after encode failure");
                }
                render::error(out, &e, self.verbose)
            }
            Err(e) => {
                self.pending_image = None;
                render::error(out, &e, self.verbose)
            }
        }
    }
}
