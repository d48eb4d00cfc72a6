//! TutorApp struct definition and main loop.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use tutor_ai::{read_image_file, AiClient, AiError, InstructionStyle, TutorSession};
use tutor_config::AppConfig;

use super::commands::parse_command;
use super::{init, render};

/// An upload waiting to go out with the next turn.
#[derive(Debug, Clone)]
pub(super) struct PendingImage {
    pub(super) path: PathBuf,
    pub(super) bytes: Vec<u8>,
}

/// Top-level application state.
pub struct TutorApp {
    pub(super) config: AppConfig,
    pub(super) client: Box<dyn AiClient>,
    /// Kept so `/new` can start a fresh session with the same instructions.
    pub(super) instructions: InstructionStyle,
    pub(super) session: TutorSession,
    pub(super) pending_image: Option<PendingImage>,

    // One turn at a time: every request is block_on'd here.
    pub(super) runtime: tokio::runtime::Runtime,

    // Full error chains instead of one-line summaries
    pub(super) verbose: bool,
    pub(super) should_exit: bool,
}

impl TutorApp {
    pub fn new(
        config: AppConfig,
        client: Box<dyn AiClient>,
        instructions: InstructionStyle,
        verbose: bool,
    ) -> tutor_common::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let session = init::new_session(&config.tutor, instructions.clone());
        let verbose = verbose || config.logging.verbose_errors;

        Ok(Self {
            config,
            client,
            instructions,
            session,
            pending_image: None,
            runtime,
            verbose,
            should_exit: false,
        })
    }

    /// Attach an image file to the next turn, replacing any pending one.
    pub fn attach_image(&mut self, path: &Path) -> Result<(), AiError> {
        let bytes = read_image_file(path)?;
        debug!(path = %path.display(), bytes = bytes.len(), "image attached");
        self.pending_image = Some(PendingImage {
            path: path.to_path_buf(),
            bytes,
        });
        Ok(())
    }

    pub fn session(&self) -> &TutorSession {
        &self.session
    }

    /// Run until `/quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> io::Result<()> {
        render::banner(out, self.client.model_name())?;
        render::hint_selector(out, self.session.hint_level())?;
        debug!(
            session = %self.session.id().short(),
            model = self.client.model_name(),
            "ui loaded"
        );

        let mut lines = input.lines();
        while !self.should_exit {
            render::prompt(out, self.session.hint_level(), self.pending_image.as_ref())?;
            out.flush()?;

            let Some(line) = lines.next() else {
                break;
            };
            let command = parse_command(&line?);
            self.handle(command, out)?;
        }

        debug!(
            session = %self.session.id().short(),
            entries = self.session.len(),
            calls = self.session.usage().call_count(),
            "session closed"
        );
        Ok(())
    }
}
