//! Parsing of input lines into explicit commands.

use std::path::PathBuf;

use tutor_ai::HintLevel;

/// One user action from the input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
    /// Select a hint level (1-3).
    Hint(HintLevel),
    /// Attach an image upload to the next turn.
    Attach(PathBuf),
    /// Drop the pending upload.
    Detach,
    /// Submit the pending upload without text.
    SendImage,
    /// Submit a text turn (with the pending upload, if any).
    Turn(String),
    History,
    Usage,
    /// End this session and start a fresh one.
    NewSession,
    Help,
    Quit,
    /// Nothing entered.
    Idle,
    /// A malformed command, with the reason.
    Invalid(String),
}

pub(crate) fn parse_command(line: &str) -> Command {
    let line = line.trim();
    if line.is_empty() {
        return Command::Idle;
    }
    let Some(rest) = line.strip_prefix('/') else {
        return Command::Turn(line.to_string());
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match name {
        "hint" => parse_hint(arg),
        "image" if arg.is_empty() => Command::Invalid("usage: /image <path>".into()),
        "image" => Command::Attach(PathBuf::from(arg)),
        "detach" => Command::Detach,
        "send" => Command::SendImage,
        "history" => Command::History,
        "usage" => Command::Usage,
        "new" => Command::NewSession,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => Command::Invalid(format!("unknown command /{other} (try /help)")),
    }
}

fn parse_hint(arg: &str) -> Command {
    match arg.parse::<HintLevel>() {
        Ok(level) if HintLevel::SELECTABLE.contains(&level) => Command::Hint(level),
        _ => Command::Invalid("usage: /hint <1|2|3>".into()),
    }
}
