//! Plain-text rendering of the tutor screen.

use std::error::Error;
use std::io::{self, Write};

use tutor_ai::{HintLevel, HistoryEntry, TokenTracker};

use super::core::PendingImage;

pub(super) fn banner<W: Write>(out: &mut W, model: &str) -> io::Result<()> {
    writeln!(out, "Math Tutor")?;
    writeln!(
        out,
        "Hints only, never the final answer. Model: {model}. Type /help for commands."
    )
}

/// The three selector captions, with the current level marked.
pub(super) fn hint_selector<W: Write>(out: &mut W, current: HintLevel) -> io::Result<()> {
    for level in HintLevel::SELECTABLE {
        let mark = if level == current { '*' } else { ' ' };
        writeln!(out, " [{mark}] {} {}", level.as_u8(), level.label())?;
    }
    Ok(())
}

pub(super) fn prompt<W: Write>(
    out: &mut W,
    level: HintLevel,
    pending: Option<&PendingImage>,
) -> io::Result<()> {
    match pending {
        Some(image) => write!(out, "[hint {level} | {}] > ", image.path.display()),
        None => write!(out, "[hint {level}] > "),
    }
}

pub(super) fn entry<W: Write>(out: &mut W, entry: &HistoryEntry) -> io::Result<()> {
    writeln!(out, "{}> {}", entry.role.as_str(), entry.content)
}

pub(super) fn history<W: Write>(out: &mut W, entries: &[HistoryEntry]) -> io::Result<()> {
    for e in entries {
        entry(out, e)?;
    }
    Ok(())
}

/// Terse by default; verbose shows the debug form and the source chain.
pub(super) fn error<W: Write, E: Error>(out: &mut W, err: &E, verbose: bool) -> io::Result<()> {
    if !verbose {
        return writeln!(out, "error: {err}");
    }

    writeln!(out, "error: {err:?}")?;
    let mut source = err.source();
    while let Some(cause) = source {
        writeln!(out, "  caused by: {cause}")?;
        source = cause.source();
    }
    Ok(())
}

pub(super) fn notice<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    writeln!(out, "-- {text}")
}

pub(super) fn usage<W: Write>(out: &mut W, tracker: &TokenTracker) -> io::Result<()> {
    let total = tracker.total();
    writeln!(
        out,
        "-- {} calls, {} tokens ({} in / {} out)",
        tracker.call_count(),
        tracker.total_tokens(),
        total.input_tokens,
        total.output_tokens
    )?;
    if let Some(last) = tracker.last() {
        writeln!(out, "-- last turn: {} tokens", last.total_tokens())?;
    }
    Ok(())
}

pub(super) fn help<W: Write>(out: &mut W) -> io::Result<()> {
    const LINES: &[(&str, &str)] = &[
        ("/hint <1|2|3>", "choose how much help you want"),
        ("/image <path>", "attach a png/jpg/jpeg problem image"),
        ("/send", "send the attached image without text"),
        ("/detach", "drop the attached image"),
        ("/history", "show the conversation"),
        ("/usage", "show token usage"),
        ("/new", "start a new session"),
        ("/quit", "exit"),
    ];
    for (cmd, what) in LINES {
        writeln!(out, "  {cmd:<15} {what}")?;
    }
    writeln!(out, "  Anything else is sent as your question.")
}
