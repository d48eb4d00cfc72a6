//! Top-level application state.
//!
//! Drives the interactive loop: reads input lines, turns them into
//! commands, runs tutoring turns on the runtime and renders the result.

mod commands;
mod core;
mod dispatch;
mod init;
mod render;

#[cfg(test)]
mod tests;

pub use core::TutorApp;
pub use init::{build_client, instruction_style};
