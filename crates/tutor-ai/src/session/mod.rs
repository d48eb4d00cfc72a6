//! Tutoring session management.
//!
//! A `TutorSession` holds the visible conversation and the selected hint
//! level, and assembles one request per student turn.

mod hint;
mod instructions;
mod manager;
mod turn;


pub use hint::HintLevel;
pub use instructions::{InstructionStyle, TurnTemplate};
pub use manager::TutorSession;
