//! Hint levels the student can request.

use std::fmt;
use std::str::FromStr;

/// How much help the tutor may give. It never covers the final answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum HintLevel {
    /// Nothing selected yet.
    #[default]
    None,
    /// How to approach the problem.
    Approach,
    /// The key concept behind it.
    Concept,
    /// A last push when the student is nearly done.
    FinalStep,
}

impl HintLevel {
    /// Levels offered by the hint selector.
    pub const SELECTABLE: [HintLevel; 3] =
        [HintLevel::Approach, HintLevel::Concept, HintLevel::FinalStep];

    pub fn as_u8(self) -> u8 {
        match self {
            HintLevel::None => 0,
            HintLevel::Approach => 1,
            HintLevel::Concept => 2,
            HintLevel::FinalStep => 3,
        }
    }

    /// Selector caption.
    pub fn label(self) -> &'static str {
        match self {
            HintLevel::None => "No hint level selected",
            HintLevel::Approach => "I don't know how to start (level 1 hint)",
            HintLevel::Concept => "I want the key concept (level 2 hint)",
            HintLevel::FinalStep => "Almost solved it, one last push (level 3 hint)",
        }
    }
}

impl TryFrom<u8> for HintLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(HintLevel::None),
            1 => Ok(HintLevel::Approach),
            2 => Ok(HintLevel::Concept),
            3 => Ok(HintLevel::FinalStep),
            other => Err(format!("hint level must be 0-3, got {other}")),
        }
    }
}

impl FromStr for HintLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("hint level must be a number, got {s:?}"))?;
        HintLevel::try_from(value)
    }
}

impl fmt::Display for HintLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}
