use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Tutor: a hint-level math tutor that never gives away the answer.
#[derive(Parser, Debug)]
#[command(name = "tutor", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. "tutor=debug" or "info").
    #[arg(long)]
    pub log_level: Option<String>,

    /// Where the tutoring instructions come from.
    #[arg(long, value_enum)]
    pub variant: Option<VariantArg>,

    /// Diagnostic mode: debug logging and full error detail.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Attach a problem image (png/jpg/jpeg) to the first turn.
    #[arg(short = 'i', long)]
    pub image: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    /// System instructions loaded from the prompt template file.
    Template,
    /// Instructions inlined into each user message.
    Inline,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "tutor",
            "--config",
            "/tmp/tutor.toml",
            "--variant",
            "inline",
            "-v",
            "--image",
            "problem.png",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/tutor.toml")));
        assert_eq!(args.variant, Some(VariantArg::Inline));
        assert!(args.verbose);
        assert_eq!(args.image, Some(PathBuf::from("problem.png")));
    }

    #[test]
    fn defaults_are_empty() {
        let args = Args::try_parse_from(["tutor"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.variant.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn rejects_unknown_variant() {
        assert!(Args::try_parse_from(["tutor", "--variant", "streamlit"]).is_err());
    }
}
