mod app_state;
mod cli;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use tutor_common::ConfigError;
use tutor_config::schema::{InstructionVariant, LogLevel};
use tutor_config::AppConfig;

use cli::VariantArg;

/// Load environment variables from a .env file (KEY=VALUE lines).
///
/// Variables already set in the environment win.
fn load_dotenv() {
    let manifest_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let candidates = [
        // Current directory
        std::path::PathBuf::from(".env"),
        // Workspace root, two levels up from crates/tutor-app/
        manifest_dir.join("..").join("..").join(".env"),
    ];

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

/// Where the config came from, reported once logging is up.
enum ConfigSource {
    Override(PathBuf),
    Default(PathBuf),
    /// No config existed at the default location; a commented one was written.
    Created(PathBuf),
    /// The default location failed to load; built-in defaults are in use.
    Fallback(ConfigError),
}

/// Config from `--config` must load; the default location falls back to defaults.
fn load_config(args: &cli::Args) -> Result<(AppConfig, ConfigSource), ConfigError> {
    if let Some(ref path) = args.config {
        let config = tutor_config::load_config_from(path)?;
        return Ok((config, ConfigSource::Override(path.clone())));
    }

    let existed = tutor_config::toml_loader::default_config_path().map(|p| (p.exists(), p));
    match (tutor_config::load_config(), existed) {
        (Ok(config), Ok((true, path))) => Ok((config, ConfigSource::Default(path))),
        (Ok(config), Ok((false, path))) => Ok((config, ConfigSource::Created(path))),
        (Ok(_), Err(e)) | (Err(e), _) => Ok((AppConfig::default(), ConfigSource::Fallback(e))),
    }
}

/// Filter directive: `--log-level`, then `--verbose`, then the config level.
fn log_directive(args: &cli::Args, config: &AppConfig) -> String {
    if let Some(ref directive) = args.log_level {
        return directive.clone();
    }
    if args.verbose {
        return LogLevel::Debug.directive();
    }
    config.logging.level.directive()
}

/// `RUST_LOG` supplies the base filter; the computed directive is layered on
/// top so it wins for the tutor crates.
fn build_filter(directive: &str) -> EnvFilter {
    let mut filter = EnvFilter::from_default_env();
    for part in directive.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        match part.parse() {
            Ok(d) => filter = filter.add_directive(d),
            Err(e) => eprintln!("warning: ignoring log directive {part:?}: {e}"),
        }
    }
    filter
}

fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive))
        .with_writer(io::stderr)
        .init();
}

fn report_config_source(source: &ConfigSource) {
    match source {
        ConfigSource::Override(path) => {
            tracing::info!("Using config override: {}", path.display());
        }
        ConfigSource::Default(path) => {
            tracing::info!("Config loaded from {}", path.display());
        }
        ConfigSource::Created(path) => {
            tracing::info!("Created default config at {}", path.display());
        }
        ConfigSource::Fallback(e) => {
            eprintln!("warning: config load failed, using defaults: {e}");
            tracing::warn!("Config load failed, using defaults: {e}");
        }
    }
}

fn main() -> ExitCode {
    // Load .env file before anything else
    load_dotenv();

    let args = cli::parse();

    let (mut config, source) = match load_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(variant) = args.variant {
        config.tutor.variant = match variant {
            VariantArg::Template => InstructionVariant::Template,
            VariantArg::Inline => InstructionVariant::Inline,
        };
    }

    init_logging(&log_directive(&args, &config));
    tracing::info!("Tutor v{} starting...", env!("CARGO_PKG_VERSION"));
    report_config_source(&source);
    tracing::debug!("Effective config: {}", tutor_config::config_to_json(&config));

    let client = match app_state::build_client(&config.model) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let instructions = match app_state::instruction_style(&config.tutor) {
        Ok(style) => style,
        Err(e) => {
            tracing::error!("Failed to load instructions: {e}");
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut app = match app_state::TutorApp::new(config, client, instructions, args.verbose) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(ref path) = args.image {
        if let Err(e) = app.attach_image(path) {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if let Err(e) = app.run(stdin.lock(), &mut stdout) {
        tracing::error!("Input loop error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(flags: &[&str]) -> cli::Args {
        let mut argv = vec!["tutor"];
        argv.extend_from_slice(flags);
        cli::Args::try_parse_from(argv).unwrap()
    }

    fn config_at(level: LogLevel) -> AppConfig {
        let mut config = AppConfig::default();
        config.logging.level = level;
        config
    }

    #[test]
    fn cli_log_level_beats_verbose_and_config() {
        let directive = log_directive(
            &args(&["--log-level", "tutor=trace", "--verbose"]),
            &config_at(LogLevel::Error),
        );
        assert_eq!(directive, "tutor=trace");
    }

    #[test]
    fn verbose_beats_config() {
        let directive = log_directive(&args(&["-v"]), &config_at(LogLevel::Warn));
        assert_eq!(directive, LogLevel::Debug.directive());
    }

    #[test]
    fn config_level_is_the_fallback() {
        let directive = log_directive(&args(&[]), &config_at(LogLevel::Warn));
        assert_eq!(directive, "tutor=warn,tutor_ai=warn,tutor_config=warn");
    }

    #[test]
    fn computed_directive_overrides_rust_log() {
        std::env::set_var("RUST_LOG", "tutor=error");
        let filter = build_filter("tutor=debug");
        std::env::remove_var("RUST_LOG");
        assert_eq!(filter.to_string(), "tutor=debug");
    }

    #[test]
    fn bad_directive_parts_are_skipped() {
        std::env::remove_var("RUST_LOG");
        let filter = build_filter("tutor=debug,tutor_ai=loud");
        let rendered = filter.to_string();
        assert!(rendered.contains("tutor=debug"));
        assert!(!rendered.contains("tutor_ai"));
    }
}
