//! Instruction-template storage.
//!
//! The template variant reads its system instructions from a prompt file.
//! YAML files use the prompt-file layout (`_type`, `input_variables`,
//! `template`); any other extension is read as raw template text. The
//! template is opaque to the tutor and is sent unchanged.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;
use tutor_common::ConfigError;

/// A loaded instruction template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    pub template: String,
    pub input_variables: Vec<String>,
    pub source: PathBuf,
}

#[derive(Debug, Deserialize)]
struct PromptFile {
    #[serde(rename = "_type", default)]
    kind: Option<String>,
    #[serde(default)]
    input_variables: Vec<String>,
    template: String,
}

/// Resolve a template path.
///
/// Paths that exist are used as-is. A missing relative path is also looked
/// up under `<config_dir>/tutor/`.
fn resolve_template_path(path: &Path) -> Result<PathBuf, ConfigError> {
    if path.exists() {
        return Ok(path.to_path_buf());
    }

    if path.is_relative() {
        if let Some(config_dir) = dirs::config_dir() {
            let candidate = config_dir.join("tutor").join(path);
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    Err(ConfigError::FileNotFound(path.to_path_buf()))
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

/// Parse template content; `path` only selects the format and labels errors.
pub fn parse_prompt_template(content: &str, path: &Path) -> Result<PromptTemplate, ConfigError> {
    let (template, input_variables) = if is_yaml(path) {
        let file: PromptFile = serde_yaml::from_str(content).map_err(|e| {
            ConfigError::ParseError(format!("invalid prompt file {}: {e}", path.display()))
        })?;
        if let Some(kind) = file.kind.as_deref() {
            if kind != "prompt" {
                return Err(ConfigError::ParseError(format!(
                    "{}: unsupported prompt _type {kind:?}",
                    path.display()
                )));
            }
        }
        (file.template, file.input_variables)
    } else {
        (content.to_string(), Vec::new())
    };

    if template.trim().is_empty() {
        return Err(ConfigError::ParseError(format!(
            "prompt template {} is empty",
            path.display()
        )));
    }

    Ok(PromptTemplate {
        template,
        input_variables,
        source: path.to_path_buf(),
    })
}

/// Load an instruction template from disk.
pub fn load_prompt_template(path: impl AsRef<Path>) -> Result<PromptTemplate, ConfigError> {
    let path = resolve_template_path(path.as_ref())?;
    let content = std::fs::read_to_string(&path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let prompt = parse_prompt_template(&content, &path)?;
    info!(
        path = %path.display(),
        chars = prompt.template.chars().count(),
        "loaded prompt template"
    );
    Ok(prompt)
}
