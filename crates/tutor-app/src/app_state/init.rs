//! Model client and instruction setup from config.

use tracing::{debug, info, warn};
use tutor_ai::{
    Base64Encoder, ClaudeClient, ClaudeConfig, InstructionStyle, OpenAiClient, OpenAiConfig,
    TurnTemplate, TutorSession,
};
use tutor_common::{Result, TutorError};
use tutor_config::schema::{InstructionVariant, ModelConfig, ProviderKind, TutorConfig};
use tutor_config::load_prompt_template;

/// Build the chat client for the configured provider.
///
/// Credentials come from the environment; a missing key is an error.
pub fn build_client(model: &ModelConfig) -> Result<Box<dyn tutor_ai::AiClient>> {
    let init_err = |e: tutor_ai::AiError| TutorError::ModelInit(e.to_string());
    let timeout = u64::from(model.timeout_secs);

    let client: Box<dyn tutor_ai::AiClient> = match model.provider {
        ProviderKind::OpenAi => {
            let mut config = OpenAiConfig::from_env()
                .map_err(init_err)?
                .with_model(&model.model)
                .with_max_tokens(model.max_tokens)
                .with_temperature(model.temperature)
                .with_timeout_secs(timeout);
            if let Some(ref url) = model.base_url {
                config = config.with_base_url(url);
            }
            Box::new(OpenAiClient::new(config).map_err(init_err)?)
        }
        ProviderKind::Claude => {
            if model.base_url.is_some() {
                warn!("model.base_url is ignored for the claude provider");
            }
            let config = ClaudeConfig::from_env()
                .map_err(init_err)?
                .with_model(&model.model)
                .with_max_tokens(model.max_tokens)
                .with_temperature(model.temperature)
                .with_timeout_secs(timeout);
            Box::new(ClaudeClient::new(config).map_err(init_err)?)
        }
    };

    info!(
        provider = model.provider.as_str(),
        model = client.model_name(),
        "model client initialised"
    );
    Ok(client)
}

/// Resolve where the tutoring instructions come from.
pub fn instruction_style(tutor: &TutorConfig) -> Result<InstructionStyle> {
    match tutor.variant {
        InstructionVariant::Template => {
            let prompt = load_prompt_template(&tutor.template_path)?;
            if !prompt.input_variables.is_empty() {
                warn!(
                    variables = ?prompt.input_variables,
                    "template declares input variables; it is sent without substitution"
                );
            }
            debug!(source = %prompt.source.display(), "using system template");
            Ok(InstructionStyle::SystemTemplate(prompt.template))
        }
        InstructionVariant::Inline => {
            debug!("using inline instructions");
            Ok(InstructionStyle::Inline(tutor.inline_instructions.clone()))
        }
    }
}

pub(super) fn new_session(tutor: &TutorConfig, instructions: InstructionStyle) -> TutorSession {
    TutorSession::new(instructions)
        .with_turn_template(TurnTemplate::new(&tutor.turn_template))
        .with_image_placeholder(&tutor.image_placeholder)
        .with_encoder(Box::new(Base64Encoder::new(
            &tutor.image_media_type,
            tutor.max_image_bytes,
        )))
}
