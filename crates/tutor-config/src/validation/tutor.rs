//! Validation for the `[tutor]` section.

use crate::schema::{AppConfig, InstructionVariant};

use super::helpers::validate_not_blank;

pub(crate) fn validate_tutor(errors: &mut Vec<String>, config: &AppConfig) {
    let tutor = &config.tutor;

    match tutor.variant {
        InstructionVariant::Template => {
            validate_not_blank(errors, "tutor.template_path", &tutor.template_path)
        }
        InstructionVariant::Inline => {
            validate_not_blank(errors, "tutor.inline_instructions", &tutor.inline_instructions)
        }
    }

    if !tutor.turn_template.contains("{hint_level}") {
        errors.push("tutor.turn_template must contain {hint_level}".to_string());
    }

    if !tutor.image_media_type.starts_with("image/") {
        errors.push(format!(
            "tutor.image_media_type = {:?} is not an image media type",
            tutor.image_media_type
        ));
    }

    if tutor.max_image_bytes == 0 {
        errors.push("tutor.max_image_bytes must be greater than 0".to_string());
    }

    validate_not_blank(errors, "tutor.image_placeholder", &tutor.image_placeholder);
}
