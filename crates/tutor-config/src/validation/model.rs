//! Validation for the `[model]` section.

use crate::schema::AppConfig;

use super::helpers::{validate_not_blank, validate_range, validate_range_f64};

pub(crate) fn validate_model(errors: &mut Vec<String>, config: &AppConfig) {
    let model = &config.model;

    validate_not_blank(errors, "model.model", &model.model);
    validate_range(errors, "model.max_tokens", model.max_tokens, 1, 16384);
    validate_range(errors, "model.timeout_secs", model.timeout_secs, 1, 600);

    if let Some(temperature) = model.temperature {
        validate_range_f64(errors, "model.temperature", temperature, 0.0, 2.0);
    }

    if let Some(ref url) = model.base_url {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            errors.push(format!("model.base_url = {url:?} must be an http(s) URL"));
        }
    }
}
