//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Tutor Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[model]
# provider = "openai"          # openai, claude
# model = "gpt-4o-mini"
# max_tokens = 1024            # 1-16384
# temperature = 0.7            # 0.0-2.0, provider default when unset
# base_url = "https://api.openai.com/v1"
# timeout_secs = 120           # 1-600

[tutor]
# variant = "template"         # template, inline
# template_path = "templates/math_tutor.yaml"
# inline_instructions = "You are a math tutor who builds the student's own reasoning.\nNever reveal the final answer."
# turn_template = "Hint level: {hint_level}\nStudent input: {user_text}"
# image_media_type = "image/png"
# max_image_bytes = 20971520
# image_placeholder = "[image uploaded]"

[logging]
# level = "info"               # trace, debug, info, warn, error
# verbose_errors = false
"##
    .to_string()
}
