//! Tests for the interactive loop: commands in, rendered screen out.

use std::io::Cursor;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tutor_ai::{AiClient, AiError, AiResponse, InstructionStyle, Message, Role, TokenUsage};
use tutor_config::schema::InstructionVariant;
use tutor_config::AppConfig;

use super::*;

type Seen = Arc<Mutex<Vec<Vec<Message>>>>;

struct MockClient {
    reply: Option<String>,
    seen: Seen,
}

#[async_trait]
impl AiClient for MockClient {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError> {
        self.seen.lock().unwrap().push(messages.to_vec());
        match &self.reply {
            Some(text) => Ok(AiResponse {
                content: text.clone(),
                usage: TokenUsage {
                    input_tokens: 30,
                    output_tokens: 5,
                },
            }),
            None => Err(AiError::ApiError("HTTP 503: overloaded".into())),
        }
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

fn app_with(config: AppConfig, reply: Option<&str>, verbose: bool) -> (TutorApp, Seen) {
    let seen = Seen::default();
    let client = MockClient {
        reply: reply.map(str::to_string),
        seen: Arc::clone(&seen),
    };
    let style = InstructionStyle::SystemTemplate("You are a math tutor.".into());
    let app = TutorApp::new(config, Box::new(client), style, verbose).unwrap();
    (app, seen)
}

fn app(reply: Option<&str>) -> (TutorApp, Seen) {
    app_with(AppConfig::default(), reply, false)
}

fn run(app: &mut TutorApp, script: &str) -> String {
    let mut out = Vec::new();
    app.run(Cursor::new(script.to_string()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

fn user_text(messages: &[Message]) -> String {
    messages
        .iter()
        .filter(|m| m.role == Role::User)
        .map(|m| m.content.text())
        .collect()
}

fn write_png(dir: &tempfile::TempDir, name: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, b"\x89PNG\r\n\x1a\n").unwrap();
    path
}

#[test]
fn startup_shows_banner_and_selector() {
    let (mut app, _) = app(Some("unused"));
    let screen = run(&mut app, "");
    assert!(screen.contains("Math Tutor"));
    assert!(screen.contains("mock-model"));
    assert!(screen.contains("[ ] 1 I don't know how to start (level 1 hint)"));
    assert!(screen.contains("(level 3 hint)"));
}

#[test]
fn text_turn_renders_both_entries() {
    let (mut app, seen) = app(Some("What are the unknowns?"));
    let screen = run(&mut app, "How do I start?\n");

    assert!(screen.contains("user> How do I start?"));
    assert!(screen.contains("assistant> What are the unknowns?"));
    assert_eq!(seen.lock().unwrap().len(), 1);
    assert_eq!(app.session().len(), 2);
}

#[test]
fn selected_hint_level_is_marked_and_sent() {
    let (mut app, seen) = app(Some("ok"));
    let screen = run(&mut app, "/hint 2\nhelp me\n");

    assert!(screen.contains("[*] 2 I want the key concept"));
    let requests = seen.lock().unwrap();
    assert!(user_text(&requests[0]).contains("Hint level: 2"));
}

#[test]
fn blank_lines_send_nothing() {
    let (mut app, seen) = app(Some("unused"));
    run(&mut app, "\n   \n");
    assert!(seen.lock().unwrap().is_empty());
    assert!(app.session().is_empty());
}

#[test]
fn send_without_image_is_a_notice() {
    let (mut app, seen) = app(Some("unused"));
    let screen = run(&mut app, "/send\n");
    assert!(screen.contains("no image attached"));
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn image_only_turn_uses_placeholder_and_clears_upload() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(&dir, "problem.png");
    let (mut app, seen) = app(Some("Describe the triangle."));

    let screen = run(&mut app, &format!("/image {}\n/send\n", path.display()));

    assert!(screen.contains("attached"));
    assert!(screen.contains("user> [image uploaded]"));
    assert!(screen.contains("assistant> Describe the triangle."));
    assert!(app.pending_image.is_none());

    let requests = seen.lock().unwrap();
    let user = requests[0].iter().find(|m| m.role == Role::User).unwrap();
    assert!(user.content.has_image());
}

#[test]
fn pending_image_goes_with_next_text_turn() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(&dir, "problem.png");
    let (mut app, seen) = app(Some("ok"));

    app.attach_image(&path).unwrap();
    let screen = run(&mut app, "Problem 3 please\nand again\n");

    assert!(screen.contains("user> Problem 3 please"));
    let requests = seen.lock().unwrap();
    assert_eq!(requests.len(), 2);
    let has_image = |msgs: &[Message]| msgs.iter().any(|m| m.content.has_image());
    assert!(has_image(&requests[0]));
    assert!(!has_image(&requests[1]));
}

#[test]
fn unsupported_upload_is_rejected() {
    let (mut app, _) = app(Some("unused"));
    let screen = run(&mut app, "/image diagram.gif\n");
    assert!(screen.contains("error: Image encoding failed"));
    assert!(app.pending_image.is_none());
}

#[test]
fn encode_failure_keeps_the_upload() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(&dir, "huge.png");
    let mut config = AppConfig::default();
    config.tutor.max_image_bytes = 4;
    let (mut app, seen) = app_with(config, Some("unused"), false);

    let screen = run(&mut app, &format!("/image {}\n/send\n", path.display()));

    assert!(screen.contains("error: Image encoding failed"));
    assert!(seen.lock().unwrap().is_empty());
    assert!(app.pending_image.is_some());
    assert!(app
        .session()
        .history()
        .iter()
        .all(|e| e.role != Role::Assistant));
}

#[test]
fn service_failure_is_terse_by_default() {
    let (mut app, _) = app(None);
    let screen = run(&mut app, "How do I start?\n");

    assert!(screen.contains("error: API error: HTTP 503: overloaded"));
    assert!(!screen.contains("assistant>"));
    assert_eq!(app.session().len(), 1);
}

#[test]
fn verbose_mode_shows_error_detail() {
    let (mut app, _) = app_with(AppConfig::default(), None, true);
    let screen = run(&mut app, "How do I start?\n");
    assert!(screen.contains("error: ApiError(\"HTTP 503: overloaded\")"));
}

#[test]
fn verbose_errors_can_come_from_config() {
    let mut config = AppConfig::default();
    config.logging.verbose_errors = true;
    let (app, _) = app_with(config, None, false);
    assert!(app.verbose);
}

#[test]
fn history_and_usage_commands() {
    let (mut app, _) = app(Some("Think about ratios."));
    let screen = run(&mut app, "first\n/history\n/usage\n");

    assert_eq!(screen.matches("user> first").count(), 2);
    assert!(screen.contains("-- 1 calls, 35 tokens (30 in / 5 out)"));
}

#[test]
fn new_session_starts_empty() {
    let (mut app, _) = app(Some("ok"));
    let first_id = app.session().id().clone();
    run(&mut app, "/hint 3\nquestion\n/new\n");

    assert!(app.session().is_empty());
    assert_ne!(app.session().id(), &first_id);
    assert_eq!(app.session().hint_level(), tutor_ai::HintLevel::None);
}

#[test]
fn quit_stops_reading_input() {
    let (mut app, seen) = app(Some("ok"));
    run(&mut app, "/quit\nnever sent\n");
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn invalid_command_shows_reason() {
    let (mut app, _) = app(Some("unused"));
    let screen = run(&mut app, "/hint 7\n");
    assert!(screen.contains("usage: /hint <1|2|3>"));
}

#[test]
fn inline_variant_uses_configured_instructions() {
    let mut config = AppConfig::default();
    config.tutor.variant = InstructionVariant::Inline;
    config.tutor.inline_instructions = "Be brief.".into();
    assert_eq!(
        instruction_style(&config.tutor).unwrap(),
        InstructionStyle::Inline("Be brief.".into())
    );
}

#[test]
fn template_variant_loads_the_prompt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tutor.txt");
    std::fs::write(&path, "Guide, never solve.").unwrap();

    let mut config = AppConfig::default();
    config.tutor.template_path = path.display().to_string();
    assert_eq!(
        instruction_style(&config.tutor).unwrap(),
        InstructionStyle::SystemTemplate("Guide, never solve.".into())
    );
}

#[test]
fn missing_template_is_an_error() {
    let mut config = AppConfig::default();
    config.tutor.template_path = "/nonexistent/tutor_prompt.yaml".into();
    assert!(instruction_style(&config.tutor).is_err());
}
